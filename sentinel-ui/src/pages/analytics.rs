//! Analytics Page
//!
//! Executive view: conversion funnel, sector and product distributions,
//! and the weekly certified trend.

use leptos::*;

use crate::api;
use crate::components::{BarDatum, BarChart};
use crate::fixtures;

/// Funnel stage colors, detected through converted
const FUNNEL_COLORS: [&str; 4] = ["#64748b", "#3b82f6", "#eab308", "#22c55e"];

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    let funnel = create_rw_signal(fixtures::funnel());
    let sectors = create_rw_signal(fixtures::sectors());
    let demand = create_rw_signal(fixtures::product_demand());
    let trend = create_rw_signal(fixtures::leads_over_time());

    create_effect(move |_| {
        spawn_local(async move {
            let (f, s, d, t) = futures_util::join!(
                api::fetch_funnel(),
                api::fetch_sectors(),
                api::fetch_product_demand(),
                api::fetch_leads_over_time(),
            );

            funnel.set(api::or_fixture(f, "/analytics/funnel", fixtures::funnel()));
            sectors.set(api::or_fixture(s, "/analytics/sectors", fixtures::sectors()));
            demand.set(api::or_fixture(d, "/product-demand", fixtures::product_demand()));
            trend.set(api::or_fixture(t, "/leads-over-time", fixtures::leads_over_time()));
        });
    });

    let sector_bars = Signal::derive(move || {
        sectors
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, sector)| {
                let color = if i % 2 == 0 { "#0c2340" } else { "#e31837" };
                BarDatum::new(sector.name, sector.count as f64, color)
            })
            .collect::<Vec<_>>()
    });

    let product_bars = Signal::derive(move || {
        demand
            .get()
            .into_iter()
            .map(|slice| BarDatum::new(slice.name, slice.value as f64, "#0c2340"))
            .collect::<Vec<_>>()
    });

    let weekly_bars = Signal::derive(move || {
        trend
            .get()
            .into_iter()
            .map(|point| BarDatum::new(point.date, point.certified as f64, "#e31837"))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="p-8">
            <div class="mb-8">
                <h1 class="text-2xl font-bold text-slate-900">"Analytics & Executive Dashboard"</h1>
                <p class="text-slate-600 mt-1">"Detected → Verified → Contacted → Converted"</p>
            </div>

            // Conversion funnel
            <section class="bg-white rounded-2xl shadow-sm border border-slate-100 p-6 mb-8">
                <h2 class="text-lg font-semibold text-slate-900 mb-4">"Conversion Funnel"</h2>
                <div class="space-y-4">
                    {move || {
                        let stages = funnel.get();
                        let top = stages.first().map(|s| s.count).unwrap_or(1).max(1);
                        stages
                            .into_iter()
                            .enumerate()
                            .map(|(i, stage)| {
                                let width = (stage.count as f64 / top as f64 * 100.0).round();
                                let color = FUNNEL_COLORS[i % FUNNEL_COLORS.len()];
                                view! {
                                    <div class="flex items-center gap-4">
                                        <div class="w-32 text-slate-600">{stage.stage}</div>
                                        <div class="flex-1 h-10 bg-slate-100 rounded-lg overflow-hidden">
                                            <div
                                                class="h-full rounded-lg"
                                                style=format!(
                                                    "width: {}%; background-color: {}",
                                                    width, color,
                                                )
                                            />
                                        </div>
                                        <span class="font-bold text-slate-900 w-12">
                                            {stage.count}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            // Distribution charts
            <div class="grid lg:grid-cols-3 gap-6">
                <section class="bg-white rounded-2xl shadow-sm border border-slate-100 p-6">
                    <h2 class="text-lg font-semibold text-slate-900 mb-4">"Top Sectors"</h2>
                    <BarChart data=sector_bars />
                </section>

                <section class="bg-white rounded-2xl shadow-sm border border-slate-100 p-6">
                    <h2 class="text-lg font-semibold text-slate-900 mb-4">"Top Products"</h2>
                    <BarChart data=product_bars />
                </section>

                <section class="bg-white rounded-2xl shadow-sm border border-slate-100 p-6">
                    <h2 class="text-lg font-semibold text-slate-900 mb-4">"Weekly Leads Trend"</h2>
                    <BarChart data=weekly_bars />
                </section>
            </div>
        </div>
    }
}

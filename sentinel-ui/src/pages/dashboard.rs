//! Dashboard Page
//!
//! Main view: KPI cards, the detected-vs-certified trend, pipeline status
//! and product demand. Four independent requests on mount, each with its
//! own fixture fallback.

use leptos::*;

use crate::api;
use crate::components::{BarDatum, BarChart, DonutChart, KpiCard, TrendChart};
use crate::fixtures;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let kpis = create_rw_signal(fixtures::kpis());
    let trend = create_rw_signal(fixtures::leads_over_time());
    let demand = create_rw_signal(fixtures::product_demand());
    let status = create_rw_signal(fixtures::lead_status());

    // Fetch all four series on mount; a failed request degrades only its
    // own slice of the view.
    create_effect(move |_| {
        spawn_local(async move {
            let (k, t, d, s) = futures_util::join!(
                api::fetch_kpis(),
                api::fetch_leads_over_time(),
                api::fetch_product_demand(),
                api::fetch_lead_status(),
            );

            kpis.set(api::or_fixture(k, "/kpis", fixtures::kpis()));
            trend.set(api::or_fixture(t, "/leads-over-time", fixtures::leads_over_time()));
            demand.set(api::or_fixture(d, "/product-demand", fixtures::product_demand()));
            status.set(api::or_fixture(s, "/lead-status", fixtures::lead_status()));
        });
    });

    let demand_bars = Signal::derive(move || {
        demand
            .get()
            .into_iter()
            .map(|slice| BarDatum::new(slice.name, slice.value as f64, "#0c2340"))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="p-8 space-y-8">
            // Hero and tagline
            <div>
                <h1 class="text-3xl font-bold text-slate-900 tracking-tight">"Sentinel"</h1>
                <p class="text-slate-600 text-lg mt-1">
                    "The Verifiable Intelligence Engine for Enterprise Sales"
                </p>
                <p class="text-red-700 font-semibold mt-1 italic">
                    "We don't generate leads. We certify them."
                </p>
            </div>

            // Three-factor verification banner
            <section class="p-5 bg-slate-900 rounded-2xl text-white shadow-xl">
                <div class="text-sm font-semibold text-white/80 mb-3 uppercase tracking-wider">
                    "Three-Factor Lead Verification"
                </div>
                <div class="flex flex-wrap gap-8">
                    <VerificationFactor
                        name="Signal Triangulation"
                        detail="EC / PCB / Regulatory Signals"
                    />
                    <VerificationFactor
                        name="Legal Entity Resolver"
                        detail="GSTIN / CIN / Filing History"
                    />
                    <VerificationFactor
                        name="Geo-Logistics & Depot"
                        detail="Delivery Feasibility / Distance"
                    />
                </div>
            </section>

            // KPI cards
            <section class="grid grid-cols-2 lg:grid-cols-4 gap-6">
                <KpiCard
                    label="Warm Entities This Week"
                    value=Signal::derive(move || kpis.get().warm_entities_this_week.to_string())
                    accent="bg-red-700"
                />
                <KpiCard
                    label="High-Confidence Leads"
                    value=Signal::derive(move || kpis.get().high_confidence_leads.to_string())
                    accent="bg-slate-900"
                />
                <KpiCard
                    label="Conversion Rate"
                    value=Signal::derive(move || format!("{}%", kpis.get().conversion_rate))
                    accent="bg-emerald-600"
                />
                <KpiCard
                    label="Avg Confidence Score"
                    value=Signal::derive(move || format!("{}%", kpis.get().avg_confidence))
                    accent="bg-amber-600"
                />
            </section>

            // Charts
            <div class="grid lg:grid-cols-3 gap-6">
                <section class="lg:col-span-2 bg-white rounded-2xl shadow-sm border border-slate-100 p-6">
                    <h2 class="text-lg font-semibold text-slate-900 mb-4">
                        "Certified Leads (Detected vs Certified)"
                    </h2>
                    <TrendChart data=trend />
                </section>

                <section class="bg-white rounded-2xl shadow-sm border border-slate-100 p-6">
                    <h2 class="text-lg font-semibold text-slate-900 mb-4">"Pipeline Status"</h2>
                    <DonutChart data=status />
                </section>
            </div>

            <section class="bg-white rounded-2xl shadow-sm border border-slate-100 p-6">
                <h2 class="text-lg font-semibold text-slate-900 mb-4">
                    "Top Product Demand (Certified Entities)"
                </h2>
                <BarChart data=demand_bars horizontal=true />
            </section>
        </div>
    }
}

/// One factor of the verification banner
#[component]
fn VerificationFactor(
    name: &'static str,
    detail: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3">
            <div class="w-10 h-10 rounded-lg bg-white/10" />
            <div>
                <div class="font-medium">{name}</div>
                <div class="text-white/70 text-sm">{detail}</div>
            </div>
        </div>
    }
}

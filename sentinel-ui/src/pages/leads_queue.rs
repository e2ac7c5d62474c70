//! Leads Queue Page
//!
//! The warm-entity queue: every lead that passed three-factor
//! verification, each linking to its battle card.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{ConfidenceBar, VerificationBadge};
use crate::fixtures;

/// Warm-entity queue page component
#[component]
pub fn LeadsQueue() -> impl IntoView {
    let leads = create_rw_signal(fixtures::leads());

    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_leads().await;
            leads.set(api::or_fixture(result, "/leads", fixtures::leads()));
        });
    });

    view! {
        <div class="p-8">
            <div class="mb-8">
                <h1 class="text-2xl font-bold text-slate-900">"Warm Entities Queue"</h1>
                <p class="text-slate-600 mt-1">
                    "Entities that passed Signal + Legal + Geo-Logistics verification"
                </p>
            </div>

            <div class="grid gap-4">
                {move || {
                    leads
                        .get()
                        .into_iter()
                        .map(|lead| {
                            let href = format!("/lead/{}", lead.id);
                            let verified = lead.verified;
                            view! {
                                <A href=href class="block">
                                    <div class="bg-white rounded-2xl shadow-sm border border-slate-100 p-6 \
                                                flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                                        <div class="flex-1 min-w-0">
                                            <div class="font-semibold text-lg text-slate-900">
                                                {lead.company}
                                            </div>
                                            <div class="text-slate-500 text-sm mt-0.5">
                                                {format!(
                                                    "{} · {} ({})",
                                                    lead.industry, lead.depot, lead.depot_distance,
                                                )}
                                            </div>
                                            <div class="text-slate-600 text-sm mt-2">{lead.signal}</div>
                                            <div class="flex flex-wrap gap-2 mt-3">
                                                <VerificationBadge label="Signal" verified=verified.signal />
                                                <VerificationBadge label="Legal" verified=verified.legal />
                                                <VerificationBadge label="Geo" verified=verified.geo />
                                            </div>
                                        </div>

                                        <div class="flex items-center gap-6">
                                            <div>
                                                <div class="text-xs text-slate-500 font-medium">"Confidence"</div>
                                                <ConfidenceBar value=lead.confidence />
                                            </div>

                                            <div class="text-right">
                                                <div class="text-sm font-medium text-slate-900">
                                                    {lead.product_fit}
                                                </div>
                                                <div class="text-xs text-slate-500">"Product Fit"</div>
                                            </div>

                                            <div class="px-4 py-2 bg-red-700 text-white rounded-xl font-medium">
                                                "View Battle Card"
                                            </div>
                                        </div>
                                    </div>
                                </A>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

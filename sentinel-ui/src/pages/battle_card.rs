//! Battle Card Page
//!
//! Detail view for a single lead. The route id resolves against the API
//! first, then against the fixtures, and finally against the default
//! fixture, so an unknown id never renders an empty page.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::ConfidenceBar;
use crate::fixtures;
use crate::model::confidence_label;

/// Battle card page component
#[component]
pub fn BattleCard() -> impl IntoView {
    let params = use_params_map();

    // Non-numeric route ids resolve like unknown ids: to the default card
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|s| s.parse::<u32>().ok()).unwrap_or(1))
    });

    let dossier = create_rw_signal(fixtures::dossier_or_default(id.get_untracked()));

    create_effect(move |_| {
        let id = id.get();
        spawn_local(async move {
            match api::fetch_dossier(id).await {
                Ok(card) => dossier.set(card),
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("GET /leads/{} failed, using fixture: {}", id, e).into(),
                    );
                    dossier.set(fixtures::dossier_or_default(id));
                }
            }
        });
    });

    // Re-run the model on the card's text and refresh the displayed score
    let on_rescore = move |_| {
        let card = dossier.get_untracked();
        spawn_local(async move {
            match api::predict_score(&card.company, &card.signal).await {
                Ok(score) => {
                    dossier.update(|d| d.ai_score = Some(score.confidence));
                }
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("POST /score failed, keeping current score: {}", e).into(),
                    );
                }
            }
        });
    };

    view! {
        <div class="p-8">
            <A
                href="/leads"
                class="inline-flex items-center space-x-2 text-slate-600 hover:text-red-700 mb-6"
            >
                <span>"←"</span>
                <span>"Back to Warm Entities"</span>
            </A>

            // Hero card
            <div class="bg-slate-900 rounded-3xl shadow-2xl p-8 mb-6 text-white">
                <div class="flex items-start justify-between flex-wrap gap-4">
                    <div>
                        <span class="inline-flex items-center px-3 py-1 bg-red-700 rounded-full text-sm font-semibold mb-3">
                            "✓ Verified High-Value Lead"
                        </span>
                        <div class="text-2xl font-bold mb-1">
                            {move || dossier.get().company}
                        </div>
                        <div class="text-white/80 text-sm">
                            {move || {
                                let card = dossier.get();
                                format!("{} · GSTIN: {}", card.industry, card.gstin)
                            }}
                        </div>
                        <div class="text-white/60 text-sm mt-1">
                            {move || dossier.get().location}
                        </div>
                    </div>
                    <div class="text-right">
                        <div class="text-4xl font-bold text-red-500">
                            {move || confidence_label(dossier.get().confidence)}
                        </div>
                        <div class="text-white/70 text-sm">"Confidence"</div>
                        {move || {
                            dossier.get().ai_score.map(|score| {
                                view! {
                                    <div class="text-white/60 text-xs mt-1">
                                        {format!("Model: {}", confidence_label(score))}
                                    </div>
                                }
                            })
                        }}
                    </div>
                </div>

                <div class="grid md:grid-cols-3 gap-4 mt-6 pt-6 border-t border-white/10">
                    <HeroField label="Signal" value=Signal::derive(move || dossier.get().signal) />
                    <HeroField
                        label="Product Fit"
                        value=Signal::derive(move || dossier.get().product_fit)
                    />
                    <HeroField
                        label="Logistics"
                        value=Signal::derive(move || {
                            let card = dossier.get();
                            format!("{} · {}", card.depot, card.depot_distance)
                        })
                    />
                </div>

                <div class="mt-4 p-3 bg-white/5 rounded-xl">
                    <div class="text-white/70 text-xs uppercase tracking-wider mb-1">
                        "Procurement Hint"
                    </div>
                    <div class="text-sm font-medium">
                        {move || dossier.get().procurement_hint}
                    </div>
                </div>
            </div>

            // Actions
            <div class="mb-8">
                <button
                    on:click=on_rescore
                    class="px-6 py-3 bg-slate-900 text-white rounded-xl font-medium hover:bg-slate-800"
                >
                    "Rescore with Model"
                </button>
            </div>

            // Why this lead + product recommendations
            <div class="grid lg:grid-cols-2 gap-6">
                <section class="bg-white rounded-2xl shadow-sm border border-slate-100 p-6">
                    <h2 class="text-lg font-semibold text-slate-900 mb-4">"Why this lead?"</h2>
                    <p class="text-slate-600 leading-relaxed">
                        {move || dossier.get().why_lead}
                    </p>
                </section>

                <section class="bg-white rounded-2xl shadow-sm border border-slate-100 p-6">
                    <h2 class="text-lg font-semibold text-slate-900 mb-4">
                        "Product Recommendations"
                    </h2>
                    <div class="space-y-4">
                        {move || {
                            dossier
                                .get()
                                .products
                                .into_iter()
                                .map(|product| {
                                    view! {
                                        <div class="border border-slate-100 rounded-xl p-4">
                                            <div class="flex justify-between items-center mb-2">
                                                <span class="font-medium text-slate-900">
                                                    {product.name}
                                                </span>
                                                <ConfidenceBar value=product.confidence />
                                            </div>
                                            <div class="text-sm text-slate-500">{product.reason}</div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </section>
            </div>
        </div>
    }
}

/// Label + value pair inside the hero card
#[component]
fn HeroField(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div>
            <div class="text-white/60 text-xs uppercase tracking-wider mb-1">{label}</div>
            <div class="text-sm font-medium">{move || value.get()}</div>
        </div>
    }
}

//! Badges and Meters
//!
//! Verification badges for the three-factor checks and the confidence bar
//! used by the queue and the battle cards.

use leptos::*;

use crate::model::{confidence_label, confidence_width};

/// Badge for a single verification factor
#[component]
pub fn VerificationBadge(
    /// Factor label ("Signal", "Legal", "Geo")
    label: &'static str,
    /// Whether the factor is confirmed
    #[prop(into)]
    verified: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <span class=move || {
            if verified.get() {
                "flex items-center space-x-1 px-2 py-0.5 rounded-lg text-xs font-medium \
                 bg-emerald-100 text-emerald-700"
            } else {
                "flex items-center space-x-1 px-2 py-0.5 rounded-lg text-xs font-medium \
                 bg-slate-100 text-slate-500"
            }
        }>
            {move || if verified.get() { "✓ " } else { "" }}
            {label}
        </span>
    }
}

/// Confidence meter with its rounded percentage label
#[component]
pub fn ConfidenceBar(
    /// Confidence value, 0-100
    #[prop(into)]
    value: MaybeSignal<f64>,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-20 h-2 bg-slate-200 rounded-full overflow-hidden">
                <div
                    class="h-full bg-emerald-500 rounded-full"
                    style=move || confidence_width(value.get())
                />
            </div>
            <span class="font-bold text-slate-900">
                {move || confidence_label(value.get())}
            </span>
        </div>
    }
}

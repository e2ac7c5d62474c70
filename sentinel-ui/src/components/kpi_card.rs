//! KPI Card Component
//!
//! Displays a single scalar summary metric.

use leptos::*;

/// KPI stat card
#[component]
pub fn KpiCard(
    /// Metric label shown under the value
    label: &'static str,
    /// Formatted value to display
    #[prop(into)]
    value: Signal<String>,
    /// Accent class for the icon square
    #[prop(optional)]
    accent: Option<&'static str>,
) -> impl IntoView {
    let accent = accent.unwrap_or("bg-slate-700");

    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-slate-100 p-6">
            <div class=format!("w-12 h-12 rounded-xl {} mb-4 shadow-lg", accent) />
            <div class="text-3xl font-bold text-slate-900 tracking-tight">
                {move || value.get()}
            </div>
            <div class="text-sm text-slate-500 mt-1">{label}</div>
        </div>
    }
}

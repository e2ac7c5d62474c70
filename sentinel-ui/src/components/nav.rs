//! Navigation Component
//!
//! Static sidebar with the route list and active-state styling.

use leptos::*;
use leptos_router::*;

/// Sidebar navigation component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <aside class="w-48 bg-slate-900 flex flex-col py-6 px-3 border-r border-slate-800">
            // Logo and brand
            <A href="/" class="flex items-center space-x-2 px-3 mb-10">
                <span class="text-2xl">"🛡️"</span>
                <span class="text-lg font-bold text-white tracking-tight">"Sentinel"</span>
            </A>

            // Navigation links
            <div class="flex flex-col space-y-1">
                <NavLink href="/" label="Dashboard" />
                <NavLink href="/leads" label="Warm Entities" />
                <NavLink href="/lead/1" label="Battle Card" />
                <NavLink href="/analytics" label="Analytics" />
            </div>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-slate-400 hover:text-white hover:bg-slate-800 transition-colors"
            active_class="bg-red-700 text-white"
        >
            {label}
        </A>
    }
}

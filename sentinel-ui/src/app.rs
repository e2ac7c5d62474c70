//! App Root Component
//!
//! Main application component with routing and the sidebar shell.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Analytics, BattleCard, Dashboard, LeadsQueue};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="flex min-h-screen bg-slate-50">
                // Sidebar navigation
                <Nav />

                // Main content area
                <main class="flex-1 overflow-auto">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/leads" view=LeadsQueue />
                        <Route path="/lead/:id" view=BattleCard />
                        <Route path="/analytics" view=Analytics />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold text-slate-900 mb-2">"Page Not Found"</h1>
            <p class="text-slate-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-red-700 hover:bg-red-800 text-white rounded-lg font-medium"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}

//! Sentinel Dashboard
//!
//! Verifiable Sales-Lead Intelligence Dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - KPI and trend overview for the certified-lead pipeline
//! - Warm-entity queue with three-factor verification badges
//! - Per-lead battle cards with product recommendations
//! - Executive analytics (funnel, sectors, demand)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every page fetches its data from the Sentinel API on mount
//! and falls back to static fixtures when a request fails, so a page is
//! never blank.

use leptos::*;

mod api;
mod app;
mod components;
mod fixtures;
mod model;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod badge;
pub mod chart;
pub mod kpi_card;
pub mod nav;

pub use badge::{ConfidenceBar, VerificationBadge};
pub use chart::{BarChart, BarDatum, DonutChart, TrendChart};
pub use kpi_card::KpiCard;
pub use nav::Nav;

//! API Client
//!
//! HTTP access to the Sentinel REST API.

mod client;

pub use client::*;

//! Salesboard
//!
//! Sales analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Summary dashboard (total sales, order count, average order value)
//! - Sales breakdowns by country, product line, and month
//! - Sales prediction form backed by an external prediction service
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the sales analytics API over HTTP; the
//! prediction endpoint is served by the same API.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

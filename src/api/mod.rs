//! API Layer
//!
//! HTTP client for the sales analytics service.

pub mod client;

pub use client::*;

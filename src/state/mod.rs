//! State Management
//!
//! Global application state and the prediction form's domain types.

pub mod global;
pub mod prediction;

pub use global::{provide_global_state, DashboardSummary, GlobalState, MonthlySale, SalesSlice};
pub use prediction::{FeatureField, FeatureForm, PredictionOutcome, PredictionRequest};

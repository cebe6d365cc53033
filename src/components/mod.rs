//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod prediction_form;
pub mod sales_table;
pub mod summary_card;
pub mod toast;

pub use loading::{CardSkeleton, ListSkeleton, Loading};
pub use nav::Nav;
pub use prediction_form::PredictionForm;
pub use sales_table::{MonthlySalesTable, RankedSalesTable};
pub use summary_card::SummaryCard;
pub use toast::Toast;

//! Pages
//!
//! Top-level page components for each route.

pub mod country_sales;
pub mod dashboard;
pub mod monthly_sales;
pub mod predict;
pub mod product_sales;
pub mod settings;

pub use country_sales::CountrySales;
pub use dashboard::Dashboard;
pub use monthly_sales::MonthlySales;
pub use predict::Predict;
pub use product_sales::ProductSales;
pub use settings::Settings;

//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the data types
//! returned by the sales analytics API.

use leptos::*;
use std::collections::HashMap;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Dashboard summary figures, once fetched
    pub summary: RwSignal<Option<DashboardSummary>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Dashboard summary from the API
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "totalSales")]
    pub total_sales: f64,
    #[serde(rename = "totalOrders")]
    pub total_orders: u64,
    #[serde(rename = "averageOrderValue")]
    pub average_order_value: f64,
}

/// One row of a ranked sales breakdown (by country or product line)
#[derive(Clone, Debug, PartialEq)]
pub struct SalesSlice {
    pub label: String,
    pub sales: f64,
    /// Share of the breakdown's total, in percent
    pub share: f64,
}

/// Sales total for one calendar month
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthlySale {
    pub year: i32,
    pub month: u32,
    pub sales: f64,
}

impl MonthlySale {
    /// Human-readable label, e.g. "January 2003"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// English month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Turn a `label -> sales` map into rows sorted by sales descending
/// (label as tiebreak), with each row's share of the total.
pub fn ranked_breakdown(data: &HashMap<String, f64>) -> Vec<SalesSlice> {
    let total: f64 = data.values().sum();

    let mut slices: Vec<SalesSlice> = data
        .iter()
        .map(|(label, &sales)| SalesSlice {
            label: label.clone(),
            sales,
            share: if total > 0.0 { sales / total * 100.0 } else { 0.0 },
        })
        .collect();

    slices.sort_by(|a, b| {
        b.sales
            .partial_cmp(&a.sales)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });

    slices
}

/// Turn a `"{year}-{month}" -> sales` map into a chronologically sorted
/// series. Keys that don't parse as a year-month pair are skipped.
pub fn monthly_series(data: &HashMap<String, f64>) -> Vec<MonthlySale> {
    let mut series: Vec<MonthlySale> = data
        .iter()
        .filter_map(|(key, &sales)| {
            let (year, month) = key.split_once('-')?;
            let year: i32 = year.trim().parse().ok()?;
            let month: u32 = month.trim().parse().ok()?;
            if !(1..=12).contains(&month) {
                return None;
            }
            Some(MonthlySale { year, month, sales })
        })
        .collect();

    series.sort_by_key(|m| (m.year, m.month));
    series
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        summary: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_breakdown_sorts_descending_with_label_tiebreak() {
        let data = HashMap::from([
            ("USA".to_string(), 300.0),
            ("Spain".to_string(), 100.0),
            ("France".to_string(), 100.0),
        ]);

        let slices = ranked_breakdown(&data);
        let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["USA", "France", "Spain"]);
    }

    #[test]
    fn test_ranked_breakdown_shares_sum_to_total() {
        let data = HashMap::from([
            ("USA".to_string(), 300.0),
            ("Spain".to_string(), 100.0),
        ]);

        let slices = ranked_breakdown(&data);
        assert_eq!(slices[0].share, 75.0);
        assert_eq!(slices[1].share, 25.0);
    }

    #[test]
    fn test_ranked_breakdown_empty() {
        assert!(ranked_breakdown(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_monthly_series_sorts_chronologically() {
        let data = HashMap::from([
            ("2004-1".to_string(), 30.0),
            ("2003-11".to_string(), 20.0),
            ("2003-2".to_string(), 10.0),
        ]);

        let series = monthly_series(&data);
        let order: Vec<(i32, u32)> = series.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(order, [(2003, 2), (2003, 11), (2004, 1)]);
    }

    #[test]
    fn test_monthly_series_skips_malformed_keys() {
        let data = HashMap::from([
            ("2003-5".to_string(), 10.0),
            ("garbage".to_string(), 20.0),
            ("2003-13".to_string(), 30.0),
            ("-3".to_string(), 40.0),
        ]);

        let series = monthly_series(&data);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label(), "May 2003");
    }

    #[test]
    fn test_dashboard_summary_deserializes_service_payload() {
        let body = r#"{"totalSales": 10032628.85, "totalOrders": 2823, "averageOrderValue": 3553.89}"#;
        let summary: DashboardSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.total_orders, 2823);
        assert_eq!(summary.average_order_value, 3553.89);
    }
}

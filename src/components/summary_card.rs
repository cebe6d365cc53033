//! Summary Card Component
//!
//! Displays one headline figure from the dashboard summary.

use leptos::*;

/// Summary stat card
#[component]
pub fn SummaryCard(
    /// Stat label, e.g. "Total Sales"
    label: &'static str,
    /// Formatted value, or `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">
                {move || value.get().unwrap_or_else(|| "—".to_string())}
            </div>
        </div>
    }
}

//! Sales Table Components
//!
//! Tabular rendering for the breakdown pages.

use leptos::*;

use crate::state::global::{MonthlySale, SalesSlice};

/// Ranked breakdown table (country or product line), highest sales first
#[component]
pub fn RankedSalesTable(
    /// Column header for the label column
    label_header: &'static str,
    #[prop(into)]
    rows: Signal<Vec<SalesSlice>>,
) -> impl IntoView {
    view! {
        <table class="w-full text-left">
            <thead>
                <tr class="text-gray-400 text-sm border-b border-gray-700">
                    <th class="py-2 pr-4">{label_header}</th>
                    <th class="py-2 pr-4 text-right">"Sales"</th>
                    <th class="py-2 text-right">"Share"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = rows.get();
                    if rows.is_empty() {
                        view! {
                            <tr>
                                <td colspan="3" class="py-6 text-center text-gray-400">
                                    "No data available"
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        rows.into_iter().map(|row| view! {
                            <tr class="border-b border-gray-700 last:border-0">
                                <td class="py-2 pr-4">{row.label}</td>
                                <td class="py-2 pr-4 text-right font-medium">
                                    {format!("${:.2}", row.sales)}
                                </td>
                                <td class="py-2 text-right text-gray-400">
                                    {format!("{:.1}%", row.share)}
                                </td>
                            </tr>
                        }).collect_view()
                    }
                }}
            </tbody>
        </table>
    }
}

/// Chronological month-by-month sales table
#[component]
pub fn MonthlySalesTable(
    #[prop(into)]
    rows: Signal<Vec<MonthlySale>>,
) -> impl IntoView {
    view! {
        <table class="w-full text-left">
            <thead>
                <tr class="text-gray-400 text-sm border-b border-gray-700">
                    <th class="py-2 pr-4">"Month"</th>
                    <th class="py-2 text-right">"Sales"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = rows.get();
                    if rows.is_empty() {
                        view! {
                            <tr>
                                <td colspan="2" class="py-6 text-center text-gray-400">
                                    "No data available"
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        rows.into_iter().map(|row| view! {
                            <tr class="border-b border-gray-700 last:border-0">
                                <td class="py-2 pr-4">{row.label()}</td>
                                <td class="py-2 text-right font-medium">
                                    {format!("${:.2}", row.sales)}
                                </td>
                            </tr>
                        }).collect_view()
                    }
                }}
            </tbody>
        </table>
    }
}

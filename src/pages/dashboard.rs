//! Dashboard Page
//!
//! Main dashboard view showing the headline sales figures.

use leptos::*;
use leptos_router::A;

use crate::api;
use crate::components::{CardSkeleton, SummaryCard};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the summary on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_dashboard_summary().await {
                Ok(summary) => {
                    state.summary.set(Some(summary));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch summary: {}", e).into());
                    state.show_error(&e);
                }
            }

            state.loading.set(false);
        });
    });

    let summary = state.summary;
    let total_sales = Signal::derive(move || {
        summary.get().map(|s| format!("${:.2}", s.total_sales))
    });
    let total_orders = Signal::derive(move || {
        summary.get().map(|s| s.total_orders.to_string())
    });
    let average_order_value = Signal::derive(move || {
        summary.get().map(|s| format!("${:.2}", s.average_order_value))
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Sales performance at a glance"</p>
            </div>

            // Summary row
            <section>
                {move || {
                    if state.loading.get() && summary.get().is_none() {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                <CardSkeleton />
                                <CardSkeleton />
                                <CardSkeleton />
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                <SummaryCard label="Total Sales" value=total_sales />
                                <SummaryCard label="Total Orders" value=total_orders />
                                <SummaryCard label="Average Order Value" value=average_order_value />
                            </div>
                        }.into_view()
                    }
                }}
            </section>

            // Explore links
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Explore"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4">
                    <ExploreLink href="/country-sales" title="Sales by Country" description="Totals per market" />
                    <ExploreLink href="/product-sales" title="Sales by Product" description="Totals per product line" />
                    <ExploreLink href="/monthly-sales" title="Monthly Sales" description="Month-by-month totals" />
                    <ExploreLink href="/predict" title="Predict Sales" description="Estimate from order features" />
                </div>
            </section>
        </div>
    }
}

/// Card-style link to one of the breakdown pages
#[component]
fn ExploreLink(
    href: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="block bg-gray-700 rounded-lg p-4 hover:bg-gray-600 transition-colors"
        >
            <h3 class="font-semibold">{title}</h3>
            <p class="text-gray-400 text-sm mt-1">{description}</p>
        </A>
    }
}

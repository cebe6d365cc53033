//! Sales by Product Line Page

use leptos::*;

use crate::api;
use crate::components::{ListSkeleton, RankedSalesTable};
use crate::state::global::{ranked_breakdown, GlobalState, SalesSlice};

/// Sales-by-product-line page component
#[component]
pub fn ProductSales() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (rows, set_rows) = create_signal(Vec::<SalesSlice>::new());
    let (loading, set_loading) = create_signal(true);

    // Fetch on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_product_sales().await {
                Ok(data) => {
                    set_rows.set(ranked_breakdown(&data));
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Sales by Product"</h1>
                <p class="text-gray-400 mt-1">"Total sales per product line, highest first"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton /> }.into_view()
                    } else {
                        view! { <RankedSalesTable label_header="Product line" rows=rows /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

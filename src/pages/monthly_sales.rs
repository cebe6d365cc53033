//! Monthly Sales Page

use leptos::*;

use crate::api;
use crate::components::{ListSkeleton, MonthlySalesTable};
use crate::state::global::{monthly_series, GlobalState, MonthlySale};

/// Monthly sales page component
#[component]
pub fn MonthlySales() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (rows, set_rows) = create_signal(Vec::<MonthlySale>::new());
    let (loading, set_loading) = create_signal(true);

    // Fetch on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_monthly_sales().await {
                Ok(data) => {
                    set_rows.set(monthly_series(&data));
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
                <h1 class="text-3xl font-bold">"Monthly Sales"</h1>
                <p class="text-gray-400 mt-1">"Total sales per calendar month"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton /> }.into_view()
                    } else {
                        view! { <MonthlySalesTable rows=rows /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

//! Prediction Page
//!
//! Hosts the sales prediction form.

use leptos::*;

use crate::components::PredictionForm;

/// Prediction page component
#[component]
pub fn Predict() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Predict Sales"</h1>
                <p class="text-gray-400 mt-1">
                    "Estimate the sales figure for an order from its features"
                </p>
            </div>

            <PredictionForm />
        </div>
    }
}

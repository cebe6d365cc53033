//! Settings Page
//!
//! Application configuration and preferences.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your Salesboard dashboard"</p>
            </div>

            // API Connection
            <ApiSettings />

            // About
            <AboutSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);

        let url = api_url.get();
        api::set_api_base(&url);

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            match api::check_health().await {
                Ok(_) => {
                    state_clone.show_success("Connection successful!");
                }
                Err(e) => {
                    state_clone.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state.clone();
    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        state_for_save.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"API Base URL"</label>
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div class="flex space-x-3">
                    <button
                        on:click=save_url
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                               font-medium transition-colors"
                    >
                        "Save"
                    </button>
                    <button
                        on:click=test_connection
                        disabled=move || testing.get()
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if testing.get() { "Testing…" } else { "Test Connection" }}
                    </button>
                </div>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About"</h2>
            <p class="text-gray-400">
                "Salesboard is a sales analytics dashboard. Breakdown data and predictions
                 come from the analytics API configured above; predictions are produced by
                 its model from five order features."
            </p>
        </section>
    }
}

//! Prediction Form Component
//!
//! Form for requesting a sales prediction from the prediction service.
//!
//! The five feature inputs are controlled: their displayed text always
//! comes from the [`FeatureForm`] signal, and each edit replaces exactly
//! one field. Submission posts one request and moves the result panel
//! between its success and error states.

use leptos::*;

use crate::api;
use crate::state::prediction::{
    prediction_text, FeatureField, FeatureForm, PredictionOutcome, PREDICTION_ERROR_TEXT,
};

/// Sales prediction form component
#[component]
pub fn PredictionForm() -> impl IntoView {
    let (form, set_form) = create_signal(FeatureForm::default());
    let (outcome, set_outcome) = create_signal(PredictionOutcome::Idle);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // The required/number input constraints keep incomplete forms from
        // reaching this handler; if a value still fails to parse, nothing
        // is sent.
        let Some(request) = form.get().to_request() else {
            return;
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::predict_sales(&request).await {
                Ok(value) => {
                    set_outcome.set(PredictionOutcome::Success(value));
                }
                Err(e) => {
                    // Diagnostics only; the user sees the fixed error panel.
                    web_sys::console::error_1(&format!("Prediction error: {}", e).into());
                    set_outcome.set(PredictionOutcome::Error);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-6 border border-gray-700">
            <h2 class="text-xl font-semibold mb-4">"Sales Prediction"</h2>

            <form on:submit=on_submit class="space-y-4">
                {FeatureField::ALL
                    .into_iter()
                    .map(|field| view! { <FieldInput field=field form=form set_form=set_form /> })
                    .collect_view()}

                // Deliberately not disabled while a request is in flight:
                // overlapping submissions are allowed and the last response
                // to resolve wins.
                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold
                           transition-colors"
                >
                    {move || if submitting.get() { "Predicting…" } else { "Predict Sales" }}
                </button>
            </form>

            // Result panel: empty until the first submission resolves
            {move || match outcome.get() {
                PredictionOutcome::Idle => view! {}.into_view(),
                PredictionOutcome::Success(value) => view! {
                    <div class="mt-4 p-3 bg-green-900/50 border border-green-700 text-green-300 rounded-lg">
                        <strong>{prediction_text(value)}</strong>
                    </div>
                }.into_view(),
                PredictionOutcome::Error => view! {
                    <div class="mt-4 p-3 bg-red-900/50 border border-red-700 text-red-300 rounded-lg">
                        <strong>{PREDICTION_ERROR_TEXT}</strong>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

/// One controlled numeric input, labeled with its service column name
#[component]
fn FieldInput(
    field: FeatureField,
    form: ReadSignal<FeatureForm>,
    set_form: WriteSignal<FeatureForm>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-400 mb-1">{field.name()}</label>
            <input
                type="number"
                step="any"
                required
                name=field.name()
                prop:value=move || form.get().value(field).to_string()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_form.update(|f| *f = std::mem::take(f).with_field(field, value));
                }
                class="w-full bg-gray-700 rounded-lg px-4 py-2 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

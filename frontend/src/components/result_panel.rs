//! Success view with the server response.

use leptos::*;

#[component]
pub fn ResultPanel(
    /// Pretty-printed response body
    #[prop(into)]
    result: Signal<String>,
    #[prop(into)] on_reset: Callback<ev::MouseEvent>,
) -> impl IntoView {
    view! {
        <div class="result-section">
            <div class="result-card">
                <div class="result-title">
                    <span class="result-icon">"✓"</span>
                    <h2>"Upload Successful!"</h2>
                </div>
                <div class="result-body">
                    <pre>{move || result.get()}</pre>
                </div>
            </div>

            <button
                class="reset-button"
                on:click=move |ev| on_reset.call(ev)
            >
                "Upload Another File"
            </button>
        </div>
    }
}

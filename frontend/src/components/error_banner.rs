use leptos::*;

/// Error slot shown under the drop zone.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show
            when=move || message.with(Option::is_some)
            fallback=|| view! { }
        >
            <div class="error-message" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

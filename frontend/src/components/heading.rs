//! Card heading component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Heading() -> impl IntoView {
    view! {
        <div class="heading">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">"Upload and process your video files"</p>
        </div>
    }
}

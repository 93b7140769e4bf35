//! Video upload component.
//!
//! Owns the [`UploaderState`] signal and switches between the selection view
//! and the result view. The upload button is disabled while a request is in
//! flight, which is what keeps submissions to one at a time.

use leptos::*;
use web_sys::File;

use super::{DropZone, ErrorBanner, Heading, ResultPanel};
use crate::services::{HttpUploadTransport, UploadTransport};
use crate::types::DisplayMode;
use crate::uploader::{render_result, UploaderState};
use crate::UPLOAD_ENDPOINT;

#[component]
pub fn Uploader() -> impl IntoView {
    let state = create_rw_signal(UploaderState::<File>::new());
    let transport = store_value(HttpUploadTransport::new(UPLOAD_ENDPOINT));
    let input_ref = create_node_ref::<html::Input>();

    let mode = create_memo(move |_| state.with(|s| s.mode()));
    let error = Signal::derive(move || state.with(|s| s.error().map(str::to_owned)));
    let result = Signal::derive(move || {
        state.with(|s| s.result().map(render_result).unwrap_or_default())
    });

    let on_upload = move |_: ev::MouseEvent| {
        let mut pending = None;
        state.update(|s| pending = s.begin_submit());
        let Some(file) = pending else {
            return;
        };

        let transport = transport.get_value();
        log::info!("📤 Uploading {} to {}", file.name(), transport.endpoint());

        spawn_local(async move {
            let outcome = transport.upload(&file).await;
            match &outcome {
                Ok(_) => log::info!("✅ Upload successful"),
                Err(e) => log::error!("Upload error: {}", e),
            }
            state.update(|s| s.complete(outcome));
        });
    };

    let on_reset = move |_: ev::MouseEvent| {
        state.update(|s| s.reset());
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    view! {
        <div class="page">
            <div class="card">
                <Heading/>

                <Show
                    when=move || mode.get() != DisplayMode::Resulted
                    fallback=move || view! { <ResultPanel result=result on_reset=on_reset/> }
                >
                    <div class="upload-section">
                        <DropZone state=state input_ref=input_ref/>

                        <ErrorBanner message=error/>

                        <button
                            class="upload-button"
                            disabled=move || !state.with(|s| s.can_submit())
                            on:click=on_upload
                        >
                            {move || if mode.get() == DisplayMode::Uploading {
                                view! {
                                    <span class="spinner"></span>
                                    "Uploading..."
                                }.into_view()
                            } else {
                                "Upload Video".into_view()
                            }}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

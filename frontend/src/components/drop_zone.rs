//! Video picker with drag & drop support.
//!
//! Both the hidden file input and a drop onto the zone feed the first file
//! into [`UploaderState::select_file`]; validation happens there.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::uploader::{format_file_size, UploaderState};
use crate::{ACCEPT_ATTRIBUTE, FORMAT_HINT};

const INPUT_ID: &str = "video-upload";

/// Validates `file` into the uploader state, logging rejections.
pub fn select_candidate(state: RwSignal<UploaderState<File>>, file: File) {
    let name = file.name();
    state.update(|s| match s.select_file(file) {
        Ok(()) => log::info!("🎬 Selected {}", name),
        Err(rejection) => log::warn!("Rejected {}: {}", name, rejection),
    });
}

#[component]
pub fn DropZone(
    state: RwSignal<UploaderState<File>>,
    input_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let (is_dragover, set_is_dragover) = create_signal(false);

    let has_file = move || state.with(|s| s.file().is_some());
    let is_uploading = move || state.with(|s| s.is_uploading());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            select_candidate(state, file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_uploading() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if is_uploading() {
            return;
        }

        // Only the first file: batches are not supported.
        let dropped = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            select_candidate(state, file);
        }
    };

    view! {
        <div>
            <input
                node_ref=input_ref
                type="file"
                id=INPUT_ID
                accept=ACCEPT_ATTRIBUTE
                style="display:none"
                disabled=is_uploading
                on:change=on_file_change
            />
            <label
                for=INPUT_ID
                class="drop-zone"
                class:selected=has_file
                class:dragover=move || is_dragover.get()
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <p class="upload-text">
                    {move || {
                        state.with(|s| {
                            s.file()
                                .map(|f| f.name.clone())
                                .unwrap_or_else(|| "Click to upload or drag and drop".to_string())
                        })
                    }}
                </p>
                <p class="upload-hint">
                    {move || {
                        state.with(|s| match s.file() {
                            Some(f) => format_file_size(f.size_bytes),
                            None => FORMAT_HINT.to_string(),
                        })
                    }}
                </p>
            </label>
        </div>
    }
}

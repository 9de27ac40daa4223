//! Resume upload page: drop zone, progress indicator and submit button.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;
use screening::UploadState;
use screening::models::ACCEPT_ATTRIBUTE;

use crate::net::api::HttpBackend;
use crate::state::BrowserUpload;
use crate::state::signal_store::SignalStore;
use crate::state::toasts::ToastNotifier;
use crate::util::files::format_size;
use crate::util::task::spawn;

fn selected_label(state: &UploadState) -> Option<String> {
    let file = state.selected_file.as_ref()?;
    Some(format!("Selected: {} ({})", file.name, format_size(file.size())))
}

fn can_upload(state: &UploadState) -> bool {
    state.selected_file.is_some() && !state.is_uploading
}

fn upload_label(is_uploading: bool) -> &'static str {
    if is_uploading { "Uploading..." } else { "Upload" }
}

/// Hand a file that finished reading to the controller.
///
/// Reading can outlive the page. Once the page is unmounted the controller
/// is gone and the file is dropped.
#[cfg(any(test, feature = "hydrate"))]
fn stage_resume(controller: StoredValue<BrowserUpload>, resume: screening::ResumeFile) -> bool {
    match controller.try_get_value() {
        Some(upload) => upload.select_file(resume),
        None => {
            log::debug!("upload page closed before {} was read", resume.name);
            false
        }
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let toasts = expect_context::<ToastNotifier>();
    let store = SignalStore::new(UploadState::default());
    let state = store.signal();
    let controller = StoredValue::new(BrowserUpload::new(backend, toasts, store));

    let dragging = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let stage = move |file: web_sys::File| {
        use screening::{Notice, Notify, notice};
        spawn(async move {
            match crate::util::files::read_resume(file).await {
                Ok(resume) => {
                    stage_resume(controller, resume);
                }
                Err(error) => {
                    log::error!("failed to read selected file: {error}");
                    toasts.notify(Notice::error(notice::FILE_UNREADABLE));
                }
            }
        });
    };

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = crate::util::files::first_file(input.files()) {
                stage(file);
            }
            // Allow re-picking the same file after a rejection.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = crate::util::files::first_file(ev.data_transfer().and_then(|dt| dt.files())) {
                stage(file);
            }
        }
    };

    let on_browse = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let on_upload = move |_| {
        let upload = controller.get_value();
        spawn(async move {
            upload.upload().await;
        });
    };

    view! {
        <section class="page page--upload">
            <div class="card">
                <h2 class="card__title">"Upload Your Resume"</h2>
                <div
                    class="dropzone"
                    class:dropzone--active=move || dragging.get()
                    on:click=on_browse
                    on:dragover=move |ev: leptos::ev::DragEvent| {
                        ev.prevent_default();
                        dragging.set(true);
                    }
                    on:dragleave=move |_| dragging.set(false)
                    on:drop=on_drop
                >
                    <input
                        node_ref=input_ref
                        class="dropzone__input"
                        type="file"
                        accept=ACCEPT_ATTRIBUTE
                        on:change=on_pick
                    />
                    <p class="dropzone__hint">"Drag & drop your resume here, or click to browse"</p>
                </div>
                <Show when=move || state.with(|s| s.selected_file.is_some())>
                    <p class="upload__selected">{move || state.with(selected_label)}</p>
                </Show>
                <Show when=move || state.with(|s| s.progress > 0)>
                    <div class="progress">
                        <div
                            class="progress__bar"
                            style:width=move || format!("{}%", state.with(|s| s.progress))
                        ></div>
                        <span class="progress__label">{move || format!("{}%", state.with(|s| s.progress))}</span>
                    </div>
                </Show>
                <button
                    class="btn btn--primary btn--block"
                    disabled=move || !state.with(can_upload)
                    on:click=on_upload
                >
                    {move || upload_label(state.with(|s| s.is_uploading))}
                </button>
            </div>
        </section>
    }
}

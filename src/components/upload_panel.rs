//! Ingestion panel: artifact picker, upload submission, verbatim result.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::upload::CHOOSE_FILE_MESSAGE;
use crate::state::upload::UploadState;

/// Upload panel bound to the ingestion-workflow state.
///
/// The picked `File` handle stays in the input element; the state machine
/// only records its name. Submission re-reads the handle from the node,
/// so a stale DOM (handle gone despite a recorded name) settles as an
/// ordinary validation failure instead of wedging the busy flag.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_select = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let picked = input_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            upload.update(|state| match picked.as_ref() {
                Some(file) => state.select_artifact(&file.name()),
                None => state.clear_artifact(),
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !upload.try_update(UploadState::begin_upload).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let picked = input_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            match picked {
                Some(file) => {
                    leptos::task::spawn_local(async move {
                        let settled = crate::net::api::upload_artifact(&file).await;
                        upload.update(|state| match settled {
                            Ok(report) => state.complete_upload(report),
                            Err(message) => state.fail_upload(message),
                        });
                    });
                }
                None => {
                    upload.update(|state| state.fail_upload(CHOOSE_FILE_MESSAGE.to_owned()));
                }
            }
        }
    };

    let send_label = move || {
        if upload.get().busy { "Wysyłanie..." } else { "Wyślij" }
    };

    view! {
        <section class="upload-panel">
            <h2 class="upload-panel__heading">"Prześlij dokument (PDF, CSV, HTML)"</h2>

            <form class="upload-panel__form" on:submit=on_submit>
                <input
                    class="upload-panel__file"
                    type="file"
                    accept=".pdf,.csv,.html"
                    node_ref=input_ref
                    on:change=on_select
                />
                <button
                    class="btn btn--primary upload-panel__send"
                    type="submit"
                    disabled=move || upload.get().busy
                >
                    {send_label}
                </button>
            </form>

            <Show when=move || upload.get().error.is_some()>
                <div class="upload-panel__error">
                    {move || upload.get().error.unwrap_or_default()}
                </div>
            </Show>

            {move || {
                upload.get().result.map(|report| {
                    let rendered = serde_json::to_string_pretty(&report)
                        .unwrap_or_else(|_| report.to_string());
                    view! {
                        <div class="upload-panel__result">
                            <b class="upload-panel__result-heading">"Wynik:"</b>
                            <pre class="upload-panel__result-body">{rendered}</pre>
                        </div>
                    }
                })
            }}
        </section>
    }
}

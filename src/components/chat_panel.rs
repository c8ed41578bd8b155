//! Conversation panel: turn history, draft input, and query submission.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Role};

/// Chat panel showing the session history and a query form.
///
/// Submission is double-guarded: the controls disable while a request is
/// in flight, and `ChatState::begin_query` rejects re-entry on its own,
/// so the one-in-flight invariant holds even for a caller that bypasses
/// the disabled control.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest turn visible as the history grows.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.turns.len();
        let _ = state.busy;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(query) = chat.try_update(ChatState::begin_query).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let settled = crate::net::api::send_chat_query(&query).await;
            chat.update(|state| match settled {
                Ok(reply) => state.complete_query(reply),
                Err(message) => state.fail_query(message),
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    };

    let can_send = move || {
        let state = chat.get();
        !state.busy && !state.draft.trim().is_empty()
    };

    view! {
        <section class="chat-panel">
            <h2 class="chat-panel__heading">"Chatbot"</h2>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let turns = chat.get().turns;
                    if turns.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"Brak wiadomości. Zadaj pytanie!"</div>
                        }
                            .into_any();
                    }

                    turns
                        .iter()
                        .map(|turn| {
                            let author = match turn.role {
                                Role::User => "Ty:",
                                Role::Bot => "Bot:",
                            };
                            let content = turn.content.clone();
                            let sources = turn.sources.clone();
                            view! {
                                <div class="chat-panel__turn">
                                    <b class="chat-panel__author">{author}</b>
                                    " "
                                    <span class="chat-panel__content">{content}</span>
                                    {(!sources.is_empty())
                                        .then(|| {
                                            view! {
                                                <div class="chat-panel__sources">
                                                    "Źródła: " {sources.join(", ")}
                                                </div>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    chat.get()
                        .busy
                        .then(|| view! { <div class="chat-panel__pending">"Bot pisze..."</div> })
                }}
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Zadaj pytanie..."
                    disabled=move || chat.get().busy
                    prop:value=move || chat.get().draft
                    on:input=move |ev| {
                        chat.update(|state| state.draft = event_target_value(&ev));
                    }
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    type="submit"
                    disabled=move || !can_send()
                >
                    "Wyślij"
                </button>
            </form>

            <Show when=move || chat.get().error.is_some()>
                <div class="chat-panel__error">
                    {move || chat.get().error.unwrap_or_default()}
                </div>
            </Show>
        </section>
    }
}

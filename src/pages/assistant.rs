//! Assistant page, pairing document ingestion with the conversation.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::upload_panel::UploadPanel;

/// Single-screen layout: ingestion panel above, chat panel below.
///
/// The panels share nothing. Each reads its own state context and talks
/// to its own endpoint, so a failure in one leaves the other untouched.
#[component]
pub fn AssistantPage() -> impl IntoView {
    view! {
        <div class="assistant-page">
            <h1 class="assistant-page__title">"Chatbot LLM + RAG dla programu studiów"</h1>
            <UploadPanel/>
            <ChatPanel/>
        </div>
    }
}

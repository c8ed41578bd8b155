//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::assistant::AssistantPage;
use crate::state::chat::ChatState;
use crate::state::upload::UploadState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the per-session state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One state machine per workflow; the two never read each other.
    let chat = RwSignal::new(ChatState::default());
    let upload = RwSignal::new(UploadState::default());

    provide_context(chat);
    provide_context(upload);

    view! {
        <Stylesheet id="leptos" href="/pkg/studyrag-client.css"/>
        <Title text="Chatbot LLM + RAG dla programu studiów"/>

        <Router>
            <Routes fallback=|| "Nie znaleziono strony.".into_view()>
                <Route path=StaticSegment("") view=AssistantPage/>
            </Routes>
        </Router>
    }
}

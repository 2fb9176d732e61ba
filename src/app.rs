//! Application shell and route table.
//!
//! ARCHITECTURE
//! ============
//! `shell` produces the HTML document for SSR and hydration; `App` mounts the
//! router. The conversation screen is the only route this slice owns — the
//! marketplace pages it links to are served elsewhere.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::chat::ChatPage;

/// HTML document shell used by both the SSR render and the hydration build.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root component — meta context plus the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/eureca-chat.css" />
        <Title text="Eureca" />
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Página não encontrada."</p> }>
                <Route path=path!("/chat/:problem_id") view=ChatPage />
            </Routes>
        </Router>
    }
}

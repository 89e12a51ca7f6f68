//! Application shell and router.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every SSR request; `App` is the
//! hydrated root. All routes live under `/app` so the API keeps `/api`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::home::HomePage;
use crate::pages::mst::MstPage;
use crate::pages::recommendations::RecommendationsPage;

/// HTML document wrapper used by the SSR renderer.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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

/// Root component: meta context plus routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/shadematch.css"/>
        <Title text="shadematch"/>
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="app__not-found">"Page not found."</p> }>
                    <Route path=path!("/app") view=HomePage/>
                    <Route path=path!("/app/recommendations/:tone") view=RecommendationsPage/>
                    <Route path=path!("/app/mst/:mst") view=MstPage/>
                </Routes>
            </main>
        </Router>
    }
}

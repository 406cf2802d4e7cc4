pub mod components;
#[cfg(feature = "ssr")]
pub mod context;
pub mod pages;
pub mod store;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, SsrMode, StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Adela Ramadhina's diary: cyber security, appsec, and devsecops notes from a professional beep booper."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    use pages;

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/diary.css"/>

        // sets the document title
        <Title formatter=|text: String| {
            if text.is_empty() {
                format!("Adela Ramadhina's Diary")
            } else {
                format!("{} - Adela Ramadhina's Diary", text)
            }
        }/>

        // The home page is static apart from the post index, so fully
        // rendering it on the server is fine. Anything the router cannot
        // match falls through to the 404 page, which is a terminal rendering
        // rather than an error.
        <Router>
            <Routes fallback=|| view! { <pages::not_found::NotFound/> }>
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
                <Route
                    path=(StaticSegment("blog"), ParamSegment("slug"))
                    view=pages::blog::Post
                    ssr=SsrMode::PartiallyBlocked
                />
            </Routes>
            <components::Footer/>
        </Router>
    }
}

use leptos::prelude::*;

/// Terminal rendering for any path the router cannot match.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"Oops! I don't exist. Here's my Roblox character dancing though."</p>
            <img src="/image/404.gif" alt="404 Not Found"/>
        </main>
    }
}

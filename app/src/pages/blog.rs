use leptos::prelude::*;
use leptos_router::components::A;

use crate::store;

/// The post index the home page delegates to. Sourcing and ordering are the
/// store's call; this only renders what comes back.
#[component]
pub fn BlogPosts() -> impl IntoView {
    let index = Resource::new_blocking(|| (), move |_| async { list_posts().await });

    view! {
        <nav class="blog-posts">
            {move || match index.get() {
                None => leptos::either::EitherOf3::A(view! { "Loading…" }.into_view()),
                Some(Ok(list)) => leptos::either::EitherOf3::B(view! {
                    <ul>
                        {list
                            .into_iter()
                            .map(|summary| {
                                let url = format!("/blog/{}", summary.slug);
                                let published = summary
                                    .date
                                    .map(|date| date.format("%Y-%m-%d").to_string());
                                view! {
                                    <li>
                                        <A href={ url }>{ summary.title }</A>
                                        <span class="post-date">{ published }</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }.into_view()),
                Some(Err(err)) => leptos::either::EitherOf3::C(view! {
                    {format!("Could not load posts: {}", err.to_string())}
                }.into_view()),
            }}
        </nav>
    }
}

#[server(ListPosts, "/blog/api", "GetJson", "index")]
pub async fn list_posts() -> Result<Vec<store::PostSummary>, ServerFnError> {
    let store = store_from_context()?;
    store
        .index()
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

#[component]
pub fn Post() -> impl IntoView {
    let params = leptos_router::hooks::use_params_map();

    let post = Resource::new_blocking(
        move || params.read().get("slug").unwrap_or_default(),
        move |slug| async {
            if slug.is_empty() {
                return Err(ServerFnError::MissingArg(String::from("empty slug")));
            }
            post_by_slug(slug).await
        },
    );

    view! {
        {move || match post.get() {
            None => leptos::either::EitherOf3::A(view! { <p>{"Loading…"}</p> }.into_view()),
            Some(Ok(post)) => leptos::either::EitherOf3::B(view! {
                <article inner_html=post.html_body></article>
            }.into_view()),
            Some(Err(err)) => leptos::either::EitherOf3::C(view! {
                <p>{format!("Could not load post: {}", err.to_string())}</p>
            }.into_view()),
        }}
    }
}

#[server(PostBySlug, "/blog/api", "GetJson", "post")]
pub async fn post_by_slug(slug: String) -> Result<store::Post, ServerFnError> {
    let store = store_from_context()?;
    store
        .get(&slug)
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

// The server provides the store to every handler that may end up running a
// server fn; a missing store is a wiring bug, not a user error.
#[cfg(feature = "ssr")]
fn store_from_context() -> Result<store::Store, ServerFnError> {
    use_context::<store::Store>()
        .ok_or_else(|| ServerFnError::ServerError(String::from("post store missing from context")))
}

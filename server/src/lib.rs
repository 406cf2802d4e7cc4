use leptos::prelude::*;

pub mod feeds;

pub const LEPTOS_SERVER_FN_URL_PATH: &str = "/blog/api/{*fn_name}";

/// Wires up every route the site serves; `main` only binds the result to a
/// socket, so tests can drive the full router directly.
pub fn router(ctx: app::context::Context) -> axum::Router {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_context(ctx.store.clone())
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };
    let images_dir = std::path::Path::new(&*ctx.leptos_options.site_root).join("image");

    let leptos_server_fn_method_router =
        axum::routing::get(leptos_server_fn_axum_handler)
            .post(leptos_server_fn_axum_handler);
    let rss_feed_method_router = axum::routing::get(feeds::rss::handler);
    let json_feed_method_router = axum::routing::get(feeds::json::handler);
    axum::Router::new()
        .route(LEPTOS_SERVER_FN_URL_PATH, leptos_server_fn_method_router)
        .route(feeds::rss::URL_PATH, rss_feed_method_router)
        .route(feeds::json::URL_PATH, json_feed_method_router)
        .nest_service(
            "/image",
            tower_http::services::ServeDir::new(images_dir),
        )
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        // Anything left renders the app shell, where the router's fallback
        // produces the 404 page.
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .with_state(ctx)
}

async fn leptos_server_fn_axum_handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    request: axum::extract::Request<axum::body::Body>,
) -> impl axum::response::IntoResponse {
    let additional_context = move || { provide_context(ctx.store.clone()); };
    leptos_axum::handle_server_fns_with_context(additional_context, request)
        .await
}

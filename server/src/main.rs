use leptos::prelude::*;

use app::store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
        store: store::Store::from_env(leptos_options.env == Env::PROD),
    };
    let app = server::router(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

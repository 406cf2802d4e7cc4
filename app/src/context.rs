use leptos::prelude::LeptosOptions;

use crate::store;

/// State shared with every axum handler.
#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub store: store::Store,
}

// leptos_axum's handlers pull LeptosOptions back out of the state.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}

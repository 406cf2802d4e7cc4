use std::path::PathBuf;

use axum::response::IntoResponse;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not read `{path}': {error}")]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },

    #[error("Could not parse front matter in `{path}': {error}")]
    FrontMatter { error: String, path: PathBuf },

    #[error("No post matches slug `{slug}'")]
    NotFound { slug: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Error::NotFound { .. } => axum::http::StatusCode::NOT_FOUND,
            _ => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };
        log::error!("{}", self);
        (status, self.to_string()).into_response()
    }
}

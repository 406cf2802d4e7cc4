use serde::{Deserialize, Serialize};

use crate::store::PostSummary;

/// A post ready to be dropped into an `<article>`.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Post {
    pub summary: PostSummary,
    pub html_body: String,
}

#[cfg(feature = "ssr")]
pub(crate) fn render(markdown: &str, summary: PostSummary) -> Post {
    let options = pulldown_cmark::Options::ENABLE_FOOTNOTES
        | pulldown_cmark::Options::ENABLE_STRIKETHROUGH
        | pulldown_cmark::Options::ENABLE_TABLES;
    let parser = pulldown_cmark::Parser::new_ext(markdown, options);

    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, parser);

    Post {
        summary,
        html_body: html,
    }
}

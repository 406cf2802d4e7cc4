use axum::response::IntoResponse;

use super::metadata::{
    COPYRIGHT,
    DESCRIPTION,
    LANGUAGE,
    TITLE,
    blog_link,
};

pub const URL_PATH: &str = "/blog/feed.rss";

pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    _request: axum::extract::Request<axum::body::Body>,
) -> Result<axum::response::Response, app::store::Error> {
    let mut items: Vec<rss::Item> = vec![];
    for summary in ctx.store.index()? {
        let mut entry = rss::Item::default();
        let post = ctx.store.get(&summary.slug)?;
        entry.set_title(summary.title.to_string());
        entry.set_link(blog_link(Some(summary.slug.as_str())));
        // RSS wants RFC 822 dates; posts only carry a day, so midnight it is.
        entry.set_pub_date(summary.date.and_then(|date| {
            date.and_hms_opt(0, 0, 0)
                .map(|dt| dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
        }));
        if let Some(text) = summary.summary {
            entry.set_description(text);
        }
        entry.set_categories(
            summary.tags.into_iter().map(|name| {
                rss::Category { name: name.to_string(), domain: None }
            }).collect::<Vec<rss::Category>>()
        );
        entry.set_content(post.html_body);
        items.push(entry);
    }

    let channel = rss::ChannelBuilder::default()
        .title(TITLE)
        .link(blog_link(None))
        .description(DESCRIPTION)
        .language(String::from(LANGUAGE))
        .copyright(String::from(COPYRIGHT))
        .items(items)
        .build();
    let response = (
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "application/rss+xml")],
        channel.to_string(),
    ).into_response();
    Ok(response)
}

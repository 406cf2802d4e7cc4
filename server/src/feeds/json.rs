pub const FEED_NAME: &str = "json";

use super::metadata::{
    DESCRIPTION,
    LANGUAGE,
    TITLE,
    blog_link,
    feed_link,
};

pub const URL_PATH: &str = "/blog/feed.json";

pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    _request: axum::extract::Request<axum::body::Body>,
) -> Result<axum::Json<json_feed_model::Feed>, app::store::Error> {
    let mut feed = json_feed_model::Feed::new();
    feed.set_title(TITLE);
    let blog_post: Option<&str> = None;
    feed.set_home_page_url(blog_link(blog_post));
    feed.set_feed_url(feed_link(FEED_NAME));
    feed.set_description(DESCRIPTION);
    feed.set_language(LANGUAGE);
    let mut items: Vec<json_feed_model::Item> = vec![];
    for summary in ctx.store.index()? {
        let mut entry = json_feed_model::Item::new();
        let slug = &summary.slug;
        let post = ctx.store.get(slug)?;
        entry.set_id(slug);
        entry.set_url(blog_link(Some(slug)));
        entry.set_title(&summary.title);
        entry.set_content_html(post.html_body);
        if let Some(date) = summary.date {
            entry.set_date_published(date.format("%Y-%m-%d").to_string());
        }
        if let Some(text) = &summary.summary {
            entry.set_summary(text);
        }
        entry.set_tags(summary.tags);
        items.push(entry);
    }
    feed.set_items(items);

    Ok(axum::Json(feed))
}

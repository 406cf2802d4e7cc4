use std::path::PathBuf;

use app::store::{Error, Store};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn store(publish_only: bool) -> Store {
    Store::new(PathBuf::from("tests/data/posts"), publish_only)
}

fn slugs(store: &Store) -> Vec<String> {
    store
        .index()
        .unwrap()
        .into_iter()
        .map(|summary| summary.slug)
        .collect()
}

#[test]
fn index_is_reverse_chronological_with_drafts_last() {
    setup();

    assert_eq!(
        vec!["breaking-things", "hello-world", "drafting"],
        slugs(&store(false)),
    );
}

#[test]
fn publish_only_index_hides_undated_posts() {
    setup();

    assert_eq!(
        vec!["breaking-things", "hello-world"],
        slugs(&store(true)),
    );
}

#[test]
fn get_renders_the_markdown_body() {
    setup();

    let post = store(false).get("hello-world").unwrap();
    assert_eq!("Hello, world", post.summary.title);
    assert_eq!("hello-world", post.summary.slug);
    assert!(post.html_body.contains("<h1>"), "{}", post.html_body);
    assert!(
        post.html_body.contains("<strong>first</strong>"),
        "{}",
        post.html_body,
    );
}

#[test]
fn drafts_remain_reachable_by_slug() {
    setup();

    let post = store(true).get("drafting").unwrap();
    assert!(post.summary.date.is_none());
}

#[test]
fn get_with_an_unknown_slug_is_not_found() {
    setup();

    match store(false).get("no-such-post") {
        Err(Error::NotFound { slug }) => assert_eq!("no-such-post", slug),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn missing_front_matter_is_reported_with_the_path() {
    setup();

    let store = Store::new(PathBuf::from("tests/data/broken"), false);
    match store.index() {
        Err(Error::FrontMatter { path, .. }) => {
            assert!(path.ends_with("no-front-matter.md"), "{}", path.display());
        }
        other => panic!("expected FrontMatter, got {:?}", other),
    }
}

// The index travels to the client through a server fn; dates have to stay in
// the plain YYYY-MM-DD form the front matter uses.
#[test]
fn summaries_serialize_with_plain_dates() {
    setup();

    let index = store(true).index().unwrap();
    let json = serde_json::to_string(&index[0]).unwrap();
    assert!(json.contains("\"date\":\"2025-01-15\""), "{}", json);
}

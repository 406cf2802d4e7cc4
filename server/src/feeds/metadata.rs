const BASE_URL: &str = "https://www.adelaramadhina.com";

pub const BLOG_PATH: &str = "/blog";
pub const COPYRIGHT: &str = "© Adela Ramadhina";
pub const DESCRIPTION: &str = "cyber security, appsec, and devsecops notes";
pub const LANGUAGE: &str = "en";
pub const TITLE: &str = "Adela Ramadhina's Diary :: Blog";

pub fn blog_link(slug: Option<&str>) -> String {
    match slug {
        Some(slug) => format!("{}{}/{}", BASE_URL, BLOG_PATH, slug),
        None => String::from(BASE_URL) + BLOG_PATH,
    }
}

pub fn feed_link(name: &str) -> String {
    format!("{}{}/feed.{}", BASE_URL, BLOG_PATH, name)
}

use serde::{Deserialize, Serialize};

/// Everything the post index needs to link to a post. Sent over the wire by
/// the `list_posts` server fn, so it stays small.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: Option<chrono::NaiveDate>,
    pub summary: Option<String>,
    pub tags: Vec<String>,
}

/// The YAML block between the `---` fences at the top of a post file.
#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
pub(crate) struct FrontMatter {
    pub title: String,
    #[serde(default)]
    pub date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(feature = "ssr")]
impl FrontMatter {
    pub(crate) fn into_summary(self, slug: String) -> PostSummary {
        PostSummary {
            slug,
            title: self.title,
            date: self.date,
            summary: self.summary,
            tags: self.tags,
        }
    }
}

/// Split a post file into its front matter YAML and Markdown body. The
/// opening fence must be the first line; the closing fence a line of its own.
#[cfg(feature = "ssr")]
pub(crate) fn split_front_matter(contents: &str) -> Option<(&str, &str)> {
    let first_newline = contents.find('\n')?;
    if contents[..first_newline].trim_end() != "---" {
        return None;
    }
    let yaml_start = first_newline + 1;
    let mut offset = yaml_start;
    for line in contents[yaml_start..].split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &contents[yaml_start..offset];
            let body = &contents[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

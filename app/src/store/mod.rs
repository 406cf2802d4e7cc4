#[cfg(feature = "ssr")]
pub mod errors;
mod post;
mod summary;

#[cfg(feature = "ssr")]
pub use errors::{Error, Result};
pub use post::Post;
pub use summary::PostSummary;

#[cfg(feature = "ssr")]
pub const POSTS_DIR_ENV_VAR: &str = "DIARY_POSTS_DIR";

#[cfg(feature = "ssr")]
pub const DEFAULT_POSTS_DIR: &str = "content/posts";

/// Reads posts off a flat directory of Markdown files with YAML front matter.
/// The slug of a post is its slugified file stem.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct Store {
    dir: std::path::PathBuf,
    publish_only: bool,
}

#[cfg(feature = "ssr")]
impl Store {
    /// `publish_only` hides undated posts, which is how drafts stay out of
    /// the index in production while remaining reachable in dev.
    pub fn new(dir: std::path::PathBuf, publish_only: bool) -> Self {
        Self { dir, publish_only }
    }

    pub fn from_env(publish_only: bool) -> Self {
        let dir = std::env::var_os(POSTS_DIR_ENV_VAR)
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from(DEFAULT_POSTS_DIR));
        Self::new(dir, publish_only)
    }

    /// Newest first; undated posts sink to the end, ordered by slug.
    pub fn index(&self) -> Result<Vec<PostSummary>> {
        let mut index = vec![];

        for path in self.post_paths()? {
            let (summary, _body) = self.load(&path)?;
            if !self.publish_only || summary.date.is_some() {
                index.push(summary);
            }
        }

        index.sort_by(|lhs, rhs| {
            use core::cmp::Ordering;
            match (lhs.date, rhs.date) {
                (Some(lhd), Some(rhd)) => rhd.cmp(&lhd),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => lhs.slug.cmp(&rhs.slug),
            }
        });

        Ok(index)
    }

    pub fn get(&self, slug: &str) -> Result<Post> {
        for path in self.post_paths()? {
            if !slug_matches(&path, slug) {
                continue;
            }
            let (summary, body) = self.load(&path)?;
            log::info!("slug \"{}\" points to \"{}\"", slug, path.display());
            return Ok(post::render(&body, summary));
        }

        Err(Error::NotFound {
            slug: String::from(slug),
        })
    }

    fn post_paths(&self) -> Result<Vec<std::path::PathBuf>> {
        let mut paths = vec![];

        let directory = self.dir.read_dir().map_err(|error| Error::Io {
            error,
            path: self.dir.clone(),
        })?;
        for entry in directory {
            let entry = entry.map_err(|error| Error::Io {
                error,
                path: self.dir.clone(),
            })?;
            let path = entry.path();
            if entry.file_name().to_str().is_none() {
                log::warn!("Invalid utf-8 filename in the store: {:?}", entry.file_name());
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) == Some("md") {
                paths.push(path);
            }
        }

        Ok(paths)
    }

    fn load(&self, path: &std::path::Path) -> Result<(PostSummary, String)> {
        let contents = std::fs::read_to_string(path).map_err(|error| Error::Io {
            error,
            path: path.to_path_buf(),
        })?;

        let (yaml, body) =
            summary::split_front_matter(&contents).ok_or_else(|| Error::FrontMatter {
                error: String::from("front matter is missing"),
                path: path.to_path_buf(),
            })?;
        let front_matter: summary::FrontMatter =
            serde_yml::de::from_str(yaml).map_err(|error| Error::FrontMatter {
                error: format!("front matter is not valid YAML: {}", error),
                path: path.to_path_buf(),
            })?;

        // post_paths() already dropped non-utf-8 names
        let file_stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| Error::FrontMatter {
                error: String::from("file has no stem"),
                path: path.to_path_buf(),
            })?;
        let slug = slug::slugify(file_stem);

        Ok((front_matter.into_summary(slug), String::from(body)))
    }
}

#[cfg(feature = "ssr")]
fn slug_matches(path: &std::path::Path, slug: &str) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| slug::slugify(stem) == slug)
        .unwrap_or(false)
}

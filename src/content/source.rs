use crate::content::model::Page;
use crate::foundation::error::{PageError, PageResult};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Slug of the home page.
pub const HOME_SLUG: &str = "/";

/// Route segment that stands in for the home page.
pub const HOME_ROUTE: &str = "home";

/// Map a route segment to a content slug (`home` is the home page).
pub fn slug_from_route(route: &str) -> String {
    if route == HOME_ROUTE {
        HOME_SLUG.to_string()
    } else {
        route.to_string()
    }
}

/// Map a content slug back to its route segment.
pub fn route_from_slug(slug: &str) -> String {
    if slug == HOME_SLUG {
        HOME_ROUTE.to_string()
    } else {
        slug.to_string()
    }
}

/// Page-level lookup collaborator.
///
/// The engine only ever reads a snapshot; implementations own all IO.
pub trait PageSource {
    /// Fetch the page for `slug`, `Ok(None)` when no such page exists.
    fn page(&self, slug: &str) -> PageResult<Option<Page>>;

    /// Every slug this source knows about, in a stable order.
    fn slugs(&self) -> PageResult<Vec<String>>;
}

/// Pages stored as `<root>/<route>.json`, with the home page at `home.json`.
#[derive(Clone, Debug)]
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, slug: &str) -> PageResult<PathBuf> {
        let route = match slug.trim_matches('/') {
            "" => HOME_ROUTE,
            r => r,
        };
        if route.contains(['/', '\\']) || route == "." || route == ".." {
            return Err(PageError::validation(format!(
                "slug '{slug}' cannot be mapped to a page file"
            )));
        }
        Ok(self.root.join(format!("{route}.json")))
    }
}

impl PageSource for JsonDirSource {
    fn page(&self, slug: &str) -> PageResult<Option<Page>> {
        let path = self.path_for(slug)?;
        let f = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PageError::source(format!(
                    "open page '{}': {e}",
                    path.display()
                )));
            }
        };
        let mut page = Page::from_reader(BufReader::new(f))?;
        if page.slug.is_empty() {
            page.slug = match slug.trim_matches('/') {
                "" => HOME_SLUG.to_string(),
                r => slug_from_route(r),
            };
        }
        tracing::debug!(slug, sections = page.sections.len(), "loaded page");
        Ok(Some(page))
    }

    fn slugs(&self) -> PageResult<Vec<String>> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| {
            PageError::source(format!("list pages in '{}': {e}", self.root.display()))
        })?;

        let mut out = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PageError::source(format!("read page entry: {e}")))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            out.push(slug_from_route(stem));
        }
        out.sort();
        Ok(out)
    }
}

/// In-memory pages keyed by slug, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    pages: BTreeMap<String, Page>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mut page: Page) {
        if page.slug.is_empty() {
            page.slug = HOME_SLUG.to_string();
        }
        self.pages.insert(page.slug.clone(), page);
    }
}

impl PageSource for MemorySource {
    fn page(&self, slug: &str) -> PageResult<Option<Page>> {
        Ok(self.pages.get(&slug_from_route(slug)).cloned())
    }

    fn slugs(&self) -> PageResult<Vec<String>> {
        Ok(self.pages.keys().cloned().collect())
    }
}

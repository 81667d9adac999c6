use crate::blocks::model::ImageRef;

/// Builds delivery URLs for authored image references.
///
/// Implementations return `None` when a reference cannot be resolved; callers then omit the
/// element instead of failing.
pub trait AssetResolver {
    fn image_url(&self, image: &ImageRef, width: Option<u32>) -> Option<String>;
}

/// Resolver for snapshots whose image references already carry a URL, or whose asset ids can
/// be appended to a fixed CDN base.
#[derive(Clone, Debug, Default)]
pub struct UrlResolver {
    base: Option<String>,
}

impl UrlResolver {
    /// Use embedded URLs only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve bare asset ids as `<base>/<id>`.
    pub fn with_base(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base: (!base.is_empty()).then_some(base),
        }
    }
}

impl AssetResolver for UrlResolver {
    fn image_url(&self, image: &ImageRef, width: Option<u32>) -> Option<String> {
        let url = match (&image.asset.url, &image.asset.reference, &self.base) {
            (Some(url), _, _) => url.clone(),
            (None, Some(reference), Some(base)) => format!("{base}/{reference}"),
            _ => return None,
        };
        Some(match width {
            Some(w) if url.contains('?') => format!("{url}&w={w}"),
            Some(w) => format!("{url}?w={w}"),
            None => url,
        })
    }
}

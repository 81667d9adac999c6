use std::collections::HashMap;

/// Every renderer a section can resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Banner,
    HeroMain,
    HeroSubpage,
    Overview,
    FeatureList,
    Feature,
    Snapshots,
    Comparison,
    CallToAction,
    Details,
    Body,
    Main,
    Testimonials,
}

impl SectionKind {
    pub const ALL: [SectionKind; 13] = [
        Self::Banner,
        Self::HeroMain,
        Self::HeroSubpage,
        Self::Overview,
        Self::FeatureList,
        Self::Feature,
        Self::Snapshots,
        Self::Comparison,
        Self::CallToAction,
        Self::Details,
        Self::Body,
        Self::Main,
        Self::Testimonials,
    ];

    /// Content-store type tag of this kind.
    pub fn canonical_tag(self) -> &'static str {
        match self {
            Self::Banner => "sectionBanner",
            Self::HeroMain => "sectionHeroMain",
            Self::HeroSubpage => "sectionHeroSubpage",
            Self::Overview => "sectionOverview",
            Self::FeatureList => "sectionFeatureList",
            Self::Feature => "sectionFeature",
            Self::Snapshots => "sectionSnapshots",
            Self::Comparison => "sectionComparison",
            Self::CallToAction => "sectionCallToAction",
            Self::Details => "sectionDetails",
            Self::Body => "sectionBody",
            Self::Main => "sectionMain",
            Self::Testimonials => "sectionTestimonials",
        }
    }
}

/// Immutable map from authored type tag to renderer kind.
///
/// Built once and handed to a [`crate::Dispatcher`]; lookups never mutate it.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    kinds: HashMap<String, SectionKind>,
}

impl SectionRegistry {
    /// A registry that knows nothing. Every section dispatched against it is dropped.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every kind under its content-store tag, plus the short aliases used by hand-written
    /// page snapshots.
    pub fn standard() -> Self {
        SectionKind::ALL
            .into_iter()
            .fold(Self::empty(), |r, kind| r.register(kind.canonical_tag(), kind))
            .register("hero", SectionKind::HeroMain)
            .register("main", SectionKind::Main)
            .register("cta", SectionKind::CallToAction)
            .register("testimonials", SectionKind::Testimonials)
    }

    pub fn register(mut self, tag: impl Into<String>, kind: SectionKind) -> Self {
        self.kinds.insert(tag.into(), kind);
        self
    }

    pub fn lookup(&self, tag: &str) -> Option<SectionKind> {
        self.kinds.get(tag).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

//! Typed renderer props built from a section's loose field map.

use crate::assets::AssetResolver;
use crate::blocks::model::{Button, ContentBlock, ImageRef, Link};
use crate::blocks::normalize::{button, image_ref, link, normalize_all, row_blocks};
use crate::content::model::Section;
use crate::foundation::richtext::RichText;
use crate::foundation::value::{array_field, bool_field, opt_str};
use crate::layout::{self, LabelPosition, LayoutDescriptor, ResolvedLayout};
use crate::opts::EngineOpts;
use crate::sections::registry::SectionKind;
use serde::Serialize;
use serde_json::{Map, Value};

/// Background images are requested at this width.
pub const HERO_BACKGROUND_WIDTH: u32 = 1920;

/// Props handed to a section renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionProps {
    Hero(HeroProps),
    Main(MainProps),
    Testimonials(TestimonialsProps),
    CallToAction(CtaSectionProps),
    /// Presentational kinds receive their fields untouched.
    Passthrough(Map<String, Value>),
}

impl SectionProps {
    pub fn build(kind: SectionKind, section: &Section, opts: &EngineOpts) -> Self {
        match kind {
            SectionKind::HeroMain => Self::Hero(HeroProps::from_section(section, opts)),
            SectionKind::Main => Self::Main(MainProps::from_section(section, opts)),
            SectionKind::Testimonials => {
                Self::Testimonials(TestimonialsProps::from_section(section, opts))
            }
            SectionKind::CallToAction => {
                Self::CallToAction(CtaSectionProps::from_section(section))
            }
            SectionKind::Banner
            | SectionKind::HeroSubpage
            | SectionKind::Overview
            | SectionKind::FeatureList
            | SectionKind::Feature
            | SectionKind::Snapshots
            | SectionKind::Comparison
            | SectionKind::Details
            | SectionKind::Body => Self::Passthrough(section.fields.clone()),
        }
    }

    pub fn as_hero(&self) -> Option<&HeroProps> {
        match self {
            Self::Hero(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_main(&self) -> Option<&MainProps> {
        match self {
            Self::Main(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_testimonials(&self) -> Option<&TestimonialsProps> {
        match self {
            Self::Testimonials(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_call_to_action(&self) -> Option<&CtaSectionProps> {
        match self {
            Self::CallToAction(p) => Some(p),
            _ => None,
        }
    }
}

fn rich(v: &Value, key: &str) -> RichText {
    RichText::from_value(v.get(key))
}

// ---- hero ----

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideTheme {
    Default,
    Service,
}

impl SlideTheme {
    /// Blend mode applied to the background media.
    pub fn blend_mode(theme: Option<Self>) -> &'static str {
        match theme {
            Some(Self::Default) => "multiply",
            Some(Self::Service) => "color-dodge",
            None => "normal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundType {
    Image,
    Video,
}

/// Resolved slide background media.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "url", rename_all = "camelCase")]
pub enum SlideBackground {
    Image(String),
    Video(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub heading: RichText,
    pub label: RichText,
    pub subheading: RichText,
    pub lead: RichText,
    pub body: RichText,
    pub buttons: Vec<Button>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<SlideTheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_type: Option<BackgroundType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<ImageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_video_url: Option<String>,
    pub auto_height: bool,
}

impl HeroSlide {
    pub fn from_value(v: &Value) -> Self {
        Self {
            heading: rich(v, "heading"),
            label: rich(v, "label"),
            subheading: rich(v, "subheading"),
            lead: rich(v, "lead"),
            body: rich(v, "body"),
            buttons: array_field(v, "buttons").iter().filter_map(button).collect(),
            theme: match opt_str(v, "theme").as_deref() {
                Some("default") => Some(SlideTheme::Default),
                Some("service") => Some(SlideTheme::Service),
                _ => None,
            },
            background_type: match opt_str(v, "backgroundType").as_deref() {
                Some("image") => Some(BackgroundType::Image),
                Some("video") => Some(BackgroundType::Video),
                _ => None,
            },
            background_image: v.get("backgroundImage").and_then(image_ref),
            background_video_url: v
                .pointer("/backgroundVideo/asset/url")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            auto_height: bool_field(v, "autoHeight"),
        }
    }

    /// The background to show, if its media resolves.
    pub fn background(&self, resolver: &dyn AssetResolver) -> Option<SlideBackground> {
        match self.background_type? {
            BackgroundType::Image => self
                .background_image
                .as_ref()
                .and_then(|img| resolver.image_url(img, Some(HERO_BACKGROUND_WIDTH)))
                .map(SlideBackground::Image),
            BackgroundType::Video => self.background_video_url.clone().map(SlideBackground::Video),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProps {
    pub slides: Vec<HeroSlide>,
    pub interval_ms: u64,
}

impl HeroProps {
    pub fn from_section(section: &Section, opts: &EngineOpts) -> Self {
        let slides = section
            .field("slides")
            .and_then(Value::as_array)
            .map(|slides| {
                slides
                    .iter()
                    .filter(|s| s.is_object())
                    .map(HeroSlide::from_value)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            slides,
            interval_ms: opts.hero_interval_ms,
        }
    }

    /// Every background image URL, whichever background type a slide shows, so a host can
    /// warm its cache before rotation starts.
    pub fn preload_urls(&self, resolver: &dyn AssetResolver) -> Vec<String> {
        self.slides
            .iter()
            .filter_map(|s| s.background_image.as_ref())
            .filter_map(|img| resolver.image_url(img, Some(HERO_BACKGROUND_WIDTH)))
            .collect()
    }
}

// ---- main ----

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Spacing {
    #[default]
    Default,
    Compact,
}

/// Text and blocks placed in one grid column.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub heading: RichText,
    pub subheading: RichText,
    pub body: RichText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    pub blocks: Vec<ContentBlock>,
}

impl ColumnContent {
    pub fn from_value(v: &Value) -> Self {
        let mut column = Self::text_only(v);
        column.label = opt_str(v, "label");
        column.blocks = blocks_of(v);
        column
    }

    fn text_only(v: &Value) -> Self {
        Self {
            label: None,
            heading: rich(v, "heading"),
            subheading: rich(v, "subheading"),
            body: rich(v, "body"),
            link: v.get("link").and_then(link),
            blocks: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.heading.is_empty()
            && self.subheading.is_empty()
            && self.body.is_empty()
            && self.link.is_none()
            && self.blocks.is_empty()
    }

    fn non_empty(self) -> Option<Self> {
        (!self.is_empty()).then_some(self)
    }
}

fn blocks_of(v: &Value) -> Vec<ContentBlock> {
    normalize_all(row_blocks(v))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub divider: bool,
    pub spacing: Spacing,
    pub layout: ResolvedLayout,
    /// Label rendered above both columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<ColumnContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<ColumnContent>,
}

impl Row {
    pub fn from_value(v: &Value) -> Self {
        let spacing = match opt_str(v, "spacing").as_deref() {
            Some("compact") => Spacing::Compact,
            _ => Spacing::Default,
        };
        let descriptor = v.get("layout").map(LayoutDescriptor::from_value);
        let layout = layout::resolve(descriptor.as_ref());

        if bool_field(v, "divider") {
            return Self {
                divider: true,
                spacing,
                layout,
                label: None,
                left: None,
                right: None,
            };
        }

        let is_legacy = v.get("leftColumn").is_none() && v.get("rightColumn").is_none();
        let (label, left, right) = if is_legacy {
            lift_legacy(v, descriptor.map(|d| d.label_position).unwrap_or_default())
        } else {
            (
                opt_str(v, "label"),
                v.get("leftColumn").map(ColumnContent::from_value),
                v.get("rightColumn").map(ColumnContent::from_value),
            )
        };

        Self {
            divider: false,
            spacing,
            layout,
            label,
            left: left.and_then(ColumnContent::non_empty),
            right: right.and_then(ColumnContent::non_empty),
        }
    }

    /// True for a content row with no column to show.
    pub fn renders_nothing(&self) -> bool {
        !self.divider && self.left.is_none() && self.right.is_none()
    }
}

type LiftedRow = (Option<String>, Option<ColumnContent>, Option<ColumnContent>);

fn lift_legacy(v: &Value, label_position: LabelPosition) -> LiftedRow {
    tracing::debug!(?label_position, "lifting legacy row into columns");
    let label = opt_str(v, "label");
    let blocks = blocks_of(v);
    let mut text = ColumnContent::text_only(v);
    match label_position {
        LabelPosition::LeftCol => {
            let side = ColumnContent {
                label,
                blocks,
                ..ColumnContent::default()
            };
            (None, Some(side), Some(text))
        }
        LabelPosition::Stacked => {
            text.blocks = blocks;
            (label, None, Some(text))
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainProps {
    pub rows: Vec<Row>,
    pub slideshow_interval_ms: u64,
    pub slideshow_fade_ms: u64,
    pub count_up_duration_ms: u64,
    pub count_up_ghost_ms: u64,
}

impl MainProps {
    pub fn from_section(section: &Section, opts: &EngineOpts) -> Self {
        let rows = section
            .field("rows")
            .and_then(Value::as_array)
            .map(|rows| {
                rows.iter()
                    .filter(|r| r.is_object())
                    .map(Row::from_value)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            rows,
            slideshow_interval_ms: opts.slideshow_interval_ms,
            slideshow_fade_ms: opts.slideshow_fade_ms,
            count_up_duration_ms: opts.count_up_duration_ms,
            count_up_ghost_ms: opts.count_up_ghost_ms,
        }
    }
}

// ---- testimonials ----

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub key: String,
    pub body: RichText,
    pub source: RichText,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsProps {
    pub items: Vec<Testimonial>,
    pub breakpoint_px: u32,
    pub swipe_threshold: f64,
}

impl TestimonialsProps {
    pub fn from_section(section: &Section, opts: &EngineOpts) -> Self {
        let items = section
            .field("items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter(|v| v.is_object())
                    .enumerate()
                    .map(|(i, v)| Testimonial {
                        key: opt_str(v, "_key").unwrap_or_else(|| format!("testimonial-{i}")),
                        body: rich(v, "body"),
                        source: rich(v, "source"),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            items,
            breakpoint_px: opts.pager_breakpoint_px,
            swipe_threshold: opts.swipe_threshold,
        }
    }
}

// ---- call to action ----

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSectionProps {
    pub heading: RichText,
    pub subheading: RichText,
    pub body: RichText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl CtaSectionProps {
    pub fn from_section(section: &Section) -> Self {
        let fields = section.fields_value();
        Self {
            heading: rich(&fields, "heading"),
            subheading: rich(&fields, "subheading"),
            body: rich(&fields, "body"),
            link: fields.get("link").and_then(link),
        }
    }
}

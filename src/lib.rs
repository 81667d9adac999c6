//! pagewright is the composition engine behind section-based marketing pages.
//!
//! Authored pages arrive as ordered, loosely-typed section records. The engine:
//!
//! - Resolves each section to a renderer through a [`SectionRegistry`] and a [`Dispatcher`]
//! - Allocates stable, unique anchor ids for deep links ([`allocate_anchors`])
//! - Normalizes legacy and current content-block shapes into one [`ContentBlock`] union
//! - Resolves declarative row layouts into grid placement ([`resolve_layout`])
//! - Drives the time-based presentation state machines: [`HeroRotator`], [`Slideshow`],
//!   [`TestimonialPager`] and [`CountUp`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod anchor;
pub(crate) mod assets;
pub(crate) mod blocks;
pub(crate) mod carousel;
pub(crate) mod content;
pub(crate) mod countup;
pub(crate) mod layout;
pub(crate) mod opts;
pub(crate) mod sections;

pub use crate::foundation::error::{PageError, PageResult};
pub use crate::foundation::richtext::RichText;

pub use crate::anchor::allocate as allocate_anchors;
pub use crate::assets::{AssetResolver, UrlResolver};
pub use crate::blocks::list::ListIcon;
pub use crate::blocks::model::{
    AssetRef, Button, ButtonGroupBlock, ButtonStyle, ContentBlock, ContentRowBlock, CtaBlock,
    ImageBlock, ImageDisplay, ImageRef, Link, ListBlock, ListItem, ListVariant, TableBlock,
    TableRow,
};
pub use crate::blocks::normalize::{normalize as normalize_block, normalize_all as normalize_blocks};
pub use crate::carousel::gesture::{DragTracker, SwipeDirection};
pub use crate::carousel::hero::HeroRotator;
pub use crate::carousel::pager::{TestimonialPager, page_size_for};
pub use crate::carousel::slideshow::Slideshow;
pub use crate::carousel::{Carousel, Interval};
pub use crate::content::model::{Page, Section, Theme};
pub use crate::content::source::{
    HOME_ROUTE, HOME_SLUG, JsonDirSource, MemorySource, PageSource, route_from_slug,
    slug_from_route,
};
pub use crate::countup::{CountState, CountUp, CountValue};
pub use crate::layout::{
    ColumnOrder, ColumnSplit, LabelPosition, LayoutDescriptor, ResolvedLayout, Side,
    resolve as resolve_layout,
};
pub use crate::opts::EngineOpts;
pub use crate::sections::dispatch::{DispatchReport, Dispatcher, DroppedSection, RenderInstruction};
pub use crate::sections::props::{
    BackgroundType, ColumnContent, CtaSectionProps, HERO_BACKGROUND_WIDTH, HeroProps, HeroSlide,
    MainProps, Row, SectionProps, SlideBackground, SlideTheme, Spacing, Testimonial,
    TestimonialsProps,
};
pub use crate::sections::registry::{SectionKind, SectionRegistry};

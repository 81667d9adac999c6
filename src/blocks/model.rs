use crate::foundation::richtext::RichText;
use serde::{Deserialize, Serialize};

/// Canonical content block.
///
/// Serializes to the current (flattened, `_type`-tagged) shape; feeding that shape back through
/// [`crate::normalize_block`] yields the identical block.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "_type")]
pub enum ContentBlock {
    #[serde(rename = "imageBlock")]
    Image(ImageBlock),
    #[serde(rename = "listBlock")]
    List(ListBlock),
    #[serde(rename = "tableBlock")]
    Table(TableBlock),
    #[serde(rename = "ctaBlock")]
    Cta(CtaBlock),
    #[serde(rename = "buttonGroup")]
    ButtonGroup(ButtonGroupBlock),
    #[serde(rename = "linkBlock")]
    Link(Link),
    #[serde(rename = "contentRow")]
    ContentRow(ContentRowBlock),
    /// Unrecognized input. Renders nothing.
    #[serde(rename = "ignore")]
    Ignore,
}

impl ContentBlock {
    pub fn is_ignore(&self) -> bool {
        matches!(self, Self::Ignore)
    }

    /// The canonical tag this block serializes with.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Image(_) => "imageBlock",
            Self::List(_) => "listBlock",
            Self::Table(_) => "tableBlock",
            Self::Cta(_) => "ctaBlock",
            Self::ButtonGroup(_) => "buttonGroup",
            Self::Link(_) => "linkBlock",
            Self::ContentRow(_) => "contentRow",
            Self::Ignore => "ignore",
        }
    }

    /// Canonical JSON shape of this block.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(crate::blocks::normalize::normalize(&raw))
    }
}

/// Reference to an image asset; URL derivation happens in an [`crate::AssetResolver`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ImageRef {
    pub asset: AssetRef,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alt: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AssetRef {
    #[serde(rename = "_ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDisplay {
    #[default]
    Cover,
    Square,
}

/// One image, or several shown as a slideshow.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ImageBlock {
    pub images: Vec<ImageRef>,
    pub display: ImageDisplay,
}

impl ImageBlock {
    /// More than one image means the block renders as a slideshow.
    pub fn is_slideshow(&self) -> bool {
        self.images.len() > 1
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListVariant {
    #[default]
    Default,
    ImageOnly,
    Snapshot,
    Cards,
    CardsBlue,
    CardsWhite,
    CardsService,
    CardsData,
    Checks,
    Flags,
    Negatives,
    Positives,
    Good,
    Bad,
    Counter,
    Images,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListItem {
    pub heading: RichText,
    pub subheading: RichText,
    pub body: RichText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<ImageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListBlock {
    pub heading: RichText,
    pub variant: ListVariant,
    pub columns: u32,
    pub items: Vec<ListItem>,
}

impl Default for ListBlock {
    fn default() -> Self {
        Self {
            heading: RichText::default(),
            variant: ListVariant::Default,
            columns: 2,
            items: Vec::new(),
        }
    }
}

/// One two-cell table row; both cells are always rich text.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TableRow {
    pub a: RichText,
    pub b: RichText,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableBlock {
    pub column_a: String,
    pub column_b: String,
    pub rows: Vec<TableRow>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl Link {
    /// Off-site links open in a new tab.
    pub fn is_external(&self) -> bool {
        self.url.starts_with("http")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CtaBlock {
    pub heading: RichText,
    pub body: RichText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Button {
    pub title: String,
    pub url: String,
    pub internal: bool,
}

impl Button {
    /// The first button of a group is primary, the rest secondary.
    pub fn style_at(index: usize) -> ButtonStyle {
        if index == 0 {
            ButtonStyle::Primary
        } else {
            ButtonStyle::Secondary
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ButtonGroupBlock {
    pub buttons: Vec<Button>,
}

/// A nested group of blocks. Only one level deep.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContentRowBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub heading: RichText,
    pub body: RichText,
    pub blocks: Vec<ContentBlock>,
}

//! Row layout resolution: declarative column intent to concrete grid placement.

use crate::foundation::value::{bool_field, opt_str};
use serde_json::Value;

/// Column split of a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ColumnSplit {
    #[default]
    #[serde(rename = "1/1")]
    Single,
    #[serde(rename = "1/2-1/2")]
    Equal,
    #[serde(rename = "2/3-1/3")]
    WideNarrow,
    #[serde(rename = "1/3-2/3")]
    NarrowWide,
    #[serde(rename = "1/4-3/4")]
    QuarterThreeQuarter,
}

impl ColumnSplit {
    /// Parse an authored ratio; anything unknown is a single column.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "1/2-1/2" => Self::Equal,
            "2/3-1/3" => Self::WideNarrow,
            "1/3-2/3" => Self::NarrowWide,
            "1/4-3/4" => Self::QuarterThreeQuarter,
            _ => Self::Single,
        }
    }

    pub fn is_single(self) -> bool {
        self == Self::Single
    }

    /// CSS `grid-template-columns` value for desktop widths.
    pub fn css_template(self) -> &'static str {
        match self {
            Self::Single => "1fr",
            Self::Equal => "1fr 1fr",
            Self::WideNarrow => "2fr 1fr",
            Self::NarrowWide => "1fr 2fr",
            Self::QuarterThreeQuarter => "1fr 3fr",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Where a legacy row puts its label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelPosition {
    #[default]
    Stacked,
    LeftCol,
}

/// Authored layout intent for one row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDescriptor {
    pub columns: ColumnSplit,
    pub content_align: Side,
    pub mobile_reverse: bool,
    pub sticky: Option<Side>,
    pub label_position: LabelPosition,
}

impl LayoutDescriptor {
    /// Read a layout object, ignoring fields of the wrong type.
    pub fn from_value(v: &Value) -> Self {
        let content_align = opt_str(v, "contentAlign")
            .and_then(|s| Side::parse(&s))
            .unwrap_or_default();
        let label_position = match opt_str(v, "labelPosition").as_deref() {
            Some("leftCol") => LabelPosition::LeftCol,
            _ => LabelPosition::Stacked,
        };
        Self {
            columns: opt_str(v, "columns")
                .map(|s| ColumnSplit::parse(&s))
                .unwrap_or_default(),
            content_align,
            mobile_reverse: bool_field(v, "mobileReverse"),
            sticky: opt_str(v, "sticky").and_then(|s| Side::parse(&s)),
            label_position,
        }
    }
}

/// Visual order of one column, tracked separately below and above the breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ColumnOrder {
    pub mobile: u8,
    pub desktop: u8,
}

impl ColumnOrder {
    /// Utility classes, e.g. `order-2 md:order-1`.
    pub fn class(self) -> String {
        format!("order-{} md:order-{}", self.mobile, self.desktop)
    }
}

/// Concrete placement for one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLayout {
    pub grid: ColumnSplit,
    pub grid_template: &'static str,
    pub left: ColumnOrder,
    pub right: ColumnOrder,
    pub gap_present: bool,
    pub sticky: Option<Side>,
}

impl ResolvedLayout {
    pub fn left_order_class(&self) -> String {
        self.left.class()
    }

    pub fn right_order_class(&self) -> String {
        self.right.class()
    }
}

fn orders(swapped: bool) -> (u8, u8) {
    if swapped { (2, 1) } else { (1, 2) }
}

/// Resolve a layout descriptor. Total: every input, including none, yields a valid layout.
pub fn resolve(descriptor: Option<&LayoutDescriptor>) -> ResolvedLayout {
    let d = descriptor.copied().unwrap_or_default();
    let (left_mobile, right_mobile) = orders(d.mobile_reverse);
    let (left_desktop, right_desktop) = orders(d.content_align == Side::Right);
    let single = d.columns.is_single();

    ResolvedLayout {
        grid: d.columns,
        grid_template: d.columns.css_template(),
        left: ColumnOrder {
            mobile: left_mobile,
            desktop: left_desktop,
        },
        right: ColumnOrder {
            mobile: right_mobile,
            desktop: right_desktop,
        },
        gap_present: !single,
        sticky: if single { None } else { d.sticky },
    }
}

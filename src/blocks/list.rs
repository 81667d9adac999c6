use crate::blocks::model::{ImageRef, ListBlock, ListItem, ListVariant};
use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+([,.]\d+)*$").expect("static regex"));

const SNAPSHOT_ICONS: [&str; 3] = [
    "/images/icon-challenge.svg",
    "/images/icon-solution.svg",
    "/images/icon-impact.svg",
];

pub(crate) fn parse_variant(s: &str) -> ListVariant {
    match s.trim().to_ascii_lowercase().as_str() {
        "image-only" => ListVariant::ImageOnly,
        "snapshot" => ListVariant::Snapshot,
        "cards" => ListVariant::Cards,
        "cards-blue" => ListVariant::CardsBlue,
        "cards-white" => ListVariant::CardsWhite,
        "cards-service" => ListVariant::CardsService,
        "cards-data" => ListVariant::CardsData,
        "checks" => ListVariant::Checks,
        "flags" => ListVariant::Flags,
        "negatives" => ListVariant::Negatives,
        "positives" => ListVariant::Positives,
        "good" => ListVariant::Good,
        "bad" => ListVariant::Bad,
        "counter" => ListVariant::Counter,
        "images" => ListVariant::Images,
        _ => ListVariant::Default,
    }
}

/// Where a list item's icon comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum ListIcon<'a> {
    /// The author uploaded one.
    Uploaded(&'a ImageRef),
    /// A stock icon shipped with the site.
    Builtin(&'static str),
}

impl ListVariant {
    /// Variants that show an author-uploaded icon when one exists.
    pub fn allows_uploaded_icon(self) -> bool {
        matches!(
            self,
            Self::Default
                | Self::ImageOnly
                | Self::Cards
                | Self::CardsBlue
                | Self::CardsWhite
                | Self::CardsService
        )
    }

    fn builtin_icon(self) -> Option<&'static str> {
        match self {
            Self::Checks | Self::Positives => Some("/images/icon-list-check.png"),
            Self::Negatives => Some("/images/icon-list-negative.png"),
            Self::Good => Some("/images/icon-list-good.png"),
            Self::Bad => Some("/images/icon-list-bad.png"),
            _ => None,
        }
    }

    /// Resolve the icon for the item at `index`, if the variant shows one.
    pub fn icon_for<'a>(self, item: &'a ListItem, index: usize) -> Option<ListIcon<'a>> {
        match self {
            Self::Snapshot => SNAPSHOT_ICONS.get(index).copied().map(ListIcon::Builtin),
            Self::Flags | Self::Counter => None,
            v if v.allows_uploaded_icon() => item.icon.as_ref().map(ListIcon::Uploaded),
            v => v.builtin_icon().map(ListIcon::Builtin),
        }
    }

    /// The value a list item's heading should count up to, if any.
    ///
    /// `counter` lists always animate their heading; `cards-data` lists only when the heading
    /// reads as a plain number such as `1,250` or `99.9`.
    pub fn counter_value(self, item: &ListItem) -> Option<String> {
        let text = item.heading.to_plain_text();
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        match self {
            Self::Counter => Some(text.to_string()),
            Self::CardsData if NUMERIC_HEADING_RE.is_match(text) => Some(text.to_string()),
            _ => None,
        }
    }
}

impl ListBlock {
    /// Count-up targets per item, aligned with `items`.
    pub fn counter_values(&self) -> Vec<Option<String>> {
        self.items
            .iter()
            .map(|item| self.variant.counter_value(item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::model::AssetRef;
    use crate::foundation::richtext::RichText;

    fn item(heading: &str, icon: bool) -> ListItem {
        ListItem {
            heading: RichText::from_plain(heading),
            icon: icon.then(|| ImageRef {
                asset: AssetRef {
                    reference: Some("image-icon".into()),
                    url: None,
                },
                alt: String::new(),
            }),
            ..ListItem::default()
        }
    }

    #[test]
    fn variants_parse_case_insensitively() {
        assert_eq!(parse_variant("Cards-Data"), ListVariant::CardsData);
        assert_eq!(parse_variant(" checks "), ListVariant::Checks);
        assert_eq!(parse_variant("unknown"), ListVariant::Default);
    }

    #[test]
    fn uploaded_icons_only_for_permissive_variants() {
        let with = item("A", true);
        let without = item("A", false);
        assert!(matches!(
            ListVariant::Cards.icon_for(&with, 0),
            Some(ListIcon::Uploaded(_))
        ));
        assert_eq!(ListVariant::Cards.icon_for(&without, 0), None);
        assert_eq!(
            ListVariant::Checks.icon_for(&with, 0),
            Some(ListIcon::Builtin("/images/icon-list-check.png"))
        );
        assert_eq!(ListVariant::Flags.icon_for(&with, 0), None);
        assert_eq!(ListVariant::CardsData.icon_for(&with, 0), None);
    }

    #[test]
    fn snapshot_icons_follow_position() {
        let it = item("A", true);
        assert_eq!(
            ListVariant::Snapshot.icon_for(&it, 1),
            Some(ListIcon::Builtin("/images/icon-solution.svg"))
        );
        assert_eq!(ListVariant::Snapshot.icon_for(&it, 3), None);
    }

    #[test]
    fn counters_detect_numeric_headings() {
        assert_eq!(
            ListVariant::CardsData.counter_value(&item(" 1,250 ", false)),
            Some("1,250".into())
        );
        assert_eq!(ListVariant::CardsData.counter_value(&item("12k", false)), None);
        assert_eq!(
            ListVariant::Counter.counter_value(&item("98%", false)),
            Some("98%".into())
        );
        assert_eq!(ListVariant::Default.counter_value(&item("42", false)), None);
        assert_eq!(ListVariant::Counter.counter_value(&item("", false)), None);
    }

    #[test]
    fn block_counter_values_align_with_items() {
        let block = ListBlock {
            variant: ListVariant::CardsData,
            items: vec![item("10", false), item("Ten", false)],
            ..ListBlock::default()
        };
        assert_eq!(block.counter_values(), vec![Some("10".into()), None]);
    }
}

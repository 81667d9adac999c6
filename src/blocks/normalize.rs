use crate::blocks::list::parse_variant;
use crate::blocks::model::{
    AssetRef, Button, ButtonGroupBlock, ContentBlock, ContentRowBlock, CtaBlock, ImageBlock,
    ImageDisplay, ImageRef, Link, ListBlock, ListItem, TableBlock, TableRow,
};
use crate::foundation::richtext::RichText;
use crate::foundation::value::{array_field, bool_field, opt_str, str_field, u32_field};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tag {
    Image,
    List,
    Table,
    Cta,
    ButtonGroup,
    Link,
    ContentRow,
    Ignore,
}

/// Legacy wrapper keys, probed in this order.
const WRAPPER_KEYS: &[(&str, Tag)] = &[
    ("tableBlock", Tag::Table),
    ("table", Tag::Table),
    ("imageBlock", Tag::Image),
    ("image", Tag::Image),
    ("listBlock", Tag::List),
    ("list", Tag::List),
    ("ctaBlock", Tag::Cta),
    ("cta", Tag::Cta),
    ("buttonGroup", Tag::ButtonGroup),
    ("buttonGroupBlock", Tag::ButtonGroup),
    ("linkBlock", Tag::Link),
    ("link", Tag::Link),
];

const LIST_COLUMNS_MAX: u32 = 6;

fn explicit_tag(raw: &Value) -> Option<Tag> {
    let tag = raw.get("_type")?.as_str()?;
    Some(match tag {
        "imageBlock" | "image" => Tag::Image,
        "listBlock" => Tag::List,
        "tableBlock" => Tag::Table,
        "ctaBlock" => Tag::Cta,
        "buttonGroup" | "buttonGroupBlock" => Tag::ButtonGroup,
        "linkBlock" | "link" => Tag::Link,
        "contentRow" => Tag::ContentRow,
        "ignore" => Tag::Ignore,
        _ => return None,
    })
}

/// Normalize one block record of any known shape into the canonical union.
///
/// Never fails: shapes that cannot be recognized become [`ContentBlock::Ignore`].
pub fn normalize(raw: &Value) -> ContentBlock {
    normalize_at(raw, true)
}

/// Normalize a list of block records, dropping the ones that render nothing.
pub fn normalize_all(raws: &[Value]) -> Vec<ContentBlock> {
    collect_blocks(raws, true)
}

fn collect_blocks(raws: &[Value], allow_rows: bool) -> Vec<ContentBlock> {
    raws.iter()
        .enumerate()
        .filter_map(|(i, raw)| {
            let block = normalize_at(raw, allow_rows);
            if block.is_ignore() {
                tracing::debug!(index = i, "ignoring unrecognized content block");
                None
            } else {
                Some(block)
            }
        })
        .collect()
}

fn normalize_at(raw: &Value, allow_rows: bool) -> ContentBlock {
    if !raw.is_object() {
        return ContentBlock::Ignore;
    }

    let (tag, body) = match explicit_tag(raw) {
        Some(tag) => (tag, raw),
        None => {
            let Some((key, tag, inner)) = WRAPPER_KEYS.iter().find_map(|&(key, tag)| {
                raw.get(key)
                    .filter(|inner| inner.is_object())
                    .map(|inner| (key, tag, inner))
            }) else {
                return ContentBlock::Ignore;
            };
            tracing::debug!(wrapper = key, "lifting legacy wrapped block");
            (tag, inner)
        }
    };

    match tag {
        Tag::Image => ContentBlock::Image(image_block(body)),
        Tag::List => ContentBlock::List(list_block(body)),
        Tag::Table => ContentBlock::Table(table_block(body)),
        Tag::Cta => ContentBlock::Cta(CtaBlock {
            heading: RichText::from_value(body.get("heading")),
            body: RichText::from_value(body.get("body")),
            link: body.get("link").and_then(link),
        }),
        Tag::ButtonGroup => ContentBlock::ButtonGroup(ButtonGroupBlock {
            buttons: array_field(body, "buttons")
                .iter()
                .filter_map(button)
                .collect(),
        }),
        Tag::Link => ContentBlock::Link(Link {
            text: str_field(body, "text"),
            url: str_field(body, "url"),
        }),
        Tag::ContentRow if allow_rows => ContentBlock::ContentRow(ContentRowBlock {
            label: opt_str(body, "label"),
            heading: RichText::from_value(body.get("heading")),
            body: RichText::from_value(body.get("body")),
            blocks: collect_blocks(row_blocks(body), false),
        }),
        Tag::ContentRow => {
            tracing::debug!("content rows nest one level only; ignoring inner row");
            ContentBlock::Ignore
        }
        Tag::Ignore => ContentBlock::Ignore,
    }
}

/// Raw block list of a row or column: `blocks`, falling back to the older `contentBlocks`.
pub(crate) fn row_blocks(body: &Value) -> &[Value] {
    match array_field(body, "blocks") {
        [] => array_field(body, "contentBlocks"),
        blocks => blocks,
    }
}

/// Read an image reference; `None` when there is nothing to resolve.
pub(crate) fn image_ref(v: &Value) -> Option<ImageRef> {
    if !v.is_object() {
        return None;
    }
    let asset = match v.get("asset") {
        Some(Value::String(s)) if !s.trim().is_empty() => AssetRef {
            reference: Some(s.trim().to_string()),
            url: None,
        },
        Some(a @ Value::Object(_)) => AssetRef {
            reference: opt_str(a, "_ref").or_else(|| opt_str(a, "_id")),
            url: opt_str(a, "url"),
        },
        _ => AssetRef {
            reference: None,
            url: opt_str(v, "url"),
        },
    };
    if asset.reference.is_none() && asset.url.is_none() {
        return None;
    }
    Some(ImageRef {
        asset,
        alt: str_field(v, "alt"),
    })
}

fn image_block(body: &Value) -> ImageBlock {
    let images = if let Some(list) = body.get("images").and_then(Value::as_array) {
        list.iter().filter_map(image_ref).collect()
    } else if let Some(single) = body.get("image").filter(|v| v.is_object()) {
        image_ref(single).into_iter().collect()
    } else {
        image_ref(body).into_iter().collect()
    };

    let display = match body.get("display").and_then(Value::as_str) {
        Some("square") => ImageDisplay::Square,
        _ => ImageDisplay::Cover,
    };

    ImageBlock { images, display }
}

fn list_block(body: &Value) -> ListBlock {
    let defaults = ListBlock::default();
    ListBlock {
        heading: RichText::from_value(body.get("heading")),
        variant: body
            .get("variant")
            .and_then(Value::as_str)
            .map(parse_variant)
            .unwrap_or(defaults.variant),
        columns: u32_field(body, "columns")
            .filter(|&c| c > 0)
            .map(|c| c.min(LIST_COLUMNS_MAX))
            .unwrap_or(defaults.columns),
        items: array_field(body, "items")
            .iter()
            .filter(|v| v.is_object())
            .map(list_item)
            .collect(),
    }
}

fn list_item(v: &Value) -> ListItem {
    ListItem {
        heading: RichText::from_value(v.get("heading")),
        subheading: RichText::from_value(v.get("subheading")),
        body: RichText::from_value(v.get("body")),
        icon: v.get("icon").and_then(image_ref),
        url: opt_str(v, "url"),
        label: opt_str(v, "label"),
    }
}

fn table_block(body: &Value) -> TableBlock {
    let headers = array_field(body, "headers");
    let header = |key: &str, idx: usize| {
        opt_str(body, key)
            .or_else(|| headers.get(idx).and_then(Value::as_str).map(|s| s.trim().to_string()))
            .unwrap_or_default()
    };

    let rows = array_field(body, "rows")
        .iter()
        .filter_map(|row| match row {
            Value::Object(_) => Some(TableRow {
                a: RichText::from_value(row.get("a")),
                b: RichText::from_value(row.get("b")),
            }),
            Value::Array(cells) => Some(TableRow {
                a: RichText::from_value(cells.first()),
                b: RichText::from_value(cells.get(1)),
            }),
            _ => None,
        })
        .collect();

    TableBlock {
        column_a: header("columnA", 0),
        column_b: header("columnB", 1),
        rows,
    }
}

pub(crate) fn link(v: &Value) -> Option<Link> {
    let url = opt_str(v, "url")?;
    Some(Link {
        text: str_field(v, "text"),
        url,
    })
}

pub(crate) fn button(v: &Value) -> Option<Button> {
    let url = opt_str(v, "url")?;
    Some(Button {
        title: opt_str(v, "title")
            .or_else(|| opt_str(v, "text"))
            .unwrap_or_default(),
        url,
        internal: bool_field(v, "internal"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::model::ListVariant;
    use serde_json::json;

    fn assert_idempotent(raw: Value) {
        let once = normalize(&raw);
        let twice = normalize(&once.to_value());
        assert_eq!(once, twice, "not idempotent for {raw}");
    }

    #[test]
    fn wrapped_and_flat_tables_agree() {
        let wrapped = json!({ "tableBlock": {
            "columnA": "Plan", "columnB": "Price",
            "rows": [{ "a": "Basic", "b": "$10" }],
        }});
        let flat = json!({
            "_type": "tableBlock",
            "columnA": "Plan", "columnB": "Price",
            "rows": [{ "a": "Basic", "b": "$10" }],
        });
        assert_eq!(normalize(&wrapped), normalize(&flat));
    }

    #[test]
    fn string_cells_become_rich_text() {
        let b = normalize(&json!({
            "_type": "tableBlock",
            "rows": [{ "a": "Basic", "b": [{ "_type": "block", "children": [{ "text": "$10" }] }] }],
        }));
        let ContentBlock::Table(t) = b else {
            panic!("expected table");
        };
        assert_eq!(t.rows[0].a, RichText::from_plain("Basic"));
        assert_eq!(t.rows[0].b.to_plain_text(), "$10");
        assert_eq!(t.column_a, "");
    }

    #[test]
    fn legacy_header_table_is_lifted() {
        let b = normalize(&json!({
            "_type": "tableBlock",
            "headers": ["Feature", "Included"],
            "rows": [["SSO", "Yes"], ["Audit", "No"], 5],
        }));
        let ContentBlock::Table(t) = b else {
            panic!("expected table");
        };
        assert_eq!(t.column_a, "Feature");
        assert_eq!(t.column_b, "Included");
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[1].b.to_plain_text(), "No");
    }

    #[test]
    fn wrapper_priority_prefers_table_over_image() {
        let b = normalize(&json!({
            "imageBlock": { "asset": { "_ref": "image-a" } },
            "tableBlock": { "columnA": "x" },
        }));
        assert_eq!(b.tag(), "tableBlock");
    }

    #[test]
    fn image_shapes_converge() {
        let single = normalize(&json!({ "_type": "image", "asset": { "_ref": "image-a" }, "alt": "A" }));
        let nested = normalize(&json!({ "_type": "imageBlock", "image": { "asset": { "_ref": "image-a" }, "alt": "A" } }));
        let listed = normalize(&json!({ "_type": "imageBlock", "images": [{ "asset": { "_ref": "image-a" }, "alt": "A" }] }));
        let wrapped = normalize(&json!({ "imageBlock": { "asset": "image-a", "alt": "A" } }));
        assert_eq!(single, nested);
        assert_eq!(single, listed);
        assert_eq!(single, wrapped);

        let ContentBlock::Image(img) = single else {
            panic!("expected image");
        };
        assert_eq!(img.display, ImageDisplay::Cover);
        assert!(!img.is_slideshow());
    }

    #[test]
    fn slideshow_drops_images_without_assets() {
        let b = normalize(&json!({
            "_type": "imageBlock",
            "display": "square",
            "images": [
                { "asset": { "_ref": "image-a" } },
                null,
                { "alt": "no asset" },
                { "asset": { "url": "https://cdn.example/b.png" } },
            ],
        }));
        let ContentBlock::Image(img) = b else {
            panic!("expected image");
        };
        assert_eq!(img.images.len(), 2);
        assert_eq!(img.display, ImageDisplay::Square);
        assert!(img.is_slideshow());
    }

    #[test]
    fn list_defaults_and_clamps() {
        let b = normalize(&json!({ "_type": "listBlock", "variant": "sparkles", "columns": 12,
            "items": [{ "heading": "A" }, "junk"] }));
        let ContentBlock::List(l) = b else {
            panic!("expected list");
        };
        assert_eq!(l.variant, ListVariant::Default);
        assert_eq!(l.columns, 6);
        assert_eq!(l.items.len(), 1);

        let ContentBlock::List(l) = normalize(&json!({ "_type": "listBlock" })) else {
            panic!("expected list");
        };
        assert_eq!(l.columns, 2);
        assert!(l.items.is_empty());
    }

    #[test]
    fn buttons_without_urls_are_dropped() {
        let b = normalize(&json!({ "buttonGroup": { "buttons": [
            { "title": "Go", "url": "/go", "internal": true },
            { "title": "Nowhere" },
        ]}}));
        let ContentBlock::ButtonGroup(g) = b else {
            panic!("expected button group");
        };
        assert_eq!(g.buttons.len(), 1);
        assert!(g.buttons[0].internal);
        assert_eq!(Button::style_at(0), crate::blocks::model::ButtonStyle::Primary);
        assert_eq!(Button::style_at(1), crate::blocks::model::ButtonStyle::Secondary);
    }

    #[test]
    fn link_externality() {
        let ContentBlock::Link(l) =
            normalize(&json!({ "link": { "text": "Docs", "url": "https://docs.example" } }))
        else {
            panic!("expected link");
        };
        assert!(l.is_external());
        assert!(!Link { text: String::new(), url: "/pricing".into() }.is_external());
    }

    #[test]
    fn content_rows_nest_one_level() {
        let b = normalize(&json!({
            "_type": "contentRow",
            "label": "Why",
            "blocks": [
                { "_type": "linkBlock", "text": "a", "url": "/a" },
                { "_type": "contentRow", "blocks": [] },
                { "mystery": true },
            ],
        }));
        let ContentBlock::ContentRow(row) = b else {
            panic!("expected content row");
        };
        assert_eq!(row.label.as_deref(), Some("Why"));
        assert_eq!(row.blocks.len(), 1);
        assert_eq!(row.blocks[0].tag(), "linkBlock");
    }

    #[test]
    fn unknown_shapes_are_ignored() {
        assert_eq!(normalize(&json!(null)), ContentBlock::Ignore);
        assert_eq!(normalize(&json!("text")), ContentBlock::Ignore);
        assert_eq!(normalize(&json!({ "_type": "video" })), ContentBlock::Ignore);
        assert_eq!(normalize(&json!({ "tableBlock": "not an object" })), ContentBlock::Ignore);
    }

    #[test]
    fn normalize_all_filters_ignored() {
        let blocks = normalize_all(&[
            json!({ "_type": "linkBlock", "url": "/x" }),
            json!(42),
            json!({ "ctaBlock": { "heading": "Talk to us" } }),
        ]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].tag(), "ctaBlock");
    }

    #[test]
    fn normalization_is_idempotent_across_shapes() {
        for raw in [
            json!({ "tableBlock": { "headers": ["a", "b"], "rows": [["1", "2"]] } }),
            json!({ "_type": "image", "asset": "image-x", "alt": " spaced " }),
            json!({ "imageBlock": { "images": [{ "asset": { "_ref": "r", "url": "u" } }], "display": "square" } }),
            json!({ "listBlock": { "variant": "cards-data", "columns": "3", "items": [
                { "heading": "1,250", "label": "sq. ft", "icon": { "asset": "image-i" }, "url": "/x" },
            ]}}),
            json!({ "cta": { "heading": "Go", "link": { "text": "Now", "url": "/now" } } }),
            json!({ "buttonGroup": { "buttons": [{ "text": "Fallback", "url": "/f" }] } }),
            json!({ "_type": "link", "text": "t", "url": "https://x" }),
            json!({ "_type": "contentRow", "heading": "H", "contentBlocks": [{ "linkBlock": { "url": "/l" } }] }),
            json!({ "weird": 1 }),
        ] {
            assert_idempotent(raw);
        }
    }

    #[test]
    fn deserialize_goes_through_normalization() {
        let blocks: Vec<ContentBlock> = serde_json::from_value(json!([
            { "tableBlock": { "columnA": "x" } },
            7,
        ]))
        .unwrap();
        assert_eq!(blocks[0].tag(), "tableBlock");
        assert!(blocks[1].is_ignore());
    }
}

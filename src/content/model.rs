use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static SECTION_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("static regex"));

/// Visual theme a section may request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Light,
    Dark,
    Midnight,
}

impl Theme {
    /// Parse an authored theme tag; unknown tags are treated as absent.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "midnight" => Some(Self::Midnight),
            _ => None,
        }
    }
}

/// One top-level section record.
///
/// Deserialization never fails on content: a non-object record becomes a section with an
/// empty type tag, which the dispatcher then drops.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub type_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Variant-specific fields, discriminator and common fields removed.
    pub fields: Map<String, Value>,
}

impl Section {
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, section_id: impl Into<String>) -> Self {
        self.section_id = Some(section_id.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Read a section from an untyped record.
    ///
    /// The discriminator may be `_type` (store native) or `typeTag`; `_type` wins.
    pub fn from_value(v: Value) -> Self {
        let Value::Object(mut obj) = v else {
            return Self::default();
        };

        let type_tag = take_str(&mut obj, "_type")
            .or_else(|| take_str(&mut obj, "typeTag"))
            .unwrap_or_default();
        obj.remove("typeTag");

        let section_id = take_str(&mut obj, "sectionId");
        if let Some(id) = &section_id
            && !SECTION_ID_RE.is_match(id)
        {
            tracing::warn!(
                section_id = %id,
                type_tag = %type_tag,
                "authored section id is not URL-safe; using it verbatim"
            );
        }

        let theme = take_str(&mut obj, "theme").and_then(|t| Theme::parse(&t));

        Self {
            type_tag,
            section_id,
            theme,
            fields: obj,
        }
    }

    /// View the variant fields as a JSON object value.
    pub fn fields_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub(crate) fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

fn take_str(obj: &mut Map<String, Value>, key: &str) -> Option<String> {
    match obj.remove(key)? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self::from_value(Value::deserialize(deserializer)?))
    }
}

/// A page snapshot: an ordered list of sections plus pass-through metadata.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, deserialize_with = "nullable_sections")]
    pub sections: Vec<Section>,
}

fn nullable_sections<'de, D>(deserializer: D) -> Result<Vec<Section>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(Value::Array(items)) => items.into_iter().map(Section::from_value).collect(),
        _ => Vec::new(),
    })
}

impl Page {
    /// Parse a page snapshot from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> crate::PageResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| crate::PageError::serde(format!("parse page JSON: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn store_native_discriminator_is_read() {
        let s = Section::from_value(json!({
            "_type": "sectionMain",
            "sectionId": "pricing",
            "theme": "dark",
            "rows": [],
        }));
        assert_eq!(s.type_tag, "sectionMain");
        assert_eq!(s.section_id.as_deref(), Some("pricing"));
        assert_eq!(s.theme, Some(Theme::Dark));
        assert!(s.fields.contains_key("rows"));
        assert!(!s.fields.contains_key("_type"));
    }

    #[test]
    fn type_tag_alias_is_accepted() {
        let s = Section::from_value(json!({ "typeTag": "hero" }));
        assert_eq!(s.type_tag, "hero");
        assert!(s.fields.is_empty());
    }

    #[test]
    fn underscore_type_wins_over_alias() {
        let s = Section::from_value(json!({ "_type": "a", "typeTag": "b" }));
        assert_eq!(s.type_tag, "a");
        assert!(!s.fields.contains_key("typeTag"));
    }

    #[test]
    fn junk_records_default() {
        assert_eq!(Section::from_value(json!(null)), Section::default());
        assert_eq!(Section::from_value(json!("x")).type_tag, "");
        let s = Section::from_value(json!({ "_type": 7, "sectionId": "", "theme": "neon" }));
        assert_eq!(s.type_tag, "");
        assert_eq!(s.section_id, None);
        assert_eq!(s.theme, None);
    }

    #[test]
    fn page_tolerates_null_sections() {
        let p: Page = serde_json::from_value(json!({ "slug": "x", "sections": null })).unwrap();
        assert!(p.sections.is_empty());
        let p: Page = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.slug, "");
    }

    #[test]
    fn page_keeps_section_order() {
        let p: Page = serde_json::from_value(json!({
            "slug": "about",
            "metaTitle": "About",
            "sections": [{ "_type": "a" }, 3, { "_type": "b" }],
        }))
        .unwrap();
        let tags: Vec<_> = p.sections.iter().map(|s| s.type_tag.as_str()).collect();
        assert_eq!(tags, ["a", "", "b"]);
        assert_eq!(p.meta_title.as_deref(), Some("About"));
    }
}

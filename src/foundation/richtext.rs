use serde_json::{Value, json};

/// An opaque rich-text block sequence.
///
/// Rendering spans is the job of an external renderer; the engine only needs to carry the
/// blocks through, wrap plain strings, and extract plain text for a few decisions.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<Value>);

impl RichText {
    /// Wrap a plain string into a single normal-style paragraph block.
    pub fn from_plain(text: &str) -> Self {
        Self(vec![json!({
            "_type": "block",
            "style": "normal",
            "markDefs": [],
            "children": [{ "_type": "span", "text": text, "marks": [] }],
        })])
    }

    /// Read a rich-text field.
    ///
    /// Arrays pass through, strings are wrapped, anything else is empty.
    pub fn from_value(v: Option<&Value>) -> Self {
        match v {
            Some(Value::Array(blocks)) => Self(blocks.clone()),
            Some(Value::String(s)) if !s.is_empty() => Self::from_plain(s),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate span texts per block, blocks separated by a blank line.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.0 {
            let Some(children) = block.get("children").and_then(Value::as_array) else {
                continue;
            };
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            for child in children {
                if let Some(t) = child.get("text").and_then(Value::as_str) {
                    out.push_str(t);
                }
            }
        }
        out
    }
}

//! Deep-link identifiers for sections.
//!
//! An authored `sectionId` is used verbatim; otherwise the id is derived from the type tag and
//! the section's position. Collisions are suffixed `-1`, `-2`, ... in allocation order.

use crate::content::model::Section;
use std::collections::HashSet;

const FALLBACK_TAG: &str = "section";

/// Allocate one anchor id per section, in input order.
pub fn allocate(sections: &[Section]) -> Vec<String> {
    let mut taken = HashSet::with_capacity(sections.len());
    sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let id = unique(candidate(section, i), &taken);
            taken.insert(id.clone());
            id
        })
        .collect()
}

fn candidate(section: &Section, index: usize) -> String {
    if let Some(id) = section.section_id.as_deref().map(str::trim)
        && !id.is_empty()
    {
        return id.to_string();
    }
    let tag = match section.type_tag.trim() {
        "" => FALLBACK_TAG,
        t => t,
    };
    format!("{tag}-{index}")
}

fn unique(base: String, taken: &HashSet<String>) -> String {
    if !taken.contains(&base) {
        return base;
    }
    (1u32..)
        .map(|n| format!("{base}-{n}"))
        .find(|id| !taken.contains(id))
        .unwrap_or(base)
}

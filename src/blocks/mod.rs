//! Content blocks: the canonical union and the normalizer that produces it.

pub(crate) mod list;
pub(crate) mod model;
pub(crate) mod normalize;

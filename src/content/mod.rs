//! Page snapshots as read from the content store.

pub(crate) mod model;
pub(crate) mod source;

pub(crate) mod ease;
pub(crate) mod error;
pub(crate) mod richtext;
pub(crate) mod value;

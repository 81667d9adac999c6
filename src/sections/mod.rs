pub(crate) mod dispatch;
pub(crate) mod props;
pub(crate) mod registry;

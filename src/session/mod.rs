pub(crate) mod scroll_session;
pub(crate) mod timeline;

pub(crate) mod admin_layout;
pub(crate) mod header;
pub(crate) mod layout;

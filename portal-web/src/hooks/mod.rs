pub(crate) mod list;

pub use list::{ListState, UseListQueryHandle, use_list_query};

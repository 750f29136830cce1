pub(crate) mod empty_state;
pub(crate) mod flash;
pub(crate) mod loading;
pub(crate) mod pagination;

pub use empty_state::EmptyState;
pub use flash::{Flash, FlashKind};
pub use loading::Loading;
pub use pagination::Pagination;

pub mod category;
pub mod dashboard;
pub mod errors;
pub mod gallery;
pub mod message;
pub mod page;
pub mod publication;
pub mod user;

pub use category::{Category, CategoryPatch, NewCategory};
pub use dashboard::{DashboardRecent, DashboardStats};
pub use errors::ApiError;
pub use gallery::{GALLERY_CATEGORIES, GalleryItem, GalleryItemPatch, NewGalleryItem};
pub use message::{ContactMessage, NewContactMessage};
pub use page::{ListEnvelope, PageParams, Paginated};
pub use publication::{NewPublication, Publication, PublicationPatch};
pub use user::{CreateUserRequest, LoginRequest, LoginResponse, UpdateUserRequest, User, UserRole};

mod categories;
mod dashboard;
mod gallery;
mod gallery_form;
mod messages;
mod publication_form;
mod publications;
mod users;

pub use categories::CategoriesPage;
pub use dashboard::AdminDashboardPage;
pub use gallery::AdminGalleryPage;
pub use gallery_form::GalleryFormPage;
pub use messages::AdminMessagesPage;
pub use publication_form::PublicationFormPage;
pub use publications::AdminPublicationsPage;
pub use users::AdminUsersPage;

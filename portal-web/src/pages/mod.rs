pub mod admin;

mod about;
mod blog;
mod blog_post;
mod contact;
mod gallery;
mod home;
mod login;
mod not_found;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use blog_post::BlogPostPage;
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;

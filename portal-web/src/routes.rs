//! Route definitions and the session guard for the admin subtree.

use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::components::loading::Loading;
use crate::containers::admin_layout::AdminLayout;
use crate::containers::layout::Layout;
use crate::pages::admin::{
    AdminDashboardPage, AdminGalleryPage, AdminMessagesPage, AdminPublicationsPage,
    AdminUsersPage, CategoriesPage, GalleryFormPage, PublicationFormPage,
};
use crate::pages::{
    AboutPage, BlogPage, BlogPostPage, ContactPage, GalleryPage, HomePage, LoginPage,
    NotFoundPage,
};
use crate::session::SessionState;

/// Public routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/nosotros")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/galeria")]
    Gallery,
    #[at("/contacto")]
    Contact,
    #[at("/login")]
    Login,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Admin panel routes, all behind [`RequireAuth`].
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/admin")]
    Dashboard,
    #[at("/admin/publicaciones")]
    Publications,
    #[at("/admin/publicaciones/nueva")]
    PublicationNew,
    #[at("/admin/publicaciones/:id")]
    PublicationEdit { id: i64 },
    #[at("/admin/categorias")]
    Categories,
    #[at("/admin/galeria")]
    Gallery,
    #[at("/admin/galeria/nueva")]
    GalleryNew,
    #[at("/admin/galeria/:id")]
    GalleryEdit { id: i64 },
    #[at("/admin/mensajes")]
    Messages,
    #[at("/admin/usuarios")]
    Users,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

impl AdminRoute {
    /// Label shown in the sidebar; `None` for routes that are not nav
    /// entries (forms, not-found).
    #[must_use]
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("Panel"),
            Self::Publications => Some("Publicaciones"),
            Self::Categories => Some("Categorías"),
            Self::Gallery => Some("Galería"),
            Self::Messages => Some("Mensajes"),
            Self::Users => Some("Usuarios"),
            _ => None,
        }
    }

    /// Sidebar entries in declaration order.
    #[must_use]
    pub fn nav_items() -> Vec<(Self, &'static str)> {
        Self::iter()
            .filter_map(|route| route.nav_label().map(|label| (route.clone(), label)))
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Admin guard. While the persisted session is still being read it renders
/// the loading indicator instead of redirecting, so a logged-in user never
/// sees a flash of the login page on reload.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let (session, _) = use_store::<SessionState>();

    if !session.hydrated {
        return html! { <Loading /> };
    }
    if !session.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }
    html! { <>{ props.children.clone() }</> }
}

/// Switch function for the public routes.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Layout><HomePage /></Layout> },
        Route::About => html! { <Layout><AboutPage /></Layout> },
        Route::Blog => html! { <Layout><BlogPage /></Layout> },
        Route::BlogPost { slug } => html! { <Layout><BlogPostPage {slug} /></Layout> },
        Route::Gallery => html! { <Layout><GalleryPage /></Layout> },
        Route::Contact => html! { <Layout><ContactPage /></Layout> },
        Route::Login => html! { <LoginPage /> },
        Route::AdminRoot | Route::Admin => html! {
            <RequireAuth>
                <Switch<AdminRoute> render={switch_admin} />
            </RequireAuth>
        },
        Route::NotFound => html! { <Layout><NotFoundPage /></Layout> },
    }
}

/// Switch function for the admin routes.
fn switch_admin(route: AdminRoute) -> Html {
    let current = route.clone();
    match route {
        AdminRoute::Dashboard => html! {
            <AdminLayout {current}><AdminDashboardPage /></AdminLayout>
        },
        AdminRoute::Publications => html! {
            <AdminLayout {current}><AdminPublicationsPage /></AdminLayout>
        },
        AdminRoute::PublicationNew => html! {
            <AdminLayout {current}><PublicationFormPage id={None::<i64>} /></AdminLayout>
        },
        AdminRoute::PublicationEdit { id } => html! {
            <AdminLayout {current}><PublicationFormPage id={Some(id)} /></AdminLayout>
        },
        AdminRoute::Categories => html! {
            <AdminLayout {current}><CategoriesPage /></AdminLayout>
        },
        AdminRoute::Gallery => html! {
            <AdminLayout {current}><AdminGalleryPage /></AdminLayout>
        },
        AdminRoute::GalleryNew => html! {
            <AdminLayout {current}><GalleryFormPage id={None::<i64>} /></AdminLayout>
        },
        AdminRoute::GalleryEdit { id } => html! {
            <AdminLayout {current}><GalleryFormPage id={Some(id)} /></AdminLayout>
        },
        AdminRoute::Messages => html! {
            <AdminLayout {current}><AdminMessagesPage /></AdminLayout>
        },
        AdminRoute::Users => html! {
            <AdminLayout {current}><AdminUsersPage /></AdminLayout>
        },
        AdminRoute::NotFound => html! { <Redirect<Route> to={Route::NotFound} /> },
    }
}

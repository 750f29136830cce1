//! Tests for the routing tables.
//!
//! Validates route paths, the admin sidebar ordering, and parameter
//! handling for the edit routes.

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use crate::routes::{AdminRoute, Route};

    #[test]
    fn public_paths_are_spanish() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::About.to_path(), "/nosotros");
        assert_eq!(Route::Blog.to_path(), "/blog");
        assert_eq!(Route::Gallery.to_path(), "/galeria");
        assert_eq!(Route::Contact.to_path(), "/contacto");
        assert_eq!(Route::Login.to_path(), "/login");
    }

    #[test]
    fn blog_post_path_embeds_the_slug() {
        let route = Route::BlogPost {
            slug: "aniversario-institucional".to_string(),
        };
        assert_eq!(route.to_path(), "/blog/aniversario-institucional");
    }

    #[test]
    fn blog_post_recognized_from_path() {
        let route = Route::recognize("/blog/dia-del-logro");
        assert_eq!(
            route,
            Some(Route::BlogPost {
                slug: "dia-del-logro".to_string()
            })
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/no-existe"), Some(Route::NotFound));
    }

    #[test]
    fn admin_paths_nest_under_admin() {
        assert_eq!(AdminRoute::Dashboard.to_path(), "/admin");
        assert_eq!(AdminRoute::Publications.to_path(), "/admin/publicaciones");
        assert_eq!(
            AdminRoute::PublicationNew.to_path(),
            "/admin/publicaciones/nueva"
        );
        assert_eq!(AdminRoute::Categories.to_path(), "/admin/categorias");
        assert_eq!(AdminRoute::Gallery.to_path(), "/admin/galeria");
        assert_eq!(AdminRoute::Messages.to_path(), "/admin/mensajes");
        assert_eq!(AdminRoute::Users.to_path(), "/admin/usuarios");
    }

    #[test]
    fn edit_routes_carry_numeric_ids() {
        assert_eq!(
            AdminRoute::PublicationEdit { id: 7 }.to_path(),
            "/admin/publicaciones/7"
        );
        assert_eq!(
            AdminRoute::GalleryEdit { id: 12 }.to_path(),
            "/admin/galeria/12"
        );
        assert_eq!(
            AdminRoute::recognize("/admin/publicaciones/7"),
            Some(AdminRoute::PublicationEdit { id: 7 })
        );
    }

    #[test]
    fn new_route_wins_over_edit_route() {
        // "nueva" is not a valid id, so it must match the literal route.
        assert_eq!(
            AdminRoute::recognize("/admin/publicaciones/nueva"),
            Some(AdminRoute::PublicationNew)
        );
        assert_eq!(
            AdminRoute::recognize("/admin/galeria/nueva"),
            Some(AdminRoute::GalleryNew)
        );
    }

    #[test]
    fn sidebar_lists_the_six_sections_in_order() {
        let items = AdminRoute::nav_items();
        let labels: Vec<&str> = items.iter().map(|(_, label)| *label).collect();
        assert_eq!(
            labels,
            [
                "Panel",
                "Publicaciones",
                "Categorías",
                "Galería",
                "Mensajes",
                "Usuarios"
            ]
        );
    }

    #[test]
    fn form_routes_have_no_sidebar_entry() {
        assert!(AdminRoute::PublicationNew.nav_label().is_none());
        assert!(AdminRoute::PublicationEdit { id: 1 }.nav_label().is_none());
        assert!(AdminRoute::GalleryNew.nav_label().is_none());
        assert!(AdminRoute::NotFound.nav_label().is_none());
    }

    #[test]
    fn route_equality() {
        assert_eq!(Route::Home, Route::Home);
        assert_ne!(Route::Blog, Route::Gallery);
        assert_ne!(
            AdminRoute::PublicationEdit { id: 1 },
            AdminRoute::PublicationEdit { id: 2 }
        );
    }
}

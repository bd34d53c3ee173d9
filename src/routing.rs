// ============================================================================
// ROUTING - Rutas de la aplicación + control de acceso por rol
// ============================================================================
// La resolución de acceso es una función pura para poder testearla sin
// navegador; la sincronización con la URL (pushState/popstate) vive en
// los helpers de abajo y en components/app.rs.
// ============================================================================

use crate::models::Role;

/// Every screen the portal can show. Unknown paths parse to `Dashboard`,
/// which doubles as the catch-all redirect target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Containers,
    ContainerDetail(String),
    Shipments,
    Reports,
    Invoices,
    Fleet,
    Customers,
    Settings,
}

impl Route {
    /// Parse a location pathname. Root and unmatched paths land on the
    /// dashboard; the guard decides afterwards whether that is reachable.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Route::Login,
            ["dashboard"] => Route::Dashboard,
            ["containers"] => Route::Containers,
            ["containers", id] => Route::ContainerDetail((*id).to_string()),
            ["shipments"] => Route::Shipments,
            ["reports"] => Route::Reports,
            ["invoices"] => Route::Invoices,
            ["fleet"] => Route::Fleet,
            ["customers"] => Route::Customers,
            ["settings"] => Route::Settings,
            _ => Route::Dashboard,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Containers => "/containers".to_string(),
            Route::ContainerDetail(id) => format!("/containers/{}", id),
            Route::Shipments => "/shipments".to_string(),
            Route::Reports => "/reports".to_string(),
            Route::Invoices => "/invoices".to_string(),
            Route::Fleet => "/fleet".to_string(),
            Route::Customers => "/customers".to_string(),
            Route::Settings => "/settings".to_string(),
        }
    }

    /// Topbar heading for the screen.
    pub fn page_label(&self) -> &'static str {
        match self {
            Route::Login => "Sign In",
            Route::Dashboard => "Dashboard",
            Route::Containers | Route::ContainerDetail(_) => "Track & Trace",
            Route::Shipments => "Shipments",
            Route::Reports => "Reports",
            Route::Invoices => "Billing",
            Route::Fleet => "Fleet",
            Route::Customers => "Customers",
            Route::Settings => "Settings",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Staff-only screens. Everyone else is silently sent back to the
    /// dashboard, never shown an error page.
    pub fn admin_only(&self) -> bool {
        matches!(self, Route::Fleet | Route::Customers | Route::Settings)
    }
}

/// Outcome of the access check run on every route change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Access contract:
/// - anonymous visitors only reach the login screen
/// - authenticated users never see the login screen again
/// - admin-only screens downgrade silently for non-admins
pub fn resolve(route: &Route, role: Option<Role>) -> Resolution {
    match role {
        None => {
            if route.requires_auth() {
                Resolution::RedirectToLogin
            } else {
                Resolution::Allow
            }
        }
        Some(role) => {
            if !route.requires_auth() {
                Resolution::RedirectToDashboard
            } else if route.admin_only() && role != Role::Admin {
                Resolution::RedirectToDashboard
            } else {
                Resolution::Allow
            }
        }
    }
}

/// Pathname of the current location, or "/" when unavailable.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// pushState navigation; the caller updates its own route state.
pub fn push_history(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&route.path()),
            );
        }
    }
}

/// replaceState navigation, used for guard redirects so the back button
/// never lands on a page the session cannot see.
pub fn replace_history(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&route.path()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN_ROUTES: [Route; 3] = [Route::Fleet, Route::Customers, Route::Settings];

    fn authenticated_routes() -> Vec<Route> {
        vec![
            Route::Dashboard,
            Route::Containers,
            Route::ContainerDetail("OC-2401".to_string()),
            Route::Shipments,
            Route::Reports,
            Route::Invoices,
            Route::Fleet,
            Route::Customers,
            Route::Settings,
        ]
    }

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/containers"), Route::Containers);
        assert_eq!(
            Route::parse("/containers/OC-2401"),
            Route::ContainerDetail("OC-2401".to_string())
        );
        assert_eq!(Route::parse("/fleet"), Route::Fleet);
    }

    #[test]
    fn root_and_unknown_paths_parse_to_dashboard() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/does-not-exist"), Route::Dashboard);
        assert_eq!(Route::parse("/fleet/extra/junk"), Route::Dashboard);
    }

    #[test]
    fn path_parse_round_trip() {
        for route in authenticated_routes() {
            assert_eq!(Route::parse(&route.path()), route);
        }
        assert_eq!(Route::parse(&Route::Login.path()), Route::Login);
    }

    #[test]
    fn anonymous_is_sent_to_login_from_every_protected_route() {
        for route in authenticated_routes() {
            assert_eq!(resolve(&route, None), Resolution::RedirectToLogin);
        }
    }

    #[test]
    fn anonymous_can_reach_login() {
        assert_eq!(resolve(&Route::Login, None), Resolution::Allow);
    }

    #[test]
    fn authenticated_users_never_see_login_again() {
        assert_eq!(
            resolve(&Route::Login, Some(Role::Customer)),
            Resolution::RedirectToDashboard
        );
        assert_eq!(
            resolve(&Route::Login, Some(Role::Admin)),
            Resolution::RedirectToDashboard
        );
    }

    #[test]
    fn admin_routes_downgrade_silently_for_customers() {
        for route in ADMIN_ROUTES {
            assert_eq!(
                resolve(&route, Some(Role::Customer)),
                Resolution::RedirectToDashboard
            );
            assert_eq!(resolve(&route, Some(Role::Admin)), Resolution::Allow);
        }
    }

    #[test]
    fn customer_navigating_to_fleet_lands_on_dashboard() {
        // The redirect target is the dashboard, not an error page.
        let route = Route::parse("/fleet");
        assert_eq!(
            resolve(&route, Some(Role::Customer)),
            Resolution::RedirectToDashboard
        );
    }

    #[test]
    fn customer_reaches_unrestricted_routes() {
        for route in [
            Route::Dashboard,
            Route::Containers,
            Route::Shipments,
            Route::Reports,
            Route::Invoices,
        ] {
            assert_eq!(resolve(&route, Some(Role::Customer)), Resolution::Allow);
        }
    }

    #[test]
    fn page_labels_group_detail_under_track_and_trace() {
        assert_eq!(Route::Containers.page_label(), "Track & Trace");
        assert_eq!(
            Route::ContainerDetail("OC-2403".to_string()).page_label(),
            "Track & Trace"
        );
    }
}

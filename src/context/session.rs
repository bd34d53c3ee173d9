// ============================================================================
// SESSION CONTEXT - Estado de sesión + navegación para todo el árbol
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::models::{Role, Session};
use crate::routing::{self, Route};

/// Ambient handle every screen reaches the session through. The provider
/// below owns the state; everything else goes through these callbacks.
#[derive(Clone)]
pub struct SessionContext {
    pub session: Session,
    pub route: Route,
    pub login: Callback<Role>,
    pub logout: Callback<()>,
    pub switch_role: Callback<Role>,
    pub select_container: Callback<String>,
    /// pushState navigation to a screen
    pub navigate: Callback<Route>,
    /// replaceState navigation, for guard redirects
    pub redirect: Callback<Route>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && self.route == other.route
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(Session::default);
    let route = use_state(|| Route::parse(&routing::current_path()));

    // Browser back/forward. Registered once on mount, so the forgotten
    // closure cannot accumulate.
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
                let restored = Route::parse(&routing::current_path());
                log::info!("🧭 popstate → {}", restored.path());
                route.set(restored);
            }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            }
            closure.forget();
            || ()
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            routing::push_history(&target);
            route.set(target);
        })
    };

    let redirect = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            routing::replace_history(&target);
            route.set(target);
        })
    };

    // Login always lands on the dashboard
    let login = {
        let session = session.clone();
        let route = route.clone();
        Callback::from(move |role: Role| {
            log::info!("✅ Sesión iniciada como {}", role.as_str());
            session.set(session.login(role));
            routing::push_history(&Route::Dashboard);
            route.set(Route::Dashboard);
        })
    };

    // Logout clears the whole session, selection included
    let logout = {
        let session = session.clone();
        let route = route.clone();
        Callback::from(move |_| {
            log::info!("👋 Sesión cerrada");
            session.set(session.logout());
            routing::push_history(&Route::Login);
            route.set(Route::Login);
        })
    };

    // Live role switch; leaving staff mode on a staff screen falls back
    // to the dashboard
    let switch_role = {
        let session = session.clone();
        let route = route.clone();
        Callback::from(move |role: Role| {
            if session.role == Some(role) {
                return;
            }
            log::info!("🔄 Switching view to {}", role.as_str());
            session.set(session.switch_role(role));

            if route.admin_only() && role != Role::Admin {
                routing::push_history(&Route::Dashboard);
                route.set(Route::Dashboard);
            }
        })
    };

    // Drill-down into a container detail
    let select_container = {
        let session = session.clone();
        let route = route.clone();
        Callback::from(move |id: String| {
            log::info!("📦 Container selected: {}", id);
            session.set(session.select_container(id.clone()));
            let target = Route::ContainerDetail(id);
            routing::push_history(&target);
            route.set(target);
        })
    };

    let context = SessionContext {
        session: (*session).clone(),
        route: (*route).clone(),
        login,
        logout,
        switch_role,
        select_container,
        navigate,
        redirect,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

/// Session accessor. Calling it outside the provider is a programming
/// error and panics right away instead of limping along.
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within a SessionProvider")
}

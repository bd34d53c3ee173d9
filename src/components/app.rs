// ============================================================================
// APP - Raíz: provider de sesión, guardia de acceso y selección de pantalla
// ============================================================================

use yew::prelude::*;

use crate::components::app_shell::AppShell;
use crate::components::login::Login;
use crate::components::pages::{
    ContainerDetail, ContainerList, Customers, Dashboard, Fleet, Integrations, Invoices, Reports,
    Shipments,
};
use crate::context::{use_session, SessionProvider};
use crate::routing::{resolve, Resolution, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <Portal />
        </SessionProvider>
    }
}

/// Runs the access check and renders the surviving screen. A redirected
/// route renders its target in the same frame; the address bar catches
/// up in the effect below, so a blocked page never flashes.
#[function_component(Portal)]
fn portal() -> Html {
    let context = use_session();

    let resolution = resolve(&context.route, context.session.role);
    let effective = match resolution {
        Resolution::Allow => context.route.clone(),
        Resolution::RedirectToLogin => Route::Login,
        Resolution::RedirectToDashboard => Route::Dashboard,
    };

    {
        let redirect = context.redirect.clone();
        let target = effective.clone();
        use_effect_with(
            (context.route.clone(), resolution),
            move |(route, resolution)| {
                if *resolution != Resolution::Allow {
                    log::info!("🔀 {} → {}", route.path(), target.path());
                    redirect.emit(target);
                }
                || ()
            },
        );
    }

    let screen = match &effective {
        Route::Login => return html! { <Login /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Containers => html! { <ContainerList /> },
        Route::ContainerDetail(id) => html! { <ContainerDetail container_id={id.clone()} /> },
        Route::Shipments => html! { <Shipments /> },
        Route::Reports => html! { <Reports /> },
        Route::Invoices => html! { <Invoices /> },
        Route::Fleet => html! { <Fleet /> },
        Route::Customers => html! { <Customers /> },
        Route::Settings => html! { <Integrations /> },
    };

    html! {
        <AppShell>
            { screen }
        </AppShell>
    }
}

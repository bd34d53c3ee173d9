// ============================================================================
// APP SHELL - Barra lateral y topbar comunes a las pantallas autenticadas
// ============================================================================

use yew::prelude::*;

use crate::context::use_session;
use crate::models::Role;
use crate::routing::Route;

// (path, icon, label, admin_only)
const NAV_ITEMS: [(&str, &str, &str, bool); 8] = [
    ("/dashboard", "📊", "Dashboard", false),
    ("/containers", "🧭", "Track & Trace", false),
    ("/shipments", "📦", "Shipments", false),
    ("/reports", "📄", "Reports", false),
    ("/invoices", "💰", "Billing", false),
    ("/fleet", "🚚", "Fleet", true),
    ("/customers", "👥", "Customers", true),
    ("/settings", "⚙️", "Settings", true),
];

// (severity class, title, container id, detail)
const NOTIFICATIONS: [(&str, &str, &str, &str); 3] = [
    ("dot-critical", "Critical Alert", "OC-2404", "Temperature exceeded threshold"),
    ("dot-warning", "Warning Alert", "OC-2401", "Battery level low (45%)"),
    ("dot-critical", "Critical Alert", "OC-2404", "Battery level critical (23%)"),
];

#[derive(Properties, PartialEq)]
pub struct AppShellProps {
    pub children: Children,
}

#[function_component(AppShell)]
pub fn app_shell(props: &AppShellProps) -> Html {
    let context = use_session();
    let notifications_open = use_state(|| false);
    let user_menu_open = use_state(|| false);

    let role = context.session.role.unwrap_or(Role::Customer);
    let is_admin = role == Role::Admin;
    let current_path = context.route.path();

    let nav_items = NAV_ITEMS
        .iter()
        .filter(|(_, _, _, admin_only)| !admin_only || is_admin)
        .map(|(path, icon, label, _)| {
            let active = current_path.starts_with(path);
            let onclick = {
                let navigate = context.navigate.clone();
                let path = *path;
                Callback::from(move |_: MouseEvent| navigate.emit(Route::parse(path)))
            };
            html! {
                <button
                    type="button"
                    class={classes!("nav-item", active.then_some("active"))}
                    {onclick}
                >
                    <span class="nav-icon">{ *icon }</span>
                    <span>{ *label }</span>
                </button>
            }
        })
        .collect::<Html>();

    let toggle_notifications = {
        let notifications_open = notifications_open.clone();
        let user_menu_open = user_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            user_menu_open.set(false);
            notifications_open.set(!*notifications_open);
        })
    };
    let toggle_user_menu = {
        let user_menu_open = user_menu_open.clone();
        let notifications_open = notifications_open.clone();
        Callback::from(move |_: MouseEvent| {
            notifications_open.set(false);
            user_menu_open.set(!*user_menu_open);
        })
    };

    let notification_items = NOTIFICATIONS
        .iter()
        .map(|(dot, title, container_id, detail)| {
            let onclick = {
                let select_container = context.select_container.clone();
                let notifications_open = notifications_open.clone();
                let container_id = (*container_id).to_string();
                Callback::from(move |_: MouseEvent| {
                    notifications_open.set(false);
                    select_container.emit(container_id.clone());
                })
            };
            html! {
                <button type="button" class="notification-item" {onclick}>
                    <div class="notification-title">
                        <span class={classes!("dot", *dot)} />
                        <span>{ *title }</span>
                    </div>
                    <span class="notification-detail">
                        { format!("{}: {}", container_id, detail) }
                    </span>
                </button>
            }
        })
        .collect::<Html>();

    let switch_to = |target: Role| {
        let switch_role = context.switch_role.clone();
        let user_menu_open = user_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            user_menu_open.set(false);
            switch_role.emit(target);
        })
    };
    let on_logout = {
        let logout = context.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    html! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="sidebar-logo">
                    <div class="logo-icon">{ "📦" }</div>
                    <div>
                        <span class="logo-name">{ "DoKaSch" }</span>
                        <p class="logo-tagline">{ "Logistics" }</p>
                    </div>
                </div>

                <div class="sidebar-search">
                    <button type="button" class="search-button">
                        <span>{ "🔍 Quick search..." }</span>
                        <kbd>{ "⌘K" }</kbd>
                    </button>
                </div>

                <nav class="sidebar-nav">
                    <p class="nav-section-label">{ "Menu" }</p>
                    { nav_items }
                </nav>

                <div class="upgrade-banner">
                    <div class="upgrade-title">
                        <span>{ "✨" }</span>
                        <span>{ "Upgrade to Pro" }</span>
                    </div>
                    <p>{ "Get advanced analytics & priority support" }</p>
                    <button type="button">{ "Learn More" }</button>
                </div>

                <div class="sidebar-user">
                    <button type="button" class="user-trigger" onclick={toggle_user_menu}>
                        <div class={classes!("avatar", is_admin.then_some("avatar-admin"))}>
                            { if is_admin { "A" } else { "C" } }
                        </div>
                        <div class="user-meta">
                            <p class="user-name">
                                { if is_admin { "Admin User" } else { "Customer User" } }
                            </p>
                            <p class="user-role">
                                { if is_admin { "Staff Access" } else { "Client Portal" } }
                            </p>
                        </div>
                        <span class="chevron">{ "▾" }</span>
                    </button>

                    if *user_menu_open {
                        <div class="user-menu">
                            <p class="menu-label">{ "⇄ Switch View" }</p>
                            <button
                                type="button"
                                class={classes!("menu-option", (!is_admin).then_some("selected"))}
                                onclick={switch_to(Role::Customer)}
                            >
                                <span class="option-icon">{ "🏢" }</span>
                                <div class="option-meta">
                                    <p>{ "Client Portal" }</p>
                                    <p class="option-hint">{ "View as customer" }</p>
                                </div>
                                if !is_admin {
                                    <span class="check">{ "✓" }</span>
                                }
                            </button>
                            <button
                                type="button"
                                class={classes!("menu-option", is_admin.then_some("selected"))}
                                onclick={switch_to(Role::Admin)}
                            >
                                <span class="option-icon">{ "👤" }</span>
                                <div class="option-meta">
                                    <p>{ "Staff Access" }</p>
                                    <p class="option-hint">{ "Full admin controls" }</p>
                                </div>
                                if is_admin {
                                    <span class="check">{ "✓" }</span>
                                }
                            </button>
                            <div class="menu-separator" />
                            <button type="button" class="menu-item">{ "Profile Settings" }</button>
                            <button type="button" class="menu-item">{ "Preferences" }</button>
                            <div class="menu-separator" />
                            <button type="button" class="menu-item danger" onclick={on_logout}>
                                { "Sign Out" }
                            </button>
                        </div>
                    }
                </div>
            </aside>

            <div class="shell-main">
                <header class="topbar">
                    <div class="topbar-left">
                        <h1>{ context.route.page_label() }</h1>
                        <span class="badge badge-live">{ "Live" }</span>
                    </div>

                    <div class="topbar-right">
                        <span class={classes!("badge", if is_admin { "badge-admin" } else { "badge-customer" })}>
                            { role.view_label() }
                        </span>

                        <div class="notification-bell">
                            <button type="button" class="bell-button" onclick={toggle_notifications}>
                                { "🔔" }
                                <span class="bell-count">{ NOTIFICATIONS.len() }</span>
                            </button>

                            if *notifications_open {
                                <div class="notification-menu">
                                    <div class="menu-label">
                                        { "Notifications" }
                                        <span class="badge">{ format!("{} new", NOTIFICATIONS.len()) }</span>
                                    </div>
                                    { notification_items }
                                    <div class="menu-separator" />
                                    <button type="button" class="menu-item accent">
                                        { "View all notifications" }
                                    </button>
                                </div>
                            }
                        </div>
                    </div>
                </header>

                <main class="page-content">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

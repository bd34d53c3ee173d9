use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::use_session;
use crate::models::Role;
use crate::services::authenticate;

const FEATURES: [(&str, &str, &str); 4] = [
    ("🌡️", "Temperature Monitoring", "±0.1°C accuracy"),
    ("📍", "Global Tracking", "Real-time GPS"),
    ("🛡️", "Compliance Ready", "GDP certified"),
    ("📦", "Active Fleet", "45+ units"),
];

#[function_component(Login)]
pub fn login() -> Html {
    let context = use_session();
    let active_tab = use_state(|| Role::Customer);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let active_tab = active_tab.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let login = context.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                match authenticate(&email_input.value(), &password_input.value(), *active_tab) {
                    Ok(role) => {
                        submitting.set(true);
                        let login = login.clone();
                        // Simulated round-trip before the session opens
                        Timeout::new(CONFIG.login_latency_ms, move || login.emit(role)).forget();
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
            }
        })
    };

    let select_customer = {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(Role::Customer))
    };
    let select_admin = {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(Role::Admin))
    };

    let features = FEATURES
        .iter()
        .map(|(icon, label, value)| {
            html! {
                <div class="feature-tile">
                    <span class="feature-icon">{ *icon }</span>
                    <p class="feature-label">{ *label }</p>
                    <p class="feature-value">{ *value }</p>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="login-screen">
            <div class="login-brand-panel">
                <div class="brand-logo">
                    <div class="logo-icon">{ "📦" }</div>
                    <div>
                        <h1>{ "DoKaSch" }</h1>
                        <p>{ "Logistics Platform" }</p>
                    </div>
                </div>

                <div class="brand-hero">
                    <h2>
                        { "Real-time cold chain" }
                        <br />
                        <span class="hero-accent">{ "visibility & control" }</span>
                    </h2>
                    <p>
                        { "Monitor temperature-sensitive shipments worldwide with \
                           precision tracking and instant alerts." }
                    </p>
                    <div class="feature-grid">{ features }</div>
                </div>

                <div class="brand-footer">
                    <span>{ "© 2024 DoKaSch" }</span>
                    <a href="#">{ "Privacy" }</a>
                    <a href="#">{ "Terms" }</a>
                </div>
            </div>

            <div class="login-form-panel">
                <div class="login-form-container">
                    <div class="form-header">
                        <h2>{ "Welcome back" }</h2>
                        <p>{ "Sign in to access your logistics dashboard" }</p>
                    </div>

                    <div class="login-tabs">
                        <button
                            type="button"
                            class={classes!("tab-button", (*active_tab == Role::Customer).then_some("active"))}
                            onclick={select_customer}
                        >
                            { "🏢 Client Portal" }
                        </button>
                        <button
                            type="button"
                            class={classes!("tab-button", (*active_tab == Role::Admin).then_some("active"))}
                            onclick={select_admin}
                        >
                            { "👤 Staff Access" }
                        </button>
                    </div>

                    <form class="login-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="email">{ "Email Address" }</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="you@company.com"
                                autocomplete="email"
                                ref={email_ref}
                            />
                        </div>

                        <div class="form-group">
                            <div class="label-row">
                                <label for="password">{ "Password" }</label>
                                <button type="button" class="link-button">
                                    { "Forgot password?" }
                                </button>
                            </div>
                            <input
                                type="password"
                                id="password"
                                placeholder="Enter your password"
                                autocomplete="current-password"
                                ref={password_ref}
                            />
                        </div>

                        if let Some(message) = &*error {
                            <div class="form-alert">{ message.clone() }</div>
                        }

                        <button type="submit" class="btn-login" disabled={*submitting}>
                            if *submitting {
                                <span class="spinner" />
                                { "Signing in..." }
                            } else {
                                { "Sign In →" }
                            }
                        </button>

                        <div class="form-divider">
                            <span>{ "or continue with" }</span>
                        </div>

                        <button type="button" class="btn-google">
                            <span class="google-mark">{ "G" }</span>
                            { "Sign in with Google" }
                        </button>
                    </form>

                    <div class="login-footnote">
                        <p>
                            { "Need an account? " }
                            <button type="button" class="link-button">
                                { "Contact your administrator" }
                            </button>
                        </p>
                    </div>

                    <div class="demo-hint">
                        <p>
                            <strong>{ "Demo Mode" }</strong>
                            { " — Enter any credentials to continue" }
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// COLDCHAIN PORTAL - SPA de monitorización de contenedores (Yew CSR)
// ============================================================================
// Arquitectura:
// - components: pantallas y widgets Yew (app, shell, páginas)
// - context: sesión + navegación compartidas vía ContextProvider
// - routing: rutas, guardia de acceso e historial del navegador
// - services: autenticación demo, datos de muestra y avisos
// - models: entidades de dominio compartidas por las pantallas
// ============================================================================

mod components;
mod config;
mod context;
mod models;
mod routing;
mod services;
mod utils;

use wasm_bindgen::prelude::*;

use crate::components::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn run_app() {
    // Panic hook primero para ver errores legibles en consola
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }

    log::info!("🚀 {} ({})", CONFIG.app_name, CONFIG.environment);

    yew::Renderer::<App>::new().render();
}

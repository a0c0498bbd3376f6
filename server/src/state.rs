use axum::extract::FromRef;
use leptos::prelude::LeptosOptions;
use leptos_axum::AxumRouteListing;

/// Axum state of the server, sub-states are extracted with `FromRef`. Leptos requires `LeptosOptions` in the state
/// for its route handlers.
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub routes: Vec<AxumRouteListing>,
}

#![recursion_limit = "256"]
use std::env;
use std::str::FromStr;

use axum::{body::Body as AxumBody, extract::State, http::Request, response::{IntoResponse, Response}, routing::get, Router};
use axum::body::Body;
use axum::http::HeaderValue;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;

use scrollfeed_app::app::*;
use crate::fallback::file_and_error_handler;
use crate::state::AppState;

mod fallback;
mod state;

pub const LOG_LEVEL_ENV: &str = "SCROLLFEED_LOG_LEVEL";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] log::SetLoggerError),
    #[error("failed to set tracing subscriber: {0}")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("invalid leptos configuration: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Log level parsed from `value`, `Info` when missing or invalid
pub fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|value| log::Level::from_str(value.trim()).ok())
        .unwrap_or(log::Level::Info)
}

pub fn get_log_level() -> log::Level {
    parse_log_level(env::var(LOG_LEVEL_ENV).ok().as_deref())
}

async fn leptos_routes_handler(
    State(app_state): State<AppState>,
    req: Request<AxumBody>,
) -> Response {
    let leptos_options = app_state.leptos_options.clone();

    log::debug!("leptos_routes_handler for uri: {:?}", req.uri());
    let handler = leptos_axum::render_route(
        app_state.routes.clone(),
        move || shell(leptos_options.clone()),
    );
    let mut response = handler(State(app_state), req).await.into_response();
    add_security_headers(&mut response);
    response
}

fn add_security_headers(response: &mut Response<Body>) {
    let headers = response.headers_mut();

    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert("Referrer-Policy", HeaderValue::from_static("strict-origin-when-cross-origin"));
    headers.insert("Cross-Origin-Opener-Policy", HeaderValue::from_static("same-origin"));
    headers.insert("Cross-Origin-Resource-Policy", HeaderValue::from_static("same-origin"));
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    simple_logger::init_with_level(get_log_level())?;

    let subscriber = tracing_subscriber::fmt().with_max_level(tracing::Level::ERROR).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    // For deployment these variables are:
    // <https://github.com/leptos-rs/start-axum#executing-a-server-on-a-remote-machine-without-the-toolchain>
    let conf = get_configuration(None).map_err(|e| ServerError::Configuration(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app_state = AppState {
        leptos_options,
        routes: routes.clone(),
    };

    let app = Router::new()
        .leptos_routes_with_handler(routes, get(leptos_routes_handler))
        .fallback(file_and_error_handler)
        .with_state(app_state);

    log::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::parse_log_level;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None), log::Level::Info);
        assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
        assert_eq!(parse_log_level(Some(" WARN ")), log::Level::Warn);
        assert_eq!(parse_log_level(Some("verbose")), log::Level::Info);
    }
}

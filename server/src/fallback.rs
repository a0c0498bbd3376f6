use std::env;
use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
};
use axum::http::{header, HeaderValue};
use leptos::prelude::{Errors, LeptosOptions};
use leptos::view;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

use scrollfeed_utils::error_template::ErrorTemplate;
use scrollfeed_utils::errors::AppError;

pub const LEPTOS_ENV: &str = "LEPTOS_ENV";
pub const PROD_ENV: &str = "PROD";
const STATIC_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> AxumResponse {
    let root = options.site_root.clone();
    let error = match get_static_file(uri, &root).await {
        Ok(res) if res.status() == StatusCode::OK => return res.into_response(),
        Ok(_) => AppError::NotFound,
        Err(e) => {
            log::error!("Failed to serve static file: {e}");
            e
        },
    };

    let status_code = error.status_code();
    let mut errors = Errors::default();
    errors.insert_with_default_key(error);
    let handler = leptos_axum::render_app_to_stream(
        move || view! {<ErrorTemplate outside_errors=errors.clone()/>},
    );
    let mut response = handler(req).await.into_response();
    *response.status_mut() = status_code;
    response
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response<Body>, AppError> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(AppError::new)?;
    // `ServeDir` implements `tower::Service` so we can call it with `tower::ServiceExt::oneshot`
    // This path is relative to the cargo root
    let mut response = ServeDir::new(root)
        .oneshot(req)
        .await
        .unwrap_or_else(|err| match err {})
        .into_response();

    if is_prod_mode() {
        response.headers_mut().append(header::CACHE_CONTROL, HeaderValue::from_static(STATIC_CACHE_CONTROL));
    }

    Ok(response)
}

pub fn is_prod_mode() -> bool {
    env::var(LEPTOS_ENV).is_ok_and(|leptos_env| leptos_env == PROD_ENV)
}

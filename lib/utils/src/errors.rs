use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use http::status::StatusCode;
use leptos::prelude::*;
use leptos::{component, view, IntoView};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::{InternalErrorIcon, NotFoundIcon};

const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong.";
const NOT_FOUND_MESSAGE: &str = "There's nothing here";

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    InternalServerError(String),
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AppError::InternalServerError(_) => String::from(INTERNAL_ERROR_MESSAGE),
            AppError::NotFound => String::from(NOT_FOUND_MESSAGE),
        }
    }

    pub fn error_detail(&self) -> String {
        match self {
            AppError::InternalServerError(e) => e.clone(),
            AppError::NotFound => String::from(NOT_FOUND_MESSAGE),
        }
    }

    /// Constructs a new [`AppError::InternalServerError`] from some other type.
    pub fn new(msg: impl ToString) -> Self {
        Self::InternalServerError(msg.to_string())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap_or_default())
    }
}

impl FromStr for AppError {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// Failures at the seam between the scroll engine and the environment hosting it.
///
/// They never reach the caller of the engine: the engine logs them and retries on its next update pass.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("no scroll parent could be resolved for the scroll region")]
    ScrollParentUnavailable,
    #[error("no window is available in this environment")]
    WindowUnavailable,
    #[error("failed to register listener: {0}")]
    ListenerRegistration(String),
}

#[component]
pub fn AppErrorIcon(
    app_error: AppError,
) -> impl IntoView {
    match app_error {
        AppError::InternalServerError(_) => view! { <InternalErrorIcon/> }.into_any(),
        AppError::NotFound => view! { <NotFoundIcon/> }.into_any(),
    }
}

/// Displays an error
#[component]
pub fn ErrorDisplay(
    error: AppError
) -> impl IntoView {
    let error_string = error.to_string();
    let status_code =  error.status_code().as_u16();
    let user_message = error.user_message();

    log::error!("Caught error, status_code: {status_code}, error message: {error_string}");
    view! {
        <div class="w-full flex items-center gap-2 justify-center">
            <AppErrorIcon app_error=error/>
            <div class="flex flex-col">
                <h2 class="text-2xl">{status_code}</h2>
                <h3 class="text-xl">{user_message}</h3>
            </div>
        </div>
    }.into_any()
}

#[cfg(test)]
mod tests {
    use crate::errors::{AppError, ScrollError, INTERNAL_ERROR_MESSAGE, NOT_FOUND_MESSAGE};
    use http::StatusCode;
    use std::str::FromStr;

    #[test]
    fn test_app_error_status_code() {
        let test_string = String::from("test");
        assert_eq!(AppError::InternalServerError(test_string).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_app_error_user_message() {
        let test_string = String::from("test");
        assert_eq!(AppError::InternalServerError(test_string.clone()).user_message(), String::from(INTERNAL_ERROR_MESSAGE));
        assert_eq!(AppError::InternalServerError(test_string.clone()).error_detail(), test_string);
        assert_eq!(AppError::NotFound.user_message(), String::from(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_app_error_new() {
        let test_str = "test";
        assert_eq!(AppError::new(test_str), AppError::InternalServerError(String::from(test_str)));
    }

    #[test]
    fn test_app_error_display_and_from_string() {
        let test_string = String::from("test");
        assert_eq!(
            AppError::from_str(AppError::InternalServerError(test_string.clone()).to_string().as_str()).expect("AppError should be convert to string and back"),
            AppError::InternalServerError(test_string)
        );
        assert_eq!(
            AppError::from_str(AppError::NotFound.to_string().as_str()).expect("AppError should be convert to string and back"),
            AppError::NotFound
        );
        assert!(AppError::from_str("invalid").is_err());
    }

    #[test]
    fn test_scroll_error_message() {
        assert_eq!(
            ScrollError::ListenerRegistration(String::from("TypeError")).to_string(),
            "failed to register listener: TypeError"
        );
        assert_eq!(
            ScrollError::ScrollParentUnavailable.to_string(),
            "no scroll parent could be resolved for the scroll region"
        );
        assert_eq!(ScrollError::WindowUnavailable.to_string(), "no window is available in this environment");
    }
}

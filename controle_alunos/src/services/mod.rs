pub mod auth;
pub mod student;

#[cfg(feature = "ssr")]
use crate::api::{ApiClient, ApiError};
#[cfg(feature = "ssr")]
use leptos::prelude::*;

/// Shared client from the server context, scoped to the caller's token.
#[cfg(feature = "ssr")]
pub(crate) fn api_client(token: String) -> Result<ApiClient, ServerFnError> {
    let api: ApiClient =
        use_context().ok_or(ServerFnError::new("Failed to retrieve api client"))?;
    Ok(api.with_token(Some(token)))
}

#[cfg(feature = "ssr")]
pub(crate) fn forward<T>(action: &str, result: Result<T, ApiError>) -> Result<T, ServerFnError> {
    result.map_err(|e| {
        log::warn!("{} failed: {}", action, e);
        ServerFnError::new(e)
    })
}

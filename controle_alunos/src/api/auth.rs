use dto::auth::{Credentials, TokenDto};

use super::{ApiClient, ApiError};

pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<String, ApiError> {
    let response: TokenDto = api.post("/auth/login", credentials).await?;
    Ok(response.token)
}

pub async fn register(api: &ApiClient, credentials: &Credentials) -> Result<(), ApiError> {
    api.post_empty("/auth/register", credentials).await
}

use dto::auth::Credentials;
use leptos::prelude::*;

#[server]
pub async fn login(credentials: Credentials) -> Result<String, ServerFnError> {
    use crate::api::auth;
    use crate::services::{api_client, forward};

    let api = api_client(String::new())?;
    let token = forward("login", auth::login(&api, &credentials).await)?;
    log::info!("User '{}' logged in", credentials.username);
    Ok(token)
}

#[server]
pub async fn register(credentials: Credentials) -> Result<(), ServerFnError> {
    use crate::api::auth;
    use crate::services::{api_client, forward};

    let api = api_client(String::new())?;
    forward("register", auth::register(&api, &credentials).await)?;
    log::info!("Registered user '{}'", credentials.username);
    Ok(())
}

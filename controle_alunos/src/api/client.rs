use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Falha de comunicação com o servidor: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Sessão inválida ou expirada")]
    Unauthorized,

    #[error("O servidor respondeu {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Resposta inesperada do servidor: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP client bound to one backend. The bearer token, when present, is
/// attached to every request made through this handle.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Blank tokens clear the header.
    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.trim().is_empty());
    }

    pub fn with_token(&self, token: Option<String>) -> Self {
        let mut api = self.clone();
        api.set_auth_token(token);
        api
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Self::send(self.request(Method::GET, path))
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)
    }

    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::send(self.request(Method::GET, path).query(query))
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let bytes = Self::send(self.request(Method::GET, path))
            .await?
            .bytes()
            .await
            .map_err(ApiError::Transport)?;
        Ok(bytes.to_vec())
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::send(self.request(Method::POST, path).json(body))
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)
    }

    /// POST whose response body carries nothing the caller needs.
    pub async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        Self::send(self.request(Method::POST, path).json(body)).await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::send(self.request(Method::PUT, path).json(body))
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        Self::send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_clears_header() {
        let mut api = ApiClient::new("http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080");

        api.set_auth_token(Some(String::from("abc")));
        assert_eq!(api.token(), Some("abc"));

        api.set_auth_token(Some(String::from("  ")));
        assert_eq!(api.token(), None);

        api.set_auth_token(Some(String::from("abc")));
        api.set_auth_token(None);
        assert_eq!(api.token(), None);
    }

    #[test]
    fn with_token_leaves_shared_client_untouched() {
        let shared = ApiClient::new("http://localhost:8080");
        let scoped = shared.with_token(Some(String::from("abc")));
        assert_eq!(scoped.token(), Some("abc"));
        assert_eq!(shared.token(), None);
    }
}

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use yew::Callback;

use crate::error::ApiError;

/// Authorization header for an outgoing request, absent when no usable
/// token is held.
pub(crate) fn auth_header(token: Option<&str>) -> Option<(&'static str, String)> {
    match token {
        Some(t) if !t.is_empty() => Some(("Authorization", format!("Bearer {}", t))),
        _ => None,
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Single point of egress for backend calls. Attaches the bearer token,
/// speaks JSON unless a caller needs binary or multipart, and turns any
/// 401/403 into a single `on_unauthorized` emit. Navigation and storage
/// stay out of this layer; the `use_api` hook wires the signal up.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    on_unauthorized: Callback<()>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        on_unauthorized: Callback<()>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token,
            on_unauthorized,
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match auth_header(self.token.as_deref()) {
            Some((name, value)) => builder.header(name, &value),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send_json(request).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = Request::get(&self.url(path)).query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let request = self
            .authorize(builder)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send_json(request).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send_json(request).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send_json(request).await
    }

    /// Delete endpoints reply with bodies the app never uses; any 2xx
    /// resolves to `()`.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::delete(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.check(response).await?;
        Ok(())
    }

    /// File download (CSV export).
    pub async fn get_binary(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Multipart upload (CSV import). The browser sets the boundary header,
    /// so no content type is forced here.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send_json(request).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Global response interceptor: 401/403 emits the session-invalidation
    /// signal exactly once for the offending response, never retries.
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        if err.is_unauthorized() {
            log::info!("session invalidated by status {}", status);
            self.on_unauthorized.emit(());
        }
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_carries_the_token() {
        let header = auth_header(Some("T1"));
        assert_eq!(header, Some(("Authorization", "Bearer T1".to_string())));
    }

    #[test]
    fn missing_or_empty_token_yields_no_header() {
        assert_eq!(auth_header(None), None);
        assert_eq!(auth_header(Some("")), None);
    }

    #[test]
    fn url_joining_tolerates_trailing_slash() {
        assert_eq!(
            join_url("http://localhost:8080", "/accounts"),
            "http://localhost:8080/accounts"
        );
        assert_eq!(
            join_url("http://localhost:8080/", "/accounts"),
            "http://localhost:8080/accounts"
        );
    }
}

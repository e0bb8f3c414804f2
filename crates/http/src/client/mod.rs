//! Oceanview API client

pub mod auth;
pub mod billing;
pub mod error;
pub mod reservations;
pub mod response;

use error::ClientError;
use oceanview_core::validation::validators;
use oceanview_core::{FrontendConfig, SessionStore};
use reqwest::{Client, ClientBuilder, Method, header};
use response::ResponseBody;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::rc::Rc;

/// Oceanview API client
///
/// Stateless apart from the shared session store, which is read on every call
/// to decide whether to send a bearer token.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Rc<dyn SessionStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client for `origin` with default configuration
    pub fn new(
        origin: impl Into<String>,
        session: Rc<dyn SessionStore>,
    ) -> Result<Self, ClientError> {
        Self::builder().origin(origin).session(session).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Origin plus API prefix, e.g. `https://host/api`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session store shared with the page utilities
    pub fn session(&self) -> &Rc<dyn SessionStore> {
        &self.session
    }

    /// Headers sent with every request
    ///
    /// Always JSON content type; `Authorization: Bearer <token>` only while a
    /// token is stored.
    pub fn build_headers(&self) -> Result<header::HeaderMap, ClientError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        if let Some(token) = self.session.auth_token() {
            let value = header::HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                ClientError::Configuration("stored auth token is not a valid header value".into())
            })?;
            headers.insert(header::AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Create a request builder for `path` with the session headers
    pub fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.build_headers()?;

        tracing::debug!(
            %method,
            %url,
            authenticated = headers.contains_key(header::AUTHORIZATION),
            "Sending API request"
        );

        Ok(self.client.request(method, url).headers(headers))
    }

    /// Send a request and interpret the response
    pub async fn execute(&self, request: reqwest::RequestBuilder) -> Result<ResponseBody, ClientError> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Turn a response into a parsed body or an error
    ///
    /// The body is JSON when the content type says so and text otherwise. A
    /// non-2xx status becomes [`ClientError::Api`].
    pub async fn handle_response(response: reqwest::Response) -> Result<ResponseBody, ClientError> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let text = response.text().await?;

        if status.is_success() {
            return Ok(ResponseBody::parse(content_type.as_deref(), text)?);
        }

        // A mislabelled error body must not hide the status.
        let body = ResponseBody::parse(content_type.as_deref(), text.clone())
            .unwrap_or(ResponseBody::Text(text));
        let error = ClientError::from_response(status, body);
        tracing::warn!(status = status.as_u16(), error = %error, "API request failed");
        Err(error)
    }

    /// `GET {base_url}{path}`
    pub async fn get(&self, path: &str) -> Result<ResponseBody, ClientError> {
        let request = self.request(Method::GET, path)?;
        self.execute(request).await
    }

    /// `POST {base_url}{path}` with a JSON body
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseBody, ClientError> {
        let request = self
            .request(Method::POST, path)?
            .body(serde_json::to_string(body)?);
        self.execute(request).await
    }

    /// `PUT {base_url}{path}` with a JSON body
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseBody, ClientError> {
        let request = self
            .request(Method::PUT, path)?
            .body(serde_json::to_string(body)?);
        self.execute(request).await
    }

    /// `DELETE {base_url}{path}`
    pub async fn delete(&self, path: &str) -> Result<ResponseBody, ClientError> {
        let request = self.request(Method::DELETE, path)?;
        self.execute(request).await
    }

    /// [`get`](Self::get) and deserialize the body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        Ok(self.get(path).await?.into_json()?)
    }

    /// [`post`](Self::post) and deserialize the body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        Ok(self.post(path, body).await?.into_json()?)
    }

    /// [`put`](Self::put) and deserialize the body
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        Ok(self.put(path, body).await?.into_json()?)
    }

    /// [`delete`](Self::delete) and deserialize the body
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        Ok(self.delete(path).await?.into_json()?)
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    origin: Option<String>,
    api_prefix: Option<String>,
    session: Option<Rc<dyn SessionStore>>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the origin, e.g. `window.location.origin`
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the path prefix for API calls (default `/api`)
    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(prefix.into());
        self
    }

    /// Set the session store the auth token is read from
    pub fn session(mut self, session: Rc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Apply prefix and user agent from a loaded configuration
    pub fn config(self, config: &FrontendConfig) -> Self {
        self.api_prefix(config.api_prefix.clone())
            .user_agent(config.user_agent.clone())
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let origin = self
            .origin
            .ok_or_else(|| ClientError::Configuration("origin is required".into()))?;
        let session = self
            .session
            .ok_or_else(|| ClientError::Configuration("session store is required".into()))?;
        let defaults = FrontendConfig::default();

        let api_prefix = self.api_prefix.unwrap_or(defaults.api_prefix);
        validators::validate_path_prefix(&api_prefix, "api_prefix")
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        // Ensure the origin ends without a trailing slash
        let base_url = format!("{}{}", origin.trim_end_matches('/'), api_prefix);

        let client = ClientBuilder::new()
            .user_agent(self.user_agent.unwrap_or(defaults.user_agent))
            .build()?;

        Ok(ApiClient {
            client,
            base_url,
            session,
        })
    }
}

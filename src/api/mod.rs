pub(crate) mod comments;
pub(crate) mod matches;
pub(crate) mod users;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PitchsideError, Result};

/// Per-request view of the backend connection: HTTP client, base URL, and
/// the token captured at call time.
pub(crate) struct Backend<'a> {
    pub(crate) http: &'a reqwest::Client,
    pub(crate) base_url: &'a str,
    pub(crate) token: Option<String>,
}

impl Backend<'_> {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut request = self.http.request(method, url);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Token {token}"));
        }
        request
    }

    /// Send a request and classify the status: 429 and 401/403 get their own
    /// error variants so callers can degrade them per policy.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let response = request.send().await.map_err(|e| PitchsideError::Http {
            url: url.to_owned(),
            source: e,
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(PitchsideError::RateLimited {
                url: url.to_owned(),
            });
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(PitchsideError::Unauthorized {
                url: url.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(PitchsideError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response, url: &str) -> Result<T> {
        response.json().await.map_err(|e| PitchsideError::Json {
            url: url.to_owned(),
            source: e,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self.send(self.request(Method::GET, &url), &url).await?;
        self.decode(response, &url).await
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(path);
        let request = self.request(Method::GET, &url).query(query);
        let response = self.send(request, &url).await?;
        self.decode(response, &url).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        let request = self.request(Method::POST, &url).json(body);
        let response = self.send(request, &url).await?;
        self.decode(response, &url).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        let request = self.request(Method::PUT, &url).json(body);
        let response = self.send(request, &url).await?;
        self.decode(response, &url).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        self.send(self.request(Method::DELETE, &url), &url).await?;
        Ok(())
    }
}

//! Untyped access for endpoints without a dedicated method.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::{ApiRequest, GfError, net, request::require_id};

impl super::GhostfolioClient {
    /// Sends an arbitrary request with this client's credentials.
    ///
    /// Decode into [`serde_json::Value`] to keep the raw response.
    ///
    /// ```no_run
    /// # use ghostfolio_rs::{ApiRequest, GhostfolioClient};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GhostfolioClient::new("my-security-token")?;
    /// let user: serde_json::Value = client.execute(ApiRequest::get("user")).await?;
    /// println!("{}", user["settings"]["baseCurrency"]);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode into `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, req), err, fields(endpoint = %req.endpoint())))]
    pub async fn execute<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T, GfError> {
        net::execute(self, &req).await
    }

    /// `GET /api/v1/{endpoint}` with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GfError> {
        let req = query
            .iter()
            .fold(ApiRequest::get(endpoint), |req, (k, v)| req.query(*k, v));
        self.execute(req).await
    }

    /// `POST /api/v1/{endpoint}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode into `T`.
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, GfError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(ApiRequest::post(endpoint).json(body)?).await
    }

    /// `PUT /api/v1/{endpoint}[/{id}]` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::InvalidParams`] for an empty `id`, or any transport error.
    pub async fn put<T, B>(&self, endpoint: &str, id: Option<&str>, body: &B) -> Result<T, GfError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut req = ApiRequest::put(endpoint);
        if let Some(id) = id {
            require_id("object id", id)?;
            req = req.segment(id);
        }
        self.execute(req.json(body)?).await
    }
}

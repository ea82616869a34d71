//! Activities ("orders" on the wire): listing, bulk import and single create/update.

mod api;
mod model;

pub use model::{
    Activities, Activity, CreateOrder, ImportActivity, ImportRequest, ImportResponse, UpdateOrder,
};

use crate::core::{GfError, GhostfolioClient};

impl GhostfolioClient {
    /// Lists all activities, optionally restricted to one account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn orders(&self, account_id: Option<&str>) -> Result<Activities, GfError> {
        api::fetch_orders(self, account_id).await
    }

    /// Imports a batch of activities.
    ///
    /// The server validates the whole batch; a rejected batch surfaces as
    /// [`GfError::Status`] with the server's validation messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data), err, fields(count = data.activities.len())))]
    pub async fn import_transactions(&self, data: &ImportRequest) -> Result<ImportResponse, GfError> {
        api::import(self, data).await
    }

    /// Creates a single activity.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::InvalidParams`] for an empty symbol, or any transport error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, order), err, fields(symbol = %order.symbol)))]
    pub async fn create_order(&self, order: &CreateOrder) -> Result<Activity, GfError> {
        api::create_order(self, order).await
    }

    /// Replaces the activity `id` with `order`.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::InvalidParams`] for an empty id or symbol, or any transport error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, order), err))]
    pub async fn update_order(&self, id: &str, order: &UpdateOrder) -> Result<Activity, GfError> {
        api::update_order(self, id, order).await
    }
}

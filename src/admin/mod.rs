//! Admin-only market data endpoints. These are not part of Ghostfolio's documented API
//! and require a user with the admin role.

mod api;
mod model;

pub use model::{AdminMarketData, AdminMarketDataItem, MarketDataDetails, MarketDataPoint};

use crate::core::{DataSource, GfError, GhostfolioClient};

impl GhostfolioClient {
    /// Overview of the market data stored on the instance.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::Unauthorized`] for non-admin users, or any transport error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn market_data_admin(&self) -> Result<AdminMarketData, GfError> {
        api::fetch_overview(self).await
    }

    /// Asset profile and stored prices for `symbol` from `data_source`.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::InvalidParams`] for an empty symbol or data source,
    /// [`GfError::Unauthorized`] for non-admin users, or any transport error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn market_data(
        &self,
        data_source: &DataSource,
        symbol: &str,
    ) -> Result<MarketDataDetails, GfError> {
        api::fetch_symbol(self, data_source, symbol).await
    }
}

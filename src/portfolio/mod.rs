//! Portfolio analytics: performance, holdings, single positions, details, investments and dividends.

mod api;
mod model;

pub use model::{
    Allocation, Dividends, Holding, Holdings, InvestmentItem, Investments, Performance,
    PerformancePoint, PortfolioDetails, PortfolioPerformance, PortfolioSummary, PositionDetail,
    PositionHistoryPoint, Streaks,
};

use crate::core::{DataSource, DateRange, GfError, GhostfolioClient, GroupBy};

impl GhostfolioClient {
    /// Fetches net worth and performance over `range`, including a daily chart.
    ///
    /// Uses version 2 of the endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn performance(&self, range: DateRange) -> Result<PortfolioPerformance, GfError> {
        api::fetch_performance(self, range).await
    }

    /// Fetches all holdings valued over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn holdings(&self, range: DateRange) -> Result<Holdings, GfError> {
        api::fetch_holdings(self, range).await
    }

    /// Fetches the position in `symbol` as quoted by `data_source`, with its activities and price history.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::InvalidParams`] for an empty symbol or data source, [`GfError::NotFound`]
    /// if the portfolio holds no such position, or any transport error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn position(
        &self,
        data_source: &DataSource,
        symbol: &str,
    ) -> Result<PositionDetail, GfError> {
        api::fetch_position(self, data_source, symbol).await
    }

    /// Fetches accounts, holdings, platforms and summary in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn details(&self) -> Result<PortfolioDetails, GfError> {
        api::fetch_details(self).await
    }

    /// Fetches invested amounts bucketed by `group_by` over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn investments(
        &self,
        group_by: GroupBy,
        range: DateRange,
    ) -> Result<Investments, GfError> {
        api::fetch_investments(self, group_by, range).await
    }

    /// Fetches dividends received, bucketed by `group_by` over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn dividends(&self, group_by: GroupBy, range: DateRange) -> Result<Dividends, GfError> {
        api::fetch_dividends(self, group_by, range).await
    }
}

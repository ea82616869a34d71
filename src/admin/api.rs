use super::model::{AdminMarketData, MarketDataDetails};
use crate::core::{ApiRequest, DataSource, GfError, GhostfolioClient, net, request::require_id};

pub(super) async fn fetch_overview(client: &GhostfolioClient) -> Result<AdminMarketData, GfError> {
    net::execute(client, &ApiRequest::get("admin/market-data")).await
}

pub(super) async fn fetch_symbol(
    client: &GhostfolioClient,
    data_source: &DataSource,
    symbol: &str,
) -> Result<MarketDataDetails, GfError> {
    require_id("data source", data_source.as_str())?;
    require_id("symbol", symbol)?;

    let req = ApiRequest::get("admin/market-data")
        .segment(data_source.as_str())
        .segment(symbol);
    net::execute(client, &req).await
}

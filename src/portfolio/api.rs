use super::model::{Dividends, Holdings, Investments, PortfolioDetails, PortfolioPerformance, PositionDetail};
use crate::core::{
    ApiRequest, ApiVersion, DataSource, DateRange, GfError, GhostfolioClient, GroupBy, net,
    request::require_id,
};

pub(super) async fn fetch_performance(
    client: &GhostfolioClient,
    range: DateRange,
) -> Result<PortfolioPerformance, GfError> {
    let req = ApiRequest::get("portfolio/performance")
        .version(ApiVersion::V2)
        .query("range", range);
    net::execute(client, &req).await
}

pub(super) async fn fetch_holdings(
    client: &GhostfolioClient,
    range: DateRange,
) -> Result<Holdings, GfError> {
    let req = ApiRequest::get("portfolio/holdings").query("range", range);
    net::execute(client, &req).await
}

pub(super) async fn fetch_position(
    client: &GhostfolioClient,
    data_source: &DataSource,
    symbol: &str,
) -> Result<PositionDetail, GfError> {
    require_id("data source", data_source.as_str())?;
    require_id("symbol", symbol)?;

    let req = ApiRequest::get("portfolio/position")
        .segment(data_source.as_str())
        .segment(symbol);
    net::execute(client, &req).await
}

pub(super) async fn fetch_details(client: &GhostfolioClient) -> Result<PortfolioDetails, GfError> {
    net::execute(client, &ApiRequest::get("portfolio/details")).await
}

pub(super) async fn fetch_investments(
    client: &GhostfolioClient,
    group_by: GroupBy,
    range: DateRange,
) -> Result<Investments, GfError> {
    let req = ApiRequest::get("portfolio/investments")
        .query("range", range)
        .query("groupBy", group_by);
    net::execute(client, &req).await
}

pub(super) async fn fetch_dividends(
    client: &GhostfolioClient,
    group_by: GroupBy,
    range: DateRange,
) -> Result<Dividends, GfError> {
    let req = ApiRequest::get("portfolio/dividends")
        .query("range", range)
        .query("groupBy", group_by);
    net::execute(client, &req).await
}

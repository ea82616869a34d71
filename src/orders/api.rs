use super::model::{Activities, Activity, CreateOrder, ImportRequest, ImportResponse, UpdateOrder};
use crate::core::{ApiRequest, GfError, GhostfolioClient, net, request::{WithId, require_id}};

pub(super) async fn fetch_orders(
    client: &GhostfolioClient,
    account_id: Option<&str>,
) -> Result<Activities, GfError> {
    let mut req = ApiRequest::get("order");
    if let Some(id) = account_id.filter(|id| !id.trim().is_empty()) {
        req = req.query("accounts", id);
    }
    net::execute(client, &req).await
}

pub(super) async fn import(
    client: &GhostfolioClient,
    data: &ImportRequest,
) -> Result<ImportResponse, GfError> {
    let req = ApiRequest::post("import").json(data)?;
    let resp: Option<ImportResponse> = net::execute(client, &req).await?;
    Ok(resp.unwrap_or_default())
}

pub(super) async fn create_order(
    client: &GhostfolioClient,
    order: &CreateOrder,
) -> Result<Activity, GfError> {
    require_id("symbol", &order.symbol)?;
    let req = ApiRequest::post("order").json(order)?;
    net::execute(client, &req).await
}

pub(super) async fn update_order(
    client: &GhostfolioClient,
    id: &str,
    order: &UpdateOrder,
) -> Result<Activity, GfError> {
    require_id("order id", id)?;
    require_id("symbol", &order.symbol)?;
    let req = ApiRequest::put("order")
        .segment(id)
        .json(&WithId { id, inner: order })?;
    net::execute(client, &req).await
}

use super::model::{Account, Accounts, CreateAccount, UpdateAccount};
use crate::core::{ApiRequest, GfError, GhostfolioClient, net, request::{WithId, require_id}};

fn validate(account: &CreateAccount) -> Result<(), GfError> {
    require_id("account name", &account.name)?;
    require_id("account currency", &account.currency)
}

pub(super) async fn fetch_accounts(client: &GhostfolioClient) -> Result<Accounts, GfError> {
    net::execute(client, &ApiRequest::get("account")).await
}

pub(super) async fn create_account(
    client: &GhostfolioClient,
    account: &CreateAccount,
) -> Result<Account, GfError> {
    validate(account)?;
    let req = ApiRequest::post("account").json(account)?;
    net::execute(client, &req).await
}

pub(super) async fn update_account(
    client: &GhostfolioClient,
    id: &str,
    account: &UpdateAccount,
) -> Result<Account, GfError> {
    require_id("account id", id)?;
    validate(account)?;
    let req = ApiRequest::put("account")
        .segment(id)
        .json(&WithId { id, inner: account })?;
    net::execute(client, &req).await
}

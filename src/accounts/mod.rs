//! Account management.

mod api;
mod model;

pub use model::{Account, Accounts, CreateAccount, UpdateAccount};

use crate::core::{GfError, GhostfolioClient};

impl GhostfolioClient {
    /// Lists all accounts with balances and values in the base currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn accounts(&self) -> Result<Accounts, GfError> {
        api::fetch_accounts(self).await
    }

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::InvalidParams`] for an empty name or currency, or any transport error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, account), err))]
    pub async fn create_account(&self, account: &CreateAccount) -> Result<Account, GfError> {
        api::create_account(self, account).await
    }

    /// Replaces the account `id` with `account`.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::InvalidParams`] for an empty id, name or currency, or any transport error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, account), err))]
    pub async fn update_account(&self, id: &str, account: &UpdateAccount) -> Result<Account, GfError> {
        api::update_account(self, id, account).await
    }
}

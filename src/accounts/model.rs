use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `GET /api/v1/account`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accounts {
    #[serde(default)]
    pub accounts: Vec<Account>,
    pub total_balance_in_base_currency: Option<f64>,
    pub total_value_in_base_currency: Option<f64>,
    pub transaction_count: Option<u64>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A cash or brokerage account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: Option<String>,
    pub currency: Option<String>,
    pub balance: Option<f64>,
    pub balance_in_base_currency: Option<f64>,
    pub comment: Option<String>,
    pub is_excluded: Option<bool>,
    pub platform_id: Option<String>,
    pub transaction_count: Option<u64>,
    pub value: Option<f64>,
    pub value_in_base_currency: Option<f64>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Body of `POST /api/v1/account` and `PUT /api/v1/account/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    pub name: String,
    pub currency: String,
    pub balance: f64,
    #[serde(default)]
    pub is_excluded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreateAccount {
    /// An included account without platform or comment.
    pub fn new(name: impl Into<String>, currency: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            currency: currency.into(),
            balance,
            is_excluded: false,
            platform_id: None,
            comment: None,
        }
    }
}

/// Updating an account sends the full set of fields again.
pub type UpdateAccount = CreateAccount;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::accounts::Account;
use crate::core::{ActivityType, DataSource, SymbolProfile};

/// Response of `GET /api/v1/order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activities {
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Total number of activities matching the filter.
    pub count: Option<u64>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A single buy, sell, dividend, fee, interest, item or liability entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub account_id: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    pub fee: Option<f64>,
    pub currency: Option<String>,
    pub value: Option<f64>,
    pub value_in_base_currency: Option<f64>,
    pub fee_in_base_currency: Option<f64>,
    pub comment: Option<String>,
    pub is_draft: Option<bool>,
    pub account: Option<Account>,
    #[serde(rename = "SymbolProfile")]
    pub symbol_profile: Option<SymbolProfile>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Body of `POST /api/v1/order` and `PUT /api/v1/order/{id}`; also one entry of an import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub currency: String,
    pub data_source: DataSource,
    pub date: DateTime<Utc>,
    pub fee: f64,
    pub quantity: f64,
    pub symbol: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub unit_price: f64,
}

/// Updating an activity sends the full set of fields again.
pub type UpdateOrder = CreateOrder;

/// One entry of an import; same shape as a single created activity.
pub type ImportActivity = CreateOrder;

/// Body of `POST /api/v1/import`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRequest {
    pub activities: Vec<ImportActivity>,
}

impl ImportRequest {
    pub fn new(activities: Vec<ImportActivity>) -> Self {
        Self { activities }
    }
}

impl From<Vec<ImportActivity>> for ImportRequest {
    fn from(activities: Vec<ImportActivity>) -> Self {
        Self::new(activities)
    }
}

/// Response of `POST /api/v1/import`: the activities as the server stored them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResponse {
    #[serde(default)]
    pub activities: Vec<serde_json::Value>,
}

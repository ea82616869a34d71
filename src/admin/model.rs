use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{DataSource, SymbolProfile};

/// Response of `GET /api/v1/admin/market-data`: every asset with stored market data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMarketData {
    pub count: Option<u64>,
    #[serde(default)]
    pub market_data: Vec<AdminMarketDataItem>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMarketDataItem {
    pub symbol: String,
    pub data_source: DataSource,
    pub name: Option<String>,
    pub currency: Option<String>,
    pub asset_class: Option<String>,
    pub asset_sub_class: Option<String>,
    pub activities_count: Option<u64>,
    pub countries_count: Option<u64>,
    pub sectors_count: Option<u64>,
    pub market_data_item_count: Option<u64>,
    /// Date of the most recent market data point.
    pub date: Option<DateTime<Utc>>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Response of `GET /api/v1/admin/market-data/{dataSource}/{symbol}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataDetails {
    pub asset_profile: Option<SymbolProfile>,
    #[serde(default)]
    pub market_data: Vec<MarketDataPoint>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One stored closing price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataPoint {
    pub date: DateTime<Utc>,
    pub market_price: f64,
    pub data_source: Option<DataSource>,
    pub symbol: Option<String>,
    pub state: Option<String>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

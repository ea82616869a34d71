use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{DataSource, SymbolProfile};
use crate::orders::Activity;

/* ---------------- performance (v2) ---------------- */

/// Response of `GET /api/v2/portfolio/performance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPerformance {
    /// One point per day in the requested range.
    #[serde(default)]
    pub chart: Vec<PerformancePoint>,
    pub first_order_date: Option<DateTime<Utc>>,
    /// Set when some market data could not be resolved and figures may be incomplete.
    #[serde(default)]
    pub has_errors: bool,
    pub performance: Performance,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Aggregate performance figures in the user's base currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub annualized_performance_percent: Option<f64>,
    pub current_net_worth: Option<f64>,
    pub current_value_in_base_currency: Option<f64>,
    pub net_performance: Option<f64>,
    pub net_performance_percentage: Option<f64>,
    pub net_performance_percentage_with_currency_effect: Option<f64>,
    pub net_performance_with_currency_effect: Option<f64>,
    pub total_investment: Option<f64>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    pub date: NaiveDate,
    pub investment_value_with_currency_effect: Option<f64>,
    pub net_performance: Option<f64>,
    pub net_performance_in_percentage: Option<f64>,
    pub net_worth: Option<f64>,
    pub total_investment: Option<f64>,
    pub value: Option<f64>,
    pub value_with_currency_effect: Option<f64>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/* ---------------- holdings ---------------- */

/// Response of `GET /api/v1/portfolio/holdings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holdings {
    #[serde(default)]
    pub holdings: Vec<Holding>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One position in the portfolio, valued at the latest market price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: Option<String>,
    pub currency: Option<String>,
    pub data_source: Option<DataSource>,
    pub asset_class: Option<String>,
    pub asset_sub_class: Option<String>,
    pub allocation_in_percentage: Option<f64>,
    pub date_of_first_activity: Option<DateTime<Utc>>,
    pub dividend: Option<f64>,
    pub investment: Option<f64>,
    pub market_price: Option<f64>,
    pub net_performance: Option<f64>,
    pub net_performance_percent: Option<f64>,
    pub net_performance_percent_with_currency_effect: Option<f64>,
    pub quantity: Option<f64>,
    pub value_in_base_currency: Option<f64>,
    #[serde(default)]
    pub countries: Vec<serde_json::Value>,
    #[serde(default)]
    pub sectors: Vec<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<serde_json::Value>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/* ---------------- position ---------------- */

/// Response of `GET /api/v1/portfolio/position/{dataSource}/{symbol}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDetail {
    pub average_price: Option<f64>,
    pub dividend_in_base_currency: Option<f64>,
    pub fee_in_base_currency: Option<f64>,
    /// Calendar date of the first buy, as sent by the server (`yyyy-MM-dd`).
    pub first_buy_date: Option<String>,
    pub gross_performance: Option<f64>,
    pub gross_performance_percent: Option<f64>,
    #[serde(default)]
    pub historical_data: Vec<PositionHistoryPoint>,
    pub investment: Option<f64>,
    pub market_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_price: Option<f64>,
    pub net_performance: Option<f64>,
    pub net_performance_percent: Option<f64>,
    #[serde(default)]
    pub orders: Vec<Activity>,
    pub quantity: Option<f64>,
    #[serde(rename = "SymbolProfile")]
    pub symbol_profile: Option<SymbolProfile>,
    #[serde(default)]
    pub tags: Vec<serde_json::Value>,
    pub transaction_count: Option<u64>,
    pub value: Option<f64>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionHistoryPoint {
    pub date: String,
    pub average_price: Option<f64>,
    pub market_price: Option<f64>,
    pub quantity: Option<f64>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/* ---------------- details ---------------- */

/// Response of `GET /api/v1/portfolio/details`: accounts, holdings, platforms and a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDetails {
    /// Keyed by account id.
    #[serde(default)]
    pub accounts: BTreeMap<String, Allocation>,
    /// Keyed by symbol.
    #[serde(default)]
    pub holdings: BTreeMap<String, Holding>,
    /// Keyed by platform id.
    #[serde(default)]
    pub platforms: BTreeMap<String, Allocation>,
    pub summary: Option<PortfolioSummary>,
    #[serde(default)]
    pub has_error: bool,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Value held in one account or platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub name: Option<String>,
    pub balance: Option<f64>,
    pub currency: Option<String>,
    pub value_in_base_currency: Option<f64>,
    pub value_in_percentage: Option<f64>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub activity_count: Option<u64>,
    pub annualized_performance_percent: Option<f64>,
    pub cash: Option<f64>,
    pub committed_funds: Option<f64>,
    pub current_value_in_base_currency: Option<f64>,
    pub dividend_in_base_currency: Option<f64>,
    pub fees: Option<f64>,
    pub first_order_date: Option<DateTime<Utc>>,
    pub interest: Option<f64>,
    pub items: Option<f64>,
    pub liabilities: Option<f64>,
    pub net_performance: Option<f64>,
    pub net_performance_percentage: Option<f64>,
    pub net_worth: Option<f64>,
    pub total_buy: Option<f64>,
    pub total_investment: Option<f64>,
    pub total_sell: Option<f64>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/* ---------------- investments / dividends ---------------- */

/// Response of `GET /api/v1/portfolio/investments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investments {
    #[serde(default)]
    pub investments: Vec<InvestmentItem>,
    pub streaks: Option<Streaks>,
}

/// Response of `GET /api/v1/portfolio/dividends`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dividends {
    #[serde(default)]
    pub dividends: Vec<InvestmentItem>,
}

/// The amount invested (or received) in one period bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentItem {
    /// First day of the bucket.
    pub date: NaiveDate,
    pub investment: f64,
}

/// Consecutive periods with a positive investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streaks {
    pub current_streak: u32,
    pub longest_streak: u32,
}

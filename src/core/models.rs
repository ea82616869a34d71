use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::core::GfError;

/* ----- PORTFOLIO PARAMS (shared by portfolio/ and the client surface) ----- */

/// The time window a portfolio endpoint aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateRange {
    /// Today.
    D1,
    /// Week to date.
    Wtd,
    /// Month to date.
    Mtd,
    /// Year to date.
    Ytd,
    /// The last year.
    Y1,
    /// The last five years.
    Y5,
    /// Everything since the first activity.
    #[default]
    Max,
    /// A single calendar year, e.g. `2023`.
    Year(u16),
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::D1 => f.write_str("1d"),
            Self::Wtd => f.write_str("wtd"),
            Self::Mtd => f.write_str("mtd"),
            Self::Ytd => f.write_str("ytd"),
            Self::Y1 => f.write_str("1y"),
            Self::Y5 => f.write_str("5y"),
            Self::Max => f.write_str("max"),
            Self::Year(y) => write!(f, "{y}"),
        }
    }
}

impl FromStr for DateRange {
    type Err = GfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "1d" => Self::D1,
            "wtd" => Self::Wtd,
            "mtd" => Self::Mtd,
            "ytd" => Self::Ytd,
            "1y" => Self::Y1,
            "5y" => Self::Y5,
            "max" => Self::Max,
            other => other
                .parse::<u16>()
                .ok()
                .filter(|y| (1000..=9999).contains(y))
                .map(Self::Year)
                .ok_or_else(|| GfError::InvalidParams(format!("unknown date range '{s}'")))?,
        })
    }
}

/// How investments and dividends are bucketed over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupBy {
    /// One bucket per calendar month.
    #[default]
    Month,
    /// One bucket per calendar year.
    Year,
}

impl GroupBy {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupBy {
    type Err = GfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(GfError::InvalidParams(format!("unknown grouping '{s}'"))),
        }
    }
}

/// A market data provider known to Ghostfolio.
///
/// Providers added upstream after this crate was written can be addressed with
/// [`DataSource::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataSource {
    AlphaVantage,
    CoinGecko,
    EodHistoricalData,
    FinancialModelingPrep,
    GoogleSheets,
    Manual,
    RapidApi,
    Yahoo,
    Other(String),
}

impl DataSource {
    /// The identifier Ghostfolio uses on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AlphaVantage => "ALPHA_VANTAGE",
            Self::CoinGecko => "COINGECKO",
            Self::EodHistoricalData => "EOD_HISTORICAL_DATA",
            Self::FinancialModelingPrep => "FINANCIAL_MODELING_PREP",
            Self::GoogleSheets => "GOOGLE_SHEETS",
            Self::Manual => "MANUAL",
            Self::RapidApi => "RAPID_API",
            Self::Yahoo => "YAHOO",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DataSource {
    fn from(s: &str) -> Self {
        match s {
            "ALPHA_VANTAGE" => Self::AlphaVantage,
            "COINGECKO" => Self::CoinGecko,
            "EOD_HISTORICAL_DATA" => Self::EodHistoricalData,
            "FINANCIAL_MODELING_PREP" => Self::FinancialModelingPrep,
            "GOOGLE_SHEETS" => Self::GoogleSheets,
            "MANUAL" => Self::Manual,
            "RAPID_API" => Self::RapidApi,
            "YAHOO" => Self::Yahoo,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for DataSource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DataSource {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/* ----- ACTIVITIES (shared by orders/ and portfolio/) ----- */

/// The kind of a portfolio activity ("order" in the Ghostfolio API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Buy,
    Sell,
    Dividend,
    Fee,
    Interest,
    Item,
    Liability,
    /// A type this crate does not know about yet.
    #[serde(other)]
    Unknown,
}

/// Master data Ghostfolio keeps for an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub symbol: String,
    pub data_source: DataSource,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub asset_class: Option<String>,
    #[serde(default)]
    pub asset_sub_class: Option<String>,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub countries: Vec<serde_json::Value>,
    #[serde(default)]
    pub sectors: Vec<serde_json::Value>,
    /// Fields sent by the server that are not modelled above.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

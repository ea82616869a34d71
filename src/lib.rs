//! ghostfolio-rs: ergonomic client for the [Ghostfolio](https://ghostfol.io) REST API.
//!
//! One async method per remote operation, all hanging off [`GhostfolioClient`]:
//!
//! - **Portfolio**: [`performance`](GhostfolioClient::performance),
//!   [`holdings`](GhostfolioClient::holdings), [`position`](GhostfolioClient::position),
//!   [`details`](GhostfolioClient::details), [`investments`](GhostfolioClient::investments),
//!   [`dividends`](GhostfolioClient::dividends).
//! - **Activities**: [`orders`](GhostfolioClient::orders),
//!   [`import_transactions`](GhostfolioClient::import_transactions),
//!   [`create_order`](GhostfolioClient::create_order), [`update_order`](GhostfolioClient::update_order).
//! - **Accounts**: [`accounts`](GhostfolioClient::accounts),
//!   [`create_account`](GhostfolioClient::create_account),
//!   [`update_account`](GhostfolioClient::update_account).
//! - **Admin market data**: [`market_data_admin`](GhostfolioClient::market_data_admin),
//!   [`market_data`](GhostfolioClient::market_data).
//! - **Anything else**: [`execute`](GhostfolioClient::execute) with an [`ApiRequest`].
//!
//! The access token is exchanged for a session token on first use and reused for
//! 30 days. Nothing is cached beyond that and no request is retried: network,
//! status and decoding failures all surface as distinct [`GfError`] variants.
//!
//! ```no_run
//! use ghostfolio_rs::{DateRange, GhostfolioClient, GroupBy};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), ghostfolio_rs::GfError> {
//! let client = GhostfolioClient::builder("my-security-token")
//!     .host("https://ghostfolio.example.org/".parse()?)
//!     .build()?;
//!
//! let perf = client.performance(DateRange::Ytd).await?;
//! println!("net performance: {:?}", perf.performance.net_performance);
//!
//! let dividends = client.dividends(GroupBy::Year, DateRange::Max).await?;
//! for d in dividends.dividends {
//!     println!("{}: {}", d.date, d.investment);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Enable the `tracing` feature to get spans around every endpoint call and
//! debug events from the transport.

pub mod accounts;
pub mod admin;
pub mod core;
pub mod orders;
pub mod portfolio;

pub use accounts::{Account, Accounts, CreateAccount, UpdateAccount};
pub use admin::{AdminMarketData, AdminMarketDataItem, MarketDataDetails, MarketDataPoint};
pub use crate::core::{
    ActivityType, ApiRequest, ApiVersion, DataSource, DateRange, GfError, GhostfolioClient,
    GhostfolioClientBuilder, GroupBy, SymbolProfile,
};
pub use orders::{
    Activities, Activity, CreateOrder, ImportActivity, ImportRequest, ImportResponse, UpdateOrder,
};
pub use portfolio::{
    Allocation, Dividends, Holding, Holdings, InvestmentItem, Investments, Performance,
    PerformancePoint, PortfolioDetails, PortfolioPerformance, PortfolioSummary, PositionDetail,
    PositionHistoryPoint, Streaks,
};

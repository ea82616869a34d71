use crate::common;
use chrono::{NaiveDate, TimeZone, Utc};
use ghostfolio_rs::{DataSource, DateRange, GroupBy};
use httpmock::Method::GET;

#[tokio::test]
async fn performance_uses_v2_and_parses_chart() {
    let server = common::setup_server();
    let perf_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/portfolio/performance")
            .query_param("range", "ytd")
            .header("authorization", common::bearer(common::JWT));
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("performance"));
    });

    let client = common::preauthed_client(&server);
    let perf = client.performance(DateRange::Ytd).await.unwrap();
    perf_mock.assert();

    assert_eq!(perf.chart.len(), 2);
    let last = &perf.chart[1];
    assert_eq!(last.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(last.net_performance, Some(125.5));
    assert_eq!(last.net_worth, Some(10125.5));
    assert_eq!(perf.chart[0].net_performance, Some(0.0));

    assert_eq!(
        perf.first_order_date,
        Some(Utc.with_ymd_and_hms(2021, 3, 15, 0, 0, 0).unwrap())
    );
    assert!(!perf.has_errors);
    assert_eq!(perf.performance.current_net_worth, Some(10125.5));
    assert_eq!(perf.performance.net_performance_with_currency_effect, Some(131.02));
    assert_eq!(perf.performance.total_investment, Some(10000.0));
}

#[tokio::test]
async fn holdings_parse_with_data_sources() {
    let server = common::setup_server();
    let holdings_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/portfolio/holdings")
            .query_param("range", "max");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("holdings"));
    });

    let client = common::preauthed_client(&server);
    let holdings = client.holdings(DateRange::default()).await.unwrap();
    holdings_mock.assert();

    assert_eq!(holdings.holdings.len(), 2);
    let aapl = &holdings.holdings[0];
    assert_eq!(aapl.symbol, "AAPL");
    assert_eq!(aapl.name.as_deref(), Some("Apple Inc."));
    assert_eq!(aapl.data_source, Some(DataSource::Yahoo));
    assert_eq!(aapl.quantity, Some(32.0));
    assert_eq!(aapl.market_price, Some(189.84));
    assert_eq!(aapl.countries.len(), 1);
    assert!(aapl.tags.is_empty());

    let btc = &holdings.holdings[1];
    assert_eq!(btc.data_source, Some(DataSource::CoinGecko));
    assert_eq!(btc.asset_sub_class.as_deref(), Some("CRYPTOCURRENCY"));
    assert_eq!(btc.quantity, Some(0.06));
    assert!(btc.tags.is_empty(), "missing tags default to empty");
}

#[tokio::test]
async fn details_are_keyed_maps_with_summary() {
    let server = common::setup_server();
    let details_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/portfolio/details");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("details"));
    });

    let client = common::preauthed_client(&server);
    let details = client.details().await.unwrap();
    details_mock.assert();

    assert_eq!(details.accounts.len(), 2);
    let brokerage = &details.accounts["acc-1"];
    assert_eq!(brokerage.name.as_deref(), Some("Brokerage"));
    assert_eq!(brokerage.value_in_percentage, Some(0.663));
    assert_eq!(details.accounts["acc-2"].balance, Some(0.0));

    assert_eq!(
        details.holdings.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["AAPL", "bitcoin"]
    );
    assert_eq!(
        details.platforms["plat-1"].name.as_deref(),
        Some("Interactive Brokers")
    );

    let summary = details.summary.unwrap();
    assert_eq!(summary.activity_count, Some(5));
    assert_eq!(summary.cash, Some(1500.0));
    assert_eq!(summary.net_worth, Some(11421.5));
    assert_eq!(summary.fees, Some(9.98));
    assert!(!details.has_error);
}

#[tokio::test]
async fn investments_send_range_and_group_by() {
    let server = common::setup_server();
    let inv_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/portfolio/investments")
            .query_param("range", "1y")
            .query_param("groupBy", "month");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("investments"));
    });

    let client = common::preauthed_client(&server);
    let inv = client
        .investments(GroupBy::Month, DateRange::Y1)
        .await
        .unwrap();
    inv_mock.assert();

    let amounts: Vec<f64> = inv.investments.iter().map(|i| i.investment).collect();
    assert_eq!(amounts, vec![500.0, 0.0, 750.5]);
    assert_eq!(
        inv.investments[2].date,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
    let streaks = inv.streaks.unwrap();
    assert_eq!(streaks.current_streak, 1);
    assert_eq!(streaks.longest_streak, 4);
}

#[tokio::test]
async fn dividends_by_year_for_a_calendar_year() {
    let server = common::setup_server();
    let div_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/portfolio/dividends")
            .query_param("range", "2023")
            .query_param("groupBy", "year");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("dividends"));
    });

    let client = common::preauthed_client(&server);
    let div = client
        .dividends(GroupBy::Year, DateRange::Year(2023))
        .await
        .unwrap();
    div_mock.assert();

    assert_eq!(div.dividends.len(), 2);
    assert_eq!(
        div.dividends[0].date,
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
    );
    assert_eq!(div.dividends[1].investment, 29.7);
}

#[tokio::test]
async fn empty_holdings_object_is_not_an_error() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/portfolio/holdings");
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });

    let client = common::preauthed_client(&server);
    let holdings = client.holdings(DateRange::D1).await.unwrap();
    assert!(holdings.holdings.is_empty());
}

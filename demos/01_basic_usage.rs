use ghostfolio_rs::{DataSource, DateRange, GhostfolioClient, GroupBy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Build a client from GHOSTFOLIO_TOKEN (and GHOSTFOLIO_HOST for self-hosted instances).
    let client = GhostfolioClient::from_env()?;

    // 2. Year-to-date performance.
    let perf = client.performance(DateRange::Ytd).await?;
    println!("--- Performance (YTD) ---");
    println!(
        "Net worth: {:.2}",
        perf.performance.current_net_worth.unwrap_or_default()
    );
    println!(
        "Net performance: {:.2} ({:.2}%)",
        perf.performance.net_performance.unwrap_or_default(),
        perf.performance.net_performance_percentage.unwrap_or_default() * 100.0
    );
    println!();

    // 3. Current holdings, largest first.
    let mut holdings = client.holdings(DateRange::Max).await?.holdings;
    holdings.sort_by(|a, b| {
        b.value_in_base_currency
            .unwrap_or_default()
            .total_cmp(&a.value_in_base_currency.unwrap_or_default())
    });
    println!("--- Top Holdings ---");
    for h in holdings.iter().take(5) {
        println!(
            "  {:<10} {:>12.2}  {:>6.2}%",
            h.symbol,
            h.value_in_base_currency.unwrap_or_default(),
            h.allocation_in_percentage.unwrap_or_default() * 100.0
        );
    }
    println!();

    // 4. Drill into one position.
    if let Some(top) = holdings.first() {
        let source = top.data_source.clone().unwrap_or(DataSource::Yahoo);
        let pos = client.position(&source, &top.symbol).await?;
        println!("--- Position {} ({}) ---", top.symbol, source);
        println!("Average price: {:.2}", pos.average_price.unwrap_or_default());
        println!("Activities: {}", pos.orders.len());
        println!();
    }

    // 5. Dividends by year.
    let dividends = client.dividends(GroupBy::Year, DateRange::Max).await?;
    println!("--- Dividends ---");
    for d in &dividends.dividends {
        println!("  {}: {:.2}", d.date.format("%Y"), d.investment);
    }

    Ok(())
}

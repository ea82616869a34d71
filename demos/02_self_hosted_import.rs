use chrono::{TimeZone, Utc};
use ghostfolio_rs::{
    ActivityType, CreateAccount, CreateOrder, DataSource, GfError, GhostfolioClient, ImportRequest,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::var("GHOSTFOLIO_TOKEN")?;
    let host = std::env::var("GHOSTFOLIO_HOST").unwrap_or_else(|_| "http://localhost:3333/".into());

    // 1. A self-hosted instance behind a self-signed certificate.
    let client = GhostfolioClient::builder(token)
        .host(host.parse()?)
        .accept_invalid_certs(true)
        .timeout(Duration::from_secs(20))
        .build()?;

    // 2. Create an account to import into.
    let account = client
        .create_account(&CreateAccount::new("Demo Brokerage", "USD", 1000.0))
        .await?;
    println!("Created account {} ({})", account.id, account.name.unwrap_or_default());

    // 3. Import two activities in one batch.
    let buy = |symbol: &str, day: u32, quantity: f64, unit_price: f64| CreateOrder {
        account_id: Some(account.id.clone()),
        comment: None,
        currency: "USD".into(),
        data_source: DataSource::Yahoo,
        date: Utc
            .with_ymd_and_hms(2024, 1, day, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
        fee: 1.0,
        quantity,
        symbol: symbol.into(),
        activity_type: ActivityType::Buy,
        unit_price,
    };
    let batch = ImportRequest::new(vec![buy("AAPL", 2, 10.0, 185.64), buy("MSFT", 3, 5.0, 370.6)]);

    match client.import_transactions(&batch).await {
        Ok(resp) => println!("Imported {} activities", resp.activities.len()),
        Err(GfError::Status { status, message, .. }) => {
            println!("Import rejected ({status}): {message}");
        }
        Err(e) => return Err(e.into()),
    }

    // 4. List what the account now holds.
    let activities = client.orders(Some(&account.id)).await?;
    for a in &activities.activities {
        println!(
            "  {} {:?} {} x {:.2}",
            a.date.format("%Y-%m-%d"),
            a.activity_type,
            a.symbol_profile.as_ref().map_or("?", |p| p.symbol.as_str()),
            a.unit_price.unwrap_or_default()
        );
    }

    Ok(())
}

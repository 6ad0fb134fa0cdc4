use std::sync::Arc;

use newsdesk::{Newsdesk, NewsdeskConfig, Page, SourceFilter, SystemClock};
use newsdesk_connectors::{Wiring, YahooFallback, http_client};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Read keys and TTLs from the environment.
    let cfg = NewsdeskConfig::from_env();
    let clock = Arc::new(SystemClock);
    let wiring = Wiring::new(&cfg, http_client(cfg.http_timeout)?, clock.clone());

    // 2. Register providers in fallback order.
    let mut builder = Newsdesk::builder()
        .translator(Arc::new(wiring.translator()?))
        .fallback(Arc::new(YahooFallback::new(clock)));
    for c in wiring.news_chain()? {
        builder = builder.with_connector(c);
    }
    let desk = builder.build()?;

    // 3. Fetch and translate the first page.
    let symbol = std::env::args().nth(1).unwrap_or_else(|| "NVDA".to_string());
    let items = desk.news(&symbol, Page::FIRST, &SourceFilter::All).await;

    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}

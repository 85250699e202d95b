//! Settling futures and spawned tasks into outcomes.

use std::time::Duration;

use outcome_rail::prelude_async::*;

async fn fetch_quote(symbol: &str) -> Result<f64, BoxError> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    match symbol {
        "ACME" => Ok(42.5),
        _ => Err(format!("unknown symbol {symbol}").into()),
    }
}

#[tokio::main]
async fn main() {
    for symbol in ["ACME", "NOPE"] {
        let outcome = fetch_quote(symbol).capture().await;
        match outcome.value() {
            Some(price) => println!("{symbol}: {price}"),
            None => {
                let reason = outcome.error().map(ToString::to_string).unwrap_or_default();
                println!("{symbol}: {reason}");
            },
        }
    }

    let task = tokio::spawn(async {
        let quote = fetch_quote("NOPE").capture().await;
        quote.unwrap()
    });

    let outcome = capture_task(task).await;
    if let Some(panic) = outcome.error() {
        let reason = panic
            .downcast_ref::<BoxError>()
            .map(ToString::to_string)
            .unwrap_or_else(|| panic.to_string());
        println!("task failed: {reason}");
    }
}

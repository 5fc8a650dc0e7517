//! Workorder service entry point: opens the store and reports its contents.

use workorder_service::services::OrderStore;
use workshop_core::config::Config;
use workshop_core::observability::init_tracing;

fn main() -> std::io::Result<()> {
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing("workorder-service", &config.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        storage_path = %config.storage_path.display(),
        "Starting workorder-service"
    );

    let store = OrderStore::open(&config.storage_path)
        .map_err(|e| std::io::Error::other(format!("Failed to open order store: {}", e)))?;

    println!("{} service order(s) on file", store.orders().len());
    for order in store.orders() {
        println!(
            "{}  {}  {}  R$ {}",
            order.order_number, order.date, order.customer_name, order.final_total
        );
    }

    Ok(())
}

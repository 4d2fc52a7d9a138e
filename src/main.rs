use log::info;
use std::env;

mod data;
mod loader;
mod transport;
mod types;

use data::{sample_articles, sample_cities, sample_packages};
use loader::{Loader, SeedReport};
use transport::HttpTransport;

const API_BASE: &str = "http://localhost:8000/api";

/**
 * Pushes the sample cities, articles and packages to the backend at `base_url`,
 * one request at a time
 */
async fn seed(base_url: &str) -> SeedReport {
    let mut loader = Loader::new(HttpTransport::new(), base_url);
    let report = loader
        .run(sample_cities(), sample_articles(), sample_packages())
        .await;
    info!(
        "Seeding against {} finished, {} cities available for linking",
        base_url,
        loader.cities().len()
    );
    report
}

#[tokio::main]
async fn main() {
    //  initialize the logger
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    println!("🕉️  Starting ShamBit data seeding...");
    let report = seed(API_BASE).await;

    println!("\n🎉 Sample data seeding completed!");
    print!("{}", report);
    println!("🌐 You can now test the frontend at http://localhost:3000");
    println!("🔧 Make sure your Django backend is running at http://localhost:8000");
}

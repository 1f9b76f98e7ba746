mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; flags and the real environment still apply.
    let _ = dotenvy::dotenv();
    let config = platform::config::AppConfig::parse();
    platform::run_app(config)
}

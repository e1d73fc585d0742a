use lending_library::{
    adapters::system::SystemClock, application::lending::LendingService, config::AppConfig,
    console::{Console, sample_data},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            std::process::exit(2);
        }
    };

    // Initialize tracing (ログは標準エラーへ。標準出力はメニュー表示に使う)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut service = LendingService::new(Arc::new(SystemClock::new()));

    if config.seed_sample_data {
        if let Err(err) = sample_data::seed(&mut service) {
            tracing::error!("Failed to load sample data: {}", err);
            std::process::exit(1);
        }
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(err) = Console::new(&mut service, stdin.lock(), stdout.lock()).run() {
        tracing::error!("Console I/O error: {}", err);
        std::process::exit(1);
    }
}

use std::env;

use dotenvy::dotenv;

use rotary_club::commands::Command;
use rotary_club::models::config::ClientConfig;

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let command = match Command::parse(env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(64);
        }
    };

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match ClientConfig::load(&app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let output = match rotary_club::run(&config, &command).await {
        Ok(output) => output,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Failed to serialize output: {err}");
            std::process::exit(1);
        }
    }
}

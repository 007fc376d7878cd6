use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_chatbot::app::App;
use weather_chatbot::models::Config;

#[derive(Debug, Parser)]
#[command(name = "weather-chatbot")]
#[command(about = "Weather-aware chatbot API backed by Gemini")]
struct CliArgs {
    /// Address to listen on; overrides BIND_ADDR.
    #[arg(long, value_name = "ADDR")]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_chatbot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting weather-chatbot");

    let args = CliArgs::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    match App::from_config(&config) {
        Ok(app) => match app.run().await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("Server failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn test_bind_flag_parses() {
        let args = CliArgs::try_parse_from(["weather-chatbot", "--bind", "127.0.0.1:9000"]).unwrap();
        assert_eq!(args.bind.unwrap().port(), 9000);
    }

    #[test]
    fn test_bind_flag_rejects_garbage() {
        assert!(CliArgs::try_parse_from(["weather-chatbot", "--bind", "nowhere"]).is_err());
    }
}

use clap::{Parser, Subcommand};

use directory_bot::application::errors::{BotError, ConfigError};
use directory_bot::build_dispatcher;
use directory_bot::domain::traits::Bot;
use directory_bot::infrastructure::adapters::{ConsoleAdapter, DiscordAdapter};
use directory_bot::infrastructure::config::{roblox_cookie_from_env, Config, Secrets, TOKEN_VAR};

#[derive(Parser)]
#[command(name = "directory-bot")]
#[command(about = "Organize Roblox profiles into directories and check who is online", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides TOKEN_BOT)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Discord bot
    Run,
    /// Read commands from stdin (dev mode)
    Console,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_bot(&cli.config, cli.token),
        Commands::Console => run_console(&cli.config),
        Commands::Version => {
            println!("directory-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str) -> Config {
    if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    }
}

fn run_bot(config_path: &str, token_override: Option<String>) -> Result<(), BotError> {
    let config = load_config(config_path);

    // Both secrets are required; the CLI flag only replaces the token
    let secrets = Secrets::from_lookup(|key| {
        if key == TOKEN_VAR {
            token_override.clone().or_else(|| std::env::var(key).ok())
        } else {
            std::env::var(key).ok()
        }
    })?;

    tracing::info!("Starting {}", config.bot.name);

    let dispatcher = build_dispatcher(&config, &secrets.roblox_cookie)?;
    let bot = DiscordAdapter::new(secrets.bot_token, dispatcher)
        .with_guild(config.adapters.discord.guild_id);

    runtime()?.block_on(bot.start())
}

fn run_console(config_path: &str) -> Result<(), BotError> {
    let config = load_config(config_path);
    let cookie = roblox_cookie_from_env()?;

    let dispatcher = build_dispatcher(&config, &cookie)?;
    let bot = ConsoleAdapter::new(dispatcher, config.bot.prefix.clone());

    runtime()?.block_on(async {
        let info = bot.bot_info();
        tracing::info!("Bot started: {} ({})", info.name, info.platform);
        bot.start().await
    })
}

fn init_config() -> Result<(), BotError> {
    let yaml = serde_yaml::to_string(&Config::default())
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}

fn runtime() -> Result<tokio::runtime::Runtime, BotError> {
    tokio::runtime::Runtime::new().map_err(|e| BotError::Adapter(format!("tokio runtime: {}", e)))
}

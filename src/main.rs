use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use vps_dashboard_bot::application::runner;
use vps_dashboard_bot::domain::traits::Bot;
use vps_dashboard_bot::infrastructure::adapters::console::ConsoleAdapter;
use vps_dashboard_bot::infrastructure::adapters::telegram::TelegramAdapter;
use vps_dashboard_bot::infrastructure::github::GithubClient;
use vps_dashboard_bot::infrastructure::logging;
use vps_dashboard_bot::infrastructure::process::ProcessController;
use vps_dashboard_bot::infrastructure::telemetry::HostTelemetry;
use vps_dashboard_bot::{AppContext, BotError, Config, MessageDispatcher};

#[derive(Parser)]
#[command(name = "vps-dashboard-bot")]
#[command(about = "Chat bot reporting server health and GitHub Actions status", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides BOT_TOKEN)
    #[arg(short, long)]
    token: Option<String>,

    /// Read commands from stdin instead of Telegram
    #[arg(long)]
    console: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("vps-dashboard-bot v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Some(Commands::InitConfig) => init_config(),
        Some(Commands::Run) | None => run_bot(cli),
    }
}

fn run_bot(cli: Cli) -> ExitCode {
    let (mut config, config_error) = match Config::resolve(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (Config::load_env(), Some(e)),
    };
    if let Some(token) = cli.token {
        config.adapters.telegram.token = Some(token);
    }

    // Flushes the log file on drop; a restart skips this on purpose
    let _log_guard = match logging::init(&config.log) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config: {}, using defaults", e);
    }
    if config.ci.token.is_none() {
        tracing::warn!("GH_TOKEN not set, GitHub requests will be unauthenticated");
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(serve(config, cli.console)) {
        Ok(()) => {
            tracing::info!("Bot stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Bot failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: Config, console: bool) -> Result<(), BotError> {
    let shutdown = CancellationToken::new();
    let controller = ProcessController::new(shutdown.clone());

    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, shutting down");
            ctrl_c.cancel();
        }
    });

    let ci = GithubClient::new(&config.ci, shutdown.child_token())?;
    tracing::info!(
        "Watching workflow {} of {}/{}",
        config.ci.workflow,
        config.ci.owner,
        config.ci.repo
    );

    let token = config.adapters.telegram.token.clone();
    let ctx = Arc::new(AppContext::new(&config, Arc::new(HostTelemetry::new()), Arc::new(ci)));

    tracing::info!("🤖 VPS Dashboard Bot Started");

    match token {
        Some(token) if !console => {
            let mut bot = TelegramAdapter::new(token);
            bot.start().await?;
            bot.fetch_bot_info().await?;

            if let Err(e) = bot.register_commands().await {
                tracing::warn!("Failed to register commands: {}", e);
            }

            let dispatcher = MessageDispatcher::new(ctx).with_bot_username(bot.bot_info().username);
            runner::run_telegram(&bot, &dispatcher, &controller).await
        }
        _ => {
            if !console {
                tracing::warn!("BOT_TOKEN not set, falling back to console mode");
            }
            let bot = ConsoleAdapter::new();
            bot.start().await?;
            let dispatcher = MessageDispatcher::new(ctx);
            runner::run_console(&bot, &dispatcher, &controller).await
        }
    }
}

fn init_config() -> ExitCode {
    match serde_yaml::to_string(&Config::default()) {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
            println!("Tokens are read from BOT_TOKEN and GH_TOKEN.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to render config: {}", e);
            ExitCode::FAILURE
        }
    }
}

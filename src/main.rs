use std::process;

use clap::Parser;
use tracing::{error, info};

use cycles_autopilot::bots::{bot_ids, create_bot};
use cycles_autopilot::connection::TcpConnection;
use cycles_autopilot::session::BotSession;

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:4000";

/// Autonomous rider for the cycles arena.
#[derive(Debug, Parser)]
#[command(name = "cycles-autopilot")]
struct Cli {
    /// Rider name announced to the arena server.
    name: String,

    /// Arena server address.
    #[arg(long, default_value = DEFAULT_SERVER_ADDR)]
    server: String,

    /// Movement policy id.
    #[arg(long, default_value = "open-space")]
    bot: String,
}

fn main() {
    // Argument errors: usage on stderr, exit status 1.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(if err.use_stderr() { 1 } else { 0 });
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let Some(bot) = create_bot(&cli.bot) else {
        error!(
            "unknown bot '{}', available: {}",
            cli.bot,
            bot_ids().join(", ")
        );
        process::exit(1);
    };

    let transport = match TcpConnection::connect(&cli.server, &cli.name) {
        Ok(connection) => connection,
        Err(err) => {
            error!("{}: connection failed: {err:#}", cli.name);
            process::exit(1);
        }
    };

    info!("{}: joined {} riding {}", cli.name, cli.server, bot.id());
    let mut session = BotSession::new(cli.name, bot, transport);
    session.run();
}

//! Hanabi simulator CLI: creates a game and lets the oracle play it out.

mod output;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hanabi::ai::{create_oracle, OracleConfig, OracleKind};
use hanabi::config::db::sqlite_file_url;
use hanabi::infra::db::bootstrap_db;
use hanabi::services::game_flow::GameFlowService;
use hanabi::services::games::GameService;
use hanabi::telemetry::init_cli_tracing;
use sea_orm::TransactionTrait;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OracleArg {
    Openai,
    Scripted,
}

#[derive(Parser)]
#[command(name = "hanabi-simulator")]
#[command(about = "Play a game of Hanabi with every seat driven by the decision oracle")]
struct Args {
    /// Number of players (2-5)
    #[arg(short, long, default_value = "3")]
    players: usize,

    /// Maximum number of turns to take in this run
    #[arg(short, long, default_value = "40")]
    turns: usize,

    /// Deck seed, for reproducible deals
    #[arg(long)]
    seed: Option<u64>,

    /// Which oracle answers the prompts
    #[arg(long, value_enum, default_value = "openai")]
    oracle: OracleArg,

    /// File with one scripted response per line (for --oracle scripted)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Database URL; defaults to a SQLite file in the working directory
    #[arg(long)]
    database_url: Option<String>,

    /// Log prompts and the table after every turn
    #[arg(short, long)]
    verbose: bool,
}

async fn run(args: Args) -> Result<(), String> {
    let mut config = OracleConfig::from_env().map_err(|e| e.to_string())?;
    config.kind = match args.oracle {
        OracleArg::Openai => OracleKind::OpenAi,
        OracleArg::Scripted => OracleKind::Scripted,
    };
    if let Some(path) = &args.script {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        config.script = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
    }
    let oracle = create_oracle(&config).map_err(|e| e.to_string())?;

    let url = args
        .database_url
        .unwrap_or_else(|| sqlite_file_url("hanabi-sim.db"));
    let db = bootstrap_db(&url).await.map_err(|e| e.to_string())?;

    let txn = db.begin().await.map_err(|e| e.to_string())?;
    let created = GameService
        .create_game(&txn, args.players, args.seed)
        .await
        .map_err(|e| e.to_string())?;
    txn.commit().await.map_err(|e| e.to_string())?;
    info!(game_id = created.game_id, players = ?created.player_ids, oracle = oracle.name(), "Simulation started");

    let flow = GameFlowService;
    let outcome = flow
        .play_until_done(&db, oracle.as_ref(), created.game_id, args.turns)
        .await;

    // Show the table whether or not the run stopped early.
    let state = GameService
        .load_state(&db, created.game_id)
        .await
        .map_err(|e| e.to_string())?;
    match outcome {
        Ok(run) => {
            output::print_final(&state, run.turns_taken);
            Ok(())
        }
        Err(e) => {
            output::print_final(&state, state.turns_applied);
            Err(format!("automated play halted: {e}"))
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_cli_tracing(if args.verbose {
        "info,hanabi=debug,sqlx=warn,sea_orm=warn"
    } else {
        "warn,hanabi=info"
    });

    if let Err(e) = run(args).await {
        error!("{e}");
        std::process::exit(1);
    }
}

use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::Rng;
use tourney_backend::domain::{chess960, RoundId};
use tourney_backend::repos::rounds;
use tourney_backend::store::RedisStore;
use tourney_backend::{AppError, ErrorCode};

#[derive(Parser)]
#[command(name = "round-cli")]
#[command(about = "Chess960 tournament round administration")]
struct Args {
    /// Redis connection URL
    #[arg(long, env = "REDIS_URL")]
    redis_url: String,

    /// Store call timeout in milliseconds
    #[arg(long, default_value_t = 2000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current round and its starting position
    Status,
    /// Record a starting position for a round
    Seed {
        /// Round to seed (defaults to the current round)
        #[arg(long)]
        round: Option<u64>,

        /// Chess960 position number, 0..959 (random when omitted)
        #[arg(long)]
        position: Option<u16>,

        /// Replace an existing starting position
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("tourney_backend=info,redis=warn")
        .init();

    let args = Args::parse();

    let timeout = Duration::from_millis(args.timeout_ms);
    let store = match RedisStore::connect(&args.redis_url, timeout).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Failed to connect to Redis: {e}");
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Command::Status => status(&store).await,
        Command::Seed {
            round,
            position,
            force,
        } => seed(&store, round, position, force).await,
    };

    if let Err(e) = result {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

async fn status(store: &RedisStore) -> Result<(), AppError> {
    let round = rounds::current_round_id(store).await?;
    println!("Current round: {round}");
    match rounds::find_start(store, round).await? {
        Some(board) => println!("Starting position: {board}"),
        None => println!("Starting position: not seeded (players see the round-not-found frame)"),
    }
    Ok(())
}

async fn seed(
    store: &RedisStore,
    round: Option<u64>,
    position: Option<u16>,
    force: bool,
) -> Result<(), AppError> {
    let round = match round {
        Some(id) => RoundId(id),
        None => rounds::current_round_id(store).await?,
    };

    if !force {
        if let Some(existing) = rounds::find_start(store, round).await? {
            return Err(AppError::bad_request(
                ErrorCode::BadRequest,
                format!("Round {round} already starts from {existing}; pass --force to replace it"),
            ));
        }
    }

    let index = position.unwrap_or_else(|| rand::rng().random_range(0..chess960::POSITION_COUNT));
    let board = chess960::starting_position(index).ok_or_else(|| {
        AppError::invalid(
            ErrorCode::ValidationError,
            format!("Position must be below {}, got {index}", chess960::POSITION_COUNT),
        )
    })?;

    rounds::seed_start(store, round, &board).await?;
    println!("✅ Round {round} seeded with position {index}: {board}");
    Ok(())
}

use std::env;
use std::time::Instant;

use dotenv::dotenv;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bomberbot::{BlastConfig, Board, Solver};

fn get_env_var_i32(key: &str) -> Option<i32> {
    env::var(key).ok().and_then(|val| val.parse::<i32>().ok())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bomberbot=debug,info"));

    // stdout carries the action stream; diagnostics go to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let config = match get_env_var_i32("BOMBERBOT_BLAST_RADIUS") {
        Some(blast_radius) => BlastConfig { blast_radius },
        None => BlastConfig::default(),
    };
    tracing::info!("Blast radius: {}", config.blast_radius);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut tick: u64 = 0;

    // One encoded board per line in, one action word per line out. The
    // session layer owning the server connection drives this loop.
    while let Some(line) = lines.next_line().await? {
        let encoded = line.trim();
        if encoded.is_empty() {
            continue;
        }

        let tick_start = Instant::now();
        let board = Board::decode(encoded);
        let action = Solver::decide(&board, &config);

        stdout.write_all(format!("{}\n", action).as_bytes()).await?;
        stdout.flush().await?;

        tracing::debug!(
            "Tick {}: bot at {:?}, {} bombs, action {}",
            tick,
            board.bomberman(),
            board.bombs().len(),
            action
        );

        let tick_duration = tick_start.elapsed();
        if tick_duration.as_millis() > 100 {
            tracing::warn!(
                "Tick {} took {:.2}ms (action: {})",
                tick,
                tick_duration.as_secs_f64() * 1000.0,
                action
            );
        }

        tick += 1;
    }

    tracing::info!("Input closed after {} ticks", tick);
    Ok(())
}

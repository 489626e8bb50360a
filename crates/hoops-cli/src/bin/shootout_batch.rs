use anyhow::{Context, Result};
use clap::Parser;
use hoops_cli::stats::{format_table, run_batch};
use hoops_core::{PlayerConfig, MIN_PLAYERS};
use hoops_engine::ShotOracle;
use rand::Rng;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run many seeded shooting contests between fixed players and report win rates"
)]
struct Args {
    /// Player configs as CAPABILITY/RACK, e.g. 75/3 (at least two)
    #[arg(required = true, num_args = MIN_PLAYERS..)]
    players: Vec<PlayerConfig>,

    /// Number of matches to play
    #[arg(short = 'n', long, default_value_t = 1000)]
    count: usize,

    /// Random seed for reproducible runs (random if omitted, always printed)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("seed {seed}, {} matches, {} players", args.count, args.players.len());

    let mut oracle = ShotOracle::seeded(seed);
    let stats = run_batch(&args.players, args.count, seed, &mut oracle)
        .context("batch run failed")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("serialize summary")?
        );
    } else {
        print!("{}", format_table(&stats));
    }
    Ok(())
}

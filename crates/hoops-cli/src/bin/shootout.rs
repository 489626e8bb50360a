use clap::Parser;
use hoops_engine::{run_session, Console, SessionError, ShotOracle};
use rand::Rng;
use std::io;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Basketball shooting contest for two or more players")]
struct Args {
    /// Random seed for a reproducible session (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("seed {seed}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut oracle = ShotOracle::seeded(seed);

    match run_session(&mut console, &mut oracle) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // The session already told the players why it stopped.
            if !matches!(e, SessionError::NotEnoughPlayers { .. }) {
                eprintln!("{e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

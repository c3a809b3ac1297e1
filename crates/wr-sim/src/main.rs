//! wr-sim CLI — batch balance verification for the WarpReels engine

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use wr_engine::GamePhase;
use wr_sim::{SimConfig, SimError, SimReport, run_simulation};

#[derive(Parser, Debug)]
#[command(name = "wr-sim", about = "Batch spin simulator for WarpReels")]
struct Cli {
    /// Number of spins to simulate (default 100000)
    #[arg(long)]
    spins: Option<u64>,

    /// Base RNG seed (default 0)
    #[arg(long)]
    seed: Option<u64>,

    /// Bet amount per spin
    #[arg(long)]
    bet: Option<f64>,

    /// Pin all spins to one phase (calm|surge|quantum); default samples
    /// phases by their share of the time cycle
    #[arg(long, value_parser = parse_phase)]
    phase: Option<GamePhase>,

    /// YAML run description; CLI flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Worker thread count
    #[arg(long)]
    threads: Option<usize>,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn parse_phase(s: &str) -> Result<GamePhase, String> {
    match s.to_ascii_lowercase().as_str() {
        "calm" => Ok(GamePhase::Calm),
        "surge" => Ok(GamePhase::Surge),
        "quantum" => Ok(GamePhase::Quantum),
        other => Err(format!("unknown phase '{other}' (calm|surge|quantum)")),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SimError> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::from_yaml_file(path)?,
        None => SimConfig::default(),
    };

    if let Some(spins) = cli.spins {
        config.spins = spins;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if cli.phase.is_some() {
        config.phase = cli.phase;
    }
    if let Some(bet) = cli.bet {
        config.game.bet_amount = bet;
    }
    config.game.validate()?;

    let threads = cli.threads.unwrap_or_else(num_cpus::get);
    let report = run_simulation(&config, threads)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report).expect("report serializes"));
    } else {
        print_table(&config, &report);
    }

    Ok(())
}

fn print_table(config: &SimConfig, report: &SimReport) {
    println!(
        "WarpReels balance report — {} spins, bet {:.2}, seed {}",
        config.spins, config.game.bet_amount, config.seed
    );
    println!(
        "{:<9} {:>10} {:>9} {:>8} {:>10} {:>9}",
        "phase", "spins", "hit rate", "rtp", "big wins", "max x"
    );

    for phase in GamePhase::ALL {
        let b = report.bucket(phase);
        println!(
            "{:<9} {:>10} {:>8.2}% {:>7.2}% {:>10} {:>9.1}",
            phase.name(),
            b.spins,
            b.hit_rate(),
            b.rtp(),
            b.big_wins,
            b.max_win_ratio
        );
    }

    let t = report.totals();
    println!(
        "{:<9} {:>10} {:>8.2}% {:>7.2}% {:>10} {:>9.1}",
        "total",
        t.spins,
        t.hit_rate(),
        t.rtp(),
        t.big_wins,
        t.max_win_ratio
    );
}

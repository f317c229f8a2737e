//! Apprentice simulator CLI: deal seeded games, play them with built-in
//! agents, and write one JSON line per game.

mod dealing;
mod metrics;
mod output;

use std::time::{Duration, Instant};

use apprentice_engine::agent::{create_agent, registry, Agent, HeuristicAgent, RandomAgent};
use apprentice_engine::game::Tee;
use apprentice_engine::telemetry::{self, LogFormat};
use apprentice_engine::{EngineConfig, EventLog, GameEvent, GameMaster, GameOutcome, TracingSink};
use clap::{Parser, ValueEnum};
use dealing::{deal_game, DealMode};
use metrics::{GameRecord, Summary};
use output::OutputWriter;
use tracing::{info, warn};

const SEAT_NAMES: [&str; 3] = ["Gandalf", "Oz", "Merlin"];

#[derive(Parser)]
#[command(name = "apprentice-simulator")]
#[command(about = "Play seeded Wizard's Apprentice games between built-in agents")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Agent kind per seat, comma separated; the list length sets the seat count
    #[arg(long, value_delimiter = ',', default_value = "heuristic,random,random")]
    agents: Vec<AgentKind>,

    /// Rounds per game (defaults to the most the deck allows)
    #[arg(long)]
    rounds: Option<u8>,

    /// Hand quality for the first seat
    #[arg(long, default_value = "random")]
    deal: DealMode,

    /// Base seed; game N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Omit per-round records from the output
    #[arg(long)]
    summary_only: bool,

    /// Include the event stream of each game in the output
    #[arg(long)]
    events: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log as JSON instead of compact text
    #[arg(long)]
    json_logs: bool,

    /// Show output summary and file path
    #[arg(long)]
    show_output: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AgentKind {
    Random,
    Heuristic,
}

impl AgentKind {
    fn name(self) -> &'static str {
        match self {
            AgentKind::Random => RandomAgent::NAME,
            AgentKind::Heuristic => HeuristicAgent::NAME,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    let format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    telemetry::init_tracing_with(filter, format);

    let config = EngineConfig::from_env()?;
    let agent_names: Vec<String> = args.agents.iter().map(|k| k.name().to_string()).collect();
    if args.show_output {
        info!(
            games = args.games,
            agents = ?agent_names,
            max_attempts = config.max_attempts,
            liberal = config.liberal,
            "starting simulator"
        );
        for factory in registry::registered_agents() {
            info!(name = factory.name, version = factory.version, "agent available");
        }
    }

    let mut output = OutputWriter::new(&args.output_dir)?;
    if args.show_output {
        info!(path = %output.path().display(), "writing results");
    }

    let start = Instant::now();
    let mut summary = Summary::default();
    for game_num in 1..=args.games {
        let game_seed = match args.seed {
            Some(s) => s.wrapping_add(u64::from(game_num)),
            None => rand::random(),
        };
        let game_start = Instant::now();

        match run_game(&args, &config, game_seed) {
            Ok((outcome, events)) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let mut record = GameRecord::new(
                    game_num,
                    game_seed,
                    args.deal,
                    agent_names.clone(),
                    outcome,
                    duration_ms,
                );
                if args.summary_only {
                    record = record.summary_only();
                }
                if args.events {
                    record = record.with_events(events);
                }
                summary.record(&record);
                if let Err(e) = output.write_game(&record) {
                    warn!(game = game_num, error = %e, "failed to write game record");
                }
                if args.verbose {
                    info!(game = game_num, totals = ?record.totals, "game finished");
                }
            }
            Err(e) => {
                summary.record_failure();
                warn!(game = game_num, error = %e, "game failed");
            }
        }
    }

    let path = output.finish()?;
    if args.show_output {
        info!(path = %path.display(), "results written");
        print_summary(&summary, &agent_names, start.elapsed(), args.games);
    }
    Ok(())
}

fn seat_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match SEAT_NAMES.get(i) {
            Some(name) => (*name).to_string(),
            None => format!("Seat {i}"),
        })
        .collect()
}

fn build_agent(kind: AgentKind, seed: u64) -> Result<Box<dyn Agent>, Box<dyn std::error::Error>> {
    let config = serde_json::json!({ "seed": seed });
    create_agent(kind.name(), Some(&config))
        .ok_or_else(|| format!("unknown agent kind: {}", kind.name()).into())
}

fn run_game(
    args: &Args,
    config: &EngineConfig,
    game_seed: u64,
) -> Result<(GameOutcome, Vec<GameEvent>), Box<dyn std::error::Error>> {
    let instance = deal_game(
        seat_names(args.agents.len()),
        args.rounds,
        args.deal,
        game_seed,
        &config.alphabet,
    )?;
    let agents = args
        .agents
        .iter()
        .zip(0u64..)
        .map(|(&kind, seat)| build_agent(kind, game_seed.wrapping_add(seat + 1)))
        .collect::<Result<Vec<_>, _>>()?;

    let master = GameMaster::new(instance, agents, config)?;
    let mut tracing_sink = TracingSink::new(config.alphabet.clone());
    let mut log = EventLog::new();
    let outcome = master.play(&mut Tee(&mut tracing_sink, &mut log))?;
    Ok((outcome, log.drain()))
}

fn print_summary(summary: &Summary, agents: &[String], elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games played: {}/{}", summary.games, total);
    if summary.aborted > 0 {
        println!("Aborted: {}", summary.aborted);
    }
    if summary.failed > 0 {
        println!("Errors: {}", summary.failed);
    }
    println!("Total time: {elapsed:?}");
    if summary.games == 0 {
        return;
    }
    println!("Average time per game: {:?}", elapsed / summary.games);

    println!("\n=== Results by Seat ===");
    for (idx, seat) in summary.seats.iter().enumerate() {
        let kind = agents.get(idx).map_or("?", String::as_str);
        println!(
            "Seat {idx} ({kind}): avg={:.1}, min={}, max={}, wins={} ({:.1}%), aborts={}",
            seat.average(),
            seat.min.unwrap_or(0),
            seat.max.unwrap_or(0),
            seat.wins,
            seat.win_rate(),
            seat.aborts
        );
    }
}

//! Balloon Rise headless runner
//!
//! Drives a session with the demo autopilot and logs what happens. Useful
//! for balance work: point `--tuning` at a JSON file and compare scores.

use std::path::PathBuf;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use balloon_rise::platform::Ticker;
use balloon_rise::sim::{Key, Steer, steer};
use balloon_rise::{Session, SessionListener, SessionPhase, Tuning};

#[derive(Parser, Debug)]
#[command(name = "balloon-rise")]
#[command(about = "Headless Balloon Rise runner with a demo autopilot", long_about = None)]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Tick budget across all runs
    #[arg(long, default_value_t = 100_000)]
    ticks: u64,

    /// Number of runs; restarts after each game over
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Balance file (JSON); missing fields keep their defaults
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Pace ticks at the real 60 Hz cadence instead of running flat out
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Print the default tuning as JSON and exit
    #[arg(long, default_value_t = false)]
    dump_tuning: bool,
}

/// Logs presentation callbacks
struct LogListener;

impl SessionListener for LogListener {
    fn on_score_changed(&mut self, score: u32) {
        if score % 100 == 0 {
            log::info!("Score {}", score);
        } else {
            log::trace!("Score {}", score);
        }
    }

    fn on_game_over(&mut self, final_score: u32) {
        log::info!("Game over! Final score {}", final_score);
    }

    fn on_state_changed(&mut self, phase: SessionPhase) {
        log::debug!("Phase {:?}", phase);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.dump_tuning {
        println!("{}", Tuning::default().to_json_pretty()?);
        return Ok(());
    }

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("Balloon Rise (headless) starting, seed {}", seed);

    let mut session =
        Session::new(tuning, args.width, args.height, seed).with_listener(Box::new(LogListener));
    let scores = play(&mut session, &args);

    for (i, (score, ticks)) in scores.iter().enumerate() {
        println!("run {}: score {} in {} ticks", i + 1, score, ticks);
    }
    if session.phase() == SessionPhase::Running {
        println!(
            "tick budget exhausted mid-run: score {} in {} ticks",
            session.score(),
            session.state().time_ticks
        );
    }
    Ok(())
}

/// Run until the tick budget or run count is exhausted.
/// Returns (final score, ticks survived) per finished run.
fn play(session: &mut Session, args: &Args) -> Vec<(u32, u64)> {
    let mut finished = Vec::new();
    let mut ticker = Ticker::default();
    let mut last_frame = Instant::now();
    let mut budget = args.ticks;

    session.start();
    while budget > 0 && (finished.len() as u32) < args.runs {
        let due = if args.realtime {
            thread::sleep(ticker.period());
            let now = Instant::now();
            let due = ticker.advance(now - last_frame);
            last_frame = now;
            due
        } else {
            1
        };

        for _ in 0..due {
            drive_autopilot(session);
            session.tick();
            budget = budget.saturating_sub(1);

            if session.phase() == SessionPhase::GameOver {
                finished.push((session.score(), session.state().time_ticks));
                if (finished.len() as u32) < args.runs {
                    // Same seed would replay the same run
                    session.set_seed(session.seed().wrapping_add(1));
                    session.restart();
                }
                break;
            }
            if budget == 0 {
                break;
            }
        }
    }
    finished
}

fn drive_autopilot(session: &mut Session) {
    let (left, right) = match steer(session.state()) {
        Steer::Left => (true, false),
        Steer::Right => (false, true),
        Steer::Hold => (false, false),
    };
    session.set_pressed(Key::Left, left);
    session.set_pressed(Key::Right, right);
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x0BA1_100E)
}

use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use desk_wm::error::WmError;
use desk_wm::geometry::{Geometry, Point};
use desk_wm::surface::{HeadlessContent, HeadlessSurface};
use desk_wm::window::{WindowId, WindowManager, WindowOptions};

#[derive(Parser, Debug)]
#[command(
    name = "wm-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Headless benchmark for window manager operations"
)]
struct BenchCli {
    /// How many windows to open per round.
    #[arg(short = 'w', long = "windows", value_name = "COUNT", default_value_t = 64)]
    windows: usize,

    /// Pointer moves applied per drag and per resize phase.
    #[arg(short = 'm', long = "moves", value_name = "COUNT", default_value_t = 20_000)]
    moves: usize,

    /// Number of rounds to run.
    #[arg(short = 'r', long = "rounds", value_name = "COUNT", default_value_t = 3)]
    rounds: usize,

    /// Every Nth window hosts an embedded region (0 disables them).
    #[arg(long = "embedded-every", value_name = "N", default_value_t = 4)]
    embedded_every: usize,
}

struct BenchConfig {
    windows: usize,
    moves: usize,
    rounds: usize,
    embedded_every: usize,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(1..=10_000).contains(&cli.windows) {
            return Err("windows must be between 1 and 10000".to_string());
        }
        if !(1..=10_000_000).contains(&cli.moves) {
            return Err("moves must be between 1 and 10000000".to_string());
        }
        if !(1..=100).contains(&cli.rounds) {
            return Err("rounds must be between 1 and 100".to_string());
        }
        Ok(Self {
            windows: cli.windows,
            moves: cli.moves,
            rounds: cli.rounds,
            embedded_every: cli.embedded_every,
        })
    }
}

#[derive(Clone, Copy)]
enum Phase {
    Create,
    Focus,
    Drag,
    Resize,
    Close,
}

impl Phase {
    const ALL: [Phase; 5] = [
        Phase::Create,
        Phase::Focus,
        Phase::Drag,
        Phase::Resize,
        Phase::Close,
    ];

    fn describe(self) -> &'static str {
        match self {
            Phase::Create => "create",
            Phase::Focus => "focus",
            Phase::Drag => "drag",
            Phase::Resize => "resize",
            Phase::Close => "close",
        }
    }
}

#[derive(Default, Clone, Copy)]
struct PhaseStats {
    ops: u64,
    elapsed: Duration,
}

impl PhaseStats {
    fn record(&mut self, ops: usize, elapsed: Duration) {
        self.ops = self.ops.saturating_add(ops as u64);
        self.elapsed += elapsed;
    }

    fn ops_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.ops as f64 / secs
        } else {
            0.0
        }
    }
}

struct BenchStats {
    phases: [PhaseStats; 5],
    suppressions: usize,
    final_z: u64,
}

impl BenchStats {
    fn new() -> Self {
        Self {
            phases: [PhaseStats::default(); 5],
            suppressions: 0,
            final_z: 0,
        }
    }

    fn record(&mut self, phase: Phase, ops: usize, elapsed: Duration) {
        self.phases[phase as usize].record(ops, elapsed);
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        let mut rows = String::new();
        for phase in Phase::ALL {
            let stats = self.phases[phase as usize];
            rows.push_str(&format!(
                "  {:<7} {:>10} ops  {:>9.2} ms  {:>12.0} ops/s\n",
                phase.describe(),
                stats.ops,
                stats.elapsed.as_secs_f64() * 1_000.0,
                stats.ops_per_second(),
            ));
        }
        indoc::formatdoc!(
            r#"
            Window manager bench: {rounds} round(s), {windows} windows, {moves} moves.
            {rows}
            Embedded suppressions: {suppressions} | final z counter: {z}
            "#,
            rounds = config.rounds,
            windows = config.windows,
            moves = config.moves,
            rows = rows.trim_end(),
            suppressions = self.suppressions,
            z = self.final_z,
        )
    }
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

fn run_round(config: &BenchConfig, stats: &mut BenchStats) -> Result<(), WmError> {
    let mut wm = WindowManager::new(HeadlessSurface::new(Geometry::new(0, 0, 1920, 1080)));

    let (ids, elapsed) = timed(|| -> Result<Vec<WindowId>, WmError> {
        let mut ids = Vec::with_capacity(config.windows);
        for n in 0..config.windows {
            let title = format!("window {n}");
            let content = if config.embedded_every > 0 && n % config.embedded_every == 0 {
                HeadlessContent::Embedded(title.clone())
            } else {
                HeadlessContent::Plain(title.clone())
            };
            ids.push(wm.create_window(title, content, WindowOptions::default())?.id());
        }
        Ok(ids)
    });
    let ids = ids?;
    stats.record(Phase::Create, ids.len(), elapsed);

    let focus_ops = config.moves.max(ids.len());
    let ((), elapsed) = timed(|| {
        for n in 0..focus_ops {
            wm.focus_window(ids[n % ids.len()]);
        }
    });
    stats.record(Phase::Focus, focus_ops, elapsed);

    let target = ids[0];
    let start = wm.window(target).map(|w| w.geometry()).unwrap_or_default();
    let grab = Point::new(start.x + 40, start.y + 4);
    let ((), elapsed) = timed(|| {
        wm.begin_drag(target, grab);
        for n in 0..config.moves {
            let step = (n % 400) as i32;
            wm.pointer_moved(Point::new(grab.x + step, grab.y + step / 2));
        }
        wm.pointer_released();
    });
    stats.record(Phase::Drag, config.moves, elapsed);

    let moved = wm.window(target).map(|w| w.geometry()).unwrap_or_default();
    let corner = Point::new(
        moved.x + moved.width as i32 - 2,
        moved.y + moved.height as i32 - 2,
    );
    let ((), elapsed) = timed(|| {
        wm.begin_resize(target, corner);
        for n in 0..config.moves {
            let step = (n % 300) as i32 - 150;
            wm.pointer_moved(Point::new(corner.x + step, corner.y + step));
        }
        wm.pointer_released();
    });
    stats.record(Phase::Resize, config.moves, elapsed);

    stats.suppressions += wm
        .surface()
        .panes()
        .map(|(_, pane)| pane.suppressions)
        .sum::<usize>();
    stats.final_z = wm.z_counter();

    let ((), elapsed) = timed(|| {
        for id in &ids {
            wm.close_window(*id);
        }
    });
    stats.record(Phase::Close, ids.len(), elapsed);
    Ok(())
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let mut stats = BenchStats::new();
    for _ in 0..config.rounds {
        run_round(&config, &mut stats).map_err(io::Error::other)?;
    }
    println!("{}", stats.final_report(&config));
    Ok(())
}

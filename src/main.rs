use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

use desk_wm::drivers::OutputDriver;
use desk_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use desk_wm::error::{WmError, WmResult};
use desk_wm::runner::{DeskApp, run_app};
use desk_wm::term::CellMetrics;
use desk_wm::tracing_sub::{self, LogTarget};

#[derive(Parser, Debug)]
#[command(
    name = "desk-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floating windows in the terminal: drag, resize, minimize, maximize"
)]
struct Cli {
    /// Logical pixels per terminal column.
    #[arg(long = "cell-width", value_name = "PX", default_value_t = 8)]
    cell_width: u32,

    /// Logical pixels per terminal row.
    #[arg(long = "cell-height", value_name = "PX", default_value_t = 16)]
    cell_height: u32,

    /// How long to wait for input before redrawing.
    #[arg(long = "poll-ms", value_name = "MILLIS", default_value_t = 16)]
    poll_ms: u64,

    /// Append logs to this file. Without it, logs are discarded.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Maximum log level (error, warn, info, debug, trace).
    #[arg(long = "log-level", value_name = "LEVEL", default_value_t = Level::INFO)]
    log_level: Level,
}

impl Cli {
    fn log_target(&self) -> LogTarget {
        match &self.log_file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Sink,
        }
    }

    fn metrics(&self) -> WmResult<CellMetrics> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(WmError::InvalidConfig(
                "cell size must be at least 1x1".to_string(),
            ));
        }
        Ok(CellMetrics::new(self.cell_width, self.cell_height))
    }
}

fn main() -> WmResult<()> {
    let cli = Cli::parse();
    tracing_sub::init(&cli.log_target(), cli.log_level)?;
    let metrics = cli.metrics()?;

    let mut output = ConsoleOutputDriver::new()?;
    let mut app = DeskApp::new(metrics, output.area()?)?;
    app.open_next()?;
    app.open_help()?;
    tracing::info!(?metrics, "starting desktop");

    output.enter()?;
    let result = run_app(
        &mut output,
        ConsoleInputDriver::new(),
        &mut app,
        Duration::from_millis(cli.poll_ms),
    );
    output.exit()?;
    result
}

use anyhow::{Context, bail};
use log::info;
use std::env;
use std::fs::File;
use std::io::{BufWriter, stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use termfireworks::config::parse_hex_color;
use termfireworks::event::TerminalEvents;
use termfireworks::terminal::{TerminalGuard, shutdown_flag};
use termfireworks::{
    ClickPolicy, Driver, FireworksConfig, OffscreenPolicy, Simulation, TerminalSurface,
};

fn print_usage() {
    eprintln!("termfireworks - Fireworks in the terminal");
    eprintln!();
    eprintln!("Usage: termfireworks [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config PATH            Load settings from a TOML file");
    eprintln!("  --bg-color RRGGBB        Set background color as hex (e.g., --bg-color 1a1b26)");
    eprintln!("  --click rocket|burst     Click launches a rocket (default) or explodes in place");
    eprintln!("  --offscreen cull|retain  Drop particles leaving the screen (default) or keep them");
    eprintln!("  --seed N                 Seed the random generator for a repeatable show");
    eprintln!("  --log-file PATH          Write log records (RUST_LOG filter, default warn) to PATH;");
    eprintln!("                           without it logging is off, the screen belongs to the show");
    eprintln!();
    eprintln!("Click anywhere to launch a firework.");
    eprintln!("Press 'q', ESC, or Ctrl+C to exit");
}

#[derive(Default)]
struct Options {
    config: Option<PathBuf>,
    bg_color: Option<(u8, u8, u8)>,
    click: Option<ClickPolicy>,
    offscreen: Option<OffscreenPolicy>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
}

/// `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> anyhow::Result<Option<Options>> {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        if matches!(flag, "help" | "--help" | "-h") {
            return Ok(None);
        }
        let Some(value) = args.get(i + 1) else {
            bail!("{flag} requires a value");
        };
        match flag {
            "--config" => options.config = Some(PathBuf::from(value)),
            "--bg-color" => {
                let color = parse_hex_color(value).with_context(|| {
                    format!("invalid hex color: {value} (expected format RRGGBB, e.g. 1a1b26)")
                })?;
                options.bg_color = Some(color);
            }
            "--click" => options.click = Some(value.parse()?),
            "--offscreen" => options.offscreen = Some(value.parse()?),
            "--seed" => {
                let seed = value
                    .parse()
                    .with_context(|| format!("invalid seed: {value}"))?;
                options.seed = Some(seed);
            }
            "--log-file" => options.log_file = Some(PathBuf::from(value)),
            other => bail!("unknown option: {other}"),
        }
        i += 2;
    }

    Ok(Some(options))
}

/// Installs a file logger. Returns `false` when no file was given: stderr
/// shares the tty with the alternate screen, so records would land on the
/// animation.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };
    let file =
        File::create(path).with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("cannot install the logger")?;
    Ok(true)
}

fn load_config(options: &Options) -> anyhow::Result<FireworksConfig> {
    let mut config = match &options.config {
        Some(path) => FireworksConfig::from_file(path)?,
        None => FireworksConfig::default(),
    };

    if let Some(color) = options.bg_color {
        config.background = Some(color);
    }
    if let Some(click) = options.click {
        config.click = click;
    }
    if let Some(offscreen) = options.offscreen {
        config.physics.offscreen = offscreen;
    }
    Ok(config)
}

fn run(config: FireworksConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let shutdown = shutdown_flag().context("cannot install signal handlers")?;
    let guard = TerminalGuard::enter().context("cannot initialize the terminal")?;
    let (cols, rows) = TerminalGuard::size().context("cannot determine the terminal size")?;
    info!("terminal is {cols}x{rows}");

    let simulation = match seed {
        Some(seed) => {
            Simulation::with_rng(config.physics, cols, rows, fastrand::Rng::with_seed(seed))
        }
        None => Simulation::new(config.physics, cols, rows),
    };
    let surface = TerminalSurface::new(
        BufWriter::with_capacity(1024 * 64, stdout()),
        cols,
        rows,
        config.background,
    );
    let events = TerminalEvents::new(
        config.timing.tick(),
        config.timing.launch_interval(),
        shutdown,
    );

    let mut driver = Driver::new(simulation, surface, events, config.click);
    let result = driver.run();

    drop(driver);
    drop(guard);
    result.context("display loop failed")
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err:#}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let started = init_logging(options.log_file.as_deref()).and_then(|_| {
        let config = load_config(&options)?;
        info!("config: {config:#?}");
        run(config, options.seed)
    });

    match started {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("termfireworks: {err:#}");
            ExitCode::FAILURE
        }
    }
}

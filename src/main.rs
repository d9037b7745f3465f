// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use swipe_deck::app::persisted_state::StateFileStore;
use swipe_deck::app::trace::Trace;
use swipe_deck::app::{paths, Collaborators, ControlLoop};
use swipe_deck::application::port::SettingsStore;
use swipe_deck::config;
use swipe_deck::domain::gesture::Viewport;
use swipe_deck::infrastructure::{SimulatedDevice, SimulatedWakeLock};

const HELP: &str = "\
swipe-deck: replay a touch trace against a simulated player

USAGE:
  swipe-deck <TRACE.toml> [OPTIONS]

OPTIONS:
  --width <W>            Viewport width (overrides the trace)
  --height <H>           Viewport height (overrides the trace)
  --config-dir <DIR>     Directory holding settings.toml
  --data-dir <DIR>       Directory holding state.cbor
  --forget-position      Stop remembering playback positions
  --remember-position    Remember playback positions again
  -h, --help             Print this help
";

struct Args {
    trace: PathBuf,
    width: Option<f32>,
    height: Option<f32>,
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    remember_position: Option<bool>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let forget = args.contains("--forget-position");
    let remember = args.contains("--remember-position");
    let parsed = Args {
        width: args.opt_value_from_str("--width")?,
        height: args.opt_value_from_str("--height")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        remember_position: match (forget, remember) {
            (true, _) => Some(false),
            (false, true) => Some(true),
            (false, false) => None,
        },
        trace: args.free_from_str()?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unused arguments");
    }
    Ok(Some(parsed))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(args.data_dir, args.config_dir);
    let (config, _warning) = config::load();

    let trace = match Trace::load(&args.trace) {
        Ok(trace) => trace,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let (store, warning) = StateFileStore::open();
    if let Some(key) = warning {
        tracing::warn!(%key, "persisted state unavailable, starting empty");
    }
    if let Some(enabled) = args.remember_position {
        if let Err(err) = store.set_bool(config::KEY_REMEMBER_POSITION, enabled) {
            tracing::warn!(error = %err, "failed to store remember-position");
        }
    }

    let base = trace.viewport();
    let viewport = Viewport::new(
        args.width.unwrap_or(base.width),
        args.height.unwrap_or(base.height),
    );

    let engines = trace.engine_factory();
    let control = ControlLoop::new(
        &config,
        Collaborators {
            engines: Box::new(engines.clone()),
            device: Box::new(SimulatedDevice::default()),
            wake_lock: Arc::new(SimulatedWakeLock::new()),
            settings: Arc::new(store),
        },
        viewport,
    );

    let started = tokio::time::Instant::now();
    let replay = trace.replay(control.sender(), move |elapsed| {
        if let Some(engine) = engines.latest() {
            engine.advance(elapsed);
        }
    });
    let run = control.run(|signal| {
        println!("{:>7} ms  {signal}", started.elapsed().as_millis());
    });
    tokio::join!(replay, run);

    ExitCode::SUCCESS
}

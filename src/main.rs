use clap::Parser;
use embassy_executor::Spawner;
use embassy_time::Duration;
use log::{error, info};

use pedlight::config::FixtureConfig;
use pedlight::input::{run_input_monitor, run_reset_watch};
use pedlight::outputs::{run_display, run_lamp, run_matrix, run_tone};
use pedlight::trafficlight::DEFAULT_PHASE_TABLE;
use pedlight::trafficlight::scheduler::run_scheduler;
use pedlight::trafficlight::state::FixtureState;

mod sim;
use sim::{ResetLine, SimButtons, SimDisplay, SimLamp, SimMatrix, SimReset, SimTone};

/// Simulated pedestrian traffic-light fixture.
///
/// Press <enter> to toggle night mode, type `r` and <enter> to reset.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Phase duration outside night mode, in milliseconds
    #[arg(long, env = "PEDLIGHT_PHASE_MS", default_value_t = 2000)]
    phase_ms: u64,

    /// Slice of every interruptible wait, in milliseconds
    #[arg(long, env = "PEDLIGHT_SLICE_MS", default_value_t = 10)]
    slice_ms: u64,

    /// Mode button sampling interval, in milliseconds
    #[arg(long, env = "PEDLIGHT_INPUT_POLL_MS", default_value_t = 10)]
    input_poll_ms: u64,

    /// Debounce window of the mode button, in milliseconds
    #[arg(long, env = "PEDLIGHT_DEBOUNCE_MS", default_value_t = 250)]
    debounce_ms: u64,

    /// Lamp and matrix redraw interval in night mode, in milliseconds
    #[arg(long, env = "PEDLIGHT_NIGHT_REFRESH_MS", default_value_t = 250)]
    night_refresh_ms: u64,

    /// Status display refresh interval, in milliseconds
    #[arg(long, env = "PEDLIGHT_DISPLAY_MS", default_value_t = 100)]
    display_ms: u64,
}

impl Args {
    fn config(&self) -> FixtureConfig {
        FixtureConfig {
            phase_duration: Duration::from_millis(self.phase_ms),
            poll_slice: Duration::from_millis(self.slice_ms),
            input_poll: Duration::from_millis(self.input_poll_ms),
            debounce: Duration::from_millis(self.debounce_ms),
            night_refresh: Duration::from_millis(self.night_refresh_ms),
            display_refresh: Duration::from_millis(self.display_ms),
            ..FixtureConfig::default()
        }
    }
}

#[embassy_executor::task]
async fn input_task(
    state: &'static FixtureState,
    config: &'static FixtureConfig,
    buttons: SimButtons,
) -> ! {
    run_input_monitor(state, config, buttons).await
}

#[embassy_executor::task]
async fn reset_task(line: &'static ResetLine) -> ! {
    run_reset_watch(line, SimReset).await
}

#[embassy_executor::task]
async fn scheduler_task(state: &'static FixtureState, config: &'static FixtureConfig) -> ! {
    run_scheduler(state, config).await
}

#[embassy_executor::task]
async fn lamp_task(state: &'static FixtureState, config: &'static FixtureConfig) -> ! {
    run_lamp(state, config, SimLamp::default()).await
}

#[embassy_executor::task]
async fn matrix_task(state: &'static FixtureState, config: &'static FixtureConfig) -> ! {
    run_matrix(state, config, SimMatrix::default()).await
}

#[embassy_executor::task]
async fn display_task(state: &'static FixtureState, config: &'static FixtureConfig) -> ! {
    run_display(state, config, SimDisplay::default()).await
}

#[embassy_executor::task]
async fn tone_task(state: &'static FixtureState, config: &'static FixtureConfig) -> ! {
    run_tone(state, config, SimTone).await
}

static RESET_LINE: ResetLine = ResetLine::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let config = args.config();
    if let Err(err) = config.validate() {
        error!("invalid configuration: {err}");
        std::process::exit(2);
    }

    // The fixture lives until power-cycle; there is nothing to tear down.
    let config: &'static FixtureConfig = Box::leak(Box::new(config));
    let state: &'static FixtureState = Box::leak(Box::new(FixtureState::new(
        DEFAULT_PHASE_TABLE,
        config.phase_duration,
    )));

    info!(
        "fixture up: {:?}, phase {} ms, <enter> toggles night mode, r resets",
        state.read(),
        config.phase_duration.as_millis()
    );

    let buttons = SimButtons::default();
    if let Err(err) = sim::spawn_console(buttons.clone(), &RESET_LINE) {
        error!("cannot read console input: {err}");
    }

    spawner.must_spawn(reset_task(&RESET_LINE));
    spawner.must_spawn(input_task(state, config, buttons));
    spawner.must_spawn(scheduler_task(state, config));
    spawner.must_spawn(lamp_task(state, config));
    spawner.must_spawn(matrix_task(state, config));
    spawner.must_spawn(display_task(state, config));
    spawner.must_spawn(tone_task(state, config));
}

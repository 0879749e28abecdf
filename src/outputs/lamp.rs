use crate::config::FixtureConfig;
use crate::io::{DigitalOutputs, light};
use crate::trafficlight::state::FixtureState;
use crate::wait::hold_rendering;

pub async fn run_lamp(
    state: &FixtureState,
    config: &FixtureConfig,
    mut outputs: impl DigitalOutputs,
) -> ! {
    loop {
        let snapshot = state.read();
        light(&mut outputs, &state.presentation(snapshot).lamp);

        let budget = if snapshot.night_mode {
            config.night_refresh
        } else {
            state.phase_duration()
        };
        hold_rendering(state, config.poll_slice, budget, snapshot).await;
    }
}

/*
 * The phase scheduler: the only task that moves the light through its cycle.
 *
 * Outside night mode it waits one phase duration and advances. The wait is
 * sliced so that entering night mode abandons it within one slice. In night
 * mode it only idles, re-checking on every slice, and starts a fresh full
 * phase wait as soon as night mode ends.
 */

use embassy_time::Timer;
use log::debug;

use super::state::FixtureState;
use crate::config::FixtureConfig;
use crate::wait::{Hold, hold};

pub async fn run_scheduler(state: &FixtureState, config: &FixtureConfig) -> ! {
    loop {
        if state.read().night_mode {
            Timer::after(config.poll_slice).await;
            continue;
        }

        match hold(state, config.poll_slice, state.phase_duration(), |snapshot| {
            snapshot.night_mode
        })
        .await
        {
            Hold::Elapsed => {
                if let Some(phase) = state.advance_phase() {
                    debug!("phase {:?}", phase);
                }
            }
            Hold::Interrupted(_) => {}
        }
    }
}

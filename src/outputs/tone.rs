/*
 * The audible signal. Every phase has its own beep slot: a tone for a while,
 * then silence. Night mode uses one fixed low, sparse beep. Both halves of the
 * slot are interruptible, and the tone is always stopped before the next
 * presentation starts so a stale beep never outlives its phase.
 */

use crate::config::FixtureConfig;
use crate::io::ToneGenerator;
use crate::trafficlight::state::FixtureState;
use crate::wait::{Hold, hold_rendering};

pub async fn run_tone(
    state: &FixtureState,
    config: &FixtureConfig,
    mut tone: impl ToneGenerator,
) -> ! {
    loop {
        let snapshot = state.read();
        let profile = state.presentation(snapshot).tone;

        tone.play(config.buzzer, profile.frequency_hz);
        let sounded = hold_rendering(state, config.poll_slice, profile.active, snapshot).await;
        tone.stop(config.buzzer);

        if let Hold::Elapsed = sounded {
            hold_rendering(state, config.poll_slice, profile.inactive, snapshot).await;
        }
    }
}

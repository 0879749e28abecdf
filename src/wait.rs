/*
 * Interruptible waits.
 *
 * Every task that holds an output steady for a while (a phase, a beep, a
 * night redraw) must still notice a mode change quickly. Instead of one long sleep the wait
 * is cut into short slices and the shared state is re-read after each slice.
 * The wait ends as soon as the caller's interrupt condition holds, or when the
 * budget has been spent.
 */

use embassy_time::{Duration, Instant, Timer};

use crate::trafficlight::state::{FixtureState, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hold {
    /// The full budget elapsed without an interruption.
    Elapsed,
    /// The interrupt condition held for this snapshot.
    Interrupted(Snapshot),
}

pub async fn hold(
    state: &FixtureState,
    slice: Duration,
    budget: Duration,
    mut interrupt: impl FnMut(Snapshot) -> bool,
) -> Hold {
    let deadline = Instant::now() + budget;

    loop {
        let now = Instant::now();
        if now >= deadline {
            return Hold::Elapsed;
        }

        Timer::after(slice.min(deadline - now)).await;

        let snapshot = state.read();
        if interrupt(snapshot) {
            return Hold::Interrupted(snapshot);
        }
    }
}

/// Hold until the budget elapses or the state no longer matches `rendered`.
pub async fn hold_rendering(
    state: &FixtureState,
    slice: Duration,
    budget: Duration,
    rendered: Snapshot,
) -> Hold {
    hold(state, slice, budget, |current| current != rendered).await
}

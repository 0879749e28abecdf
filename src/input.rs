/*
 * Inputs of the fixture: the mode button and the reset line.
 *
 * The mode button is sampled on a short fixed interval, but only the moment it
 * goes down counts, the way a falling-edge interrupt would see it. Holding the
 * button is still one press. An edge only counts when the debounce window has
 * passed since the last press that counted; anything inside the window is
 * dropped, not remembered for later.
 *
 * The reset line is a different kind of input altogether. It restarts the
 * device unconditionally and never goes through the fixture state.
 */

use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Timer};
use log::{info, warn};

use crate::config::FixtureConfig;
use crate::io::{Button, Buttons, ResetController};
use crate::trafficlight::state::FixtureState;

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_accepted: Option<Instant>,
    was_pressed: bool,
}

impl Debouncer {
    pub const fn new(window: Duration) -> Self {
        Debouncer {
            window,
            last_accepted: None,
            was_pressed: false,
        }
    }

    /// Returns true when the button sampled at `now` has just gone down and
    /// the press is accepted.
    pub fn accept(&mut self, pressed: bool, now: Instant) -> bool {
        let went_down = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        if !went_down {
            return false;
        }

        if let Some(last) = self.last_accepted {
            match now.checked_duration_since(last) {
                Some(elapsed) if elapsed > self.window => {}
                // inside the window, or the clock went backwards
                _ => return false,
            }
        }

        self.last_accepted = Some(now);
        true
    }
}

pub async fn run_input_monitor(
    state: &FixtureState,
    config: &FixtureConfig,
    mut buttons: impl Buttons,
) -> ! {
    let mut debouncer = Debouncer::new(config.debounce);

    loop {
        if debouncer.accept(buttons.is_pressed(Button::Mode), Instant::now()) {
            let snapshot = state.toggle_night_mode();
            if snapshot.night_mode {
                info!("night mode on");
            } else {
                info!("night mode off, resuming at {:?}", snapshot.phase);
            }
        }

        Timer::after(config.input_poll).await;
    }
}

pub async fn run_reset_watch<M: RawMutex>(
    line: &Signal<M, ()>,
    mut controller: impl ResetController,
) -> ! {
    line.wait().await;
    warn!("reset line asserted, restarting");
    controller.restart()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_is_accepted() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        assert!(debouncer.accept(true, Instant::from_millis(1_000)));
    }

    #[test]
    fn released_button_is_never_accepted() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        assert!(!debouncer.accept(false, Instant::from_millis(0)));
        assert!(!debouncer.accept(false, Instant::from_millis(10_000)));
    }

    #[test]
    fn window_is_measured_from_last_accepted_press() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        assert!(debouncer.accept(true, Instant::from_millis(1_000)));

        // bounces inside the window do not extend it
        for ms in [1_100, 1_200, 1_250] {
            assert!(!debouncer.accept(false, Instant::from_millis(ms - 5)));
            assert!(!debouncer.accept(true, Instant::from_millis(ms)));
        }
        assert!(!debouncer.accept(false, Instant::from_millis(1_251)));
        assert!(debouncer.accept(true, Instant::from_millis(1_252)));

        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        assert!(debouncer.accept(true, Instant::from_millis(0)));
        assert!(!debouncer.accept(false, Instant::from_millis(100)));
        assert!(debouncer.accept(true, Instant::from_millis(251)));
    }

    #[test]
    fn held_button_is_one_press() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let accepted = (0..=700)
            .step_by(10)
            .filter(|ms| debouncer.accept(true, Instant::from_millis(*ms)))
            .count();
        assert_eq!(accepted, 1);

        // released, then pressed again after the window
        assert!(!debouncer.accept(false, Instant::from_millis(710)));
        assert!(debouncer.accept(true, Instant::from_millis(720)));
    }

    #[test]
    fn edge_inside_window_is_not_remembered() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        assert!(debouncer.accept(true, Instant::from_millis(0)));
        assert!(!debouncer.accept(false, Instant::from_millis(50)));

        // pressed inside the window and held past it
        assert!(!debouncer.accept(true, Instant::from_millis(100)));
        assert!(!debouncer.accept(true, Instant::from_millis(400)));
    }

    #[test]
    fn presses_100ms_apart_toggle_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let samples = [(0, true), (50, false), (100, true)];
        let accepted = samples
            .into_iter()
            .filter(|(ms, pressed)| debouncer.accept(*pressed, Instant::from_millis(*ms)))
            .count();
        assert_eq!(accepted, 1);
    }

    #[test]
    fn clock_going_backwards_is_rejected() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        assert!(debouncer.accept(true, Instant::from_millis(5_000)));
        assert!(!debouncer.accept(false, Instant::from_millis(900)));
        assert!(!debouncer.accept(true, Instant::from_millis(1_000)));
    }
}

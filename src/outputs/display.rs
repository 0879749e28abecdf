/*
 * The status display. It always shows the mode and the phase, redrawing the
 * whole frame on a short cadence of its own. A redraw is cheap and the cadence
 * is short in either mode, so there is no need to interrupt its wait.
 */

use embassy_time::Timer;

use crate::config::FixtureConfig;
use crate::io::CharDisplay;
use crate::trafficlight::Phase;
use crate::trafficlight::state::{FixtureState, Snapshot};

pub fn mode_label(night_mode: bool) -> &'static str {
    if night_mode { "Mode: Night" } else { "Mode: Normal" }
}

pub fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Go => "Go",
        Phase::Caution => "Attention",
        Phase::Stop => "Stop",
    }
}

pub fn render(display: &mut impl CharDisplay, snapshot: Snapshot) {
    display.clear(false);
    display.draw_rect(3, 3, 122, 60, true, false);
    display.draw_line(3, 25, 123, 25, true);
    display.draw_line(3, 37, 123, 37, true);
    display.draw_text("PEDESTRIAN", 8, 6);
    display.draw_text("CROSSING", 20, 16);
    display.draw_text(mode_label(snapshot.night_mode), 10, 28);
    display.draw_text(phase_label(snapshot.phase), 10, 48);
    display.flush();
}

pub async fn run_display(
    state: &FixtureState,
    config: &FixtureConfig,
    mut display: impl CharDisplay,
) -> ! {
    loop {
        render(&mut display, state.read());
        Timer::after(config.display_refresh).await;
    }
}

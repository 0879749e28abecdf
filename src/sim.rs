/*
 * Simulated devices for running the fixture on a host.
 *
 * Outputs report their state through the log, and only when it changes, so the
 * log reads like a trace of what a person standing at the crossing would see
 * and hear. Inputs come from the console: an empty line (or `n`) presses the
 * mode button, `r` asserts the reset line.
 */

use std::io::BufRead;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Instant};
use enum_ordinalize::Ordinalize;
use log::{debug, info, trace, warn};

use pedlight::io::{
    Button, Buttons, Buzzer, Channel, CharDisplay, DigitalOutputs, LedMatrix, ResetController,
    ToneGenerator,
};
use pedlight::trafficlight::Rgb;

pub type ResetLine = Signal<CriticalSectionRawMutex, ()>;

// How long a console press keeps the simulated button down.
const PRESS_LENGTH: Duration = Duration::from_millis(50);

const MATRIX_CELLS: usize = 25;

#[derive(Clone, Default)]
pub struct SimButtons {
    mode_released_at: Arc<AtomicU64>,
}

impl SimButtons {
    fn press(&self, button: Button) {
        match button {
            Button::Mode => self
                .mode_released_at
                .store((Instant::now() + PRESS_LENGTH).as_ticks(), Ordering::Relaxed),
        }
    }
}

impl Buttons for SimButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::Mode => {
                Instant::now().as_ticks() < self.mode_released_at.load(Ordering::Relaxed)
            }
        }
    }
}

/// Read console commands on a plain thread; the executor never blocks on stdin.
pub fn spawn_console(buttons: SimButtons, reset: &'static ResetLine) -> std::io::Result<()> {
    thread::Builder::new()
        .name("console".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                match line.trim() {
                    "" | "n" => buttons.press(Button::Mode),
                    "r" => reset.signal(()),
                    other => warn!("unknown command {other:?}, use <enter>/n or r"),
                }
            }
            debug!("console closed");
        })?;
    Ok(())
}

#[derive(Default)]
pub struct SimLamp {
    channels: [bool; Channel::VARIANT_COUNT],
}

impl DigitalOutputs for SimLamp {
    fn set(&mut self, channel: Channel, on: bool) {
        let pin = &mut self.channels[channel.ordinal()];
        if *pin != on {
            *pin = on;
            debug!("lamp {:?} {}", channel, if on { "on" } else { "off" });
        }
    }
}

pub struct SimMatrix {
    frame: [Rgb; MATRIX_CELLS],
    shown: Option<[Rgb; MATRIX_CELLS]>,
}

impl Default for SimMatrix {
    fn default() -> Self {
        SimMatrix {
            frame: [Rgb::new(0, 0, 0); MATRIX_CELLS],
            shown: None,
        }
    }
}

impl LedMatrix for SimMatrix {
    fn clear(&mut self) {
        self.frame = [Rgb::new(0, 0, 0); MATRIX_CELLS];
    }

    fn set_cell(&mut self, index: usize, r: u8, g: u8, b: u8) {
        match self.frame.get_mut(index) {
            Some(cell) => *cell = Rgb::new(r, g, b),
            None => warn!("matrix cell {index} out of range"),
        }
    }

    fn flush(&mut self) {
        if self.shown == Some(self.frame) {
            return;
        }
        self.shown = Some(self.frame);

        let lit: Vec<String> = self
            .frame
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != Rgb::new(0, 0, 0))
            .map(|(i, c)| format!("{i}=({},{},{})", c.r, c.g, c.b))
            .collect();
        if lit.is_empty() {
            debug!("matrix dark");
        } else {
            debug!("matrix {}", lit.join(" "));
        }
    }
}

#[derive(Default)]
pub struct SimDisplay {
    texts: Vec<String>,
    shown: Vec<String>,
}

impl CharDisplay for SimDisplay {
    fn clear(&mut self, _invert: bool) {
        self.texts.clear();
    }

    // Shapes are static chrome; only the text is worth reporting.
    fn draw_rect(
        &mut self,
        _top: u8,
        _left: u8,
        _width: u8,
        _height: u8,
        _on: bool,
        _fill: bool,
    ) {
    }

    fn draw_line(&mut self, _x0: u8, _y0: u8, _x1: u8, _y1: u8, _on: bool) {}

    fn draw_text(&mut self, text: &str, _x: u8, _y: u8) {
        self.texts.push(text.to_owned());
    }

    fn flush(&mut self) {
        if self.texts != self.shown {
            self.shown.clone_from(&self.texts);
            info!("display [{}]", self.shown.join(" | "));
        }
    }
}

#[derive(Default)]
pub struct SimTone;

impl ToneGenerator for SimTone {
    fn play(&mut self, buzzer: Buzzer, frequency_hz: u32) {
        trace!("buzzer {buzzer:?} {frequency_hz} Hz");
    }

    fn stop(&mut self, buzzer: Buzzer) {
        trace!("buzzer {buzzer:?} silent");
    }
}

pub struct SimReset;

impl ResetController for SimReset {
    fn restart(&mut self) -> ! {
        // Power-cycle equivalent: the simulated device simply goes away.
        log::logger().flush();
        std::process::exit(0)
    }
}

#![allow(dead_code)]

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use embassy_futures::{
    block_on,
    select::{Either, select},
};
use embassy_time::{Duration, Instant};

use pedlight::config::FixtureConfig;
use pedlight::io::{
    Button, Buttons, Buzzer, Channel, CharDisplay, DigitalOutputs, LedMatrix, ToneGenerator,
};
use pedlight::trafficlight::state::FixtureState;
use pedlight::trafficlight::{DEFAULT_PHASE_TABLE, LampPattern, MatrixCell, Rgb};

pub fn config(phase_ms: u64) -> FixtureConfig {
    FixtureConfig {
        phase_duration: Duration::from_millis(phase_ms),
        ..FixtureConfig::default()
    }
}

pub fn fixture(config: &FixtureConfig) -> FixtureState {
    FixtureState::new(DEFAULT_PHASE_TABLE, config.phase_duration)
}

/// Run `scenario` while `fixture` loops in the background; the loops are
/// dropped once the scenario finishes.
pub fn run_until<B: Future, S: Future>(fixture: B, scenario: S) -> S::Output {
    block_on(async {
        match select(fixture, scenario).await {
            Either::First(_) => unreachable!("fixture loops never return"),
            Either::Second(output) => output,
        }
    })
}

/// Shared, timestamped event log a test keeps a handle to while the device
/// double is owned by a render loop.
pub struct Recorder<E>(Rc<RefCell<Vec<(Instant, E)>>>);

impl<E> Clone for Recorder<E> {
    fn clone(&self) -> Self {
        Recorder(self.0.clone())
    }
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Recorder(Rc::new(RefCell::new(Vec::new())))
    }
}

impl<E: Clone> Recorder<E> {
    fn push(&self, event: E) {
        self.0.borrow_mut().push((Instant::now(), event));
    }

    pub fn events(&self) -> Vec<(Instant, E)> {
        self.0.borrow().clone()
    }

    /// First event recorded at or after `at`.
    pub fn first_since(&self, at: Instant) -> Option<(Instant, E)> {
        self.0.borrow().iter().find(|(t, _)| *t >= at).cloned()
    }

    pub fn last(&self) -> Option<E> {
        self.0.borrow().last().map(|(_, e)| e.clone())
    }
}

#[derive(Default)]
pub struct RecordingLamp {
    pins: [bool; 3],
    pub shown: Recorder<LampPattern>,
}

impl DigitalOutputs for RecordingLamp {
    fn set(&mut self, channel: Channel, on: bool) {
        match channel {
            Channel::Red => self.pins[0] = on,
            Channel::Green => self.pins[1] = on,
            // blue is driven last, so the pattern is complete here
            Channel::Blue => {
                self.pins[2] = on;
                self.shown
                    .push(LampPattern::new(self.pins[0], self.pins[1], self.pins[2]));
            }
        }
    }
}

#[derive(Default)]
pub struct RecordingMatrix {
    pending: Option<MatrixCell>,
    pub frames: Recorder<Option<MatrixCell>>,
}

impl LedMatrix for RecordingMatrix {
    fn clear(&mut self) {
        self.pending = None;
    }

    fn set_cell(&mut self, index: usize, r: u8, g: u8, b: u8) {
        assert!(self.pending.is_none(), "more than one lit cell");
        self.pending = Some(MatrixCell {
            index,
            color: Rgb::new(r, g, b),
        });
    }

    fn flush(&mut self) {
        self.frames.push(self.pending);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneEvent {
    Play(Buzzer, u32),
    Stop(Buzzer),
}

#[derive(Default)]
pub struct RecordingTone {
    pub events: Recorder<ToneEvent>,
}

impl ToneGenerator for RecordingTone {
    fn play(&mut self, buzzer: Buzzer, frequency_hz: u32) {
        self.events.push(ToneEvent::Play(buzzer, frequency_hz));
    }

    fn stop(&mut self, buzzer: Buzzer) {
        self.events.push(ToneEvent::Stop(buzzer));
    }
}

#[derive(Default)]
pub struct RecordingDisplay {
    texts: Vec<String>,
    pub frames: Recorder<Vec<String>>,
}

impl CharDisplay for RecordingDisplay {
    fn clear(&mut self, _invert: bool) {
        self.texts.clear();
    }

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
        self.frames.push(self.texts.clone());
    }
}

/// Mode button held down during fixed windows, in milliseconds from `start`.
pub struct ScriptedButtons {
    start: Instant,
    presses: Vec<(u64, u64)>,
}

impl ScriptedButtons {
    pub fn new(presses: &[(u64, u64)]) -> Self {
        ScriptedButtons {
            start: Instant::now(),
            presses: presses.to_vec(),
        }
    }
}

impl Buttons for ScriptedButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        let Button::Mode = button;
        let ms = self.start.elapsed().as_millis();
        self.presses
            .iter()
            .any(|(from, until)| (*from..*until).contains(&ms))
    }
}

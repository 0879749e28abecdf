/*
 * The pedestrian light itself: its phases and what every output shows in each
 * of them.
 *
 * The per-phase presentation lives in a table that is built once and never
 * changes. Outputs look their presentation up by phase, so adding an output
 * means adding a column here rather than another `match` in every task.
 */

pub mod scheduler;
pub mod state;

use embassy_time::Duration;
use enum_ordinalize::Ordinalize;

#[derive(Debug, Ordinalize, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Phase {
    Go,
    Caution,
    Stop,
}

impl Phase {
    /*
     * The phase that follows this one in the fixed cycle. Night mode does not
     * take part here: it freezes the cycle, it does not change its order.
     */
    pub fn next(self) -> Phase {
        match Phase::from_ordinal((self.ordinal() + 1) % Phase::VARIANT_COUNT) {
            Some(phase) => phase,
            None => unreachable!("phase ordinal out of range"),
        }
    }
}

/// Channel pattern for the tri-colour indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LampPattern {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl LampPattern {
    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single lit cell on the LED matrix mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixCell {
    pub index: usize,
    pub color: Rgb,
}

/// One beep slot: the tone sounds for `active`, then stays silent for
/// `inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneProfile {
    pub frequency_hz: u32,
    pub active: Duration,
    pub inactive: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseProfile {
    pub lamp: LampPattern,
    pub cell: MatrixCell,
    pub tone: ToneProfile,
}

/// Immutable presentation table: one profile per phase plus the uniform
/// night-mode profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTable {
    phases: [PhaseProfile; Phase::VARIANT_COUNT],
    night: PhaseProfile,
}

// The board's RGB indicator has no amber die; red and green together read as
// amber.
const AMBER: LampPattern = LampPattern::new(true, true, false);

const YELLOW: Rgb = Rgb::new(4, 8, 0);

pub const DEFAULT_PHASE_TABLE: PhaseTable = PhaseTable::new(
    [
        // Go
        PhaseProfile {
            lamp: LampPattern::new(false, true, false),
            cell: MatrixCell {
                index: 17,
                color: Rgb::new(0, 8, 0),
            },
            tone: ToneProfile {
                frequency_hz: 1000,
                active: Duration::from_millis(200),
                inactive: Duration::from_millis(300),
            },
        },
        // Caution
        PhaseProfile {
            lamp: AMBER,
            cell: MatrixCell {
                index: 12,
                color: YELLOW,
            },
            tone: ToneProfile {
                frequency_hz: 800,
                active: Duration::from_millis(200),
                inactive: Duration::from_millis(600),
            },
        },
        // Stop
        PhaseProfile {
            lamp: LampPattern::new(true, false, false),
            cell: MatrixCell {
                index: 7,
                color: Rgb::new(8, 0, 0),
            },
            tone: ToneProfile {
                frequency_hz: 500,
                active: Duration::from_millis(500),
                inactive: Duration::from_millis(1500),
            },
        },
    ],
    PhaseProfile {
        lamp: AMBER,
        cell: MatrixCell {
            index: 12,
            color: YELLOW,
        },
        tone: ToneProfile {
            frequency_hz: 300,
            active: Duration::from_millis(100),
            inactive: Duration::from_millis(1900),
        },
    },
);

impl PhaseTable {
    pub const fn new(phases: [PhaseProfile; Phase::VARIANT_COUNT], night: PhaseProfile) -> Self {
        Self { phases, night }
    }

    pub fn profile(&self, phase: Phase) -> &PhaseProfile {
        &self.phases[phase.ordinal()]
    }

    pub fn night(&self) -> &PhaseProfile {
        &self.night
    }
}

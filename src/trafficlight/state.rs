/*
 * The shared state of the fixture.
 *
 * Phase and night mode are kept together in one value behind one critical
 * section. Every reader copies both out at once and every writer replaces both
 * at once, so no task can ever pair a new phase with an old night-mode flag or
 * the other way around.
 *
 * Writers by convention: the input monitor toggles night mode, the phase
 * scheduler advances the phase. The output tasks only read.
 */

use core::cell::Cell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use embassy_time::Duration;

use super::{Phase, PhaseProfile, PhaseTable};

/// The `(phase, night_mode)` pair as it was at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub phase: Phase,
    pub night_mode: bool,
}

impl Snapshot {
    pub const INITIAL: Snapshot = Snapshot {
        phase: Phase::Stop,
        night_mode: false,
    };
}

pub struct FixtureState {
    current: Mutex<CriticalSectionRawMutex, Cell<Snapshot>>,
    table: PhaseTable,
    phase_duration: Duration,
}

impl FixtureState {
    pub const fn new(table: PhaseTable, phase_duration: Duration) -> Self {
        FixtureState {
            current: Mutex::new(Cell::new(Snapshot::INITIAL)),
            table,
            phase_duration,
        }
    }

    pub fn read(&self) -> Snapshot {
        self.current.lock(Cell::get)
    }

    /*
     * Move on to the next phase. Returns the new phase, or `None` when night
     * mode is on and the cycle is frozen. The night-mode check and the update
     * happen under the same lock, so a toggle that lands between the
     * scheduler's last read and this call is still honoured.
     */
    pub fn advance_phase(&self) -> Option<Phase> {
        self.current.lock(|current| {
            let snapshot = current.get();
            if snapshot.night_mode {
                return None;
            }

            let phase = snapshot.phase.next();
            current.set(Snapshot { phase, ..snapshot });
            Some(phase)
        })
    }

    /*
     * Flip night mode and return the resulting snapshot. Night mode always
     * starts from the caution phase; leaving it keeps whatever phase was
     * current.
     */
    pub fn toggle_night_mode(&self) -> Snapshot {
        self.current.lock(|current| {
            let toggled = match current.get() {
                Snapshot {
                    night_mode: false, ..
                } => Snapshot {
                    phase: Phase::Caution,
                    night_mode: true,
                },
                Snapshot {
                    phase,
                    night_mode: true,
                } => Snapshot {
                    phase,
                    night_mode: false,
                },
            };
            current.set(toggled);
            toggled
        })
    }

    /// Presentation for a snapshot: the night profile in night mode, the
    /// phase's own profile otherwise.
    pub fn presentation(&self, snapshot: Snapshot) -> &PhaseProfile {
        if snapshot.night_mode {
            self.table.night()
        } else {
            self.table.profile(snapshot.phase)
        }
    }

    pub fn phase_duration(&self) -> Duration {
        self.phase_duration
    }
}

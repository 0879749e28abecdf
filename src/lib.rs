//! Coordination core of a pedestrian traffic-light fixture.
//!
//! One [`FixtureState`](trafficlight::state::FixtureState) holds the current
//! phase and the night-mode flag. The input monitor toggles night mode, the
//! phase scheduler advances the phase, and four output synchronizers (lamp,
//! LED matrix, status display, tone) render the state to their devices. All of
//! them are plain async loops, generic over the device traits in [`io`], and
//! run on any executor with a time driver.

pub mod config;
pub mod error;
pub mod input;
pub mod io;
pub mod outputs;
pub mod trafficlight;
pub mod wait;

/*
 * The four output synchronizers.
 *
 * Each one is an endless render loop over the shared state and owns exactly one
 * device. None of them ever writes the state. Lamp, matrix and tone hold their
 * rendering through an interruptible wait, so a change of phase or mode shows
 * up on every device within one poll slice. The display simply redraws on its
 * own short cadence.
 */

pub mod display;
pub mod lamp;
pub mod matrix;
pub mod tone;

pub use display::run_display;
pub use lamp::run_lamp;
pub use matrix::run_matrix;
pub use tone::run_tone;

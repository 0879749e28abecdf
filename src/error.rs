use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be longer than zero")]
    ZeroInterval(&'static str),

    #[error("poll slice of {slice_ms} ms is longer than the phase duration of {phase_ms} ms")]
    SliceLongerThanPhase { slice_ms: u64, phase_ms: u64 },

    #[error(
        "input poll of {poll_ms} ms must be shorter than the debounce window of {debounce_ms} ms"
    )]
    PollNotShorterThanDebounce { poll_ms: u64, debounce_ms: u64 },
}

use tokio::time::Instant;

/// Source of the current instant for time-derived state.
///
/// Progress is computed from `now() - armed_at`, so swapping the clock lets
/// tests control elapsed time without real delays.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

/// Clock backed by tokio's time driver (honours `tokio::time::pause`)
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

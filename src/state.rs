use crate::constants::Millis;
use crate::timer::TimerId;

/// Per-container autoplay state. At most one timer is live per container.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum AutoplayState {
    #[default]
    Idle,                 // No advance pending
    Scheduled(TimerId),   // Waiting for the timer to fire
}

impl AutoplayState {
    pub fn due(self) -> Option<Millis> {
        match self {
            AutoplayState::Idle => None,
            AutoplayState::Scheduled(timer) => Some(timer.due()),
        }
    }
}

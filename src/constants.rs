/// Milliseconds, the time unit of the engine's virtual clock.
pub type Millis = u64;

pub const TRANSITION_DURATION: Millis = 800;  // Fixed window a transition holds the lock (ms)
pub const DEFAULT_TIME_VIEW: Millis = 5000;   // Autoplay delay when none is configured (ms)
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal travel for a swipe

pub const DEFAULT_SLIDE_CLASS: &str = "carousel-slide";

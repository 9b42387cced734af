//! Multi-container slide carousel engine.
//!
//! A [`Carousel`] finds its containers in a [`Document`], keeps one current
//! slide per container, serializes transitions behind a single instance-wide
//! lock, advances slides on per-slide autoplay delays and reacts to pointer,
//! touch, keyboard and viewport-width input. Drawing is left to a [`RenderSink`].
//!
//! Time is virtual: the host calls [`Carousel::advance`] with elapsed
//! milliseconds and [`Carousel::dispatch`] with input events.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod document;
pub mod effect;
pub mod error;
pub mod input;
pub mod render;
pub mod slide;
pub mod state;
pub mod timer;

pub use carousel::{Carousel, ContainerId, Hooks, InFlight};
pub use config::{Breakpoint, Config, Navigation, TimeViews};
pub use document::{ContainerHandle, Document, StaticDocument};
pub use effect::{Direction, Effect, EffectSetting};
pub use error::ConfigError;
pub use input::{ArrowSide, InputEvent, Key};
pub use render::{Controls, RenderSink};
pub use slide::{SlideVisual, Transform};

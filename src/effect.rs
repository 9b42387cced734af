use serde::{Deserialize, Serialize};

/// Transition family applied when a slide enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    #[default]
    Slide,
    Fade,
    Scale,
    Rotate,
    Cube,
}

impl Effect {
    /// Whether the navigation direction changes the geometry of this effect.
    pub fn is_directional(self) -> bool {
        matches!(self, Effect::Slide | Effect::Rotate | Effect::Cube)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction of a jump from `current` to `target`; equal indices count as forward.
    pub fn between(current: usize, target: usize) -> Self {
        if target >= current { Direction::Forward } else { Direction::Backward }
    }

    /// Geometric sign of the outgoing slide: forward pushes it towards the negative axis.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => -1.0,
            Direction::Backward => 1.0,
        }
    }
}

/// Configured effect: one value for every slide, or a positional list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EffectSetting {
    One(Effect),
    PerSlide(Vec<Effect>),
}

impl Default for EffectSetting {
    fn default() -> Self {
        EffectSetting::One(Effect::Slide)
    }
}

impl EffectSetting {
    /// Effect for the slide at `index`. Positions past the end of a list reuse its last
    /// entry; an empty list resolves to [`Effect::Slide`].
    pub fn effect_for(&self, index: usize) -> Effect {
        match self {
            EffectSetting::One(effect) => *effect,
            EffectSetting::PerSlide(effects) => effects
                .get(index)
                .or_else(|| effects.last())
                .copied()
                .unwrap_or_default(),
        }
    }
}

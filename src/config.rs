//! Carousel options and the deep-merge rules used to resolve them.
//!
//! Options are resolved on a JSON representation: user input is merged over the
//! serialized defaults (or over the live configuration when reconfiguring) and the
//! result is deserialized back into a [`Config`]. Nested objects merge key by key,
//! while arrays and scalars from the partial input always replace the base value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::*;
use crate::document::ContainerHandle;
use crate::effect::EffectSetting;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContainerHandle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_class: Option<String>,

    /// Caps the number of slides per container; 0 uses every slide found.
    pub slide_count: usize,
    pub slide_views: u32,
    pub slide_class: String,

    pub effect: EffectSetting,
    pub time_views: TimeViews,
    pub auto_play: bool,
    pub pause_on_hover: bool,
    #[serde(rename = "loop")]
    pub looping: bool,

    pub navigation: Navigation,
    pub responsive: Vec<Breakpoint>,
    pub number_format: NumberFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: None,
            content_id: None,
            content_class: None,
            slide_count: 0,
            slide_views: 1,
            slide_class: DEFAULT_SLIDE_CLASS.to_string(),
            effect: EffectSetting::default(),
            time_views: TimeViews::One(DEFAULT_TIME_VIEW),
            auto_play: true,
            pause_on_hover: true,
            looping: true,
            navigation: Navigation::default(),
            responsive: Vec::new(),
            number_format: NumberFormat::default(),
        }
    }
}

/// How the carousel finds its containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerLocator<'a> {
    Element(ContainerHandle),
    Id(&'a str),
    Selector(&'a str),
}

impl Config {
    /// Merge `partial` over the defaults and validate the result.
    pub fn resolve(partial: Value) -> Result<Config, ConfigError> {
        Config::default().merged(partial)
    }

    pub fn from_json_str(json: &str) -> Result<Config, ConfigError> {
        Config::resolve(serde_json::from_str(json)?)
    }

    /// Merge `partial` over this configuration and validate the result.
    pub fn merged(&self, partial: Value) -> Result<Config, ConfigError> {
        let base = serde_json::to_value(self)?;
        let config: Config = serde_json::from_value(merge_deep(base, partial))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locator().is_none() {
            return Err(ConfigError::MissingLocator);
        }
        for (index, breakpoint) in self.responsive.iter().enumerate() {
            breakpoint
                .media()
                .map_err(|found| ConfigError::Breakpoint { index, found })?;
        }
        Ok(())
    }

    /// The first locator set, in order: element, id, selector.
    pub fn locator(&self) -> Option<ContainerLocator<'_>> {
        if let Some(handle) = self.content {
            Some(ContainerLocator::Element(handle))
        } else if let Some(id) = self.content_id.as_deref() {
            Some(ContainerLocator::Id(id))
        } else {
            self.content_class.as_deref().map(ContainerLocator::Selector)
        }
    }
}

/// Recursively merge `partial` into `base`.
pub fn merge_deep(base: Value, partial: Value) -> Value {
    match (base, partial) {
        (Value::Object(mut base), Value::Object(partial)) => {
            for (key, value) in partial {
                let merged = match (base.remove(&key), value) {
                    (Some(existing @ Value::Object(_)), value @ Value::Object(_)) => {
                        merge_deep(existing, value)
                    }
                    (_, value) => value,
                };
                base.insert(key, merged);
            }
            Value::Object(base)
        }
        (_, partial) => partial,
    }
}

// --- Timing ---

/// Autoplay delay: one duration for every slide, or one per slide (ms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeViews {
    One(Millis),
    PerSlide(Vec<Millis>),
}

impl TimeViews {
    /// How long the slide at `index` stays before autoplay advances.
    /// Zero durations count as missing.
    pub fn delay_for(&self, index: usize) -> Millis {
        let nonzero = |ms: &Millis| *ms > 0;
        let delay = match self {
            TimeViews::One(ms) => Some(*ms).filter(nonzero),
            TimeViews::PerSlide(list) => list
                .get(index)
                .copied()
                .filter(nonzero)
                .or_else(|| list.last().copied().filter(nonzero)),
        };
        delay.unwrap_or(DEFAULT_TIME_VIEW)
    }
}

// --- Navigation ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Navigation {
    pub arrows: bool,
    pub dots: bool,
    pub keyboard: bool,
    pub touch: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self { arrows: true, dots: true, keyboard: true, touch: true }
    }
}

/// Partial navigation flags carried by a breakpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrows: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dots: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub touch: Option<bool>,
}

impl NavigationOverride {
    pub fn apply_to(&self, navigation: &mut Navigation) {
        if let Some(arrows) = self.arrows {
            navigation.arrows = arrows;
        }
        if let Some(dots) = self.dots {
            navigation.dots = dots;
        }
        if let Some(keyboard) = self.keyboard {
            navigation.keyboard = keyboard;
        }
        if let Some(touch) = self.touch {
            navigation.touch = touch;
        }
    }
}

// --- Responsive ---

/// A viewport-width predicate and the options it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breakpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_media: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_media: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp_media: Option<RespMedia>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_views: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_views: Option<TimeViews>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationOverride>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RespMedia {
    Range([u32; 2]),
    Exact(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaQuery {
    MaxWidth(u32),
    MinWidth(u32),
    Range { lo: u32, hi: u32 },
    Exact(u32),
}

impl MediaQuery {
    pub fn matches(self, width: u32) -> bool {
        match self {
            MediaQuery::MaxWidth(max) => width <= max,
            MediaQuery::MinWidth(min) => width >= min,
            MediaQuery::Range { lo, hi } => (lo..=hi).contains(&width),
            MediaQuery::Exact(exact) => width == exact,
        }
    }
}

impl Breakpoint {
    /// The rule's predicate, or the number of predicates found when it isn't exactly one.
    pub fn media(&self) -> Result<MediaQuery, usize> {
        let found = [
            self.max_media.is_some(),
            self.min_media.is_some(),
            self.resp_media.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();
        if found != 1 {
            return Err(found);
        }

        Ok(match (self.max_media, self.min_media, self.resp_media) {
            (Some(max), _, _) => MediaQuery::MaxWidth(max),
            (_, Some(min), _) => MediaQuery::MinWidth(min),
            (_, _, Some(RespMedia::Range([lo, hi]))) => MediaQuery::Range { lo, hi },
            (_, _, Some(RespMedia::Exact(exact))) => MediaQuery::Exact(exact),
            (None, None, None) => unreachable!("exactly one predicate was counted"),
        })
    }

    pub fn matches(&self, width: u32) -> bool {
        self.media().is_ok_and(|media| media.matches(width))
    }
}

/// Index of the last rule matching `width`, if any.
pub fn resolve_breakpoint(rules: &[Breakpoint], width: u32) -> Option<usize> {
    rules.iter().rposition(|rule| rule.matches(width))
}

// --- Number formatting ---

/// Options handed to the label formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberFormat {
    pub abbreviate: bool,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub abbreviations: Abbreviations,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            abbreviate: false,
            thousands_separator: " ".to_string(),
            decimal_separator: ",".to_string(),
            abbreviations: Abbreviations::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Abbreviations {
    pub thousand: String,
    pub million: String,
    pub billion: String,
    pub trillion: String,
}

impl Default for Abbreviations {
    fn default() -> Self {
        Self {
            thousand: "K".to_string(),
            million: "M".to_string(),
            billion: "B".to_string(),
            trillion: "T".to_string(),
        }
    }
}

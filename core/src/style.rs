use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker in a style name that asks for a hotter sampling temperature.
pub const INTENSITY_MARKER: &str = "cybernetic";

const HOT_TEMPERATURE: f32 = 0.9;
const BASE_TEMPERATURE: f32 = 0.7;

/// The known remix styles, from plain to most stylised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    #[default]
    Casual,
    Cybernetic,
    VeryCybernetic,
    ExtremeCybernetic,
}

impl Style {
    pub const ALL: [Style; 4] = [
        Style::Casual,
        Style::Cybernetic,
        Style::VeryCybernetic,
        Style::ExtremeCybernetic,
    ];

    /// Exact, case-sensitive lookup. Anything else is `None`.
    pub fn from_name(name: &str) -> Option<Style> {
        Style::ALL.into_iter().find(|s| s.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Casual => "casual",
            Style::Cybernetic => "cybernetic",
            Style::VeryCybernetic => "very-cybernetic",
            Style::ExtremeCybernetic => "extreme-cybernetic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Style::Casual => "Neural Baseline",
            Style::Cybernetic => "Cybernetic Enhancement",
            Style::VeryCybernetic => "Neural Overdrive",
            Style::ExtremeCybernetic => "Digital Ascension",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampling temperature for a raw style name.
///
/// Works on the name rather than on [`Style`] so unknown names carrying the
/// marker (e.g. `"mildly-cybernetic"`) are still sampled hot.
pub fn temperature_for(style: &str) -> f32 {
    if style.contains(INTENSITY_MARKER) {
        HOT_TEMPERATURE
    } else {
        BASE_TEMPERATURE
    }
}

/// Human label for a raw style name, `"Enhanced"` when the name is unknown.
pub fn label_for(style: &str) -> &'static str {
    Style::from_name(style).map(|s| s.label()).unwrap_or("Enhanced")
}

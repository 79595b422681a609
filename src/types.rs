//! Loosely-typed numeric parameters.
//!
//! Optional geometry parameters (arrow thickness, curve addition, rotation)
//! follow one substitution rule: a real number is used as given, anything
//! else falls back to the documented default. `Numeric` makes that rule
//! explicit at the call site.

use std::fmt;

/// An optional numeric parameter.
///
/// Only [`Numeric::Number`] suppresses a default. Every `f64` counts as a
/// number, NaN included; strings, `()`, `None` and non-numeric JSON values
/// all become [`Numeric::Missing`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Numeric {
    Number(f64),
    #[default]
    Missing,
}

impl Numeric {
    /// Use the number if there is one, otherwise `default`.
    #[inline]
    pub fn or(self, default: f64) -> f64 {
        match self {
            Numeric::Number(value) => value,
            Numeric::Missing => default,
        }
    }

    /// Use the number if there is one, otherwise compute the default lazily.
    #[inline]
    pub fn or_else(self, default: impl FnOnce() -> f64) -> f64 {
        match self {
            Numeric::Number(value) => value,
            Numeric::Missing => default(),
        }
    }

    /// Coerce to a number, `0` when missing.
    #[inline]
    pub fn or_zero(self) -> f64 {
        self.or(0.0)
    }

    #[inline]
    pub fn is_number(self) -> bool {
        matches!(self, Numeric::Number(_))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

impl From<Option<f64>> for Numeric {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Numeric::Missing, Numeric::Number)
    }
}

impl From<()> for Numeric {
    fn from(_: ()) -> Self {
        Numeric::Missing
    }
}

/// Text is never a number, even when it looks like one.
impl From<&str> for Numeric {
    fn from(_: &str) -> Self {
        Numeric::Missing
    }
}

impl From<String> for Numeric {
    fn from(_: String) -> Self {
        Numeric::Missing
    }
}

impl From<&serde_json::Value> for Numeric {
    fn from(value: &serde_json::Value) -> Self {
        value.as_f64().map_or(Numeric::Missing, Numeric::Number)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Number(value) => write!(f, "{}", value),
            Numeric::Missing => write!(f, "missing"),
        }
    }
}

/// Replace NaN and infinities by `fallback`.
#[inline]
pub(crate) fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

#![forbid(unsafe_code)]

//! Layout configuration.
//!
//! [`LayoutConfig`] carries the values an ordered layout needs from its
//! environment: the style class prefix every generated class name is derived
//! from, and the pixel size of one spacing gap.

use std::borrow::Cow;
use std::env;

/// Default style class prefix of an ordered layout.
pub const DEFAULT_CLASS_NAME: &str = "i-orderedlayout";

/// Default gap between two spaced children, in pixels.
pub const DEFAULT_SPACING_UNIT: u32 = 8;

/// Environment variable overriding [`LayoutConfig::spacing_unit`].
pub const SPACING_UNIT_ENV: &str = "ORDO_SPACING_UNIT";

/// Environment variable overriding [`LayoutConfig::class_name`].
pub const CLASS_NAME_ENV: &str = "ORDO_CLASS_NAME";

/// Configuration of an ordered layout.
///
/// # Example
///
/// ```
/// use ordo_core::LayoutConfig;
///
/// let config = LayoutConfig::new().spacing_unit(4);
/// assert_eq!(config.spacing(), 4);
/// assert_eq!(config.style_name("margin-top"), "i-orderedlayout-margin-top");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    class_name: Cow<'static, str>,
    spacing_unit: u32,
}

impl LayoutConfig {
    /// Configuration with the default class prefix and spacing unit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            class_name: Cow::Borrowed(DEFAULT_CLASS_NAME),
            spacing_unit: DEFAULT_SPACING_UNIT,
        }
    }

    /// Defaults overlaid with `ORDO_SPACING_UNIT` and `ORDO_CLASS_NAME`.
    ///
    /// Unparseable or empty values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overlaid with values produced by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();
        if let Some(unit) = lookup(SPACING_UNIT_ENV).and_then(|v| v.trim().parse::<u32>().ok()) {
            config.spacing_unit = unit;
        }
        if let Some(name) = lookup(CLASS_NAME_ENV) {
            let name = name.trim();
            if !name.is_empty() {
                config.class_name = Cow::Owned(name.to_owned());
            }
        }
        config
    }

    /// Set the style class prefix.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<Cow<'static, str>>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the spacing unit in pixels.
    #[must_use]
    pub fn spacing_unit(mut self, spacing_unit: u32) -> Self {
        self.spacing_unit = spacing_unit;
        self
    }

    /// The style class prefix.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.class_name
    }

    /// The spacing unit in pixels.
    #[inline]
    pub const fn spacing(&self) -> u32 {
        self.spacing_unit
    }

    /// Derived class name: `<prefix>-<suffix>`.
    pub fn style_name(&self, suffix: &str) -> String {
        format!("{}-{}", self.class_name, suffix)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.prefix(), "i-orderedlayout");
        assert_eq!(config.spacing(), 8);
    }

    #[test]
    fn builder_methods_chain() {
        let config = LayoutConfig::new().class_name("row").spacing_unit(12);
        assert_eq!(config.prefix(), "row");
        assert_eq!(config.spacing(), 12);
        assert_eq!(config.style_name("hspacing"), "row-hspacing");
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = LayoutConfig::from_lookup(|key| match key {
            SPACING_UNIT_ENV => Some(" 6 ".to_owned()),
            CLASS_NAME_ENV => Some("v-layout".to_owned()),
            _ => None,
        });
        assert_eq!(config.spacing(), 6);
        assert_eq!(config.prefix(), "v-layout");
    }

    #[test]
    fn lookup_ignores_garbage() {
        let config = LayoutConfig::from_lookup(|key| match key {
            SPACING_UNIT_ENV => Some("wide".to_owned()),
            CLASS_NAME_ENV => Some("   ".to_owned()),
            _ => None,
        });
        assert_eq!(config, LayoutConfig::new());
    }
}

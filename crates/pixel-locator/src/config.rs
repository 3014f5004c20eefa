//! Configuration for locator construction.

use std::path::Path;

use geoloc_common::GeolocError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Bounds on the swath inverse search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwathSearchConfig {
    /// Half-size (pixels) of the square window the search may visit around
    /// its seed pixel.
    pub search_radius: usize,

    /// Pixel stride of the coarse seed index in both directions.
    pub seed_stride: usize,

    /// Radius (pixels) of the exhaustive neighborhood check around the
    /// best pixel.
    pub wobble: usize,

    /// Lower bound for the seed index cell size in degrees.
    pub min_cell_degrees: f64,
}

impl Default for SwathSearchConfig {
    fn default() -> Self {
        Self {
            search_radius: 128,
            seed_stride: 16,
            wobble: 1,
            min_cell_degrees: 0.5,
        }
    }
}

impl SwathSearchConfig {
    /// Validate the search bounds.
    pub fn validate(&self) -> Result<(), String> {
        if self.seed_stride == 0 {
            return Err("seed_stride must be > 0".to_string());
        }

        if self.search_radius < self.seed_stride {
            return Err("search_radius must be >= seed_stride".to_string());
        }

        if !(self.min_cell_degrees > 0.0 && self.min_cell_degrees <= 90.0) {
            return Err("min_cell_degrees must be in (0, 90]".to_string());
        }

        Ok(())
    }
}

/// Configuration for the pixel locator factory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Swath inverse search bounds.
    pub swath: SwathSearchConfig,

    /// Acceptance radius for along-track inverse lookups in kilometers.
    pub track_max_distance_km: f64,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            swath: SwathSearchConfig::default(),
            track_max_distance_km: 5.0,
        }
    }
}

impl LocatorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source, starting from defaults.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = parse_var(&lookup, "SWATH_SEARCH_RADIUS") {
            config.swath.search_radius = val;
        }

        if let Some(val) = parse_var(&lookup, "SWATH_SEED_STRIDE") {
            config.swath.seed_stride = val;
        }

        if let Some(val) = parse_var(&lookup, "SWATH_WOBBLE") {
            config.swath.wobble = val;
        }

        if let Some(val) = parse_var(&lookup, "SWATH_MIN_CELL_DEGREES") {
            config.swath.min_cell_degrees = val;
        }

        if let Some(val) = parse_var(&lookup, "TRACK_MAX_DISTANCE_KM") {
            config.track_max_distance_km = val;
        }

        config
    }

    /// Parse configuration from a YAML document. Missing keys keep their
    /// default values.
    pub fn from_yaml_str(yaml: &str) -> geoloc_common::Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| GeolocError::Config(e.to_string()))
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> geoloc_common::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| GeolocError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&yaml)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.swath.validate()?;

        if !(self.track_max_distance_km > 0.0 && self.track_max_distance_km.is_finite()) {
            return Err("track_max_distance_km must be a positive number".to_string());
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(val) => Some(val),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparsable configuration value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_is_valid() {
        assert!(LocatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_lookup() {
        let config = LocatorConfig::from_lookup(lookup_from(&[
            ("SWATH_SEARCH_RADIUS", "64"),
            ("SWATH_SEED_STRIDE", "8"),
            ("SWATH_WOBBLE", "2"),
            ("SWATH_MIN_CELL_DEGREES", "0.25"),
            ("TRACK_MAX_DISTANCE_KM", "12.5"),
        ]));

        assert_eq!(config.swath.search_radius, 64);
        assert_eq!(config.swath.seed_stride, 8);
        assert_eq!(config.swath.wobble, 2);
        assert_eq!(config.swath.min_cell_degrees, 0.25);
        assert_eq!(config.track_max_distance_km, 12.5);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = LocatorConfig::from_lookup(lookup_from(&[
            ("SWATH_SEED_STRIDE", "sixteen"),
            ("SWATH_WOBBLE", " 3 "),
        ]));
        assert_eq!(config.swath.seed_stride, 16);
        assert_eq!(config.swath.wobble, 3);
    }

    #[test]
    fn test_validate() {
        let mut config = LocatorConfig::default();
        config.swath.seed_stride = 0;
        assert_eq!(config.validate(), Err("seed_stride must be > 0".to_string()));

        let mut config = LocatorConfig::default();
        config.swath.search_radius = 4;
        assert!(config.validate().is_err());

        let mut config = LocatorConfig::default();
        config.swath.min_cell_degrees = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = LocatorConfig::default();
        config.track_max_distance_km = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = LocatorConfig::from_yaml_str("swath:\n  seed_stride: 4\n").unwrap();
        assert_eq!(config.swath.seed_stride, 4);
        assert_eq!(config.swath.search_radius, 128);
        assert_eq!(config.track_max_distance_km, 5.0);
    }

    #[test]
    fn test_from_yaml_invalid() {
        let err = LocatorConfig::from_yaml_str("swath: [1, 2]").unwrap_err();
        assert!(matches!(err, GeolocError::Config(_)));
    }
}

use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the optional inline JSON block in `index.html` that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "coordinator-config";

/// Tunables for the reveal, navigation and trail behaviour of the landing page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CoordinatorConfig {
    /// Height of the fixed navbar that navigation must not scroll under.
    pub navbar_height: f64,
    pub stagger_delay_ms: u32,
    pub trail_capacity: usize,
    /// `rootMargin` handed to the intersection observer.
    pub observer_root_margin: String,
    pub observer_thresholds: Vec<f64>,
    /// Extra pixels above and below the viewport the scroll fallback accepts.
    pub fallback_margin: f64,
    /// Delay of the fallback pass after mount.
    pub fallback_delay_ms: u32,
    /// Fraction of the viewport height a section top must be above to be active.
    pub active_ratio: f64,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            navbar_height: 80.0,
            stagger_delay_ms: 100,
            trail_capacity: 20,
            observer_root_margin: "500px 0px 500px 0px".to_string(),
            observer_thresholds: vec![0.0, 0.01],
            fallback_margin: 500.0,
            fallback_delay_ms: 100,
            active_ratio: 0.75,
        }
    }
}

impl CoordinatorConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.trail_capacity == 0 {
            return Err(ConfigError::Invalid("trailCapacity must be at least 1".to_string()));
        }
        for (name, value) in [
            ("navbarHeight", self.navbar_height),
            ("fallbackMargin", self.fallback_margin),
            ("activeRatio", self.active_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if let Some(bad) = self
            .observer_thresholds
            .iter()
            .find(|threshold| !(0.0..=1.0).contains(*threshold))
        {
            return Err(ConfigError::Invalid(format!("observer threshold {bad} is outside [0, 1]")));
        }
        if self.observer_root_margin.trim().is_empty() {
            return Err(ConfigError::Invalid("observerRootMargin must not be empty".to_string()));
        }
        Ok(self)
    }
}

/// Reads the page's inline config block, falling back to defaults when it is
/// absent or unusable.
pub fn load() -> CoordinatorConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        None => CoordinatorConfig::default(),
        Some(raw) => CoordinatorConfig::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring #{CONFIG_ELEMENT_ID}: {e}");
            CoordinatorConfig::default()
        }),
    }
}

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Timing and selectors for the entrance animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Group selectors, concatenated in this order.
    pub groups: Vec<&'static str>,
    pub stagger_secs: f64,
    pub offset_px: f64,
    pub opacity_secs: f64,
    pub transform_secs: f64,
    pub transform_easing: &'static str,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            groups: vec![
                ".hero-inner > *",
                ".hero-cta > *",
                ".section-title",
                ".card",
                ".download-card",
                ".num",
            ],
            stagger_secs: 0.06,
            offset_px: 36.0,
            opacity_secs: 0.65,
            transform_secs: 0.75,
            transform_easing: "cubic-bezier(.2,.9,.3,1)",
        }
    }
}

/// Every name and constant the page script depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    pub theme_storage_key: &'static str,
    pub lang_storage_key: &'static str,
    pub theme_toggle_id: &'static str,
    pub lang_toggle_id: &'static str,
    pub theme_attribute: &'static str,
    pub translate_attribute: &'static str,
    pub light_label: &'static str,
    pub dark_label: &'static str,
    pub pt_label: &'static str,
    pub en_label: &'static str,
    pub anchor_selector: &'static str,
    /// Height of the fixed navbar, subtracted from scroll targets.
    pub header_offset: f64,
    pub animation: AnimationConfig,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme",
            lang_storage_key: "lang",
            theme_toggle_id: "theme-toggle",
            lang_toggle_id: "lang-toggle",
            theme_attribute: "data-theme",
            translate_attribute: "data-translate",
            light_label: "☀️",
            dark_label: "🌙",
            pt_label: "PT-BR",
            en_label: "EN",
            anchor_selector: "a[href^=\"#\"]",
            header_offset: 80.0,
            animation: AnimationConfig::default(),
        }
    }
}

impl LandingConfig {
    /// Selector matching every element tagged for translation.
    pub fn translate_selector(&self) -> String {
        format!("[{}]", self.translate_attribute)
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SCROLL_KEY: &str = "scrollPosition";
pub const PENDING_CLASS: &str = "animation-pending";
pub const VISIBLE_CLASS: &str = "animate-visible";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reveal region `{selector}` has threshold {threshold} outside [0, 1]")]
    Threshold { selector: String, threshold: f64 },
    #[error("reveal region #{0} has an empty selector")]
    EmptySelector(usize),
    #[error("hero message interval must be non-zero")]
    ZeroInterval,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// One animated region of the page: which elements to reveal and when.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealRegion {
    pub selector: String,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Pulls the trigger band up from the viewport's bottom edge.
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin_px: u32,
    /// Whether `animation-pending` is applied up front to hold the CSS animation.
    #[serde(default)]
    pub mark_pending: bool,
}

impl RevealRegion {
    pub fn root_margin(&self) -> String {
        if self.bottom_margin_px == 0 {
            "0px".to_owned()
        } else {
            format!("0px 0px -{}px 0px", self.bottom_margin_px)
        }
    }
}

fn default_threshold() -> f64 {
    0.15
}

fn default_bottom_margin() -> u32 {
    80
}

fn default_regions() -> Vec<RevealRegion> {
    vec![
        RevealRegion {
            selector: r#"[class*="animate-"]:not(.scroll-animate)"#.to_owned(),
            threshold: default_threshold(),
            bottom_margin_px: default_bottom_margin(),
            mark_pending: true,
        },
        RevealRegion {
            selector: ".scroll-animate".to_owned(),
            threshold: default_threshold(),
            bottom_margin_px: default_bottom_margin(),
            mark_pending: false,
        },
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeroTimings {
    pub entry_delay_ms: u32,
    pub cta_default_delay_ms: u32,
    pub message_interval_ms: u32,
    pub parallax_rate: f64,
    pub parallax_throttle_ms: u32,
}

impl Default for HeroTimings {
    fn default() -> Self {
        Self {
            entry_delay_ms: 300,
            cta_default_delay_ms: 2500,
            message_interval_ms: 4000,
            parallax_rate: -0.5,
            parallax_throttle_ms: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResponsiveSettings {
    pub mobile_breakpoint_px: u32,
    pub resize_throttle_ms: u32,
}

impl Default for ResponsiveSettings {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            resize_throttle_ms: 250,
        }
    }
}

/// User-facing strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageCopy {
    pub contact_ack: String,
    pub image_fallback: String,
}

impl Default for PageCopy {
    fn default() -> Self {
        Self {
            contact_ack: "お問い合わせを受け付けました。ありがとうございます。".to_owned(),
            image_fallback: "画像を読み込めませんでした".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub reveal_regions: Vec<RevealRegion>,
    pub scroll_storage_key: String,
    pub reconcile_delay_ms: u32,
    pub hero: HeroTimings,
    pub responsive: ResponsiveSettings,
    pub copy: PageCopy,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reveal_regions: default_regions(),
            scroll_storage_key: DEFAULT_SCROLL_KEY.to_owned(),
            reconcile_delay_ms: 100,
            hero: HeroTimings::default(),
            responsive: ResponsiveSettings::default(),
            copy: PageCopy::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (idx, region) in self.reveal_regions.iter().enumerate() {
            if region.selector.trim().is_empty() {
                return Err(ConfigError::EmptySelector(idx));
            }
            if !(0.0..=1.0).contains(&region.threshold) {
                return Err(ConfigError::Threshold {
                    selector: region.selector.clone(),
                    threshold: region.threshold,
                });
            }
        }

        if self.hero.message_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(())
    }
}

use serde::Deserialize;
use thiserror::Error;

/// How offending characters are marked under the source line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    /// A `^` under every offending character (default).
    #[default]
    Caret,
    /// `1` under the opener (or lone offender), `2` under the closer.
    Numbered,
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConfigError {
    /// Description of the validation error.
    pub message: String,
}

/// Report configuration options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How offending characters are marked.
    pub marker_style: MarkerStyle,
    /// Number of spaces a tab expands to in rendered source lines (1-16, default: 4).
    pub tab_width: usize,
    /// Whether to render the offending source lines under the message.
    pub show_source: bool,
}

impl Config {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is out of acceptable range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_width == 0 || self.tab_width > 16 {
            return Err(ConfigError {
                message: format!(
                    "tab_width must be between 1 and 16, got {}",
                    self.tab_width
                ),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker_style: MarkerStyle::default(),
            tab_width: 4,
            show_source: true,
        }
    }
}

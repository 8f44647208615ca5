//! Build-time configuration
//!
//! Trunk injects `SPM_*` environment variables at compile time; everything
//! has a usable default so a plain `trunk serve` against a local backend
//! works with no configuration at all.

/// Light/dark theme switch, applied as a class on the app container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: &'static str,
    pub page_size: u32,
    pub greeting: &'static str,
    pub footer_text: &'static str,
    pub theme: Theme,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let page_size = option_env!("SPM_PAGE_SIZE")
            .and_then(|v| v.parse().ok())
            .unwrap_or(25);
        let theme = match option_env!("SPM_THEME") {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        };
        Self {
            api_base: option_env!("SPM_API_BASE").unwrap_or("/api/v1"),
            page_size,
            greeting: option_env!("SPM_GREETING").unwrap_or("Simple Photo Management"),
            footer_text: option_env!("SPM_FOOTER_TEXT").unwrap_or(""),
            theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // without SPM_* set at build time, from_env falls back everywhere
        let config = AppConfig::from_env();
        assert!(config.page_size >= 1);
        assert!(config.api_base.starts_with('/') || config.api_base.starts_with("http"));
        assert!(!config.greeting.is_empty());
    }

    #[test]
    fn test_theme_classes() {
        assert_eq!(Theme::Light.css_class(), "theme-light");
        assert_eq!(Theme::Dark.css_class(), "theme-dark");
    }
}

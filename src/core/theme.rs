use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

/// Background color used when the host theme carries no `bg_color` token.
pub const FALLBACK_BG_COLOR: &str = "#ffffff";

/// Text color used when the host theme carries no `body_text` token.
pub const FALLBACK_BODY_TEXT_COLOR: &str = "#31333f";

/// Palette supplied by the hosting application. Read-only to this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Theme {
    #[serde(default)]
    pub colors: ThemeColors,
}

/// Named color tokens consumed by the spec composer.
///
/// Tokens are optional so a partially populated theme still produces a
/// renderable chart; absent tokens fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThemeColors {
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub body_text: Option<String>,
}

impl Theme {
    #[must_use]
    pub fn new(bg_color: impl Into<String>, body_text: impl Into<String>) -> Self {
        Self {
            colors: ThemeColors {
                bg_color: Some(bg_color.into()),
                body_text: Some(body_text.into()),
            },
        }
    }

    #[must_use]
    pub fn bg_color(&self) -> &str {
        match self.colors.bg_color.as_deref() {
            Some(color) => color,
            None => {
                debug!("theme missing bg_color token, using built-in fallback");
                FALLBACK_BG_COLOR
            }
        }
    }

    #[must_use]
    pub fn body_text_color(&self) -> &str {
        match self.colors.body_text.as_deref() {
            Some(color) => color,
            None => {
                debug!("theme missing body_text token, using built-in fallback");
                FALLBACK_BODY_TEXT_COLOR
            }
        }
    }

    /// Maps theme tokens onto the spec config keys the visual grammar styles:
    /// chart background plus axis, legend, and title text colors.
    #[must_use]
    pub fn config_defaults(&self) -> Value {
        let bg = self.bg_color();
        let text = self.body_text_color();
        json!({
            "background": bg,
            "axis": {
                "labelColor": text,
                "titleColor": text,
            },
            "legend": {
                "labelColor": text,
                "titleColor": text,
            },
            "title": {
                "color": text,
            },
        })
    }
}

//! Global visual bindings shared through context.

/// Accent colour used for emphasis across the page.
pub const ACCENT: &str = "#ff9000";

/// Display font with the system fallback chain used when Molot is unavailable.
pub const FONT_STACK: &str = "Molot, ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: &'static str,
    pub font_family: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: ACCENT,
            font_family: FONT_STACK,
        }
    }
}

impl Theme {
    /// Inline style for the page root: exposes the accent as `--accent` for
    /// stylesheet rules and applies the font preference.
    pub fn root_style(&self) -> String {
        format!(
            "--accent: {}; font-family: {};",
            self.accent, self.font_family
        )
    }

    /// Inset ring in the accent colour (outlined buttons).
    pub fn accent_ring(&self) -> String {
        format!("box-shadow: 0 0 0 1px {} inset;", self.accent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_style_exposes_accent_and_font() {
        let style = Theme::default().root_style();
        assert!(style.contains("--accent: #ff9000;"));
        assert!(style.contains("font-family: Molot, ui-sans-serif"));
        assert!(style.ends_with("Roboto;"));
    }
}

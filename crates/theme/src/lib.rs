pub mod colors;

pub use colors::Color;

use pibench_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:       Color,
    pub foreground:       Color,
    pub accent:           Color,
    pub chart_background: Color,
    pub cpu_line:         Color,
    pub ram_line:         Color,
    pub net_in_line:      Color,
    pub net_out_line:     Color,
    pub font_size:        f32,
    pub padding:          u16,
    pub spacing:          u16,
    pub chart_height:     f32,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let parse = |hex: &str, fallback: Color| Color::from_hex(hex).unwrap_or(fallback);

        Self {
            background:       parse(&cfg.background, Color::DARK),
            foreground:       parse(&cfg.foreground, Color::WHITE),
            accent:           parse(&cfg.accent, Color::PURPLE),
            chart_background: parse(&cfg.chart_background, Color::MANTLE),
            cpu_line:         parse(&cfg.cpu_line, Color::BLUE),
            ram_line:         parse(&cfg.ram_line, Color::YELLOW),
            net_in_line:      parse(&cfg.net_in_line, Color::GREEN),
            net_out_line:     parse(&cfg.net_out_line, Color::RED),
            font_size:        cfg.font_size,
            padding:          cfg.padding,
            spacing:          cfg.spacing,
            chart_height:     cfg.chart_height.max(40.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_colors_fall_back() {
        let cfg = ThemeConfig {
            background: "not-a-color".to_string(),
            net_in_line: "#00ff00".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.background, Color::DARK);
        assert_eq!(theme.net_in_line, Color { r: 0.0, g: 1.0, b: 0.0, a: 1.0 });
    }
}

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const DARK:   Self = Self { r: 0.118, g: 0.118, b: 0.180, a: 1.0 }; // #1e1e2e
    pub const MANTLE: Self = Self { r: 0.094, g: 0.094, b: 0.145, a: 1.0 }; // #181825
    pub const WHITE:  Self = Self { r: 0.804, g: 0.839, b: 0.957, a: 1.0 }; // #cdd6f4
    pub const PURPLE: Self = Self { r: 0.796, g: 0.651, b: 0.969, a: 1.0 }; // #cba6f7
    pub const BLUE:   Self = Self { r: 0.537, g: 0.706, b: 0.980, a: 1.0 }; // #89b4fa
    pub const YELLOW: Self = Self { r: 0.976, g: 0.886, b: 0.686, a: 1.0 }; // #f9e2af
    pub const GREEN:  Self = Self { r: 0.651, g: 0.890, b: 0.631, a: 1.0 }; // #a6e3a1
    pub const RED:    Self = Self { r: 0.953, g: 0.545, b: 0.659, a: 1.0 }; // #f38ba8

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<f32> { u8::from_str_radix(s, 16).ok().map(|b| b as f32 / 255.0) };

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: byte(&hex[6..8])?,
            }),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        let c = Color::from_hex("#ff0080").unwrap();
        assert_eq!((c.r, c.g, c.a), (1.0, 0.0, 1.0));
        assert!((c.b - 128.0 / 255.0).abs() < 1e-6);

        let c = Color::from_hex("00000000").unwrap();
        assert_eq!(c.a, 0.0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#gggggg").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::WHITE.with_alpha(3.0).a, 1.0);
        assert_eq!(Color::WHITE.with_alpha(-1.0).a, 0.0);
    }
}

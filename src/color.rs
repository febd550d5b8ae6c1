// Simple color struct plus the fixed three-color palette the particles and
// connection lines draw from

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// Site accent colors: orange, green, blue
pub const PALETTE: [Color; 3] = [
    Color { r: 234, g: 118, b: 5 },
    Color { r: 70, g: 166, b: 17 },
    Color { r: 0, g: 74, b: 173 },
];

// Connection lines always use the palette blue
pub const CONNECTION_COLOR: Color = PALETTE[2];

impl Color {
    // CSS color string with the given alpha, for canvas fill/stroke styles
    pub fn to_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_string_keeps_channels_and_alpha() {
        let css = PALETTE[0].to_rgba(0.5);
        assert_eq!(css, "rgba(234, 118, 5, 0.5)");
    }

    #[test]
    fn connection_color_is_palette_blue() {
        assert_eq!(CONNECTION_COLOR, Color { r: 0, g: 74, b: 173 });
    }
}

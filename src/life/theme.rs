// theme.rs - Site palette
//
// The page styles hard-code the same three colors; the GIF tool bakes
// them too so offline renders match the live canvas.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub ink: Color,
    pub grid: Color,
}

pub const PAPER: Theme = Theme {
    background: Color { r: 0xf5, g: 0xf2, b: 0xe9 },
    ink: Color { r: 0x2d, g: 0x2d, b: 0x2d },
    grid: Color { r: 0xd4, g: 0xcf, b: 0xc4 },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_renders_lowercase_hex() {
        assert_eq!(PAPER.background.css(), "#f5f2e9");
        assert_eq!(PAPER.ink.css(), "#2d2d2d");
        assert_eq!(PAPER.grid.css(), "#d4cfc4");
    }
}

// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // CSS fill style, hex when opaque so it matches what the page stylesheet uses
    pub fn to_css(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

pub const CONFETTI_PALETTE: [Color; 5] = [
    Color::from_u32(0xff7ad9ff),
    Color::from_u32(0x8ae6ffff),
    Color::from_u32(0xffd166ff),
    Color::from_u32(0x9fffcbff),
    Color::from_u32(0xffffffff),
];

pub const FIREWORKS_PALETTE: [Color; 5] = [
    Color::from_u32(0xff4d4dff),
    Color::from_u32(0xffd166ff),
    Color::from_u32(0x8ae6ffff),
    Color::from_u32(0x9fffcbff),
    Color::from_u32(0xffffffff),
];

pub const BALLOON_PALETTE: [Color; 5] = [
    Color::from_u32(0xff7ad9ff),
    Color::from_u32(0x8ae6ffff),
    Color::from_u32(0xffd166ff),
    Color::from_u32(0x9fffcbff),
    Color::from_u32(0xd4bfffff),
];

pub const WHITE: Color = Color::from_u32(0xffffffff);

// Particles cycle through a palette by spawn index. An empty palette paints white.
pub fn palette_color(palette: &[Color], index: usize) -> Color {
    if palette.is_empty() {
        return WHITE;
    }
    palette[index % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let c = Color::from_u32(0x11223344);
        assert_eq!((c.r, c.g, c.b, c.a), (0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn opaque_colors_render_as_hex() {
        assert_eq!(CONFETTI_PALETTE[0].to_css(), "#ff7ad9");
        assert_eq!(FIREWORKS_PALETTE[0].to_css(), "#ff4d4d");
    }

    #[test]
    fn translucent_colors_render_as_rgba() {
        let c = Color::from_u32(0xff000000);
        assert_eq!(c.to_css(), "rgba(255, 0, 0, 0)");
    }

    #[test]
    fn palette_wraps_by_index() {
        assert_eq!(palette_color(&FIREWORKS_PALETTE, 7), FIREWORKS_PALETTE[2]);
    }

    #[test]
    fn empty_palette_falls_back_to_white() {
        assert_eq!(palette_color(&[], 0), WHITE);
        assert_eq!(palette_color(&[], 41), WHITE);
    }
}

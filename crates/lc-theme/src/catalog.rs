//! The palette table and its accessors.

use rand::Rng;

/// Plain RGB color, renderer-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// One named chart palette.
///
/// `opacity` applies to the grid lines only; everything else is drawn
/// opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeStyle {
    pub name: &'static str,
    pub background: Rgb,
    pub text: Rgb,
    pub border: Rgb,
    pub line: Rgb,
    pub grid: Rgb,
    pub opacity: f32,
}

const fn style(
    name: &'static str,
    background: Rgb,
    text: Rgb,
    border: Rgb,
    line: Rgb,
    grid: Rgb,
) -> ThemeStyle {
    ThemeStyle {
        name,
        background,
        text,
        border,
        line,
        grid,
        opacity: 0.3,
    }
}

/// The fixed palette catalog. Read-only, indexed by position.
pub static THEMES: [ThemeStyle; 15] = [
    style(
        "Classic Brutal",
        Rgb::new(0xff, 0xff, 0xff),
        Rgb::new(0x00, 0x00, 0x00),
        Rgb::new(0x00, 0x00, 0x00),
        Rgb::new(0x00, 0x00, 0x00),
        Rgb::new(0x00, 0x00, 0x00),
    ),
    style(
        "Matrix",
        Rgb::new(0x00, 0x00, 0x00),
        Rgb::new(0x22, 0xc5, 0x5e),
        Rgb::new(0x22, 0xc5, 0x5e),
        Rgb::new(0x00, 0xff, 0x00),
        Rgb::new(0x00, 0x44, 0x00),
    ),
    style(
        "Neon Pink",
        Rgb::new(0x2e, 0x10, 0x65),
        Rgb::new(0xec, 0x48, 0x99),
        Rgb::new(0xec, 0x48, 0x99),
        Rgb::new(0xff, 0x00, 0xff),
        Rgb::new(0x55, 0x00, 0x55),
    ),
    style(
        "Blood Error",
        Rgb::new(0x00, 0x00, 0x00),
        Rgb::new(0xef, 0x44, 0x44),
        Rgb::new(0xef, 0x44, 0x44),
        Rgb::new(0xff, 0x00, 0x00),
        Rgb::new(0x33, 0x00, 0x00),
    ),
    style(
        "Amber Monitor",
        Rgb::new(0x00, 0x00, 0x00),
        Rgb::new(0xea, 0xb3, 0x08),
        Rgb::new(0xea, 0xb3, 0x08),
        Rgb::new(0xff, 0xaa, 0x00),
        Rgb::new(0x33, 0x22, 0x00),
    ),
    style(
        "One Dark Pro",
        Rgb::new(0x28, 0x2c, 0x34),
        Rgb::new(0xab, 0xb2, 0xbf),
        Rgb::new(0x52, 0x8b, 0xff),
        Rgb::new(0x61, 0xaf, 0xef),
        Rgb::new(0x3b, 0x40, 0x48),
    ),
    style(
        "Dracula",
        Rgb::new(0x28, 0x2a, 0x36),
        Rgb::new(0xf8, 0xf8, 0xf2),
        Rgb::new(0xbd, 0x93, 0xf9),
        Rgb::new(0xff, 0x79, 0xc6),
        Rgb::new(0x44, 0x47, 0x5a),
    ),
    style(
        "Tokyo Night",
        Rgb::new(0x1a, 0x1b, 0x26),
        Rgb::new(0xa9, 0xb1, 0xd6),
        Rgb::new(0x7a, 0xa2, 0xf7),
        Rgb::new(0x7d, 0xcf, 0xff),
        Rgb::new(0x24, 0x28, 0x3b),
    ),
    style(
        "Cyber Ice",
        Rgb::new(0x08, 0x33, 0x44),
        Rgb::new(0xbf, 0xdb, 0xfe),
        Rgb::new(0xbf, 0xdb, 0xfe),
        Rgb::new(0x66, 0xcc, 0xff),
        Rgb::new(0x00, 0x11, 0x33),
    ),
    style(
        "Digital Rain",
        Rgb::new(0x06, 0x4e, 0x3b),
        Rgb::new(0x86, 0xef, 0xac),
        Rgb::new(0x86, 0xef, 0xac),
        Rgb::new(0x33, 0xff, 0x33),
        Rgb::new(0x00, 0x33, 0x00),
    ),
    style(
        "Nord",
        Rgb::new(0x2e, 0x34, 0x40),
        Rgb::new(0xd8, 0xde, 0xe9),
        Rgb::new(0x88, 0xc0, 0xd0),
        Rgb::new(0x81, 0xa1, 0xc1),
        Rgb::new(0x3b, 0x42, 0x52),
    ),
    style(
        "Monokai Pro",
        Rgb::new(0x2d, 0x2a, 0x2e),
        Rgb::new(0xfc, 0xfc, 0xfa),
        Rgb::new(0xff, 0xd8, 0x66),
        Rgb::new(0xff, 0x61, 0x88),
        Rgb::new(0x40, 0x3e, 0x41),
    ),
    style(
        "Catppuccin",
        Rgb::new(0x1e, 0x1e, 0x2e),
        Rgb::new(0xcd, 0xd6, 0xf4),
        Rgb::new(0x89, 0xb4, 0xfa),
        Rgb::new(0xf5, 0xc2, 0xe7),
        Rgb::new(0x31, 0x32, 0x44),
    ),
    style(
        "Shades of Purple",
        Rgb::new(0x2d, 0x2b, 0x55),
        Rgb::new(0xff, 0xff, 0xff),
        Rgb::new(0xfa, 0xd0, 0x00),
        Rgb::new(0xff, 0x26, 0xce),
        Rgb::new(0x1e, 0x1e, 0x3f),
    ),
    style(
        "Neon Sunset",
        Rgb::new(0x43, 0x14, 0x07),
        Rgb::new(0xfc, 0xd3, 0x4d),
        Rgb::new(0xfc, 0xd3, 0x4d),
        Rgb::new(0xff, 0xaa, 0x33),
        Rgb::new(0x33, 0x11, 0x00),
    ),
];

/// Look up a palette by catalog index.
pub fn theme(index: usize) -> Option<&'static ThemeStyle> {
    THEMES.get(index)
}

/// Look up a palette, falling back to the first entry for out-of-range
/// indices.
pub fn theme_or_default(index: usize) -> &'static ThemeStyle {
    THEMES.get(index).unwrap_or(&THEMES[0])
}

/// Pick a uniformly random catalog index.
pub fn random_theme_index() -> usize {
    rand::rng().random_range(0..THEMES.len())
}

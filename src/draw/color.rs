//! RGBA color type, named palette, and pixel conversion.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use minipaint::draw::Color;
/// let paint = Color::from_argb(0xFFFFAC00);
/// assert_eq!(paint.a, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xFF) as f64 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
            a: channel(24),
        }
    }

    /// Parses `#RRGGBB` or `#AARRGGBB` hex notation.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_argb(0xFF00_0000 | value)),
            8 => Some(Self::from_argb(value)),
            _ => None,
        }
    }

    /// Packs the color the way a cairo `ARgb32` surface stores it:
    /// premultiplied alpha in a native-endian `u32`.
    pub fn to_premultiplied_argb32(&self) -> u32 {
        let a = to_byte(self.a);
        let premul = |c: f64| to_byte(c.clamp(0.0, 1.0) * self.a.clamp(0.0, 1.0));
        (a << 24) | (premul(self.r) << 16) | (premul(self.g) << 8) | premul(self.b)
    }
}

// Matches cairo's double -> 16-bit -> 8-bit channel reduction.
fn to_byte(value: f64) -> u32 {
    let short = (value.clamp(0.0, 1.0) * 65535.0 + 0.5) as u32;
    short >> 8
}

/// Maps color name strings to Color values (case-insensitive).
///
/// Used by the configuration system to parse color names from the config file.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "canvas-yellow" => Some(CANVAS_YELLOW),
        "paint-orange" => Some(PAINT_ORANGE),
        _ => None,
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Default canvas background (`#FFFF55`).
pub const CANVAS_YELLOW: Color = Color::new(1.0, 1.0, 85.0 / 255.0, 1.0);

/// Default stroke color (`#FFAC00`).
pub const PAINT_ORANGE: Color = Color::new(1.0, 172.0 / 255.0, 0.0, 1.0);

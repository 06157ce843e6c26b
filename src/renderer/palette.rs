//! Colors for game elements

/// An sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string, e.g. for a canvas `fillStyle`
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const GROUND: Color = Color::rgb(0x46, 0x2e, 0x02);

pub const PILLAR_SHAFT: Color = Color::rgb(0x2c, 0x2c, 0x2c);
pub const PILLAR_FLUTE: Color = Color::rgb(0x3d, 0x3d, 0x3d);
pub const PILLAR_BASE: Color = Color::rgb(0x1a, 0x1a, 0x1a);
pub const PILLAR_CAPITAL: Color = Color::rgb(0x4a, 0x4a, 0x4a);

pub const BURST_CORE: Color = Color::rgb(255, 255, 255);
pub const BURST_MID: Color = Color::rgb(200, 230, 255);
pub const BURST_EDGE: Color = Color::rgb(150, 200, 255);

pub const SCORE_FILL: Color = Color::rgb(0x59, 0xd5, 0xff);
pub const SCORE_STROKE: Color = Color::rgb(0x08, 0x6d, 0x8e);

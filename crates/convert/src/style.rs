use std::fmt;

use md5::{Digest, Md5};

pub const STYLE_ID_PREFIX: &str = "style_";

const SATURATION: f64 = 0.7;
const VALUE: f64 = 0.95;

/// A KML color, packed as `aabbggrr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KmlColor(pub u32);

impl KmlColor {
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        KmlColor(0xFF00_0000 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }
}

impl fmt::Display for KmlColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// Per-district visual style, a pure function of the district name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictStyle {
    pub district: String,
    pub style_id: String,
    pub color: KmlColor,
}

impl DistrictStyle {
    pub fn for_district(district: &str) -> Self {
        let digest = name_digest(district);
        Self {
            district: district.to_string(),
            style_id: style_id_from_digest(&digest),
            color: color_from_digest(&digest),
        }
    }
}

fn name_digest(name: &str) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(&Md5::digest(name.as_bytes()));
    out
}

/// `style_` followed by the first 8 hex chars of the name's MD5.
pub fn style_id(district: &str) -> String {
    style_id_from_digest(&name_digest(district))
}

/// Hue from the MD5 of the name, fixed saturation and value.
pub fn district_color(district: &str) -> KmlColor {
    color_from_digest(&name_digest(district))
}

fn style_id_from_digest(digest: &[u8; 16]) -> String {
    let hex: String = digest[..4].iter().map(|b| format!("{b:02x}")).collect();
    format!("{STYLE_ID_PREFIX}{hex}")
}

fn color_from_digest(digest: &[u8; 16]) -> KmlColor {
    let hue = (u128::from_be_bytes(*digest) % 360) as u16;
    let (r, g, b) = hsv_to_rgb(hue, SATURATION, VALUE);
    KmlColor::opaque(r, g, b)
}

/// Six-sector HSV to RGB. Channels are truncated, not rounded.
fn hsv_to_rgb(hue: u16, s: f64, v: f64) -> (u8, u8, u8) {
    let h = hue as f64;
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match hue {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |value: f64| ((value + m) * 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

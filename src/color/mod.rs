use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Fully dark LED
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Convert hue, saturation and value into an RGB color
#[inline]
pub fn hsv_color(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

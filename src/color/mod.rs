mod blend;
pub mod palette;

pub use blend::{blend_colors, blend_over};
use smart_leds::RGB8;

pub type Rgb = RGB8;

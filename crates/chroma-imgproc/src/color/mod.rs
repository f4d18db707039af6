mod gray;
mod hsv;

pub use gray::{gray_from_rgb_u8, rgb_from_gray};
pub use hsv::hsv_from_rgb_u8;

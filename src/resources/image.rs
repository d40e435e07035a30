//! Image decoding into raw RGBA buffers.

use anyhow::Result;
use image::GenericImageView;

/// A decoded image: tightly packed RGBA8 rows.
#[derive(Debug, Clone)]
pub struct RgbaData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decodes any supported image format (the file-type is sniffed from the
/// bytes) into RGBA8.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaData> {
    let img = image::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    Ok(RgbaData {
        width,
        height,
        pixels: img.to_rgba8().into_raw(),
    })
}

/// Loads an image from the assets directory and decodes it to RGBA8.
pub fn load_rgba(file_name: &str) -> Result<RgbaData> {
    decode_rgba(&super::load_binary(file_name)?)
}

//! Upload image preparation.
//!
//! Uploaded images are scaled down and re-encoded as JPEG before being
//! embedded in the project as a `data:` URI, so the request payload stays
//! small no matter what the user picked.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::error::ClientError;

/// Longest edge, in pixels, of an embedded image.
pub const MAX_UPLOAD_DIMENSION: u32 = 800;

/// JPEG quality used when re-encoding uploads.
pub const UPLOAD_JPEG_QUALITY: u8 = 80;

/// Decode `bytes`, fit the image within [`MAX_UPLOAD_DIMENSION`] square
/// (keeping aspect ratio, never upscaling) and return a JPEG data URI.
pub fn prepare_upload(bytes: &[u8]) -> Result<String, ClientError> {
    let decoded = image::load_from_memory(bytes)?;

    let fitted = if decoded.width() > MAX_UPLOAD_DIMENSION || decoded.height() > MAX_UPLOAD_DIMENSION {
        decoded.resize(MAX_UPLOAD_DIMENSION, MAX_UPLOAD_DIMENSION, FilterType::Triangle)
    } else {
        decoded
    };

    // JPEG has no alpha channel.
    let rgb = fitted.to_rgb8();
    let mut encoded = Cursor::new(Vec::new());
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut encoded, UPLOAD_JPEG_QUALITY))?;

    tracing::debug!(
        width = rgb.width(),
        height = rgb.height(),
        bytes = encoded.get_ref().len(),
        "Prepared upload image"
    );

    Ok(format!(
        "data:image/jpeg;base64,{}",
        STANDARD.encode(encoded.get_ref())
    ))
}

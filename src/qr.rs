//! QR rendering of generated links, for terminals and for `<img>` tags.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use qr_code::QrCode;
use thiserror::Error;

/// Quiet zone, in modules, around the terminal rendering.
const TEXT_BORDER: u8 = 3;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("cannot encode QR code: {0}")]
    Encode(String),

    #[error("cannot render QR bitmap: {0}")]
    Bitmap(String),
}

fn encode(data: &str) -> Result<QrCode, QrError> {
    QrCode::new(data).map_err(|e| QrError::Encode(format!("{:?}", e)))
}

/// Renders `data` as a QR code made of block characters, two modules per
/// text row, readable straight from a terminal.
pub fn to_text_qr(data: &str) -> Result<String, QrError> {
    Ok(encode(data)?.to_string(true, TEXT_BORDER))
}

/// Renders `data` as a monochrome BMP embedded in a `data:` URI.
///
/// Without `pixel_per_module` the image has no border and one pixel per
/// module; scale it in CSS with `image-rendering: pixelated`. With it, a one
/// module white border is added before scaling.
pub fn to_uri_qr(data: &str, pixel_per_module: Option<u8>) -> Result<String, QrError> {
    let mut bmp = encode(data)?.to_bmp();
    if let Some(pixel_per_module) = pixel_per_module {
        bmp = bmp
            .add_white_border(1)
            .map_err(|e| QrError::Bitmap(format!("{:?}", e)))?
            .mul(pixel_per_module)
            .map_err(|e| QrError::Bitmap(format!("{:?}", e)))?;
    }

    let mut bytes = Vec::new();
    bmp.write(&mut bytes)
        .map_err(|e| QrError::Bitmap(format!("{:?}", e)))?;

    Ok(format!("data:image/bmp;base64,{}", BASE64.encode(bytes)))
}

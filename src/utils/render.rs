use crate::core::{EnvError, RenderFrame, Result};

/// Encode a RenderFrame::Pixels to a PNG byte vector.
/// - When the `image` feature is enabled, this will encode using the `image` crate.
/// - Without the feature, returns EnvError::NotSupported.
pub fn encode_png(frame: &RenderFrame) -> Result<Vec<u8>> {
    match frame {
        RenderFrame::Pixels { width, height, data } => encode_pixels_png(*width, *height, data),
        RenderFrame::Text(_) => Err(EnvError::NotSupported("Text frames cannot be encoded to PNG".into())),
    }
}

#[cfg(feature = "image")]
fn encode_pixels_png(width: u32, height: u32, data: &[u8]) -> Result<Vec<u8>> {
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};
    use std::io::Cursor;

    let count = (width as usize) * (height as usize);
    if data.len() != count * 4 {
        return Err(EnvError::NotSupported(format!(
            "Pixel data length {} does not match width*height*4 ({}x{})",
            data.len(), width, height
        )));
    }

    let mut buf = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buf);
        let encoder = PngEncoder::new(&mut cursor);
        encoder
            .write_image(data, width, height, ExtendedColorType::Rgba8)
            .map_err(|e| EnvError::Io(format!("PNG encode error: {}", e)))?;
    }
    Ok(buf)
}

#[cfg(not(feature = "image"))]
fn encode_pixels_png(_width: u32, _height: u32, _data: &[u8]) -> Result<Vec<u8>> {
    Err(EnvError::NotSupported(
        "PNG encoding requires the `image` feature".into(),
    ))
}

/// Save a RenderFrame::Pixels as a PNG file at the given path.
/// Requires the `image` feature; otherwise returns NotSupported.
pub fn save_png<P: AsRef<std::path::Path>>(path: P, frame: &RenderFrame) -> Result<()> {
    let bytes = encode_png(frame)?;
    std::fs::write(path, bytes).map_err(|e| EnvError::Io(format!("Failed to write PNG: {}", e)))
}

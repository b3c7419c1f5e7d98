use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::ExportError;

/// Write a raster as PNG. A path without an extension gets `.png` appended.
///
/// Returns the path actually written.
pub fn save_png(raster: &RgbaImage, path: &Path) -> Result<PathBuf, ExportError> {
    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyRaster { width, height });
    }

    let path = with_png_extension(path);
    raster
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: path.clone(),
            source,
        })?;

    log::info!("Saved to {}", path.display());
    Ok(path)
}

fn with_png_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_owned()
    } else {
        path.with_extension("png")
    }
}

/// Interpret the text of the save dialog; blank means no path was chosen
pub fn parse_save_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_extension_defaults_to_png() {
        assert_eq!(with_png_extension(Path::new("out/drawing")), PathBuf::from("out/drawing.png"));
        assert_eq!(with_png_extension(Path::new("drawing.PNG")), PathBuf::from("drawing.PNG"));
    }

    #[test]
    fn blank_save_path_is_no_path() {
        assert_eq!(parse_save_path("   "), None);
        assert_eq!(parse_save_path(" a.png "), Some(PathBuf::from("a.png")));
    }

    #[test]
    fn empty_raster_is_rejected() {
        let err = save_png(&RgbaImage::new(0, 10), Path::new("never-written.png")).unwrap_err();
        assert!(matches!(err, ExportError::EmptyRaster { width: 0, height: 10 }));
    }
}

// File: crates/stackplot-core/src/output.rs
// Summary: Where a finished figure goes: an interactive window or a file typed by its extension.

use std::path::{Path, PathBuf};

use skia_safe as skia;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    /// Vector output through Skia's PDF backend.
    Pdf,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "webp" => Ok(ImageFormat::Webp),
            "pdf" => Ok(ImageFormat::Pdf),
            _ => Err(Error::UnsupportedFormat(ext)),
        }
    }

    /// Raster encoder for this format, `None` for vector formats.
    pub fn raster_encoding(self) -> Option<skia::EncodedImageFormat> {
        match self {
            ImageFormat::Png => Some(skia::EncodedImageFormat::PNG),
            ImageFormat::Jpeg => Some(skia::EncodedImageFormat::JPEG),
            ImageFormat::Webp => Some(skia::EncodedImageFormat::WEBP),
            ImageFormat::Pdf => None,
        }
    }
}

/// Final destination of a render: show it, or export it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Display,
    File(PathBuf),
}

impl Output {
    /// A path argument means export, no argument means display.
    pub fn from_arg(arg: Option<String>) -> Self {
        match arg {
            Some(p) => Output::File(PathBuf::from(p)),
            None => Output::Display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("figs/weak_scale.pdf")).unwrap(), ImageFormat::Pdf);
        assert_eq!(ImageFormat::from_path(Path::new("out.JPEG")).unwrap(), ImageFormat::Jpeg);
        assert!(matches!(
            ImageFormat::from_path(Path::new("out.svg")),
            Err(Error::UnsupportedFormat(e)) if e == "svg"
        ));
        assert!(ImageFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn missing_argument_means_display() {
        assert_eq!(Output::from_arg(None), Output::Display);
        assert_eq!(Output::from_arg(Some("a.png".into())), Output::File(PathBuf::from("a.png")));
    }
}

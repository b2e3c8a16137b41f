//! Loading and saving the images we operate on

use std::{
    fmt::{Debug, Display, Formatter},
    path::{Path, PathBuf},
};

use cgmath::Vector2;
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};

use crate::{
    error::{Error, Result},
    utils::Rect,
};

/// An image loaded from disk, along with the path and format it came from.
#[derive(Clone)]
pub struct Icon {
    path: PathBuf,
    /// The format detected from the file's contents, or `None` if this `Icon` wasn't loaded from
    /// a file
    format: Option<ImageFormat>,
    image: DynamicImage,
}

impl Icon {
    /// Wraps an already-decoded image.  `path` is only used for error messages and logging.
    pub fn new(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            format: None,
            image,
        }
    }

    /// Decode the image stored at `path`.  The format is detected from the file's contents, so
    /// the extension doesn't have to match (or even exist).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let load_err = |source: image::ImageError| Error::Load {
            path: path.to_owned(),
            source,
        };
        let reader = image::io::Reader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| load_err(e.into()))?;
        let format = reader.format();
        let image = reader.decode().map_err(load_err)?;
        log::debug!(
            "Loaded {} ({}x{}, {})",
            path.display(),
            image.width(),
            image.height(),
            ColorMode(image.color())
        );
        Ok(Self {
            path: path.to_owned(),
            format,
            image,
        })
    }

    /// Encode `self` to `path`.  Writing back over the file `self` was loaded from keeps the
    /// detected format; any other path takes its format from the extension, falling back to the
    /// detected format if the extension isn't recognised.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let from_ext = ImageFormat::from_path(path).ok();
        let format = if path == self.path.as_path() {
            self.format.or(from_ext)
        } else {
            from_ext.or(self.format)
        };
        let result = match format {
            Some(format) => self.image.save_with_format(path, format),
            None => self.image.save(path),
        };
        result.map_err(|source| Error::Save {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("Saved {}x{} image to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    /// Returns a new `Icon` containing only the pixels inside `region`.  The new `Icon` keeps the
    /// same path, format and color mode as `self`.
    pub fn crop(&self, region: Rect<u32>) -> Self {
        debug_assert!(self.bounds().contains(region));
        let cropped = self.image.crop_imm(
            region.left(),
            region.top(),
            region.width(),
            region.height(),
        );
        Self {
            path: self.path.clone(),
            format: self.format,
            image: cropped,
        }
    }

    /// The format detected when this `Icon` was loaded
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> Vector2<u32> {
        self.image.dimensions().into()
    }

    /// The [`Rect`] covering the whole image
    pub fn bounds(&self) -> Rect<u32> {
        Rect::from_origin(self.width(), self.height())
    }

    pub fn mode(&self) -> ColorMode {
        ColorMode(self.image.color())
    }
}

impl Debug for Icon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Icon({:?}, {}x{} {})",
            self.path,
            self.width(),
            self.height(),
            self.mode()
        )
    }
}

/// Wrapper of [`image::ColorType`] with short, human-friendly names (`RGBA`, `L`, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMode(pub ColorType);

impl ColorMode {
    pub fn has_alpha(self) -> bool {
        self.0.has_alpha()
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self.0 {
            ColorType::L8 => "L",
            ColorType::La8 => "LA",
            ColorType::Rgb8 => "RGB",
            ColorType::Rgba8 => "RGBA",
            ColorType::L16 => "L16",
            ColorType::La16 => "LA16",
            ColorType::Rgb16 => "RGB16",
            ColorType::Rgba16 => "RGBA16",
            ColorType::Bgr8 => "BGR",
            ColorType::Bgra8 => "BGRA",
            other => return write!(f, "{:?}", other),
        };
        f.write_str(name)
    }
}

//! Shrinking an image to the bounding box of its content

use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
};

use cgmath::Vector2;

use crate::{
    bbox::{content_bbox, ContentRule},
    error::Result,
    image::Icon,
    utils::Rect,
};

/// Parameters for a single [`crop`]
#[derive(Debug, Clone)]
pub struct CropOptions {
    pub source: PathBuf,
    /// Where to write the cropped image.  If `None`, the source file is **overwritten** and the
    /// original image is lost.
    pub dest: Option<PathBuf>,
    pub rule: ContentRule,
}

impl CropOptions {
    /// Options which crop `source` in place, using [`ContentRule::Auto`]
    pub fn in_place(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: None,
            rule: ContentRule::Auto,
        }
    }

    pub fn dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn rule(mut self, rule: ContentRule) -> Self {
        self.rule = rule;
        self
    }

    /// The path that the result will be written to
    pub fn dest_path(&self) -> &Path {
        self.dest.as_deref().unwrap_or(&self.source)
    }

    fn is_in_place(&self) -> bool {
        self.dest_path() == self.source.as_path()
    }
}

/// What [`crop`] actually did
#[derive(Debug, Clone, PartialEq)]
pub enum CropOutcome {
    /// The content was cropped out and written to `dest`
    Cropped {
        bbox: Rect<u32>,
        size: Vector2<u32>,
        dest: PathBuf,
    },
    /// The content already fills the whole image, so there was nothing to remove.  The source is
    /// left untouched; `dest` is `Some` if an unmodified copy was written elsewhere.
    AlreadyTight {
        size: Vector2<u32>,
        dest: Option<PathBuf>,
    },
    /// The image has no meaningful content, so nothing was written
    Empty,
}

/// Load `opts.source`, find the bounding box of its content and write the contents of that box to
/// `opts.dest_path()`.  Nothing is written if the image has no content.
pub fn crop(opts: &CropOptions) -> Result<CropOutcome> {
    let icon = Icon::load(&opts.source)?;
    let bbox = match content_bbox(&icon, opts.rule) {
        Some(bbox) => bbox,
        None => {
            log::info!("{} has no content; not writing anything", opts.source.display());
            return Ok(CropOutcome::Empty);
        }
    };

    if bbox == icon.bounds() {
        log::info!("{} is already tightly cropped", opts.source.display());
        let dest = if opts.is_in_place() {
            None
        } else {
            icon.save(opts.dest_path())?;
            Some(opts.dest_path().to_owned())
        };
        return Ok(CropOutcome::AlreadyTight {
            size: icon.dimensions(),
            dest,
        });
    }

    let cropped = icon.crop(bbox);
    cropped.save(opts.dest_path())?;
    log::info!(
        "Cropped {} to {:?}, written to {}",
        opts.source.display(),
        bbox,
        opts.dest_path().display()
    );
    Ok(CropOutcome::Cropped {
        bbox,
        size: cropped.dimensions(),
        dest: opts.dest_path().to_owned(),
    })
}

impl Display for CropOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cropped { size, .. } => write!(
                f,
                "Successfully cropped image. New size: ({}, {})",
                size.x, size.y
            ),
            Self::AlreadyTight { size, .. } => write!(
                f,
                "Image is already tightly cropped. Size: ({}, {})",
                size.x, size.y
            ),
            Self::Empty => write!(f, "Image is empty/transparent. No crop performed."),
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgba, RgbaImage};

    use super::*;
    use crate::error::Error;

    fn write_icon(path: &Path, width: u32, height: u32, content: Option<Rect<u32>>) {
        let img = RgbaImage::from_fn(width, height, |x, y| match content {
            Some(r) if r.contains(Rect::pixel(x, y)) => Rgba([255, 255, 0, 255]),
            _ => Rgba([0, 0, 0, 0]),
        });
        Icon::new(path, DynamicImage::ImageRgba8(img))
            .save(path)
            .unwrap();
    }

    #[test]
    fn crops_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_icon(&path, 100, 100, Some(Rect::from_edges(25, 25, 75, 75)));

        let outcome = crop(&CropOptions::in_place(&path)).unwrap();
        assert_eq!(
            outcome,
            CropOutcome::Cropped {
                bbox: Rect::from_edges(25, 25, 75, 75),
                size: Vector2::new(50, 50),
                dest: path.clone(),
            }
        );
        assert_eq!(
            outcome.to_string(),
            "Successfully cropped image. New size: (50, 50)"
        );
        let reloaded = Icon::load(&path).unwrap();
        assert_eq!(reloaded.dimensions(), Vector2::new(50, 50));
        assert_eq!(content_bbox(&reloaded, ContentRule::Auto), Some(reloaded.bounds()));
    }

    #[test]
    fn second_crop_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_icon(&path, 64, 48, Some(Rect::from_edges(5, 10, 40, 30)));
        let opts = CropOptions::in_place(&path);

        assert!(matches!(crop(&opts).unwrap(), CropOutcome::Cropped { .. }));
        let after_first = std::fs::read(&path).unwrap();
        assert_eq!(
            crop(&opts).unwrap(),
            CropOutcome::AlreadyTight {
                size: Vector2::new(35, 20),
                dest: None
            }
        );
        assert_eq!(std::fs::read(&path).unwrap(), after_first);
    }

    #[test]
    fn empty_image_is_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_icon(&path, 32, 32, None);
        let before = std::fs::read(&path).unwrap();

        let outcome = crop(&CropOptions::in_place(&path)).unwrap();
        assert_eq!(outcome, CropOutcome::Empty);
        assert_eq!(
            outcome.to_string(),
            "Image is empty/transparent. No crop performed."
        );
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[test]
    fn separate_dest_keeps_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("icon.png");
        let dest = dir.path().join("icon-cropped.png");
        write_icon(&source, 20, 20, Some(Rect::from_edges(0, 5, 20, 6)));
        let before = std::fs::read(&source).unwrap();

        let outcome = crop(&CropOptions::in_place(&source).dest(&dest)).unwrap();
        assert!(matches!(outcome, CropOutcome::Cropped { .. }));
        assert_eq!(std::fs::read(&source).unwrap(), before);
        assert_eq!(Icon::load(&dest).unwrap().dimensions(), Vector2::new(20, 1));
    }

    #[test]
    fn tight_image_is_copied_to_separate_dest() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("icon.png");
        let dest = dir.path().join("copy.png");
        write_icon(&source, 8, 8, Some(Rect::from_origin(8, 8)));

        let outcome = crop(&CropOptions::in_place(&source).dest(&dest)).unwrap();
        assert_eq!(
            outcome,
            CropOutcome::AlreadyTight {
                size: Vector2::new(8, 8),
                dest: Some(dest.clone())
            }
        );
        assert_eq!(Icon::load(&dest).unwrap().dimensions(), Vector2::new(8, 8));
    }

    #[test]
    fn empty_image_with_separate_dest_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("icon.png");
        let dest = dir.path().join("out.png");
        write_icon(&source, 8, 8, None);

        let outcome = crop(&CropOptions::in_place(&source).dest(&dest)).unwrap();
        assert_eq!(outcome, CropOutcome::Empty);
        assert!(!dest.exists());
    }

    #[test]
    fn crops_extensionless_png_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon");
        let img = RgbaImage::from_fn(30, 30, |x, y| {
            if (10..20).contains(&x) && (5..25).contains(&y) {
                Rgba([255, 255, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        DynamicImage::ImageRgba8(img)
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        let outcome = crop(&CropOptions::in_place(&path)).unwrap();
        assert!(matches!(outcome, CropOutcome::Cropped { .. }));
        let reloaded = Icon::load(&path).unwrap();
        assert_eq!(reloaded.format(), Some(image::ImageFormat::Png));
        assert_eq!(reloaded.dimensions(), Vector2::new(10, 20));
    }

    #[test]
    fn nonexistent_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = crop(&CropOptions::in_place(dir.path().join("icon.png")));
        assert!(matches!(result, Err(Error::Load { .. })));
    }
}

//! Read-only diagnostics about an image's content and margins

use std::{
    fmt::{Display, Formatter},
    path::Path,
};

use cgmath::Vector2;
use itertools::Itertools;

use crate::{
    bbox::{content_bbox, Background, ContentRule},
    error::Result,
    image::{ColorMode, Icon},
    utils::Rect,
};

/// Everything we can say about an image without modifying it.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub size: Vector2<u32>,
    pub mode: ColorMode,
    /// What the [`ContentRule`] treated as background for this image
    pub background: Background,
    /// `None` if the image has no meaningful content
    pub content: Option<ContentSummary>,
}

/// The location of an image's meaningful content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSummary {
    pub bbox: Rect<u32>,
    pub margins: Margins,
}

impl ContentSummary {
    pub fn cropped_size(&self) -> Vector2<u32> {
        self.bbox.size()
    }
}

/// Distances (in pixels) from each edge of a bounding box to the same edge of the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Margins {
    /// Computes the margins around `bbox` inside an image of size `image_size`.  `bbox` must lie
    /// within the image.
    pub fn new(bbox: Rect<u32>, image_size: Vector2<u32>) -> Self {
        debug_assert!(Rect::from_origin(image_size.x, image_size.y).contains(bbox));
        Self {
            left: bbox.left(),
            top: bbox.top(),
            right: image_size.x - bbox.right(),
            bottom: image_size.y - bbox.bottom(),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Load the image at `path` and describe its content, according to `rule`
pub fn analyze(path: impl AsRef<Path>, rule: ContentRule) -> Result<Analysis> {
    let icon = Icon::load(path)?;
    Ok(analyze_icon(&icon, rule))
}

/// Same as [`analyze`], but for an image which has already been loaded
pub fn analyze_icon(icon: &Icon, rule: ContentRule) -> Analysis {
    let size = icon.dimensions();
    let content = content_bbox(icon, rule).map(|bbox| ContentSummary {
        bbox,
        margins: Margins::new(bbox, size),
    });
    log::info!(
        "Analysed {}: {:?}",
        icon.path().display(),
        content.map(|c| c.bbox)
    );
    Analysis {
        size,
        mode: icon.mode(),
        background: rule.background(icon.mode()),
        content,
    }
}

impl Display for Analysis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Original Image Size: ({}, {})", self.size.x, self.size.y)?;
        writeln!(f, "Image Mode: {}", self.mode)?;
        let content = match &self.content {
            Some(c) => c,
            None => {
                return writeln!(f, "Image is completely {}.", self.background);
            }
        };
        let b = content.bbox;
        writeln!(
            f,
            "Content Bounding Box: ({}, {}, {}, {})",
            b.left(),
            b.top(),
            b.right(),
            b.bottom()
        )?;
        let cropped = content.cropped_size();
        writeln!(f, "Cropped Size: {}x{}", cropped.x, cropped.y)?;
        writeln!(f, "Margins - {}", content.margins)
    }
}

impl Display for Margins {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sides = [
            ("Left", self.left),
            ("Top", self.top),
            ("Right", self.right),
            ("Bottom", self.bottom),
        ];
        let s = sides
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .join(", ");
        f.write_str(&s)
    }
}

//! Finding the region of an image which contains meaningful content

use std::fmt::{Display, Formatter};

use image::{GenericImageView, Rgba};

use crate::{
    image::{ColorMode, Icon},
    utils::Rect,
};

/// Decides which pixels count as 'meaningful' content when computing a bounding box.
///
/// Images with and without alpha need different rules: transparency is the obvious background for
/// an icon with an alpha channel, but an opaque image needs some notion of a background colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ContentRule {
    /// Transparency for images with an alpha channel, otherwise black
    #[default]
    Auto,
    /// Any pixel with non-zero alpha
    Alpha,
    /// Any pixel with a non-zero colour channel (alpha is ignored)
    NonBlack,
    /// Any pixel which differs from the top-left pixel
    Corner,
}

impl ContentRule {
    /// The [`Background`] which this rule strips from an image of the given [`ColorMode`]
    pub fn background(self, mode: ColorMode) -> Background {
        match self {
            Self::Auto if mode.has_alpha() => Background::Transparent,
            Self::Auto => Background::Black,
            Self::Alpha => Background::Transparent,
            Self::NonBlack => Background::Black,
            Self::Corner => Background::CornerColour,
        }
    }
}

/// The kind of pixel which doesn't count as content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// Pixels with zero alpha
    Transparent,
    /// Pixels whose colour channels are all zero
    Black,
    /// Pixels with exactly the same value as the top-left pixel
    CornerColour,
}

impl Display for Background {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Transparent => "transparent",
            Self::Black => "black",
            Self::CornerColour => "background",
        })
    }
}

/// Computes the smallest [`Rect`] containing every meaningful pixel of `icon`, or `None` if the
/// image has no meaningful content at all.  The returned `Rect` always lies within
/// [`Icon::bounds`] and is never empty.
pub fn content_bbox(icon: &Icon, rule: ContentRule) -> Option<Rect<u32>> {
    let image = icon.image();
    let background = rule.background(icon.mode());
    // `CornerColour` compares against the top-left pixel; a 0x0 image has no content regardless
    let corner = (icon.width() > 0 && icon.height() > 0).then(|| image.get_pixel(0, 0));

    let bbox = image
        .pixels()
        .filter(|&(_, _, pixel)| is_meaningful(background, pixel, corner))
        .map(|(x, y, _)| Rect::pixel(x, y))
        .reduce(Rect::union);
    log::debug!("{:?} bbox of {:?} is {:?}", background, icon, bbox);
    bbox
}

fn is_meaningful(background: Background, pixel: Rgba<u8>, corner: Option<Rgba<u8>>) -> bool {
    let Rgba([r, g, b, a]) = pixel;
    match background {
        Background::Transparent => a != 0,
        Background::Black => r != 0 || g != 0 || b != 0,
        Background::CornerColour => Some(pixel) != corner,
    }
}

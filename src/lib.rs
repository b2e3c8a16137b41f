//! Inspect and crop images (usually PNG icons) down to the bounding box of their content.
//!
//! The two entry points are [`analyze`](analyze::analyze), which reports an image's size, colour
//! mode, content bounding box and margins without touching the file, and [`crop`](crop::crop),
//! which writes the content region back out (by default over the source file).

pub mod analyze;
pub mod bbox;
pub mod crop;
pub mod error;
pub mod image;
pub mod utils;

pub use crate::{
    analyze::{analyze, Analysis, ContentSummary, Margins},
    bbox::{content_bbox, Background, ContentRule},
    crop::{crop, CropOptions, CropOutcome},
    error::{Error, Result},
    image::{ColorMode, Icon},
    utils::Rect,
};

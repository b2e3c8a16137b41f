use std::path::PathBuf;

/// Failures which abort a single analyze or crop operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file doesn't exist, can't be read, or isn't an image we can decode
    #[error("cannot load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

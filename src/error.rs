use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoiseError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

impl NoiseError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::debug!("rejected `{name}`: {reason}");
        Self::InvalidArgument { name, reason }
    }
}

pub type Result<T> = std::result::Result<T, NoiseError>;

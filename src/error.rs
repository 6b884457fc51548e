use std::path::PathBuf;

pub type GliderResult<T> = Result<T, GliderError>;

#[derive(thiserror::Error, Debug)]
pub enum GliderError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error: {0}")]
    Image(String),

    #[error("texture error: {0}")]
    Texture(String),

    #[error("audio error: {0}")]
    Audio(String),
}

impl GliderError {
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    pub fn texture(msg: impl Into<String>) -> Self {
        Self::Texture(msg.into())
    }

    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }
}

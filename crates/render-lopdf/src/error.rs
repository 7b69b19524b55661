use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF object error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Unsupported image '{key}': {reason}")]
    Image { key: String, reason: String },

    /// A page drew an image that was never embedded in the resources.
    #[error("Image '{0}' was not registered")]
    UnregisteredImage(String),
}

//! Error kinds shared by the DAO and the HTTP layers.
//!
//! `NotFound` and `BadRequest` carry messages written for the caller.
//! `Io` and `Internal` carry the underlying cause, which is only ever logged.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Internal(_))
    }

    /// Message that is safe to hand back to a client.
    pub fn public_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.to_owned(),
            Self::Io(_) | Self::Internal(_) => "Internal server error".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_their_cause() {
        let err = Error::from(anyhow::anyhow!("no such table: project"));
        assert!(err.is_internal());
        assert_eq!(err.public_message(), "Internal server error");
        assert_eq!(err.to_string(), "no such table: project");

        let err = Error::from(std::io::Error::other("/home/site/wwwroot/projects: denied"));
        assert!(err.is_internal());
        assert!(!err.public_message().contains("wwwroot"));
    }

    #[test]
    fn client_errors_keep_their_message() {
        let err = Error::not_found("Project not found");
        assert!(!err.is_internal());
        assert_eq!(err.public_message(), "Project not found");

        let err = Error::bad_request("File a.bin in zip is not readable");
        assert_eq!(err.public_message(), "File a.bin in zip is not readable");
    }
}

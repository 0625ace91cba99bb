#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Password(#[from] pwphrase::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the password settings were rejected, as opposed to a
    /// failure while generating or writing the password.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Password(e) if e.is_validation())
    }
}

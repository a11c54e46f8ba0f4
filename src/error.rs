/// Isomesh application errors
#[derive(Debug)]
pub enum Error {
    /// Mesh generation failed
    Marching(crate::marching::Error),
    /// Settings could not be parsed
    Settings(serde_json::Error),
    /// File could not be read or written
    Io(std::io::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Marching(err) => Some(err),
            Error::Settings(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Marching(err) => write!(f, "Can't generate mesh ({})", err),
            Error::Settings(err) => write!(f, "Can't parse settings ({})", err),
            Error::Io(err) => write!(f, "Can't access file ({})", err),
        }
    }
}

impl From<crate::marching::Error> for Error {
    fn from(err: crate::marching::Error) -> Self {
        Error::Marching(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Settings(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

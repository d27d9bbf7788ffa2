use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Certificate parsing error: {0}")]
    CertParse(String),

    #[error("Invalid service type: {0} (expected 1 for smtp or 2 for http)")]
    InvalidService(String),

    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    pub fn is_cert_parse(&self) -> bool {
        matches!(self, Error::CertParse(_))
    }
}

impl From<x509_parser::error::X509Error> for Error {
    fn from(err: x509_parser::error::X509Error) -> Self {
        Error::CertParse(err.to_string())
    }
}

impl From<x509_parser::nom::Err<x509_parser::error::X509Error>> for Error {
    fn from(err: x509_parser::nom::Err<x509_parser::error::X509Error>) -> Self {
        Error::CertParse(err.to_string())
    }
}

impl From<x509_parser::error::PEMError> for Error {
    fn from(err: x509_parser::error::PEMError) -> Self {
        Error::CertParse(format!("PEM: {}", err))
    }
}

impl From<x509_parser::nom::Err<x509_parser::error::PEMError>> for Error {
    fn from(err: x509_parser::nom::Err<x509_parser::error::PEMError>) -> Self {
        Error::CertParse(format!("PEM: {}", err))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

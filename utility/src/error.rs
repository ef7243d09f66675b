use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("{0}")]
    Parse(#[from] url::ParseError),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unauthorized access, the gateway requires credentials")]
    Unauthorized,
    #[error("No such function: {0}")]
    NotFound(String),
    #[error("Server returned unexpected status code {code} and body {body}")]
    Status { code: u16, body: String },
}

impl Error {
    ///http status code reported by the gateway, if the error came from a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { code, .. } => Some(*code),
            Error::Unauthorized => Some(401),
            Error::NotFound(_) => Some(404),
            Error::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, crate::Error>;

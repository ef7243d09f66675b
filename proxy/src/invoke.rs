use crate::client::Client;
use crate::utils::invoke_path;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use std::fmt;
use std::str::FromStr;
use utility::{Error, Result};

/// how the request body is labelled and how the response body is read back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    Text,
    Json,
    Binary,
}

impl ContentMode {
    pub fn content_type(self) -> &'static str {
        match self {
            ContentMode::Text => "text/plain",
            ContentMode::Json => "application/json",
            ContentMode::Binary => "binary/octet-stream",
        }
    }
}

impl Default for ContentMode {
    fn default() -> Self {
        ContentMode::Text
    }
}

impl FromStr for ContentMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(ContentMode::Text),
            "json" => Ok(ContentMode::Json),
            "binary" => Ok(ContentMode::Binary),
            other => Err(Error::Custom(format!(
                "content type must be one of text, json or binary, found {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentMode::Text => "text",
            ContentMode::Json => "json",
            ContentMode::Binary => "binary",
        };
        f.write_str(name)
    }
}

/// response body of an invocation. Binary responses are never decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum InvokeBody {
    Text(String),
    Json(serde_json::Value),
    Binary(Bytes),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvokeResponse {
    pub status: u16,
    pub body: InvokeBody,
}

impl Client {
    /// invokes a function with `body`. Any non-2xx response is returned as `Error::Status`
    /// with the raw response text.
    pub async fn invoke_function(
        &self,
        name: &str,
        namespace: &str,
        body: Vec<u8>,
        mode: ContentMode,
    ) -> Result<InvokeResponse> {
        let url = self.endpoint(invoke_path(name, namespace).as_str())?;

        // the gateway credentials are not forwarded to functions
        let mut req = self
            .http_client
            .request(Method::POST, url)
            .header(CONTENT_TYPE, mode.content_type());
        if !body.is_empty() {
            req = req.body(body);
        }

        let res = self.do_request(req.build()?).await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await?;
            return Err(Error::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body = match mode {
            ContentMode::Binary => InvokeBody::Binary(res.bytes().await?),
            ContentMode::Json => {
                let raw = res.bytes().await?;
                match serde_json::from_slice(&raw) {
                    Ok(value) => InvokeBody::Json(value),
                    Err(_) => InvokeBody::Text(String::from_utf8_lossy(&raw).into_owned()),
                }
            }
            ContentMode::Text => InvokeBody::Text(res.text().await?),
        };

        Ok(InvokeResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ContentMode;

    #[test]
    fn test_content_mode_headers() {
        assert_eq!(ContentMode::Text.content_type(), "text/plain");
        assert_eq!(ContentMode::Json.content_type(), "application/json");
        assert_eq!(ContentMode::Binary.content_type(), "binary/octet-stream");
    }

    #[test]
    fn test_content_mode_from_str() {
        assert_eq!("json".parse::<ContentMode>().unwrap(), ContentMode::Json);
        assert_eq!("binary".parse::<ContentMode>().unwrap(), ContentMode::Binary);
        assert!("xml".parse::<ContentMode>().is_err());
    }
}

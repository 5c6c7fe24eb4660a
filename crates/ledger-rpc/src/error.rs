use thiserror::Error;

/// RPC gateway errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The node answered with a JSON-RPC error. The payload is the
    /// server-supplied message, surfaced unmodified.
    #[error("{0}")]
    Rpc(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_error_displays_server_message_verbatim() {
        let err = ClientError::Rpc("bad request".into());
        assert_eq!(err.to_string(), "bad request");
    }

    #[test]
    fn invalid_endpoint_from_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = ClientError::from(parse_err);
        assert!(err.to_string().starts_with("invalid endpoint url:"));
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(ClientError::Rpc("x".into()));
        assert_eq!(err.to_string(), "x");
    }
}

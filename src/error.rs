use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected reply: {0}")]
    /// The server answered, but not in the shape the decoder expected.
    UnexpectedReply(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns `true` if this is the server complaining about a search index
    /// that does not exist, e.g. `FT.DROPINDEX` on a fresh database.
    pub fn is_unknown_index(&self) -> bool {
        match self {
            Error::Redis(err) => {
                // Unrecognized error codes render as `Code: detail`, so
                // `Unknown Index name` arrives as `Unknown: Index name`.
                let msg = err.to_string().to_lowercase().replace(':', "");
                msg.contains("unknown index") || msg.contains("no such index")
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redis::ErrorKind;

    #[test]
    fn test_unknown_index_detection() {
        let err: Error =
            redis::RedisError::from((ErrorKind::ResponseError, "Unknown Index name")).into();
        assert!(err.is_unknown_index());

        let err: Error = redis::RedisError::from((
            ErrorKind::ResponseError,
            "An error was signalled by the server",
            "no such index".to_string(),
        ))
        .into();
        assert!(err.is_unknown_index());
    }

    #[test]
    fn test_other_errors_are_not_unknown_index() {
        let err: Error =
            redis::RedisError::from((ErrorKind::ResponseError, "Index already exists")).into();
        assert!(!err.is_unknown_index());
        assert!(!Error::UnexpectedReply("unknown index".into()).is_unknown_index());
    }
}

use thiserror::Error;

/// Errors raised while converting a record to or from its JSON object form.
#[derive(Debug, Error)]
pub enum ValueError {
    /// Decode input lacks a key the record reads.
    #[error("{key}: missing key")]
    MissingKey { key: &'static str },
    /// Encode found a required field holding null.
    #[error("{key}: is a required field")]
    RequiredField { key: &'static str },
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValueError {
    /// Wire key the error refers to, if any.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::MissingKey { key } | Self::RequiredField { key } => Some(*key),
            Self::NotAnObject | Self::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn json_error_keeps_source() {
        let err: ValueError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ValueError::Json(_)));
        assert!(err.source().is_some());
        assert!(err.key().is_none());
    }
}

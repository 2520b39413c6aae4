use thiserror::Error;

/// Input problems found before a link is built. Every variant names the
/// offending field using its query-parameter spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("{field} is required")]
    MissingRequiredField { field: &'static str },

    #[error("invalid {field}: {reason}")]
    MalformedField { field: &'static str, reason: String },
}

impl LinkError {
    pub fn missing(field: &'static str) -> Self {
        LinkError::MissingRequiredField { field }
    }

    pub fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        LinkError::MalformedField {
            field,
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            LinkError::MissingRequiredField { field } => field,
            LinkError::MalformedField { field, .. } => field,
        }
    }

    /// Stable machine-readable code, used by the HTTP API.
    pub fn kind(&self) -> &'static str {
        match self {
            LinkError::MissingRequiredField { .. } => "missing_required_field",
            LinkError::MalformedField { .. } => "malformed_field",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let missing = LinkError::missing("url");
        assert_eq!(missing.to_string(), "url is required");
        assert_eq!(missing.field(), "url");
        assert_eq!(missing.kind(), "missing_required_field");

        let malformed = LinkError::malformed("chainId", "must be a positive integer");
        assert_eq!(malformed.to_string(), "invalid chainId: must be a positive integer");
        assert_eq!(malformed.field(), "chainId");
        assert_eq!(malformed.kind(), "malformed_field");
    }
}

use thiserror::Error;

pub type EspResult<T> = Result<T, EspError>;

/// Error kinds every engine operation can be reduced to.
///
/// Frontends match on the variant to decide how to present a failure and use
/// the `Display` text as the human-readable cause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EspError {
    /// Malformed dataset or a mathematically undefined operation.
    #[error("Domain error: {what}")]
    Domain { what: String },

    /// A live sensor reading that cannot be turned into an operating point.
    #[error("Invalid sensor reading: {what}")]
    InvalidSensorReading { what: String },

    /// An operation was attempted before the state it depends on exists.
    #[error("Precondition failed: {what}")]
    Precondition { what: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },
}

impl EspError {
    /// Short, stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            EspError::Domain { .. } => "DomainError",
            EspError::InvalidSensorReading { .. } => "InvalidSensorReading",
            EspError::Precondition { .. } => "PreconditionError",
            EspError::NonFinite { .. } => "NonFinite",
            EspError::InvalidArg { .. } => "InvalidArgument",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EspError::Domain {
            what: "pump curve needs at least 3 points".into(),
        };
        assert!(err.to_string().contains("at least 3 points"));
        assert_eq!(err.kind(), "DomainError");
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            EspError::Domain { what: "a".into() }.kind(),
            EspError::InvalidSensorReading { what: "b".into() }.kind(),
            EspError::Precondition { what: "c".into() }.kind(),
        ];
        assert_ne!(kinds[0], kinds[1]);
        assert_ne!(kinds[1], kinds[2]);
        assert_ne!(kinds[0], kinds[2]);
    }
}

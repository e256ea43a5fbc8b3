use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced by domain constructors.
pub enum ValidationError {
    /// A required value was empty or whitespace only.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// The input could not be normalized to a valid E.164 number.
    #[error("invalid phone number: {input}")]
    InvalidPhoneNumber { input: String },
}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "message" };
        assert_eq!(err.to_string(), "message must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}

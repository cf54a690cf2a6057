use std::fmt;

#[derive(Debug)]
pub enum CoreError {
    InvalidInput(String),
    MessageTooLong(usize),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            CoreError::MessageTooLong(len) => write!(
                f,
                "Message Too Long: {} bytes cannot be padded into a single 64-byte block (max 55)",
                len
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl CoreError {
    pub fn invalid_input(message: &str) -> Self { CoreError::InvalidInput(message.to_string()) }
    pub fn message_too_long(len: usize) -> Self { CoreError::MessageTooLong(len) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_invalid_input_error() {
        let err = CoreError::invalid_input("block must be exactly 64 bytes, got 63");
        assert_eq!(
            format!("{}", err),
            "Invalid Input: block must be exactly 64 bytes, got 63"
        );
    }
    #[test] fn test_message_too_long_error() {
        let err = CoreError::message_too_long(56);
        assert!(format!("{}", err).starts_with("Message Too Long: 56 bytes"));
    }
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("start port {start} is greater than end port {end}")]
    InvalidRange { start: u16, end: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message_names_both_ports() {
        let err = ScanError::InvalidRange { start: 100, end: 50 };
        assert_eq!(
            err.to_string(),
            "start port 100 is greater than end port 50"
        );
    }
}

//! Exit-code mapping for the CLI.
//!
//! - 0: success
//! - 1: runtime failure
//! - 2: invalid input or configuration

use valueng_core::ValuengError;

/// Exit code for invalid input or configuration.
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Exit code for any other failure.
pub const EXIT_FAILURE: i32 = 1;

/// Map an error chain to a process exit code.
pub fn exit_code_for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ValuengError>() {
        Some(ValuengError::Validation(_)) | Some(ValuengError::Config(_)) => EXIT_INVALID_INPUT,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valueng_core::error::{ConfigError, ScoreError};

    #[test]
    fn config_errors_exit_2() {
        let err = anyhow::Error::from(ValuengError::Config(ConfigError::UnknownStrategy(
            "cheapest".to_string(),
        )));
        assert_eq!(exit_code_for_error(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn runtime_errors_exit_1() {
        let err = anyhow::Error::from(ValuengError::Score(ScoreError::DispatchFailed(
            "join".to_string(),
        )));
        assert_eq!(exit_code_for_error(&err), EXIT_FAILURE);
    }

    #[test]
    fn plain_io_errors_exit_1() {
        let err = anyhow::anyhow!("file not found");
        assert_eq!(exit_code_for_error(&err), EXIT_FAILURE);
    }
}

//! Terminal output for setup failures and process exit codes.
//!
//! Run reports stream from the replacement runner; this module only handles
//! errors that stop a run before it starts.

use std::io::{self, Write};
use std::process::ExitCode;

use crate::error::{Error, ErrorCode, Result};

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument | ErrorCode::ValidationInvalidPattern => 2,

        ErrorCode::InternalIoError => 1,
    }
}

pub fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

/// Render an error and its hints.
pub fn write_error(out: &mut dyn Write, err: &Error) -> io::Result<()> {
    writeln!(out, "❌ {} [{}]", err.message, err.code.as_str())?;
    if let Some(problem) = err.details.get("problem").and_then(|p| p.as_str()) {
        writeln!(out, "   {}", problem)?;
    }
    if let Some(detail) = err.details.get("error").and_then(|p| p.as_str()) {
        if !err.message.contains(detail) {
            writeln!(out, "   {}", detail)?;
        }
    }
    for hint in &err.hints {
        writeln!(out, "💡 {}", hint.message)?;
    }
    Ok(())
}

pub fn print_error(err: &Error) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    // Nothing left to report to if stderr itself is gone.
    let _ = write_error(&mut handle, err);
}

/// Map a command result to the process exit code, printing any error.
pub fn finish<T>(result: Result<(T, i32)>) -> ExitCode {
    match result {
        Ok((_, exit_code)) => ExitCode::from(exit_code_to_u8(exit_code)),
        Err(err) => {
            print_error(&err);
            ExitCode::from(exit_code_to_u8(exit_code_for_error(err.code)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(err: &Error) -> String {
        let mut buf = Vec::new();
        write_error(&mut buf, err).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn validation_errors_exit_2() {
        assert_eq!(exit_code_for_error(ErrorCode::ValidationInvalidArgument), 2);
        assert_eq!(exit_code_for_error(ErrorCode::ValidationInvalidPattern), 2);
    }

    #[test]
    fn io_errors_exit_1() {
        assert_eq!(exit_code_for_error(ErrorCode::InternalIoError), 1);
    }

    #[test]
    fn exit_code_clamps() {
        assert_eq!(exit_code_to_u8(-3), 0);
        assert_eq!(exit_code_to_u8(20), 20);
        assert_eq!(exit_code_to_u8(4000), 255);
    }

    #[test]
    fn write_error_includes_problem_and_hints() {
        let err = Error::validation_invalid_argument("plan", "Unknown plan 'x'", None)
            .with_hint("Run 'iconfix list'");
        let text = render(&err);

        assert!(text.starts_with("❌ Invalid argument [validation.invalid_argument]\n"));
        assert!(text.contains("   Unknown plan 'x'\n"));
        assert!(text.contains("💡 Run 'iconfix list'\n"));
    }

    #[test]
    fn write_error_skips_detail_already_in_message() {
        let err = Error::internal_io("Permission denied", Some("read a.js".to_string()));
        assert_eq!(render(&err), "❌ read a.js: Permission denied [internal.io_error]\n");
    }
}

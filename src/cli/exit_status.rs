use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): The audit ran; missing keys do not change the status
/// - `Error` (2): The audit could not run (unreadable or malformed locale file, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Report printed.
    Success,
    /// Run aborted before any report output.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

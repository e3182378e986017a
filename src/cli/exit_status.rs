use std::process::ExitCode;

/// Exit status for the CLI binary.
///
/// - `Success` (0): analysis completed and the output was written.
/// - `Error` (1): a fatal `AnalysisError` aborted the run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}

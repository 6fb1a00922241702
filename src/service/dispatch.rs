// ABOUTME: Classification of submit_sm_resp status codes into success, throttled or failed
// ABOUTME: Throttle codes come from a constant table so the list is easy to extend

use crate::datatypes::CommandStatus;
use std::fmt;

/// What a submit_sm_resp status means for the message it answers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// ESME_ROK
    Ok,
    /// The SMSC is rate limiting us; retry later
    Throttled,
    /// Any other status, including codes with no name
    Failed,
}

impl SubmissionOutcome {
    /// Classify a raw command_status.
    ///
    /// Throttle codes are checked first so they can never be mistaken for a
    /// permanent failure.
    pub fn classify(status: u32) -> Self {
        match CommandStatus::try_from(status) {
            Ok(status) if status.is_throttled() => SubmissionOutcome::Throttled,
            Ok(CommandStatus::Ok) => SubmissionOutcome::Ok,
            _ => SubmissionOutcome::Failed,
        }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionOutcome::Ok => "ok",
            SubmissionOutcome::Throttled => "throttled",
            SubmissionOutcome::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Human readable form of a raw status for logs.
pub(crate) fn describe_status(status: u32) -> String {
    match CommandStatus::try_from(status) {
        Ok(status) => status.to_string(),
        Err(_) => format!("0x{status:08X}"),
    }
}

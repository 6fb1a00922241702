use num_enum::TryFromPrimitive;
use std::fmt;

/// Status codes that mean the SMSC is asking us to slow down rather than
/// rejecting the message outright. A submission answered with one of these is
/// eligible for a retry.
pub const THROTTLE_STATUSES: &[CommandStatus] =
    &[CommandStatus::ThrottlingError, CommandStatus::MessageQueueFull];

/// The command_status field of a submit_sm_resp. Only the codes a submitting
/// ESME is likely to see are named; anything else (reserved ranges, vendor
/// specific codes in 0x0400-0x04FF) stays a raw `u32` at the call site and is
/// treated as a failure.
#[derive(TryFromPrimitive)]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommandStatus {
    /// ESME_ROK
    Ok = 0x0000_0000,
    /// ESME_RINVMSGLEN
    InvalidMsgLength = 0x0000_0001,
    /// ESME_RINVCMDLEN
    InvalidCommandLength = 0x0000_0002,
    /// ESME_RINVCMDID
    InvalidCommandId = 0x0000_0003,
    /// ESME_RINVBNDSTS
    IncorrectBindStatus = 0x0000_0004,
    /// ESME_RALYBND
    AlreadyBoundState = 0x0000_0005,
    /// ESME_RINVPRTFLG
    InvalidPriorityFlag = 0x0000_0006,
    /// ESME_RINVREGDLVFLG
    InvalidRegisteredDeliveryFlag = 0x0000_0007,
    /// ESME_RSYSERR
    SystemError = 0x0000_0008,
    /// ESME_RINVSRCADR
    InvalidSourceAddress = 0x0000_000A,
    /// ESME_RINVDSTADR
    InvalidDestinationAddress = 0x0000_000B,
    /// ESME_RINVMSGID
    InvalidMessageId = 0x0000_000C,
    /// ESME_RBINDFAIL
    BindFailed = 0x0000_000D,
    /// ESME_RINVPASWD
    InvalidPassword = 0x0000_000E,
    /// ESME_RINVSYSID
    InvalidSystemId = 0x0000_000F,
    /// ESME_RMSGQFUL, the SMSC message queue is full.
    MessageQueueFull = 0x0000_0014,
    /// ESME_RINVSERTYP
    InvalidServiceType = 0x0000_0015,
    /// ESME_RINVESMCLASS
    InvalidEsmClassFieldData = 0x0000_0043,
    /// ESME_RSUBMITFAIL
    SubmitFailed = 0x0000_0045,
    /// ESME_RINVSRCTON
    InvalidSourceAddressTon = 0x0000_0048,
    /// ESME_RINVSRCNPI
    InvalidSourceAddressNpi = 0x0000_0049,
    /// ESME_RINVDSTTON
    InvalidDestinationAddressTon = 0x0000_0050,
    /// ESME_RINVDSTNPI
    InvalidDestinationAddressNpi = 0x0000_0051,
    /// ESME_RTHROTTLED, the ESME has exceeded its allowed message rate.
    ThrottlingError = 0x0000_0058,
    /// ESME_RINVSCHED
    InvalidScheduledDeliveryTime = 0x0000_0061,
    /// ESME_RINVEXPIRY
    InvalidExpiryTime = 0x0000_0062,
    /// ESME_RX_T_APPN
    ReceiverTemporaryAppError = 0x0000_0064,
    /// ESME_RX_P_APPN
    ReceiverPermanentAppError = 0x0000_0065,
    /// ESME_RX_R_APPN
    ReceiverRejectMessageError = 0x0000_0066,
    /// ESME_RINVOPTPARSTREAM
    ErrorInOptionalPartofPduBody = 0x0000_00C0,
    /// ESME_ROPTPARNOTALLWD
    OptionalParameterNotAllowed = 0x0000_00C1,
    /// ESME_RINVPARLEN
    InvalidParameterLength = 0x0000_00C2,
    /// ESME_RMISSINGOPTPARAM
    ExpectedOptionalParameterMissing = 0x0000_00C3,
    /// ESME_RINVOPTPARAMVAL
    InvalidOptionalParameterValue = 0x0000_00C4,
    /// ESME_RDELIVERYFAILURE
    DeliveryFailed = 0x0000_00FE,
    /// ESME_RUNKNOWNERR
    UnknownError = 0x0000_00FF,
}

impl CommandStatus {
    /// The symbolic name used in the SMPP v3.4 specification.
    pub fn name(&self) -> &'static str {
        match self {
            CommandStatus::Ok => "ESME_ROK",
            CommandStatus::InvalidMsgLength => "ESME_RINVMSGLEN",
            CommandStatus::InvalidCommandLength => "ESME_RINVCMDLEN",
            CommandStatus::InvalidCommandId => "ESME_RINVCMDID",
            CommandStatus::IncorrectBindStatus => "ESME_RINVBNDSTS",
            CommandStatus::AlreadyBoundState => "ESME_RALYBND",
            CommandStatus::InvalidPriorityFlag => "ESME_RINVPRTFLG",
            CommandStatus::InvalidRegisteredDeliveryFlag => "ESME_RINVREGDLVFLG",
            CommandStatus::SystemError => "ESME_RSYSERR",
            CommandStatus::InvalidSourceAddress => "ESME_RINVSRCADR",
            CommandStatus::InvalidDestinationAddress => "ESME_RINVDSTADR",
            CommandStatus::InvalidMessageId => "ESME_RINVMSGID",
            CommandStatus::BindFailed => "ESME_RBINDFAIL",
            CommandStatus::InvalidPassword => "ESME_RINVPASWD",
            CommandStatus::InvalidSystemId => "ESME_RINVSYSID",
            CommandStatus::MessageQueueFull => "ESME_RMSGQFUL",
            CommandStatus::InvalidServiceType => "ESME_RINVSERTYP",
            CommandStatus::InvalidEsmClassFieldData => "ESME_RINVESMCLASS",
            CommandStatus::SubmitFailed => "ESME_RSUBMITFAIL",
            CommandStatus::InvalidSourceAddressTon => "ESME_RINVSRCTON",
            CommandStatus::InvalidSourceAddressNpi => "ESME_RINVSRCNPI",
            CommandStatus::InvalidDestinationAddressTon => "ESME_RINVDSTTON",
            CommandStatus::InvalidDestinationAddressNpi => "ESME_RINVDSTNPI",
            CommandStatus::ThrottlingError => "ESME_RTHROTTLED",
            CommandStatus::InvalidScheduledDeliveryTime => "ESME_RINVSCHED",
            CommandStatus::InvalidExpiryTime => "ESME_RINVEXPIRY",
            CommandStatus::ReceiverTemporaryAppError => "ESME_RX_T_APPN",
            CommandStatus::ReceiverPermanentAppError => "ESME_RX_P_APPN",
            CommandStatus::ReceiverRejectMessageError => "ESME_RX_R_APPN",
            CommandStatus::ErrorInOptionalPartofPduBody => "ESME_RINVOPTPARSTREAM",
            CommandStatus::OptionalParameterNotAllowed => "ESME_ROPTPARNOTALLWD",
            CommandStatus::InvalidParameterLength => "ESME_RINVPARLEN",
            CommandStatus::ExpectedOptionalParameterMissing => "ESME_RMISSINGOPTPARAM",
            CommandStatus::InvalidOptionalParameterValue => "ESME_RINVOPTPARAMVAL",
            CommandStatus::DeliveryFailed => "ESME_RDELIVERYFAILURE",
            CommandStatus::UnknownError => "ESME_RUNKNOWNERR",
        }
    }

    /// True if the SMSC is throttling us; see [`THROTTLE_STATUSES`].
    pub fn is_throttled(&self) -> bool {
        THROTTLE_STATUSES.contains(self)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:08X})", self.name(), *self as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_codes_are_queue_full_and_throttled() {
        assert!(CommandStatus::ThrottlingError.is_throttled());
        assert!(CommandStatus::MessageQueueFull.is_throttled());
        assert!(!CommandStatus::Ok.is_throttled());
        assert!(!CommandStatus::SubmitFailed.is_throttled());
    }

    #[test]
    fn converts_from_wire_value() {
        assert_eq!(CommandStatus::try_from(0x58u32).ok(), Some(CommandStatus::ThrottlingError));
        assert_eq!(CommandStatus::try_from(0x14u32).ok(), Some(CommandStatus::MessageQueueFull));
        assert!(CommandStatus::try_from(0x0400u32).is_err());
    }

    #[test]
    fn display_includes_name_and_code() {
        assert_eq!(
            CommandStatus::MessageQueueFull.to_string(),
            "ESME_RMSGQFUL (0x00000014)"
        );
    }
}

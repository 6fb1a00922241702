use std::fmt;

/// SMPP session state as reported by a protocol session.
///
/// ```text
/// CLOSED → OPEN → BOUND_TX/BOUND_RX/BOUND_TRX → UNBINDING → CLOSED
/// ```
///
/// - **CLOSED**: No TCP connection exists
/// - **OPEN**: TCP connection established but no SMPP bind completed
/// - **BOUND_TX**: Bound as transmitter (can send submit_sm)
/// - **BOUND_RX**: Bound as receiver (can receive deliver_sm)
/// - **BOUND_TRX**: Bound as transceiver
/// - **UNBINDING**: Unbind initiated, session terminating
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BindState {
    #[default]
    Closed,
    Open,
    BoundTx,
    BoundRx,
    BoundTrx,
    Unbinding,
}

impl BindState {
    pub fn is_bound(&self) -> bool {
        matches!(
            self,
            BindState::BoundTx | BindState::BoundRx | BindState::BoundTrx
        )
    }
}

impl fmt::Display for BindState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BindState::Closed => "CLOSED",
            BindState::Open => "OPEN",
            BindState::BoundTx => "BOUND_TX",
            BindState::BoundRx => "BOUND_RX",
            BindState::BoundTrx => "BOUND_TRX",
            BindState::Unbinding => "UNBINDING",
        };
        f.write_str(name)
    }
}

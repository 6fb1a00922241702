mod bind_state;
mod command_status;
pub mod esm_class;
mod tlv;

pub use bind_state::BindState;
pub use command_status::{CommandStatus, THROTTLE_STATUSES};
pub use tlv::{OptionalParameters, OptionalTag, Tlv, TlvValue};

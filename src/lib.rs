//! Session management and message submission for an SMPP client.
//!
//! [`SmppService`] sits above a protocol session (PDU codec and bind state
//! machine) and below a generic message transport. It tracks bind state,
//! fragments messages that do not fit one SMS, and turns submit_sm_resp
//! statuses into success, failure or throttle events.
//!
//! Messages that fit one PDU go out unchanged:
//!
//! ```rust
//! use bytes::Bytes;
//! use smpp_service::service::concat::{csm_split_message, fits_in_one_message};
//!
//! assert!(fits_in_one_message(b"elephant"));
//!
//! let long = Bytes::from("x".repeat(300));
//! let lengths: Vec<usize> = csm_split_message(&long).iter().map(|c| c.len()).collect();
//! assert_eq!(lengths, vec![130, 130, 40]);
//! ```

pub mod datatypes;
pub mod service;


pub use datatypes::{BindState, CommandStatus, OptionalParameters, OptionalTag, Tlv, TlvValue};
pub use service::{
    AtomicSequence, BindCredentials, InMemoryMultipartStash, ServiceConfig, SmppError,
    SmppResult, SmppService, SubmissionOutcome, SubmitParams,
};

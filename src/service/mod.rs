// ABOUTME: SMPP service module: submission, concatenation and response dispatch over pluggable collaborators
// ABOUTME: Exports the service, its collaborator traits, error types and in-process collaborator implementations

//! SMPP Submission Service
//!
//! This module provides the layer between a reconnecting SMPP protocol session
//! and a generic message transport:
//!
//! * **Bind state glue** - report the current session's bind state, pause and
//!   resume the surrounding transport as the session comes and goes
//! * **Concatenation** - split long messages using either SAR optional
//!   parameters or a User Data Header
//! * **Long messages** - send any length in the message_payload parameter
//! * **Response dispatch** - route submit_sm_resp statuses to success,
//!   failure or throttle handlers
//!
//! ## Architecture
//!
//! [`SmppService`] is generic over its collaborators, each a trait with native
//! async functions:
//!
//! * `ReconnectingTransport` - owns the `ProtocolSession` lifecycle
//! * `ProtocolSession` - one live connection; encodes and sends the PDUs
//! * `SequenceGenerator` - reference numbers for concatenated messages
//! * `MultipartStash` - records how many segments a message was split into
//! * `TransportHooks` - callbacks into the surrounding transport
//!
//! [`AtomicSequence`] and [`InMemoryMultipartStash`] are in-process
//! implementations of the last two.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use smpp_service::service::{
//!     AtomicSequence, InMemoryMultipartStash, ServiceConfig, SmppService, SubmitParams,
//! };
//!
//! let service = SmppService::new(
//!     ServiceConfig::new("localhost:2775"),
//!     reconnecting_transport,
//!     AtomicSequence::new(),
//!     InMemoryMultipartStash::new(),
//!     transport_hooks,
//! );
//!
//! let params = SubmitParams::new().with_short_message("A message longer than one SMS ...");
//! let sequence_numbers = service.submit_csm_udh("msg-1", "27831234567", params).await?;
//! ```

pub mod concat;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod sequence;
pub mod smpp_service;
pub mod stash;
pub mod traits;
pub mod types;

// Re-export the main types for easy access
pub use config::ServiceConfig;
pub use dispatch::SubmissionOutcome;
pub use error::{SmppError, SmppResult};
pub use sequence::AtomicSequence;
pub use smpp_service::SmppService;
pub use stash::InMemoryMultipartStash;
pub use traits::{
    MultipartStash, ProtocolSession, ReconnectingTransport, SequenceGenerator, TransportHooks,
};
pub use types::{BindCredentials, BindType, SubmitParams};

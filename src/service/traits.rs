// ABOUTME: Collaborator traits the SMPP service is generic over, using native async functions
// ABOUTME: Protocol session, reconnecting transport, sequence generator, multipart stash and transport hooks

use crate::datatypes::BindState;
use crate::service::error::SmppResult;
use crate::service::types::SubmitParams;
use std::sync::Arc;

/// One live, possibly bound, connection to the SMSC
///
/// Owns PDU encoding and the bind state machine. The service only asks it to
/// submit, to report its state and to disconnect.
pub trait ProtocolSession {
    /// Build and send a submit_sm
    ///
    /// Returns the PDU sequence number(s) the session assigned. Responses
    /// arrive later and are fed to
    /// [`SmppService::handle_submit_sm_resp`](crate::service::SmppService::handle_submit_sm_resp).
    async fn submit_sm(
        &self,
        message_id: &str,
        destination_addr: &str,
        params: SubmitParams,
    ) -> SmppResult<Vec<u32>>;

    /// Current bind state of this session
    fn state(&self) -> BindState;

    /// Check if the session is bound as transmitter, receiver or transceiver
    fn is_bound(&self) -> bool {
        self.state().is_bound()
    }

    /// Gracefully close the session (unbind and drop the TCP connection)
    async fn disconnect(&self) -> SmppResult<()>;
}

/// Owner of the protocol session lifecycle
///
/// Creates the session, replaces it after a disconnect and applies whatever
/// backoff policy it likes. Implementations call
/// [`SmppService::on_smpp_bind`](crate::service::SmppService::on_smpp_bind) and
/// [`SmppService::on_connection_lost`](crate::service::SmppService::on_connection_lost)
/// as the session comes and goes.
pub trait ReconnectingTransport {
    type Session: ProtocolSession;

    /// The session in use right now, if any
    ///
    /// Called once per operation; callers never cache the result.
    fn current_session(&self) -> Option<Arc<Self::Session>>;

    /// Start connecting (and reconnecting)
    async fn start(&self) -> SmppResult<()>;

    /// Stop reconnecting and drop any connection
    async fn stop(&self) -> SmppResult<()>;
}

/// Source of reference numbers for concatenated messages
///
/// Every call must return a value no concurrent caller can receive.
pub trait SequenceGenerator {
    async fn next(&self) -> SmppResult<u32>;
}

/// Durable record of how many segments each multipart message was split into
pub trait MultipartStash {
    async fn init_multipart_info(&self, message_id: &str, total: u32) -> SmppResult<()>;
}

/// Callbacks into the surrounding message transport
pub trait TransportHooks {
    /// Stop accepting new outbound messages
    async fn pause_connectors(&self) -> SmppResult<()>;

    /// Resume accepting new outbound messages
    async fn unpause_connectors(&self) -> SmppResult<()>;

    async fn handle_submit_sm_success(
        &self,
        message_id: &str,
        sequence_number: u32,
        status: u32,
    ) -> SmppResult<()>;

    async fn handle_submit_sm_failure(
        &self,
        message_id: &str,
        sequence_number: u32,
        status: u32,
    ) -> SmppResult<()>;

    /// The SMSC asked us to slow down; the message may be retried later
    async fn handle_submit_sm_throttled(&self, message_id: &str) -> SmppResult<()>;
}

impl<T: ReconnectingTransport> ReconnectingTransport for Arc<T> {
    type Session = T::Session;

    fn current_session(&self) -> Option<Arc<Self::Session>> {
        (**self).current_session()
    }

    async fn start(&self) -> SmppResult<()> {
        (**self).start().await
    }

    async fn stop(&self) -> SmppResult<()> {
        (**self).stop().await
    }
}

impl<T: SequenceGenerator> SequenceGenerator for Arc<T> {
    async fn next(&self) -> SmppResult<u32> {
        (**self).next().await
    }
}

impl<T: MultipartStash> MultipartStash for Arc<T> {
    async fn init_multipart_info(&self, message_id: &str, total: u32) -> SmppResult<()> {
        (**self).init_multipart_info(message_id, total).await
    }
}

impl<T: TransportHooks> TransportHooks for Arc<T> {
    async fn pause_connectors(&self) -> SmppResult<()> {
        (**self).pause_connectors().await
    }

    async fn unpause_connectors(&self) -> SmppResult<()> {
        (**self).unpause_connectors().await
    }

    async fn handle_submit_sm_success(
        &self,
        message_id: &str,
        sequence_number: u32,
        status: u32,
    ) -> SmppResult<()> {
        (**self)
            .handle_submit_sm_success(message_id, sequence_number, status)
            .await
    }

    async fn handle_submit_sm_failure(
        &self,
        message_id: &str,
        sequence_number: u32,
        status: u32,
    ) -> SmppResult<()> {
        (**self)
            .handle_submit_sm_failure(message_id, sequence_number, status)
            .await
    }

    async fn handle_submit_sm_throttled(&self, message_id: &str) -> SmppResult<()> {
        (**self).handle_submit_sm_throttled(message_id).await
    }
}

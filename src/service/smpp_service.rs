// ABOUTME: SMPP submission service: bind state glue, concatenation strategies and response dispatch
// ABOUTME: Fetches the current protocol session on every call so reconnects are picked up immediately

use crate::datatypes::{esm_class, BindState, OptionalTag};
use crate::service::concat::{self, apply_sar_parameters, udh_segment};
use crate::service::config::ServiceConfig;
use crate::service::dispatch::{describe_status, SubmissionOutcome};
use crate::service::error::{SmppError, SmppResult};
use crate::service::traits::{
    MultipartStash, ProtocolSession, ReconnectingTransport, SequenceGenerator, TransportHooks,
};
use crate::service::types::SubmitParams;
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// SMPP submission service
///
/// Sits between a reconnecting protocol session and the surrounding message
/// transport. It never holds on to a session: every operation asks the
/// reconnecting transport for the current one and fails with
/// [`SmppError::NotConnected`] if there is none. Backpressure while
/// disconnected comes from [`on_connection_lost`](Self::on_connection_lost)
/// pausing the surrounding transport.
///
/// All methods take `&self`; several messages may be in flight at once. The
/// segments of one message are always submitted in order from a single call.
pub struct SmppService<T, G, S, H> {
    config: ServiceConfig,
    transport: T,
    sequence_generator: G,
    message_stash: S,
    hooks: H,
}

impl<T, G, S, H> SmppService<T, G, S, H>
where
    T: ReconnectingTransport,
    G: SequenceGenerator,
    S: MultipartStash,
    H: TransportHooks,
{
    pub fn new(
        config: ServiceConfig,
        transport: T,
        sequence_generator: G,
        message_stash: S,
        hooks: H,
    ) -> Self {
        Self {
            config,
            transport,
            sequence_generator,
            message_stash,
            hooks,
        }
    }

    /// Static configuration supplied by the surrounding transport
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The reconnecting transport this service submits through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The protocol session in use right now, if any
    pub fn get_protocol(&self) -> Option<Arc<T::Session>> {
        self.transport.current_session()
    }

    fn session(&self, operation: &'static str) -> SmppResult<Arc<T::Session>> {
        self.transport
            .current_session()
            .ok_or(SmppError::NotConnected(operation))
    }

    /// Bind state of the current session, `Closed` when there is none
    pub fn current_bind_state(&self) -> BindState {
        self.get_protocol()
            .map_or(BindState::Closed, |session| session.state())
    }

    pub fn is_bound(&self) -> bool {
        self.get_protocol()
            .is_some_and(|session| session.is_bound())
    }

    /// Start the reconnecting transport
    pub async fn start(&self) -> SmppResult<()> {
        info!(transport = %self.config.transport_name, endpoint = %self.config.endpoint, "Starting SMPP service");
        self.transport.start().await
    }

    /// Disconnect the current session, if any, then stop the reconnecting transport
    ///
    /// Safe to call more than once and when no session exists. The transport
    /// is stopped even if the disconnect fails; the disconnect error is then
    /// returned.
    pub async fn shutdown(&self) -> SmppResult<()> {
        info!(transport = %self.config.transport_name, "Shutting down SMPP service");

        let disconnected = match self.get_protocol() {
            Some(session) => session.disconnect().await,
            None => Ok(()),
        };
        if let Err(e) = &disconnected {
            warn!(error = %e, "Disconnect failed during shutdown");
        }

        self.transport.stop().await?;
        disconnected
    }

    /// Called once the protocol session has bound; resumes outbound work
    pub async fn on_smpp_bind(&self) -> SmppResult<()> {
        info!(transport = %self.config.transport_name, state = %self.current_bind_state(), "SMPP bind succeeded, unpausing connectors");
        self.hooks.unpause_connectors().await
    }

    /// Called when the connection drops; pauses outbound work until the next bind
    pub async fn on_connection_lost(&self) -> SmppResult<()> {
        warn!(transport = %self.config.transport_name, "SMPP connection lost, pausing connectors");
        self.hooks.pause_connectors().await
    }

    /// Route a submit_sm_resp status to the matching transport handler
    ///
    /// Throttle codes go to the throttle handler, `ESME_ROK` to the success
    /// handler and everything else, raw status intact, to the failure handler.
    pub async fn handle_submit_sm_resp(
        &self,
        message_id: &str,
        sequence_number: u32,
        status: u32,
    ) -> SmppResult<SubmissionOutcome> {
        let outcome = SubmissionOutcome::classify(status);
        match outcome {
            SubmissionOutcome::Throttled => {
                warn!(message_id, sequence_number, status = %describe_status(status), "Submission throttled");
                self.hooks.handle_submit_sm_throttled(message_id).await?;
            }
            SubmissionOutcome::Ok => {
                debug!(message_id, sequence_number, "Submission accepted");
                self.hooks
                    .handle_submit_sm_success(message_id, sequence_number, status)
                    .await?;
            }
            SubmissionOutcome::Failed => {
                warn!(message_id, sequence_number, status = %describe_status(status), "Submission rejected");
                self.hooks
                    .handle_submit_sm_failure(message_id, sequence_number, status)
                    .await?;
            }
        }
        Ok(outcome)
    }

    /// Submit a single submit_sm through the current session
    ///
    /// Returns the sequence number(s) the session assigned.
    pub async fn submit_sm(
        &self,
        message_id: &str,
        destination_addr: &str,
        params: SubmitParams,
    ) -> SmppResult<Vec<u32>> {
        let session = self.session("submit_sm")?;
        debug!(message_id, destination_addr, sm_length = params.effective_sm_length(), "Submitting submit_sm");
        session.submit_sm(message_id, destination_addr, params).await
    }

    /// Submit a message of any length in the message_payload parameter
    ///
    /// `short_message` may not be set on `params`; the PDU goes out with an
    /// empty short_message, sm_length 0 and the body hex encoded in
    /// message_payload. No splitting happens here, the SMSC deals with it.
    pub async fn submit_sm_long(
        &self,
        message_id: &str,
        destination_addr: &str,
        long_message: &[u8],
        mut params: SubmitParams,
    ) -> SmppResult<Vec<u32>> {
        if params.short_message.is_some() {
            return Err(SmppError::InvalidParameterCombination(
                "short_message not allowed when sending a long message in the message_payload"
                    .to_string(),
            ));
        }

        params.optional_parameters.set(
            OptionalTag::MessagePayload,
            Bytes::from(hex::encode(long_message)),
        );
        params.short_message = Some(Bytes::new());
        params.sm_length = Some(0);

        self.submit_sm(message_id, destination_addr, params).await
    }

    /// Split a message into the segments it will be sent as
    pub fn csm_split_message(&self, message: &Bytes) -> Vec<Bytes> {
        concat::csm_split_message(message)
    }

    /// Submit a concatenated message using the SAR optional parameters
    ///
    /// The body is taken from `params.short_message`. A body that fits in one
    /// PDU is sent as is, without SAR parameters. Otherwise every segment
    /// carries the same sar_msg_ref_num, the total and its own 1-based
    /// sar_segment_seqnum; other optional parameters are passed through.
    ///
    /// Returns the sequence numbers of all segments in submission order.
    pub async fn submit_csm_sar(
        &self,
        message_id: &str,
        destination_addr: &str,
        mut params: SubmitParams,
    ) -> SmppResult<Vec<u32>> {
        let message = params
            .short_message
            .take()
            .ok_or(SmppError::MissingParameter("short_message"))?;
        self.session("submit_csm_sar")?;

        let split_msg = self.csm_split_message(&message);
        if split_msg.len() == 1 {
            params.short_message = split_msg.into_iter().next();
            return self.submit_sm(message_id, destination_addr, params).await;
        }

        let total = segment_count(&split_msg)?;
        let ref_num = self.begin_multipart(message_id, total).await?;

        let mut sequence_numbers = Vec::with_capacity(split_msg.len());
        for (i, chunk) in split_msg.into_iter().enumerate() {
            let mut segment = params.clone();
            let index = i as u32 + 1;
            apply_sar_parameters(&mut segment.optional_parameters, ref_num, total.into(), index);
            segment.short_message = Some(chunk);
            segment.sm_length = None;

            let assigned = self.submit_sm(message_id, destination_addr, segment).await?;
            sequence_numbers.extend(assigned);
        }
        Ok(sequence_numbers)
    }

    /// Submit a concatenated message using a User Data Header in each segment
    ///
    /// The body is taken from `params.short_message`. `esm_class` may not be
    /// set: every segment is sent with the UDHI flag (0x40). A body that fits
    /// in one PDU is sent as is, without a header or esm_class override.
    ///
    /// Returns the sequence numbers of all segments in submission order.
    pub async fn submit_csm_udh(
        &self,
        message_id: &str,
        destination_addr: &str,
        mut params: SubmitParams,
    ) -> SmppResult<Vec<u32>> {
        if params.esm_class.is_some() {
            return Err(SmppError::InvalidParameterCombination(
                "Cannot specify esm_class, GSM 03.40 sets this at 0x40 for concatenated messages using UDH"
                    .to_string(),
            ));
        }
        let message = params
            .short_message
            .take()
            .ok_or(SmppError::MissingParameter("short_message"))?;
        self.session("submit_csm_udh")?;

        let split_msg = self.csm_split_message(&message);
        if split_msg.len() == 1 {
            params.short_message = split_msg.into_iter().next();
            return self.submit_sm(message_id, destination_addr, params).await;
        }

        let total = segment_count(&split_msg)?;
        let ref_num = self.begin_multipart(message_id, total).await?;

        params.esm_class = Some(esm_class::UDHI_INDICATOR);
        params.sm_length = None;

        let mut sequence_numbers = Vec::with_capacity(split_msg.len());
        for (i, chunk) in split_msg.into_iter().enumerate() {
            let mut segment = params.clone();
            // total fits in a u8, so every index does too
            let index = i as u8 + 1;
            segment.short_message = Some(udh_segment(&chunk, ref_num, total, index));

            let assigned = self.submit_sm(message_id, destination_addr, segment).await?;
            sequence_numbers.extend(assigned);
        }
        Ok(sequence_numbers)
    }

    /// Draw the shared reference number and record the segment count. The
    /// stash entry must exist before the first segment goes out so a delivery
    /// receipt can never arrive ahead of it.
    async fn begin_multipart(&self, message_id: &str, total: u8) -> SmppResult<u32> {
        let ref_num = self.sequence_generator.next().await?;
        debug!(message_id, ref_num, total, "Splitting message into segments");
        self.message_stash
            .init_multipart_info(message_id, total.into())
            .await?;
        Ok(ref_num)
    }
}

/// Both sar_total_segments and the UDH total are a single octet.
fn segment_count(split_msg: &[Bytes]) -> SmppResult<u8> {
    u8::try_from(split_msg.len()).map_err(|_| {
        SmppError::InvalidData(format!(
            "message needs {} segments, at most 255 can be concatenated",
            split_msg.len()
        ))
    })
}

//! # Driving Ports (Inbound API)
//!
//! What the bus listener hands to this subsystem, and the API it calls.

use crate::domain::{Address, Frame, Name, ProcessOutcome};

/// A frame already classified by the transport layer.
///
/// Raw CAN decoding and name decoding happen outside this crate; the manager
/// only needs the fields below.
pub trait InboundFrame {
    /// Frame is an address claim (PGN 60928).
    fn is_claim(&self) -> bool;

    /// Frame is a request (PGN 59904).
    fn is_request(&self) -> bool;

    /// PDU specific byte: the destination address of a claim or request.
    fn pdu_specific(&self) -> Address;

    /// Sender's current address.
    fn source_address(&self) -> Address;

    /// Name carried by an address claim.
    ///
    /// `None` if the payload cannot hold a name.
    fn claimed_name(&self) -> Option<Name>;
}

impl InboundFrame for Frame {
    fn is_claim(&self) -> bool {
        self.header.is_claim()
    }

    fn is_request(&self) -> bool {
        self.header.is_request()
    }

    fn pdu_specific(&self) -> Address {
        self.header.pdu_specific()
    }

    fn source_address(&self) -> Address {
        self.header.source_address()
    }

    fn claimed_name(&self) -> Option<Name> {
        Frame::claimed_name(self)
    }
}

/// Entry point for inbound claim/request traffic.
///
/// # Example
///
/// ```rust,ignore
/// use j1939_network::ports::FrameProcessor;
///
/// fn pump<P: FrameProcessor>(processor: &P, frames: &[Frame]) {
///     for frame in frames {
///         processor.process(frame);
///     }
/// }
/// ```
pub trait FrameProcessor {
    /// Turn one frame into state machine events and deliver them.
    ///
    /// Never fails: irrelevant and unroutable frames are reported through
    /// the returned outcome.
    fn process<F: InboundFrame + ?Sized>(&self, frame: &F) -> ProcessOutcome;
}

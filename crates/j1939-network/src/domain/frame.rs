//! Structured J1939 frames.
//!
//! Decoding raw bus traffic belongs to the transport layer. This module only
//! provides the already-split header fields and the 8-byte payload so that
//! claim and request frames can be classified and fed to the network manager.

use super::errors::FrameError;
use super::value_objects::{Address, Name};

/// PDU format of the address claim PGN (60928).
pub const PF_ADDRESS_CLAIM: u8 = 0xEE;

/// PDU format of the request PGN (59904).
pub const PF_REQUEST: u8 = 0xEA;

/// PGN of the address claim message.
pub const PGN_ADDRESS_CLAIM: u32 = 0x00EE00;

/// PGN of the request message.
pub const PGN_REQUEST: u32 = 0x00EA00;

/// PDU formats below this value carry a destination address in the PDU specific byte.
const PDU2_THRESHOLD: u8 = 240;

const MAX_IDENTIFIER: u32 = 0x1FFF_FFFF;

/// Default priority for network management traffic.
const DEFAULT_PRIORITY: u8 = 6;

/// Fields of a 29-bit J1939 identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// 3-bit priority, 0 is highest
    pub priority: u8,
    pub extended_data_page: bool,
    pub data_page: bool,
    pub pdu_format: u8,
    /// Destination address for PDU1 formats, group extension for PDU2
    pub pdu_specific: u8,
    pub source_address: u8,
}

impl FrameHeader {
    /// Split a 29-bit extended identifier.
    pub fn from_id(id: u32) -> Result<Self, FrameError> {
        if id > MAX_IDENTIFIER {
            return Err(FrameError::IdentifierOutOfRange(id));
        }

        Ok(Self {
            priority: ((id >> 26) & 0x07) as u8,
            extended_data_page: (id >> 25) & 0x01 == 1,
            data_page: (id >> 24) & 0x01 == 1,
            pdu_format: ((id >> 16) & 0xFF) as u8,
            pdu_specific: ((id >> 8) & 0xFF) as u8,
            source_address: (id & 0xFF) as u8,
        })
    }

    /// Header of an address claim sent from `source` to `destination`.
    pub fn address_claim(source: Address, destination: Address) -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            extended_data_page: false,
            data_page: false,
            pdu_format: PF_ADDRESS_CLAIM,
            pdu_specific: destination.value(),
            source_address: source.value(),
        }
    }

    /// Header of a request sent from `source` to `destination`.
    pub fn address_request(source: Address, destination: Address) -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            extended_data_page: false,
            data_page: false,
            pdu_format: PF_REQUEST,
            pdu_specific: destination.value(),
            source_address: source.value(),
        }
    }

    /// Reassemble the 29-bit identifier.
    pub fn id(&self) -> u32 {
        (u32::from(self.priority & 0x07) << 26)
            | (u32::from(self.extended_data_page) << 25)
            | (u32::from(self.data_page) << 24)
            | (u32::from(self.pdu_format) << 16)
            | (u32::from(self.pdu_specific) << 8)
            | u32::from(self.source_address)
    }

    /// Parameter group number. PDU1 formats exclude the destination byte.
    pub fn pgn(&self) -> u32 {
        let base = (u32::from(self.extended_data_page) << 17)
            | (u32::from(self.data_page) << 16)
            | (u32::from(self.pdu_format) << 8);
        if self.is_pdu1() {
            base
        } else {
            base | u32::from(self.pdu_specific)
        }
    }

    /// True if the PDU specific byte is a destination address.
    pub fn is_pdu1(&self) -> bool {
        self.pdu_format < PDU2_THRESHOLD
    }

    pub fn is_claim(&self) -> bool {
        self.pdu_format == PF_ADDRESS_CLAIM
    }

    pub fn is_request(&self) -> bool {
        self.pdu_format == PF_REQUEST
    }

    pub fn pdu_specific(&self) -> Address {
        Address(self.pdu_specific)
    }

    pub fn source_address(&self) -> Address {
        Address(self.source_address)
    }
}

/// A classic CAN frame with a J1939 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub header: FrameHeader,
    /// Unused bytes are padded with 0xFF
    pub payload: [u8; 8],
    /// Number of data bytes, never more than 8
    len: usize,
}

impl Frame {
    pub fn new(header: FrameHeader, data: &[u8]) -> Result<Self, FrameError> {
        if data.len() > 8 {
            return Err(FrameError::PayloadTooLong { len: data.len() });
        }

        let mut payload = [0xFF; 8];
        payload[..data.len()].copy_from_slice(data);

        Ok(Self {
            header,
            payload,
            len: data.len(),
        })
    }

    /// Address claim for `name` from `source`, addressed to `destination`.
    pub fn claim(name: Name, source: Address, destination: Address) -> Self {
        Self {
            header: FrameHeader::address_claim(source, destination),
            payload: name.to_le_bytes(),
            len: 8,
        }
    }

    /// Request for `pgn` from `source`, addressed to `destination`.
    pub fn request(source: Address, destination: Address, pgn: u32) -> Self {
        let pgn = pgn.to_le_bytes();
        let mut payload = [0xFF; 8];
        payload[..3].copy_from_slice(&pgn[..3]);

        Self {
            header: FrameHeader::address_request(source, destination),
            payload,
            len: 3,
        }
    }

    /// Payload bytes actually carried by the frame.
    pub fn data(&self) -> &[u8] {
        &self.payload[..self.len]
    }

    /// Number of data bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Name carried by an address claim; `None` if the payload is short.
    pub fn claimed_name(&self) -> Option<Name> {
        let bytes: [u8; 8] = self.data().try_into().ok()?;
        Some(Name::from_le_bytes(bytes))
    }

    /// PGN asked for by a request frame.
    pub fn requested_pgn(&self) -> Option<u32> {
        if !self.header.is_request() || self.len < 3 {
            return None;
        }
        let data = self.data();
        Some(u32::from(data[0]) | (u32::from(data[1]) << 8) | (u32::from(data[2]) << 16))
    }
}

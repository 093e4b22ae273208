//! EOS internal interface identifier.

use crate::port::{FieldList, PortFields};
use crate::{IntfType, ParseError, type_name};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 32-bit EOS internal interface ID.
///
/// ```text
///  31        25 24                         0
/// +------------+----------------------------+
/// |    type    |        port number         |
/// +------------+----------------------------+
/// ```
///
/// The layout of the port number depends on the type.
///
/// # Examples
///
/// ```
/// use eos_intf::IntfId;
///
/// let id = IntfId::new(0x000c0202);
/// assert_eq!(id.to_string(), "Ethernet3/1/2");
///
/// let id: IntfId = "0x01ffffff".parse().unwrap();
/// assert_eq!(id.to_string(), "Ethernet127/511/511");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntfId(u32);

impl IntfId {
    /// Bits holding the port number.
    pub const PORT_MASK: u32 = 0x1ff_ffff;

    /// Position of the type field.
    pub const TYPE_SHIFT: u32 = 25;

    /// Wraps a raw 32-bit interface ID.
    pub const fn new(raw: u32) -> Self {
        IntfId(raw)
    }

    /// Returns the raw 32-bit value.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns the 7-bit type code.
    pub const fn type_code(&self) -> u8 {
        (self.0 >> Self::TYPE_SHIFT) as u8
    }

    /// Returns the known type, or `None` for codes outside the table.
    pub const fn intf_type(&self) -> Option<IntfType> {
        IntfType::from_code(self.type_code())
    }

    /// Returns the type's display name, `"UNKNOWN"` for unknown codes.
    pub const fn type_name(&self) -> &'static str {
        type_name(self.type_code())
    }

    /// Returns the bottom 25 bits.
    pub const fn raw_port(&self) -> u32 {
        self.0 & Self::PORT_MASK
    }

    /// Splits the raw port number according to the type.
    pub fn port_fields(&self) -> PortFields {
        let n = self.raw_port();

        let Some(t) = self.intf_type() else {
            return PortFields::Joined(FieldList::one(n));
        };

        match t {
            IntfType::Ethernet | IntfType::PeerEthernet => {
                let slot = (n & 0x1fc_0000) >> 18;
                let module = (n & 0x3_fe00) >> 9;
                let port = n & 0x1ff;
                PortFields::Joined(FieldList::three(slot, module, port))
            }
            // Layout not known yet.
            IntfType::Fabric | IntfType::T2Recirc => PortFields::Empty,
            IntfType::Mgmt | IntfType::Internal => {
                let slot = (n & 0x3_fe00) >> 9;
                let port = n & 0x1ff;
                PortFields::Joined(FieldList::two(slot, port))
            }
            IntfType::Test => {
                let slot = (n & 0xff_f000) >> 12;
                let port = n & 0xfff;
                PortFields::Joined(FieldList::two(slot, port))
            }
            IntfType::Fwd => PortFields::Literal(n & 0x1),
            IntfType::DefaultEthSwitchedPort => PortFields::Joined(FieldList::one(n & 0xff)),
            IntfType::Mlag => PortFields::Joined(FieldList::one(n & 0x1ff)),
            IntfType::Vlan
            | IntfType::Loopback
            | IntfType::Null
            | IntfType::Tunnel
            | IntfType::Host
            | IntfType::Register => PortFields::Joined(FieldList::one(n & 0xfff)),
            IntfType::PortChannel | IntfType::PeerPortChannel => {
                PortFields::Joined(FieldList::one(n & 0x1fff))
            }
            IntfType::MlagPeer | IntfType::Vxlan | IntfType::Gre => {
                PortFields::Joined(FieldList::one(n & 0xffff))
            }
            IntfType::DynamicTunnel => PortFields::SubIntf(n),
            t if t.is_portless() => PortFields::Empty,
            _ => PortFields::Joined(FieldList::one(n)),
        }
    }

    /// Returns the rendered port suffix, possibly empty.
    pub fn port(&self) -> String {
        self.port_fields().to_string()
    }
}

impl fmt::Display for IntfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.type_name(), self.port_fields())
    }
}

impl FromStr for IntfId {
    type Err = ParseError;

    /// Parses decimal or `0x`-prefixed hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidIntfId(s.to_string());

        let trimmed = s.trim();
        let (digits, radix) = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => (hex, 16),
            None => (trimmed, 10),
        };

        // from_str_radix alone would accept a leading '+'
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(invalid());
        }

        u32::from_str_radix(digits, radix)
            .map(IntfId)
            .map_err(|_| invalid())
    }
}

impl From<u32> for IntfId {
    fn from(raw: u32) -> Self {
        IntfId(raw)
    }
}

impl From<i32> for IntfId {
    fn from(raw: i32) -> Self {
        IntfId(raw as u32)
    }
}

impl From<IntfId> for u32 {
    fn from(id: IntfId) -> u32 {
        id.0
    }
}

//! Arista EOS internal interface ID decoding.
//!
//! EOS identifies interfaces internally with a 32-bit number: the top 7 bits
//! select the interface type and the bottom 25 bits hold a port number whose
//! layout depends on the type. This crate turns such a number back into the
//! name EOS displays:
//!
//! - [`IntfId`]: the raw 32-bit identifier and its decoded name
//! - [`IntfType`]: interface type codes and their display names
//! - [`PortFields`]: slot/module/port sub-fields of the port number
//!
//! Decoding is total: every `u32` yields a name. Unknown type codes render as
//! `UNKNOWN` followed by the raw port number.
//!
//! ```
//! use eos_intf::IntfId;
//!
//! assert_eq!(IntfId::new(0x000c0202).to_string(), "Ethernet3/1/2");
//! ```

mod intf_id;
mod intf_type;
mod port;

pub use intf_id::IntfId;
pub use intf_type::{IntfType, UNKNOWN_TYPE_NAME, type_name};
pub use port::{FieldList, PortFields};

/// Decodes a raw interface ID into its display name.
pub fn decode(raw: u32) -> String {
    IntfId::new(raw).to_string()
}

/// Error type for parsing interface IDs from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid interface ID: {0:?} (expected decimal or 0x-prefixed hex u32)")]
    InvalidIntfId(String),
}

//! Interface type codes and their EOS display names.

use serde::{Serialize, Serializer};
use std::fmt;

/// Display name reported for type codes missing from the table.
pub const UNKNOWN_TYPE_NAME: &str = "UNKNOWN";

/// Interface category carried in the top 7 bits of an [`IntfId`](crate::IntfId).
///
/// Display names are the strings EOS itself prints, irregular spelling and
/// capitalization included ("Mangement", "l2QuerierLink", "fwd").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum IntfType {
    Ethernet = 0x00,
    Vlan = 0x01,
    /// Out-of-band management port.
    Mgmt = 0x02,
    Loopback = 0x03,
    Null = 0x04,
    Internal = 0x05,
    Cpu = 0x06,
    PortChannel = 0x07,
    PeerEthernet = 0x08,
    PeerPortChannel = 0x09,
    Test = 0x0a,
    Switch = 0x0b,
    L2QuerierLink = 0x0c,
    /// Lower-case "mlag", distinct from [`IntfType::MlagPeer`].
    Mlag = 0x0d,
    Tunnel = 0x0f,
    /// Capitalized "Mlag" (code 0x10).
    MlagPeer = 0x10,
    DefaultTestPort = 0x15,
    DefaultEthMgmtPort = 0x16,
    DefaultEthSwitchedPort = 0x17,
    DefaultEthInternalPort = 0x18,
    Host = 0x19,
    DefaultEthDataLinkPort = 0x22,
    Vxlan = 0x38,
    Gre = 0x39,
    DynamicTunnel = 0x3a,
    Pseudowire = 0x3b,
    TunnelTap = 0x3c,
    Fabric = 0x48,
    Register = 0x4f,
    OpenFlowRouter = 0x5a,
    T2Recirc = 0x63,
    Fwd = 0x66,
}

impl IntfType {
    /// Every known type, in code order.
    pub const ALL: [IntfType; 32] = [
        IntfType::Ethernet,
        IntfType::Vlan,
        IntfType::Mgmt,
        IntfType::Loopback,
        IntfType::Null,
        IntfType::Internal,
        IntfType::Cpu,
        IntfType::PortChannel,
        IntfType::PeerEthernet,
        IntfType::PeerPortChannel,
        IntfType::Test,
        IntfType::Switch,
        IntfType::L2QuerierLink,
        IntfType::Mlag,
        IntfType::Tunnel,
        IntfType::MlagPeer,
        IntfType::DefaultTestPort,
        IntfType::DefaultEthMgmtPort,
        IntfType::DefaultEthSwitchedPort,
        IntfType::DefaultEthInternalPort,
        IntfType::Host,
        IntfType::DefaultEthDataLinkPort,
        IntfType::Vxlan,
        IntfType::Gre,
        IntfType::DynamicTunnel,
        IntfType::Pseudowire,
        IntfType::TunnelTap,
        IntfType::Fabric,
        IntfType::Register,
        IntfType::OpenFlowRouter,
        IntfType::T2Recirc,
        IntfType::Fwd,
    ];

    /// Looks up the type for a 7-bit code, or `None` if the code is not in use.
    pub const fn from_code(code: u8) -> Option<Self> {
        let t = match code {
            0x00 => IntfType::Ethernet,
            0x01 => IntfType::Vlan,
            0x02 => IntfType::Mgmt,
            0x03 => IntfType::Loopback,
            0x04 => IntfType::Null,
            0x05 => IntfType::Internal,
            0x06 => IntfType::Cpu,
            0x07 => IntfType::PortChannel,
            0x08 => IntfType::PeerEthernet,
            0x09 => IntfType::PeerPortChannel,
            0x0a => IntfType::Test,
            0x0b => IntfType::Switch,
            0x0c => IntfType::L2QuerierLink,
            0x0d => IntfType::Mlag,
            0x0f => IntfType::Tunnel,
            0x10 => IntfType::MlagPeer,
            0x15 => IntfType::DefaultTestPort,
            0x16 => IntfType::DefaultEthMgmtPort,
            0x17 => IntfType::DefaultEthSwitchedPort,
            0x18 => IntfType::DefaultEthInternalPort,
            0x19 => IntfType::Host,
            0x22 => IntfType::DefaultEthDataLinkPort,
            0x38 => IntfType::Vxlan,
            0x39 => IntfType::Gre,
            0x3a => IntfType::DynamicTunnel,
            0x3b => IntfType::Pseudowire,
            0x3c => IntfType::TunnelTap,
            0x48 => IntfType::Fabric,
            0x4f => IntfType::Register,
            0x5a => IntfType::OpenFlowRouter,
            0x63 => IntfType::T2Recirc,
            0x66 => IntfType::Fwd,
            _ => return None,
        };
        Some(t)
    }

    /// Returns the 7-bit type code.
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Returns the EOS display name.
    pub const fn name(&self) -> &'static str {
        match self {
            IntfType::Ethernet => "Ethernet",
            IntfType::Vlan => "Vlan",
            IntfType::Mgmt => "Mangement",
            IntfType::Loopback => "Loopback",
            IntfType::Null => "Null",
            IntfType::Internal => "Internal",
            IntfType::Cpu => "Cpu",
            IntfType::PortChannel => "Port-Channel",
            IntfType::PeerEthernet => "PeerEthernet",
            IntfType::PeerPortChannel => "PeerPort-Channel",
            IntfType::Test => "Test",
            IntfType::Switch => "Switch",
            IntfType::L2QuerierLink => "l2QuerierLink",
            IntfType::Mlag => "mlag",
            IntfType::Tunnel => "Tunnel",
            IntfType::MlagPeer => "Mlag",
            IntfType::DefaultTestPort => "DefaultTestPort",
            IntfType::DefaultEthMgmtPort => "DefaultEthManagementPort",
            IntfType::DefaultEthSwitchedPort => "DefaultEthSwitchedPort",
            IntfType::DefaultEthInternalPort => "DefaultEthInternalPort",
            IntfType::Host => "host",
            IntfType::DefaultEthDataLinkPort => "DefaultEthDataLinkPort",
            IntfType::Vxlan => "Vxlan",
            IntfType::Gre => "Gre",
            IntfType::DynamicTunnel => "DynamicTunnel",
            IntfType::Pseudowire => "Pseudowire",
            IntfType::TunnelTap => "tunnelTap",
            IntfType::Fabric => "Fabric",
            IntfType::Register => "Register",
            IntfType::OpenFlowRouter => "OpenFlowRouter",
            IntfType::T2Recirc => "T2Recirc",
            IntfType::Fwd => "fwd",
        }
    }

    /// Returns true if the name carries no port number at all.
    pub const fn is_portless(&self) -> bool {
        matches!(
            self,
            IntfType::Cpu
                | IntfType::Switch
                | IntfType::L2QuerierLink
                | IntfType::DefaultTestPort
                | IntfType::DefaultEthMgmtPort
                | IntfType::DefaultEthInternalPort
                | IntfType::DefaultEthDataLinkPort
                | IntfType::OpenFlowRouter
        )
    }
}

/// Returns the display name for a raw type code, or `"UNKNOWN"`.
pub const fn type_name(code: u8) -> &'static str {
    match IntfType::from_code(code) {
        Some(t) => t.name(),
        None => UNKNOWN_TYPE_NAME,
    }
}

impl fmt::Display for IntfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for IntfType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl TryFrom<u8> for IntfType {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        IntfType::from_code(code).ok_or(code)
    }
}

impl From<IntfType> for u8 {
    fn from(t: IntfType) -> u8 {
        t.code()
    }
}

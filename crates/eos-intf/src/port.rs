//! Port-number sub-fields and their textual rendering.

use std::fmt;

/// Sub-fields decoded from the 25-bit raw port number.
///
/// The variant carries the rendering rule; [`PortFields::values`] exposes the
/// numbers themselves in slot/module/port order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortFields {
    /// No port suffix.
    Empty,
    /// Up to three numbers joined by `/`, zeros omitted.
    Joined(FieldList),
    /// A single number printed even when it is zero.
    Literal(u32),
    /// A number followed by a literal `.0`.
    SubIntf(u32),
}

/// Fixed-capacity list of at most three port fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldList {
    vals: [u32; 3],
    len: u8,
}

impl FieldList {
    /// A single field.
    pub const fn one(a: u32) -> Self {
        FieldList { vals: [a, 0, 0], len: 1 }
    }

    /// Two fields, slot then port.
    pub const fn two(a: u32, b: u32) -> Self {
        FieldList { vals: [a, b, 0], len: 2 }
    }

    /// Three fields, slot, module, then port.
    pub const fn three(a: u32, b: u32, c: u32) -> Self {
        FieldList { vals: [a, b, c], len: 3 }
    }

    /// Returns the fields in order.
    pub fn as_slice(&self) -> &[u32] {
        &self.vals[..usize::from(self.len)]
    }
}

impl PortFields {
    /// Returns the decoded fields, including zeros.
    pub fn values(&self) -> &[u32] {
        match self {
            PortFields::Empty => &[],
            PortFields::Joined(list) => list.as_slice(),
            PortFields::Literal(n) | PortFields::SubIntf(n) => std::slice::from_ref(n),
        }
    }
}

impl fmt::Display for PortFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortFields::Empty => Ok(()),
            PortFields::Joined(list) => {
                let mut sep = "";
                for n in list.as_slice().iter().filter(|n| **n != 0) {
                    write!(f, "{}{}", sep, n)?;
                    sep = "/";
                }
                Ok(())
            }
            PortFields::Literal(n) => write!(f, "{}", n),
            PortFields::SubIntf(n) => write!(f, "{}.0", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_join_skips_zeros() {
        assert_eq!(PortFields::Joined(FieldList::three(3, 1, 2)).to_string(), "3/1/2");
        assert_eq!(PortFields::Joined(FieldList::three(0, 1, 2)).to_string(), "1/2");
        assert_eq!(PortFields::Joined(FieldList::three(3, 0, 2)).to_string(), "3/2");
        assert_eq!(PortFields::Joined(FieldList::three(3, 1, 0)).to_string(), "3/1");
        assert_eq!(PortFields::Joined(FieldList::three(0, 0, 7)).to_string(), "7");
    }

    #[test]
    fn test_all_zero_renders_empty() {
        let fields = PortFields::Joined(FieldList::three(0, 0, 0));
        assert_eq!(fields.to_string(), "");
        assert_eq!(fields.values(), &[0, 0, 0]);
    }

    #[test]
    fn test_literal_keeps_zero() {
        assert_eq!(PortFields::Literal(0).to_string(), "0");
    }

    #[test]
    fn test_sub_intf() {
        assert_eq!(PortFields::SubIntf(0).to_string(), "0.0");
        assert_eq!(PortFields::SubIntf(42).to_string(), "42.0");
    }

    #[test]
    fn test_values() {
        assert!(PortFields::Empty.values().is_empty());
        assert_eq!(PortFields::Joined(FieldList::two(4, 5)).values(), &[4, 5]);
        assert_eq!(PortFields::Joined(FieldList::one(9)).values(), &[9]);
        assert_eq!(PortFields::Literal(1).values(), &[1]);
    }
}

//! Property tests: decoding is total and its output is well formed.

use eos_intf::{IntfId, IntfType, PortFields};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_never_panics(raw in any::<u32>()) {
        let id = IntfId::new(raw);
        let name = id.to_string();
        prop_assert!(name.starts_with(id.type_name()));
        prop_assert_eq!(name, format!("{}{}", id.type_name(), id.port()));
    }

    #[test]
    fn split_is_lossless(raw in any::<u32>()) {
        let id = IntfId::new(raw);
        let rebuilt = (u32::from(id.type_code()) << IntfId::TYPE_SHIFT) | id.raw_port();
        prop_assert_eq!(rebuilt, raw);
        prop_assert!(id.type_code() <= 0x7f);
    }

    #[test]
    fn joined_suffix_has_clean_separators(raw in any::<u32>()) {
        let id = IntfId::new(raw);
        if let PortFields::Joined(_) = id.port_fields() {
            let port = id.port();
            prop_assert!(!port.starts_with('/'));
            prop_assert!(!port.ends_with('/'));
            prop_assert!(!port.contains("//"));
            prop_assert!(port.split('/').all(|p| p != "0"));
        }
    }

    #[test]
    fn ethernet_fields_fit_their_masks(port in 0u32..=IntfId::PORT_MASK) {
        let id = IntfId::new((u32::from(IntfType::Ethernet.code()) << IntfId::TYPE_SHIFT) | port);
        let values = id.port_fields();
        let values = values.values();
        prop_assert_eq!(values.len(), 3);
        prop_assert!(values[0] <= 0x7f);
        prop_assert!(values[1] <= 0x1ff);
        prop_assert!(values[2] <= 0x1ff);
        prop_assert_eq!((values[0] << 18) | (values[1] << 9) | values[2], port);
    }
}

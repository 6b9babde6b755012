use elemental::{
    avec::{Context, Options, render},
    sans::he::capabilities,
};
use proptest::{collection::vec, prelude::*};

fn rendered(r: &[u8], options: &Options) -> String {
    let mut s = String::new();
    render(r, options, &mut s).unwrap();
    s
}

fn options() -> impl Strategy<Value = Options> {
    let context = prop_oneof![Just(Context::Scan), Just(Context::Link), Just(Context::LinkMloMld)];

    (any::<bool>(), context).prop_map(|(unknown, context)| Options { unknown, context })
}

/// Fixed-length elements as tag, name and accepted length.
const FIXED: [(u8, &str, usize); 4] = [
    (3, "DS Parameter set", 1),
    (11, "BSS Load", 5),
    (32, "Power constraint", 1),
    (45, "HT capabilities", 26),
];

/// An element of a fixed-length kind, with a body of any other length.
fn misfit() -> impl Strategy<Value = (u8, &'static str, Vec<u8>)> {
    (0..FIXED.len(), vec(any::<u8>(), 0..=255))
        .prop_filter("length accepted", |(i, body)| body.len() != FIXED[*i].2)
        .prop_map(|(i, body)| (FIXED[i].0, FIXED[i].1, body))
}

fn element(id: u8, body: &[u8]) -> Vec<u8> {
    let mut r = vec![id, body.len() as u8];
    r.extend_from_slice(body);
    r
}

proptest! {
    #![proptest_config(ProptestConfig {
        failure_persistence: None,
        ..Default::default()
    })]

    #[test]
    fn arbitrary_buffers_render(r in vec(any::<u8>(), 0..1024), options in options()) {
        rendered(&r, &options);
    }

    #[test]
    fn arbitrary_elements_render(
        elements in vec((any::<u8>(), vec(any::<u8>(), 0..=255)), 0..8),
        options in options(),
    ) {
        let r: Vec<u8> = elements.iter().flat_map(|(id, body)| element(*id, body)).collect();
        rendered(&r, &options);
    }

    #[test]
    fn rendering_is_deterministic(r in vec(any::<u8>(), 0..512), options in options()) {
        prop_assert_eq!(rendered(&r, &options), rendered(&r, &options));
    }

    #[test]
    fn out_of_range_length_dumps_body((id, name, body) in misfit()) {
        let s = rendered(&element(id, &body), &Options::default());

        let marker = match body.len() {
            0 => " <invalid: no data>".to_string(),
            1 => format!(" <invalid: 1 byte: {:02x}>", body[0]),
            n => {
                let hex: String = body.iter().map(|b| format!(" {b:02x}")).collect();
                format!(" <invalid: {n} bytes:{hex}>")
            }
        };

        prop_assert_eq!(s, format!("\t{name}:{marker}\n"));
    }

    #[test]
    fn wmm_is_dispatched(body in vec(any::<u8>(), 1..=200), unknown in any::<bool>()) {
        let mut r = vec![0xdd, 4 + body.len() as u8, 0x00, 0x50, 0xf2, 0x02];
        r.extend_from_slice(&body);

        let s = rendered(&r, &Options { unknown, ..Options::default() });

        prop_assert!(s.starts_with("\tWMM:"), "{:?}", s);
        prop_assert!(!s.contains("MS/WiFi"));
    }

    #[test]
    fn minimal_he_capabilities(
        mac in any::<[u8; 6]>(),
        mut phy in any::<[u8; 11]>(),
        mcs in any::<[u8; 4]>(),
    ) {
        // No 160 or 80+80 MHz blocks, no PPE thresholds.
        phy[0] &= !0x18;
        phy[6] &= !0x80;

        let mut body = vec![35];
        body.extend_from_slice(&mac);
        body.extend_from_slice(&phy);
        body.extend_from_slice(&mcs);

        let parsed = capabilities::parse(&body[1..]).unwrap();
        prop_assert_eq!(parsed.len, 21);
        prop_assert_eq!(parsed.mcs_nss.len(), 1);
        prop_assert!(parsed.ppe.is_none());

        let s = rendered(&element(255, &body), &Options::default());
        prop_assert!(s.starts_with("\tHE capabilities:\n\t\tHE MAC Capabilities:\n"));
        prop_assert!(s.ends_with("\n\t\tPPE Thresholds\n"), "{:?}", s);
        prop_assert!(!s.contains("invalid"));
    }

    #[test]
    fn two_byte_country_is_invalid(code in any::<[u8; 2]>()) {
        let s = rendered(&element(7, &code), &Options::default());

        prop_assert_eq!(
            s,
            format!("\tCountry: <invalid: 2 bytes: {:02x} {:02x}>\n", code[0], code[1])
        );
    }

    #[test]
    fn one_byte_operating_classes(class in any::<u8>()) {
        let s = rendered(&element(59, &[class]), &Options::default());

        prop_assert_eq!(
            s,
            format!("\tSupported operating classes:\n\t\t * current operating class: {class}\n")
        );
    }
}

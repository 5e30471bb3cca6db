//! Property tests: reading a diagram is pure

use homelab_diagram::{diagram, Variant};
use proptest::prelude::*;

fn any_variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Full), Just(Variant::Summary)]
}

proptest! {
    #[test]
    fn test_any_call_sequence_sees_stable_text(calls in prop::collection::vec(any_variant(), 1..32)) {
        let full = diagram(Variant::Full).to_owned();
        let summary = diagram(Variant::Summary).to_owned();

        for variant in calls {
            let expected = match variant {
                Variant::Full => &full,
                Variant::Summary => &summary,
            };
            prop_assert_eq!(diagram(variant), expected.as_str());
        }
    }

    #[test]
    fn test_variant_names_parse_regardless_of_case(variant in any_variant(), upper in any::<bool>()) {
        let name = if upper { variant.name().to_uppercase() } else { variant.name().to_string() };
        prop_assert_eq!(name.parse::<Variant>().unwrap(), variant);
    }
}

//! Property tests for definitions document parsing.

use proptest::prelude::*;

use layerform::parse_definitions_document;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(input in any::<String>()) {
        let _ = parse_definitions_document(&input);
    }

    /// PROPERTY: Both document shapes parse to the same definitions.
    #[test]
    fn property_wrapped_and_bare_documents_agree(
        names in proptest::collection::vec("[a-z][a-z0-9_-]{0,8}", 0..6),
    ) {
        let entries: Vec<String> = names
            .iter()
            .map(|n| format!(r#"{{ "name": "{n}", "dependencies": [] }}"#))
            .collect();
        let bare = format!("[{}]", entries.join(","));
        let wrapped = format!(r#"{{ "layers": {bare} }}"#);

        let from_bare = parse_definitions_document(&bare).unwrap();
        let from_wrapped = parse_definitions_document(&wrapped).unwrap();
        prop_assert_eq!(from_bare.len(), names.len());
        prop_assert_eq!(from_bare, from_wrapped);
    }
}

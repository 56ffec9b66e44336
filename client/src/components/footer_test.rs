use super::*;

#[test]
fn tel_uri_keeps_only_dialable_characters() {
    assert_eq!(tel_uri("+91-40-1234-5678"), "tel:+914012345678");
    assert_eq!(tel_uri("(040) 555 0100"), "tel:0405550100");
}

use inplot_core::WindowIdentity;

#[test]
fn title_includes_connection_name() {
    let identity = WindowIdentity::new("ai0", "ni_card_0", "dev1");
    assert_eq!(identity.title(), "ni_card_0 (ai0)");
}

#[test]
fn dash_connection_name_is_suppressed() {
    let identity = WindowIdentity::new("-", "ni_card_0", "dev1");
    assert_eq!(identity.title(), "ni_card_0");
}

#[test]
fn topic_is_device_and_hardware_with_nul_terminator() {
    let identity = WindowIdentity::new("ai0", "ni_card_0", "dev1");
    assert_eq!(identity.topic(), b"dev1 ni_card_0\0");
}

#[test]
fn nul_terminator_prevents_prefix_collisions() {
    let short = WindowIdentity::new("-", "hw", "dev 1").topic();
    let long = WindowIdentity::new("-", "hw", "dev 10").topic();
    assert!(!long.starts_with(&short));
}

use super::*;

#[test]
fn default_is_inactive_test() {
    let capabilities = Capabilities::default();

    assert!(!capabilities.is_active(Capability::VulnerabilityScanner));
    assert_eq!(CapabilitySet::none(), capabilities.snapshot());
}

#[test]
fn cloned_handles_share_state_test() {
    let capabilities = Capabilities::default();
    let other = capabilities.clone();

    capabilities.activate(Capability::VulnerabilityScanner);
    assert!(other.is_active(Capability::VulnerabilityScanner));

    other.deactivate(Capability::VulnerabilityScanner);
    assert!(!capabilities.is_active(Capability::VulnerabilityScanner));
}

#[test]
fn snapshot_does_not_follow_changes_test() {
    let capabilities = Capabilities::new(CapabilitySet::all());
    let snapshot = capabilities.snapshot();

    capabilities.deactivate(Capability::VulnerabilityScanner);

    assert!(snapshot.has(Capability::VulnerabilityScanner));
    assert!(!capabilities.snapshot().has(Capability::VulnerabilityScanner));
}

#[test]
fn visible_across_threads_test() {
    let capabilities = Capabilities::default();
    let writer = capabilities.clone();

    std::thread::spawn(move || writer.activate(Capability::VulnerabilityScanner))
        .join()
        .unwrap();

    assert!(capabilities.is_active(Capability::VulnerabilityScanner));
}

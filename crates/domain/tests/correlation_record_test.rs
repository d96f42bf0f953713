use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use whois_dns_domain::{validate_host, CorrelationRecord, DnsObservation, DomainError};

fn record_at(created_at: Instant) -> CorrelationRecord {
    CorrelationRecord::new(Arc::from("abcd.example.com."), created_at)
}

#[test]
fn test_new_record_has_no_observations() {
    let record = record_at(Instant::now());

    assert!(record.http_remote_addr.is_none());
    assert!(record.dns_remote_addr.is_none());
    assert!(record.edns_client_subnet.is_none());
}

#[test]
fn test_expiry_boundary() {
    let t0 = Instant::now();
    let record = record_at(t0);
    let window = Duration::from_secs(5);

    assert!(!record.is_expired(t0, window));
    assert!(!record.is_expired(t0 + Duration::from_millis(4_999), window));
    assert!(record.is_expired(t0 + window, window));
    assert!(record.is_expired(t0 + Duration::from_secs(60), window));
}

#[test]
fn test_age_saturates_for_earlier_now() {
    let t0 = Instant::now();
    let record = record_at(t0 + Duration::from_secs(1));

    assert_eq!(record.age(t0), Duration::ZERO);
}

#[test]
fn test_observe_dns_last_write_wins_and_keeps_subnet() {
    let mut record = record_at(Instant::now());

    record.observe_dns("9.9.9.9".to_string(), Some("9.9.9.0/24".to_string()));
    record.observe_dns("8.8.8.8".to_string(), None);

    assert_eq!(record.dns_remote_addr.as_deref(), Some("8.8.8.8"));
    assert_eq!(record.edns_client_subnet.as_deref(), Some("9.9.9.0/24"));
}

#[test]
fn test_dns_observation_normalizes_name() {
    let peer = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 9));
    let observation = DnsObservation::new("ABCD.Example.com", peer, None);

    assert_eq!(&*observation.name, "abcd.example.com.");
}

#[test]
fn test_validate_host() {
    assert!(validate_host("example.com").is_ok());
    assert!(validate_host("example.com:8080").is_ok());
    assert!(matches!(validate_host(""), Err(DomainError::InvalidHost(_))));
    assert!(validate_host("exa mple.com").is_err());
}

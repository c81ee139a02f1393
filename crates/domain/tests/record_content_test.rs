use hickory_proto::rr::Name;
use scriptor_domain::{qtype, HookError, HookRecord, RecordContent, RecordPlace};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

#[test]
fn test_parse_a_content() {
    let content = RecordContent::parse(qtype::A, "203.0.113.9").unwrap();
    assert_eq!(content, RecordContent::A(Ipv4Addr::new(203, 0, 113, 9)));
    assert_eq!(content.zone_repr(), "203.0.113.9");
}

#[test]
fn test_parse_aaaa_content() {
    let content = RecordContent::parse(qtype::AAAA, "64:ff9b::cb00:7105").unwrap();
    let expected: Ipv6Addr = "64:ff9b::cb00:7105".parse().unwrap();
    assert_eq!(content, RecordContent::Aaaa(expected));
}

#[test]
fn test_parse_cname_content() {
    let content = RecordContent::parse(qtype::CNAME, "b.example.").unwrap();
    match content {
        RecordContent::Cname(target) => {
            assert_eq!(target, Name::from_str("b.example.").unwrap());
        }
        other => panic!("expected CNAME content, got {:?}", other),
    }
}

#[test]
fn test_invalid_content_rejected_outright() {
    let err = RecordContent::parse(qtype::A, "not-an-address").unwrap_err();
    match err {
        HookError::InvalidContent { rtype, content } => {
            assert_eq!(rtype, qtype::A);
            assert_eq!(content, "not-an-address");
        }
        other => panic!("expected InvalidContent, got {:?}", other),
    }
}

#[test]
fn test_undeclared_type_passes_through() {
    let content = RecordContent::parse(99, "anything at all").unwrap();
    assert_eq!(content, RecordContent::Generic("anything at all".to_string()));
    assert_eq!(content.zone_repr(), "anything at all");
}

#[test]
fn test_record_construction_rejects_bad_content() {
    let name = Name::from_str("a.example.").unwrap();
    let result = HookRecord::new(name, qtype::AAAA, 300, RecordPlace::Answer, "203.0.113.9");
    assert!(result.is_err());
}

#[test]
fn test_change_content_reparses_at_current_type() {
    let name = Name::from_str("a.example.").unwrap();
    let mut record =
        HookRecord::new(name, qtype::A, 300, RecordPlace::Answer, "203.0.113.9").unwrap();

    record.change_content("198.51.100.1").unwrap();
    assert_eq!(
        record.as_ip(),
        Some(IpAddr::V4(Ipv4Addr::new(198, 51, 100, 1)))
    );

    assert!(record.change_content("64:ff9b::1").is_err());
}

#[test]
fn test_as_ip_only_for_address_types() {
    let name = Name::from_str("a.example.").unwrap();
    let record =
        HookRecord::new(name, qtype::TXT, 300, RecordPlace::Answer, "hello").unwrap();
    assert_eq!(record.as_ip(), None);
}

use bytes::Bytes;
use hickory_proto::rr::Name;
use scriptor_domain::{qtype, DnsQuestion, EdnsOption, RecordPlace};
use std::net::SocketAddr;
use std::str::FromStr;

fn remote() -> SocketAddr {
    "198.51.100.7:53000".parse().unwrap()
}

fn local() -> SocketAddr {
    "192.0.2.1:53".parse().unwrap()
}

fn question(qname: &str, qtype: u16) -> DnsQuestion<'static> {
    DnsQuestion::new(
        Name::from_str(qname).unwrap(),
        qtype,
        remote(),
        local(),
        false,
    )
}

#[test]
fn test_add_answer_defaults() {
    let mut dq = question("a.example.", qtype::A);
    dq.add_answer(qtype::A, "203.0.113.9", None, None).unwrap();

    assert_eq!(dq.records.len(), 1);
    let record = &dq.records[0];
    assert_eq!(record.name, Name::from_str("a.example.").unwrap());
    assert_eq!(record.ttl, 3600);
    assert_eq!(record.place, RecordPlace::Answer);
}

#[test]
fn test_add_record_rejects_invalid_content() {
    let mut dq = question("a.example.", qtype::A);
    let result = dq.add_record(qtype::A, "bogus", RecordPlace::Answer, Some(60), None);
    assert!(result.is_err());
    assert!(dq.records.is_empty());
}

#[test]
fn test_edns_option_lookup() {
    let options = vec![
        EdnsOption {
            code: 8,
            data: Bytes::from_static(&[0, 1, 24, 0, 192, 0, 2]),
        },
        EdnsOption {
            code: 10,
            data: Bytes::from_static(&[1, 2, 3]),
        },
    ];

    let dq = question("a.example.", qtype::A).with_edns_options(Some(&options));
    assert_eq!(dq.get_edns_option(10), Some(&[1u8, 2, 3][..]));
    assert_eq!(dq.get_edns_option(11), None);
    assert_eq!(dq.edns_options().len(), 2);
}

#[test]
fn test_no_edns_view_is_empty() {
    let dq = question("a.example.", qtype::A);
    assert!(dq.edns_options().is_empty());
    assert_eq!(dq.get_edns_option(8), None);
}

#[test]
fn test_policy_tags_are_append_only() {
    let mut tags = vec!["preexisting".to_string()];
    {
        let mut dq = question("a.example.", qtype::A).with_policy_tags(Some(&mut tags));
        dq.add_policy_tag("gtld");
        dq.add_policy_tag("flagged");
        assert_eq!(dq.policy_tags().unwrap().len(), 3);
    }
    assert_eq!(tags, vec!["preexisting", "gtld", "flagged"]);
}

#[test]
fn test_policy_tags_absent_is_a_no_op() {
    let mut dq = question("a.example.", qtype::A);
    dq.add_policy_tag("dropped");
    assert!(dq.policy_tags().is_none());
}

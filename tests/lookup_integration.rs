//! End-to-end lookups against a mock nameserver.
//!
//! Every test builds its resolver from a custom `TransportConfig` pointing at
//! a local UDP server, so these tests never leave the machine.

mod helpers;

use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::{Duration, Instant};

use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, SRV, TXT};
use hickory_resolver::proto::rr::{RData, RecordType};
use nslookup::{run_lookup, DispatchError, LookupError};
use tokio_util::sync::CancellationToken;

use helpers::{argv, name, query_name, record, spawn_nameserver, Reply};

const TIMEOUT: Duration = Duration::from_secs(2);

fn lookup_error(error: &anyhow::Error) -> Option<&LookupError> {
    match error.downcast_ref::<DispatchError>() {
        Some(DispatchError::Lookup(e)) => Some(e),
        _ => None,
    }
}

#[tokio::test]
async fn test_queries_go_to_configured_nameserver() {
    let server = spawn_nameserver(|query| match query.query_type() {
        RecordType::A => Reply::Answers(vec![RData::A(A(Ipv4Addr::new(192, 0, 2, 10)))]),
        _ => Reply::Answers(Vec::new()),
    })
    .await;

    let lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["a", "example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup should succeed");

    assert_eq!(lines, vec!["192.0.2.10"]);
    assert!(server.query_count() >= 1);
}

#[tokio::test]
async fn test_aaaa_returns_only_ipv6() {
    let server = spawn_nameserver(|query| match query.query_type() {
        RecordType::AAAA => Reply::Answers(vec![RData::AAAA(AAAA(Ipv6Addr::new(
            0x2001, 0xdb8, 0, 0, 0, 0, 0, 1,
        )))]),
        _ => Reply::Answers(vec![RData::A(A(Ipv4Addr::new(192, 0, 2, 10)))]),
    })
    .await;

    let lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["aaaa", "example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup should succeed");

    assert_eq!(lines, vec!["2001:db8::1"]);
}

#[tokio::test]
async fn test_host_lists_ipv4_and_ipv6_addresses() {
    let server = spawn_nameserver(|query| match query.query_type() {
        RecordType::A => Reply::Answers(vec![RData::A(A(Ipv4Addr::new(192, 0, 2, 20)))]),
        RecordType::AAAA => Reply::Answers(vec![RData::AAAA(AAAA(Ipv6Addr::new(
            0x2001, 0xdb8, 0, 0, 0, 0, 0, 0x20,
        )))]),
        _ => Reply::Answers(Vec::new()),
    })
    .await;

    let mut lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["host", "example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup should succeed");

    // A and AAAA are queried concurrently, so their order is not fixed
    lines.sort();
    assert_eq!(lines, vec!["192.0.2.20", "2001:db8::20"]);
}

/// Recursive nameserver for `www.example.com`, an alias two hops away from
/// `final.example.org`. A CNAME query only gets the first hop, as with real
/// recursive servers.
fn alias_chain_reply(query: &hickory_resolver::proto::op::Query) -> Reply {
    let first_hop = record(
        "www.example.com.",
        RData::CNAME(CNAME(name("edge.example.net."))),
    );
    let second_hop = record(
        "edge.example.net.",
        RData::CNAME(CNAME(name("final.example.org."))),
    );
    let address = record(
        "final.example.org.",
        RData::A(A(Ipv4Addr::new(192, 0, 2, 30))),
    );

    match (query.query_type(), query_name(query).as_str()) {
        (RecordType::CNAME, "www.example.com.") => Reply::Records(vec![first_hop]),
        (RecordType::A, "www.example.com.") => {
            Reply::Records(vec![first_hop, second_hop, address])
        }
        (RecordType::A, "edge.example.net.") => Reply::Records(vec![second_hop, address]),
        (RecordType::A, "final.example.org.") => Reply::Records(vec![address]),
        _ => Reply::Answers(Vec::new()),
    }
}

#[tokio::test]
async fn test_cname_follows_alias_chain_to_the_end() {
    let server = spawn_nameserver(alias_chain_reply).await;

    let lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["cname", "www.example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup should succeed");

    assert_eq!(lines, vec!["final.example.org."]);
}

#[tokio::test]
async fn test_cname_of_name_without_alias_is_the_name() {
    // NOERROR without records: the name exists but is neither an alias nor
    // has addresses
    let server = spawn_nameserver(|_| Reply::Answers(Vec::new())).await;

    let lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["cname", "plain.example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup should succeed");

    assert_eq!(lines, vec!["plain.example.com."]);
}

#[tokio::test]
async fn test_cname_of_address_record_owner() {
    let server = spawn_nameserver(|query| match query.query_type() {
        RecordType::A => Reply::Answers(vec![RData::A(A(Ipv4Addr::new(192, 0, 2, 40)))]),
        _ => Reply::Answers(Vec::new()),
    })
    .await;

    let lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["cname", "plain.example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup should succeed");

    assert_eq!(lines, vec!["plain.example.com."]);
}

#[tokio::test]
async fn test_cname_of_missing_name_is_name_not_found() {
    let server = spawn_nameserver(|_| Reply::Code(ResponseCode::NXDomain)).await;

    let error = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["cname", "missing.example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect_err("NXDOMAIN should fail");

    assert!(
        matches!(lookup_error(&error), Some(LookupError::NameNotFound(_))),
        "unexpected error: {error:#}"
    );
}

#[tokio::test]
async fn test_mx_keeps_server_order() {
    let server = spawn_nameserver(|_| {
        Reply::Answers(vec![
            RData::MX(MX::new(20, name("mail2.example.com."))),
            RData::MX(MX::new(10, name("mail1.example.com."))),
        ])
    })
    .await;

    let lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["mail", "example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup should succeed");

    assert_eq!(lines, vec!["mail2.example.com. 20", "mail1.example.com. 10"]);
}

#[tokio::test]
async fn test_txt_character_strings_are_separate_lines() {
    let server = spawn_nameserver(|_| {
        Reply::Answers(vec![RData::TXT(TXT::new(vec![
            "v=spf1 -all".to_string(),
            "second string".to_string(),
        ]))])
    })
    .await;

    let lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["txt", "example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup should succeed");

    assert_eq!(lines, vec!["v=spf1 -all", "second string"]);
}

#[tokio::test]
async fn test_ns_lookup() {
    let server = spawn_nameserver(|_| {
        Reply::Answers(vec![
            RData::NS(NS(name("ns1.example.com."))),
            RData::NS(NS(name("ns2.example.com."))),
        ])
    })
    .await;

    let lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["ns", "example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup should succeed");

    assert_eq!(lines, vec!["ns1.example.com.", "ns2.example.com."]);
}

#[tokio::test]
async fn test_srv_prints_cname_line_first() {
    let server = spawn_nameserver(|_| {
        Reply::Answers(vec![RData::SRV(SRV::new(
            5,
            0,
            5269,
            name("xmpp.example.com."),
        ))])
    })
    .await;

    let lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["srv", "xmpp-server", "tcp", "example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup should succeed");

    assert_eq!(
        lines,
        vec![
            "cname: _xmpp-server._tcp.example.com.",
            "xmpp.example.com.:5269:5:0"
        ]
    );
}

#[tokio::test]
async fn test_ptr_reverse_name() {
    let server =
        spawn_nameserver(|_| Reply::Answers(vec![RData::PTR(PTR(name("dns.example.net.")))])).await;

    let lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["rev", "192.0.2.53"]),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup should succeed");

    assert_eq!(lines, vec!["dns.example.net."]);
}

#[tokio::test]
async fn test_empty_answer_prints_no_record() {
    let server = spawn_nameserver(|_| Reply::Answers(Vec::new())).await;

    let lines = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["txt", "example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect("empty answer is not an error");

    assert_eq!(lines, vec!["no record"]);
}

#[tokio::test]
async fn test_nxdomain_is_name_not_found() {
    let server = spawn_nameserver(|_| Reply::Code(ResponseCode::NXDomain)).await;

    let error = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["mx", "missing.example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect_err("NXDOMAIN should fail");

    assert!(
        matches!(lookup_error(&error), Some(LookupError::NameNotFound(_))),
        "unexpected error: {error:#}"
    );
}

#[tokio::test]
async fn test_servfail_is_server_failure() {
    let server = spawn_nameserver(|_| Reply::Code(ResponseCode::ServFail)).await;

    let error = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["ns", "example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect_err("SERVFAIL should fail");

    assert!(
        matches!(lookup_error(&error), Some(LookupError::ServerFailure(_))),
        "unexpected error: {error:#}"
    );
}

#[tokio::test]
async fn test_silent_nameserver_fails_within_timeout() {
    let server = spawn_nameserver(|_| Reply::Silent).await;
    let started = Instant::now();

    let error = run_lookup(
        &server.transport(Duration::from_millis(200)),
        &argv(&["txt", "example.com"]),
        &CancellationToken::new(),
    )
    .await
    .expect_err("silent nameserver should time out");

    assert!(
        started.elapsed() < Duration::from_secs(5),
        "lookup took {:?}",
        started.elapsed()
    );
    assert!(
        matches!(lookup_error(&error), Some(LookupError::TransportTimeout(_))),
        "unexpected error: {error:#}"
    );
    assert!(server.query_count() >= 1);
}

#[tokio::test]
async fn test_cancellation_stops_pending_query() {
    let server = spawn_nameserver(|_| Reply::Silent).await;
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let error = run_lookup(
        &server.transport(Duration::from_secs(30)),
        &argv(&["a", "example.com"]),
        &cancel,
    )
    .await
    .expect_err("cancelled lookup should fail");

    assert_eq!(lookup_error(&error), Some(&LookupError::Cancelled));
}

#[tokio::test]
async fn test_invalid_pointer_address_sends_nothing() {
    let server = spawn_nameserver(|_| Reply::Answers(Vec::new())).await;

    let error = run_lookup(
        &server.transport(TIMEOUT),
        &argv(&["ptr", "999.999.999.999"]),
        &CancellationToken::new(),
    )
    .await
    .expect_err("invalid address should fail");

    assert!(matches!(
        lookup_error(&error),
        Some(LookupError::InvalidAddress(_))
    ));
    assert_eq!(server.query_count(), 0);
}

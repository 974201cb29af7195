use hickory_proto::op::ResponseCode;
use resolvd_application::ports::RecordResolver;
use resolvd_domain::{DnsQuery, DomainError, RecordType};
use resolvd_infrastructure::dns::{ResolutionCache, UpstreamResolver};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

mod helpers;
use helpers::{spawn_mock_upstream, TcpReply, UdpReply};

const EXAMPLE_IP: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);

fn resolver_for(addr: SocketAddr, timeout: Duration) -> UpstreamResolver {
    let cache = Arc::new(ResolutionCache::new(Duration::from_secs(300)));
    UpstreamResolver::new(addr, timeout, cache)
}

#[tokio::test]
async fn test_resolves_a_record_over_udp() {
    let upstream = spawn_mock_upstream(
        UdpReply::Answer { ip: EXAMPLE_IP, ttl: 300 },
        TcpReply::Answer { ip: EXAMPLE_IP, ttl: 300 },
    )
    .await;
    let resolver = resolver_for(upstream.addr, Duration::from_secs(2));

    let records = resolver
        .resolve(&DnsQuery::new("example.com.", RecordType::A))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(&*record.name, "example.com.");
    assert_eq!(record.record_type, RecordType::A);
    assert_eq!(&*record.class, "IN");
    assert_eq!(record.ttl, 300);
    assert_eq!(record.rdlength, 4);
    assert_eq!(&*record.rdata, "93.184.216.34");

    assert_eq!(upstream.udp_query_count(), 1);
    assert_eq!(upstream.tcp_query_count(), 0);
}

#[tokio::test]
async fn test_second_resolve_is_served_from_cache() {
    let upstream = spawn_mock_upstream(
        UdpReply::Answer { ip: EXAMPLE_IP, ttl: 300 },
        TcpReply::Answer { ip: EXAMPLE_IP, ttl: 300 },
    )
    .await;
    let resolver = resolver_for(upstream.addr, Duration::from_secs(2));
    let query = DnsQuery::new("example.com.", RecordType::A);

    let first = resolver.resolve(&query).await.unwrap();
    let second = resolver.resolve(&query).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(upstream.udp_query_count(), 1);
}

#[tokio::test]
async fn test_truncated_udp_escalates_to_tcp_exactly_once() {
    let upstream = spawn_mock_upstream(
        UdpReply::Truncated,
        TcpReply::Answer { ip: EXAMPLE_IP, ttl: 120 },
    )
    .await;
    let resolver = resolver_for(upstream.addr, Duration::from_secs(2));

    let records = resolver
        .resolve(&DnsQuery::new("example.com.", RecordType::A))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].ttl, 120);
    assert_eq!(upstream.udp_query_count(), 1);
    assert_eq!(upstream.tcp_query_count(), 1);
}

#[tokio::test]
async fn test_truncated_tcp_fails_without_third_attempt() {
    let upstream = spawn_mock_upstream(UdpReply::Truncated, TcpReply::Truncated).await;
    let resolver = resolver_for(upstream.addr, Duration::from_secs(2));

    let err = resolver
        .resolve(&DnsQuery::new("example.com.", RecordType::A))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::UpstreamRejected(_)));
    assert_eq!(upstream.udp_query_count(), 1);
    assert_eq!(upstream.tcp_query_count(), 1);
}

#[tokio::test]
async fn test_servfail_is_upstream_rejected() {
    let upstream = spawn_mock_upstream(
        UdpReply::Rcode(ResponseCode::ServFail),
        TcpReply::Answer { ip: EXAMPLE_IP, ttl: 300 },
    )
    .await;
    let resolver = resolver_for(upstream.addr, Duration::from_secs(2));

    let err = resolver
        .resolve(&DnsQuery::new("example.com.", RecordType::A))
        .await
        .unwrap_err();

    match err {
        DomainError::UpstreamRejected(rcode) => assert_eq!(rcode, "SERVFAIL"),
        other => panic!("expected UpstreamRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_responses_are_not_cached() {
    let upstream = spawn_mock_upstream(
        UdpReply::Rcode(ResponseCode::NXDomain),
        TcpReply::Answer { ip: EXAMPLE_IP, ttl: 300 },
    )
    .await;
    let resolver = resolver_for(upstream.addr, Duration::from_secs(2));
    let query = DnsQuery::new("missing.example.", RecordType::A);

    assert!(resolver.resolve(&query).await.is_err());
    assert!(resolver.resolve(&query).await.is_err());

    assert_eq!(upstream.udp_query_count(), 2);
}

#[tokio::test]
async fn test_silent_upstream_is_unreachable() {
    let upstream = spawn_mock_upstream(
        UdpReply::Silent,
        TcpReply::Answer { ip: EXAMPLE_IP, ttl: 300 },
    )
    .await;
    let resolver = resolver_for(upstream.addr, Duration::from_millis(200));

    let err = resolver
        .resolve(&DnsQuery::new("example.com.", RecordType::A))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::UpstreamUnreachable(_)));
}

#[tokio::test]
async fn test_reverse_lookup_queries_arpa_name() {
    let upstream = spawn_mock_upstream(
        UdpReply::Answer { ip: EXAMPLE_IP, ttl: 300 },
        TcpReply::Answer { ip: EXAMPLE_IP, ttl: 300 },
    )
    .await;
    let resolver = resolver_for(upstream.addr, Duration::from_secs(2));

    let (arpa, _records) = resolver
        .resolve_reverse("93.184.216.34".parse().unwrap())
        .await
        .unwrap();

    assert_eq!(&*arpa, "34.216.184.93.in-addr.arpa.");
}

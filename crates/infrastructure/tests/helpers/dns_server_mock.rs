use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};

/// What the mock upstream answers over UDP.
#[derive(Clone)]
pub enum UdpReply {
    Answer { ip: Ipv4Addr, ttl: u32 },
    Truncated,
    Rcode(ResponseCode),
    Silent,
}

/// What the mock upstream answers over TCP.
#[derive(Clone)]
pub enum TcpReply {
    Answer { ip: Ipv4Addr, ttl: u32 },
    Truncated,
}

/// Loopback upstream listening on the same port for UDP and TCP,
/// counting the queries received on each transport.
pub struct MockUpstream {
    pub addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
}

impl MockUpstream {
    pub fn udp_query_count(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_query_count(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }
}

pub async fn spawn_mock_upstream(udp_reply: UdpReply, tcp_reply: TcpReply) -> MockUpstream {
    let udp_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = udp_socket.local_addr().unwrap();
    let tcp_listener = TcpListener::bind(addr).await.unwrap();

    let udp_queries = Arc::new(AtomicUsize::new(0));
    let tcp_queries = Arc::new(AtomicUsize::new(0));

    {
        let udp_queries = Arc::clone(&udp_queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                let Ok((n, peer)) = udp_socket.recv_from(&mut buf).await else {
                    break;
                };
                udp_queries.fetch_add(1, Ordering::SeqCst);
                let response = match &udp_reply {
                    UdpReply::Answer { ip, ttl } => {
                        build_response(&buf[..n], false, ResponseCode::NoError, Some((*ip, *ttl)))
                    }
                    UdpReply::Truncated => {
                        build_response(&buf[..n], true, ResponseCode::NoError, None)
                    }
                    UdpReply::Rcode(rcode) => build_response(&buf[..n], false, *rcode, None),
                    UdpReply::Silent => continue,
                };
                let _ = udp_socket.send_to(&response, peer).await;
            }
        });
    }

    {
        let tcp_queries = Arc::clone(&tcp_queries);
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = tcp_listener.accept().await else {
                    break;
                };
                tcp_queries.fetch_add(1, Ordering::SeqCst);
                let tcp_reply = tcp_reply.clone();
                tokio::spawn(async move {
                    let mut len_buf = [0u8; 2];
                    if stream.read_exact(&mut len_buf).await.is_err() {
                        return;
                    }
                    let len = u16::from_be_bytes(len_buf) as usize;
                    let mut query = vec![0u8; len];
                    if stream.read_exact(&mut query).await.is_err() {
                        return;
                    }
                    let response = match &tcp_reply {
                        TcpReply::Answer { ip, ttl } => {
                            build_response(&query, false, ResponseCode::NoError, Some((*ip, *ttl)))
                        }
                        TcpReply::Truncated => {
                            build_response(&query, true, ResponseCode::NoError, None)
                        }
                    };
                    let _ = stream
                        .write_all(&(response.len() as u16).to_be_bytes())
                        .await;
                    let _ = stream.write_all(&response).await;
                });
            }
        });
    }

    MockUpstream {
        addr,
        udp_queries,
        tcp_queries,
    }
}

/// Echo the query's id and question, attach an optional A answer.
pub fn build_response(
    query_bytes: &[u8],
    truncated: bool,
    rcode: ResponseCode,
    answer: Option<(Ipv4Addr, u32)>,
) -> Vec<u8> {
    let query = Message::from_vec(query_bytes).unwrap();

    let mut response = Message::new(query.id, MessageType::Response, OpCode::Query);
    response.metadata.recursion_desired = true;
    response.metadata.recursion_available = true;
    response.metadata.response_code = rcode;
    response.metadata.truncation = truncated;
    for q in &query.queries {
        response.add_query(q.clone());
    }
    if let Some((ip, ttl)) = answer {
        let name = query
            .queries
            .first()
            .map(|q| q.name().clone())
            .unwrap_or_else(Name::root);
        response.add_answer(Record::from_rdata(name, ttl, RData::A(A(ip))));
    }

    response.to_vec().unwrap()
}

pub mod dns_server_mock;

pub use dns_server_mock::{spawn_mock_upstream, MockUpstream, TcpReply, UdpReply};

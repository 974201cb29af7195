use std::sync::Arc;

/// One WHOIS round trip: the server queried and its raw reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisHop {
    pub server: Arc<str>,
    pub data: Arc<str>,
}

impl WhoisHop {
    pub fn new(server: impl Into<Arc<str>>, data: impl Into<Arc<str>>) -> Self {
        Self {
            server: server.into(),
            data: data.into(),
        }
    }
}

/// Ordered sequence of hops, one per referral followed.
/// A server address never repeats within a chain.
pub type WhoisChain = Vec<WhoisHop>;

use resolvd_domain::WhoisHop;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct WhoisEntry {
    pub server: String,
    pub data: String,
}

impl From<&WhoisHop> for WhoisEntry {
    fn from(hop: &WhoisHop) -> Self {
        Self {
            server: hop.server.to_string(),
            data: hop.data.to_string(),
        }
    }
}

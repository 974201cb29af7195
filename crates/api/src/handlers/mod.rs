pub mod health;
pub mod ptr;
pub mod query;
pub mod whois;

pub use health::health_check;
pub use ptr::ptr_record;
pub use query::{query_all_records, query_record};
pub use whois::whois_lookup;

pub mod check_health;
pub mod resolve_all_types;
pub mod resolve_record;
pub mod reverse_lookup;
pub mod whois_lookup;

pub use check_health::CheckHealthUseCase;
pub use resolve_all_types::{ResolveAllTypesUseCase, MULTI_QUERY_ORDER};
pub use resolve_record::ResolveRecordUseCase;
pub use reverse_lookup::ReverseLookupUseCase;
pub use whois_lookup::WhoisLookupUseCase;

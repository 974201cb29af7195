use resolvd_application::services::RateLimiter;
use resolvd_application::use_cases::{
    CheckHealthUseCase, ResolveAllTypesUseCase, ResolveRecordUseCase, ReverseLookupUseCase,
    WhoisLookupUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_record: Arc<ResolveRecordUseCase>,
    pub resolve_all_types: Arc<ResolveAllTypesUseCase>,
    pub reverse_lookup: Arc<ReverseLookupUseCase>,
    pub whois_lookup: Arc<WhoisLookupUseCase>,
    pub check_health: Arc<CheckHealthUseCase>,
    pub rate_limiter: Arc<RateLimiter>,
}

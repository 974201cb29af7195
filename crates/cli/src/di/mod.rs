//! Dependency wiring: adapters into use cases into router.

use axum::http::{header, HeaderValue};
use axum::Router;
use resolvd_api::{create_api_routes, AppState};
use resolvd_application::ports::{RecordResolver, WhoisClient};
use resolvd_application::services::RateLimiter;
use resolvd_application::use_cases::{
    CheckHealthUseCase, ResolveAllTypesUseCase, ResolveRecordUseCase, ReverseLookupUseCase,
    WhoisLookupUseCase,
};
use resolvd_domain::Config;
use resolvd_infrastructure::dns::{ResolutionCache, UpstreamResolver};
use resolvd_infrastructure::whois::WhoisWalker;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let upstream: SocketAddr = config.dns.upstream.parse()?;

    let cache = Arc::new(ResolutionCache::new(Duration::from_secs(
        config.dns.cache_ttl_secs,
    )));
    let resolver: Arc<dyn RecordResolver> = Arc::new(UpstreamResolver::new(
        upstream,
        Duration::from_millis(config.dns.query_timeout_ms),
        cache,
    ));
    let whois: Arc<dyn WhoisClient> = Arc::new(WhoisWalker::new(
        config.whois.iana_server.clone(),
        Duration::from_millis(config.whois.timeout_ms),
    ));
    let rate_limiter = Arc::new(RateLimiter::new(
        config.rate_limit.limit,
        Duration::from_secs(config.rate_limit.window_secs),
    ));

    Ok(AppState {
        resolve_record: Arc::new(ResolveRecordUseCase::new(Arc::clone(&resolver))),
        resolve_all_types: Arc::new(ResolveAllTypesUseCase::new(Arc::clone(&resolver))),
        reverse_lookup: Arc::new(ReverseLookupUseCase::new(Arc::clone(&resolver))),
        whois_lookup: Arc::new(WhoisLookupUseCase::new(whois)),
        check_health: Arc::new(CheckHealthUseCase::new(resolver)),
        rate_limiter,
    })
}

pub fn build_router(state: AppState) -> Router {
    create_api_routes(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::SERVER,
            HeaderValue::from_static("dns-api"),
        ))
        .layer(CorsLayer::new().allow_origin(Any))
        .layer(TraceLayer::new_for_http())
}

//! Resolvd Infrastructure Layer
//!
//! Adapters behind the application ports: the upstream DNS resolver with
//! its cache and transports, and the WHOIS referral walker.
pub mod dns;
pub mod whois;

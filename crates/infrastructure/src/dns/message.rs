//! DNS wire message handling
//!
//! Builds recursive queries and parses upstream responses using
//! `hickory-proto`. The parser reports the truncation flag and response
//! code so the resolver can drive its transport escalation.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RData};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use resolvd_domain::{DomainError, RecordType, ResourceRecord};
use tracing::debug;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query for `domain`/`record_type`, class IN, with
    /// a fresh transaction id, serialized to wire bytes.
    ///
    /// `Name::from_utf8` performs the ASCII-compatible-encoding conversion
    /// for internationalized names.
    pub fn build_query(domain: &str, record_type: &RecordType) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_utf8(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.metadata.recursion_desired = true;
        message.add_query(query);

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).map_err(|e| {
            DomainError::IoError(format!("Failed to serialize DNS query: {}", e))
        })?;

        Ok(buf)
    }
}

/// Parsed upstream response: protocol flags plus the answer section.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub rcode: ResponseCode,
    pub truncated: bool,
    pub records: Vec<ResourceRecord>,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::IoError(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code;
        let truncated = message.truncation;

        let mut records = Vec::with_capacity(message.answers.len());
        for record in &message.answers {
            // Answer types outside the modeled set are dropped.
            let Some(record_type) = RecordTypeMapper::from_hickory(record.record_type()) else {
                continue;
            };
            records.push(ResourceRecord::new(
                record.name.to_utf8(),
                record_type,
                record.dns_class.to_string(),
                record.ttl,
                rdata_wire_length(&record.data),
                record.data.to_string(),
            ));
        }

        debug!(
            rcode = ?rcode,
            answers = records.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            rcode,
            truncated,
            records,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

/// Wire length of the record data, re-encoded without name compression.
fn rdata_wire_length(data: &RData) -> u16 {
    let mut buf = Vec::with_capacity(64);
    let mut encoder = BinEncoder::new(&mut buf);
    match data.emit(&mut encoder) {
        Ok(()) => buf.len() as u16,
        Err(_) => 0,
    }
}

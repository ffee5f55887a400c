//! Stats Message Builder
//!
//! Serializes `<name> CH TXT` questions to wire format using `hickory-proto`.

use dnsmasq_stats_domain::{ProbeError, StatQuery};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds CHAOS TXT query messages in wire format
pub struct StatsMessageBuilder;

impl StatsMessageBuilder {
    /// Build the wire message for a stats query.
    ///
    /// The message carries the query's transaction id, the RD flag and a
    /// single CH/TXT question. No EDNS(0) record is attached.
    pub fn build(query: &StatQuery) -> Result<Vec<u8>, ProbeError> {
        let name = Name::from_str(&query.name).map_err(|e| {
            ProbeError::InvalidQuery(format!("Invalid stats name '{}': {}", query.name, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordType::TXT);
        question.set_query_class(DNSClass::CH);

        let mut message = Message::new(query.id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(query.recursion_desired);
        message.add_query(question);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, ProbeError> {
        let mut buf = Vec::with_capacity(64);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            ProbeError::InvalidQuery(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

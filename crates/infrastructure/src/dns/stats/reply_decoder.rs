use dnsmasq_stats_domain::{AnswerData, ProbeError, ReplyAnswer, StatsReply};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::{debug, warn};

/// Decodes a wire reply into the answer list the stats parser consumes.
pub struct ReplyDecoder;

impl ReplyDecoder {
    pub fn decode(response_bytes: &[u8]) -> Result<StatsReply, ProbeError> {
        let id = Self::wire_id(response_bytes).ok_or_else(|| {
            ProbeError::MalformedReply(format!(
                "reply too short: {} bytes",
                response_bytes.len()
            ))
        })?;

        let message = Message::from_vec(response_bytes).map_err(|e| {
            ProbeError::MalformedReply(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        if rcode != ResponseCode::NoError {
            warn!(rcode = ?rcode, "Stats reply carries an error response code");
        }
        if message.truncated() {
            warn!("Stats reply is truncated");
        }

        let mut answers = Vec::with_capacity(message.answers().len());
        for record in message.answers() {
            let data = match record.data() {
                RData::TXT(txt) => AnswerData::Txt(
                    txt.txt_data()
                        .iter()
                        .map(|s| String::from_utf8_lossy(s).into_owned())
                        .collect(),
                ),
                other => AnswerData::Other(other.record_type().to_string()),
            };

            answers.push(ReplyAnswer {
                name: record.name().to_utf8(),
                data,
            });
        }

        debug!(
            id,
            rcode = ?rcode,
            answers = answers.len(),
            "Stats reply decoded"
        );

        Ok(StatsReply { id, answers })
    }

    /// Transaction id from the first two header bytes.
    pub fn wire_id(response_bytes: &[u8]) -> Option<u16> {
        match response_bytes {
            [hi, lo, ..] if response_bytes.len() >= 12 => Some(u16::from_be_bytes([*hi, *lo])),
            _ => None,
        }
    }
}

use dnsmasq_stats_domain::stat_name::{field_key, is_composite_record};
use dnsmasq_stats_domain::{AnswerData, FieldMap, ProbeError, StatName, StatsReply};
use tracing::debug;

const COMPOSITE_FIELD_COUNT: usize = 3;
const SIMPLE_VALUE_COUNT: usize = 1;

pub const QUERIES_FIELD: &str = "queries";
pub const QUERIES_FAILED_FIELD: &str = "queries_failed";

/// Merges the TXT answers of a stats reply into a cycle's field map.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse every TXT answer of `reply` into `fields`.
    ///
    /// Records are validated in full before anything is written, so a
    /// malformed record never leaves partial values behind. Values merged
    /// from earlier records stay in `fields` when a later one fails.
    pub fn merge(
        reply: &StatsReply,
        stat: StatName,
        fields: &mut FieldMap,
    ) -> Result<(), ProbeError> {
        for answer in &reply.answers {
            let strings = match &answer.data {
                AnswerData::Txt(strings) => strings,
                AnswerData::Other(record_type) => {
                    debug!(
                        stat = %stat,
                        owner = %answer.name,
                        record_type = %record_type,
                        "Skipping non-TXT answer"
                    );
                    continue;
                }
            };

            if is_composite_record(&answer.name) {
                Self::merge_composite(&answer.name, strings, fields)?;
            } else {
                Self::merge_simple(&answer.name, strings, fields)?;
            }
        }

        Ok(())
    }

    /// `servers.bind.`: one `<upstream> <queries> <failed>` string per upstream.
    /// Each upstream overwrites the previous one; the last one wins.
    fn merge_composite(
        owner: &str,
        strings: &[String],
        fields: &mut FieldMap,
    ) -> Result<(), ProbeError> {
        let mut parsed = Vec::with_capacity(strings.len());
        for value in strings {
            let tokens: Vec<&str> = value.split_whitespace().collect();
            if tokens.len() != COMPOSITE_FIELD_COUNT {
                return Err(ProbeError::UnexpectedFieldCount {
                    record: owner.to_string(),
                    got: tokens.len(),
                    want: COMPOSITE_FIELD_COUNT,
                });
            }

            let queries = parse_number(owner, tokens[1])?;
            let failed = parse_number(owner, tokens[2])?;

            debug!(
                upstream = tokens[0],
                queries,
                failed,
                "Parsed upstream server stats"
            );
            parsed.push((queries, failed));
        }

        for (queries, failed) in parsed {
            fields.insert(QUERIES_FIELD.to_string(), queries);
            fields.insert(QUERIES_FAILED_FIELD.to_string(), failed);
        }

        Ok(())
    }

    fn merge_simple(
        owner: &str,
        strings: &[String],
        fields: &mut FieldMap,
    ) -> Result<(), ProbeError> {
        if strings.len() != SIMPLE_VALUE_COUNT {
            return Err(ProbeError::UnexpectedReplyCount {
                record: owner.to_string(),
                got: strings.len(),
                want: SIMPLE_VALUE_COUNT,
            });
        }

        let value = parse_number(owner, &strings[0])?;
        let key = field_key(owner);

        debug!(field = key, value, "Parsed stats record");
        fields.insert(key.to_string(), value);
        Ok(())
    }
}

fn parse_number(owner: &str, raw: &str) -> Result<f64, ProbeError> {
    raw.parse::<f64>().map_err(|e| ProbeError::InvalidNumber {
        record: owner.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Answer section of a resolver reply, reduced to what the stats parser needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsReply {
    pub id: u16,
    pub answers: Vec<ReplyAnswer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplyAnswer {
    /// Owner name, fully qualified (`hits.bind.`).
    pub name: String,
    pub data: AnswerData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnswerData {
    Txt(Vec<String>),
    /// Any non-TXT record, carrying its type mnemonic.
    Other(String),
}

impl ReplyAnswer {
    pub fn txt(name: impl Into<String>, strings: &[&str]) -> Self {
        Self {
            name: name.into(),
            data: AnswerData::Txt(strings.iter().map(|s| s.to_string()).collect()),
        }
    }
}

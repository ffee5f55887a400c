#![allow(dead_code)]

/// Answer records the mock server can put on the wire.
#[derive(Debug, Clone)]
pub enum WireAnswer {
    Txt { name: String, strings: Vec<String> },
    A { name: String, ip: [u8; 4] },
}

impl WireAnswer {
    pub fn txt(name: &str, strings: &[&str]) -> Self {
        Self::Txt {
            name: name.to_string(),
            strings: strings.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub fn query_id(query: &[u8]) -> Option<u16> {
    (query.len() >= 12).then(|| u16::from_be_bytes([query[0], query[1]]))
}

/// Owner name of the first question, dotted and fully qualified.
pub fn query_name(query: &[u8]) -> Option<String> {
    let mut pos = 12;
    let mut name = String::new();
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        let label = query.get(pos..pos + len)?;
        name.push_str(std::str::from_utf8(label).ok()?);
        name.push('.');
        pos += len;
    }
    Some(name)
}

fn encode_name(buf: &mut Vec<u8>, name: &str) {
    for label in name.split('.').filter(|l| !l.is_empty()) {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00);
}

/// Reply echoing the question section of `query`, with the given id and answers.
pub fn build_reply(query: &[u8], id: u16, answers: &[WireAnswer]) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);

    response.extend_from_slice(&id.to_be_bytes());
    response.push(0x85); // QR, AA, RD
    response.push(0x80); // RA
    response.extend_from_slice(&query[4..6]); // QDCOUNT
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]); // NSCOUNT
    response.extend_from_slice(&[0x00, 0x00]); // ARCOUNT

    if query.len() > 12 {
        response.extend_from_slice(&query[12..]);
    }

    for answer in answers {
        match answer {
            WireAnswer::Txt { name, strings } => {
                encode_name(&mut response, name);
                response.extend_from_slice(&[0x00, 0x10]); // TXT
                response.extend_from_slice(&[0x00, 0x03]); // CH
                response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
                let rdlen: usize = strings.iter().map(|s| s.len() + 1).sum();
                response.extend_from_slice(&(rdlen as u16).to_be_bytes());
                for s in strings {
                    response.push(s.len() as u8);
                    response.extend_from_slice(s.as_bytes());
                }
            }
            WireAnswer::A { name, ip } => {
                encode_name(&mut response, name);
                response.extend_from_slice(&[0x00, 0x01]); // A
                response.extend_from_slice(&[0x00, 0x01]); // IN
                response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
                response.extend_from_slice(&[0x00, 0x04]);
                response.extend_from_slice(ip);
            }
        }
    }

    response
}

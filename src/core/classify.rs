use crate::domain::model::{CardReference, RefShape};

/// Splits a raw message into candidate lines. Commas and newlines both
/// separate lines; empty segments are dropped after trimming.
pub fn split_message(text: &str) -> Vec<String> {
    text.replace(',', "\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classifies one line. Precedence is strict: a `#` anywhere makes the line
/// Explicit even if it also whitespace-splits into two tokens.
pub fn classify_line(line: &str) -> CardReference {
    let shape = if let Some(hash) = line.rfind('#') {
        RefShape::Explicit {
            name: line[..hash].trim().to_string(),
            // The pricing site takes the whole line, `#` included.
            query: line.to_string(),
        }
    } else {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() == 2 {
            RefShape::SeriesSerial {
                series: tokens[0].to_lowercase(),
                serial: tokens[1].to_string(),
            }
        } else {
            RefShape::Invalid
        }
    };

    CardReference {
        raw: line.to_string(),
        shape,
    }
}

pub fn classify_message(text: &str) -> Vec<CardReference> {
    split_message(text)
        .iter()
        .map(|line| classify_line(line))
        .collect()
}

// src/services/answer.rs
//
// The RAG backend returns one text blob, conventionally delimited with
// `=== Answer ===` / `=== Sources ===` section headers. Splitting is total:
// missing markers fall back to showing the raw text.

pub const ANSWER_MARKER: &str = "=== Answer ===";
pub const SOURCES_MARKER: &str = "=== Sources ===";

// Leading lines the backend's REPL is known to leak into replies.
const NOISE_PREFIXES: [&str; 3] = ["RAG REPL", "Type your prompt", "Type your question"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSections {
    pub answer: String,
    pub sources: Vec<String>,
}

/// Split a raw backend reply into the narrative answer and its cited
/// source lines. Never fails: without markers the whole (cleaned) text is
/// the answer and the source list is empty.
pub fn split_answer(raw: &str) -> AnswerSections {
    let text = strip_repl_noise(raw);

    let answer_idx = text.find(ANSWER_MARKER);
    let sources_idx = text.find(SOURCES_MARKER);

    let answer = match (answer_idx, sources_idx) {
        (Some(a), Some(s)) => {
            let inner = if a + ANSWER_MARKER.len() <= s {
                text[a + ANSWER_MARKER.len()..s].trim()
            } else {
                ""
            };
            if inner.is_empty() {
                text[..s].trim()
            } else {
                inner
            }
            .to_string()
        }
        (Some(a), None) => text[a + ANSWER_MARKER.len()..].trim().to_string(),
        (None, Some(s)) => text[..s].trim().to_string(),
        (None, None) => text.clone(),
    };

    let sources = match sources_idx {
        Some(s) => text[s + SOURCES_MARKER.len()..]
            .lines()
            .map(strip_bullet)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };

    AnswerSections { answer, sources }
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '•' | '*' | '-' | '–'))
        .trim()
}

fn strip_repl_noise(raw: &str) -> String {
    let mut text = raw.trim();
    for prefix in NOISE_PREFIXES {
        if starts_with_ignore_case(text, prefix) {
            text = match text.find('\n') {
                Some(nl) => text[nl + 1..].trim_start(),
                None => "",
            };
        }
    }

    let cleaned = text
        .lines()
        .filter(|line| line.trim() != ">")
        .collect::<Vec<_>>()
        .join("\n");
    cleaned.trim().to_string()
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let text = text.as_bytes();
    let prefix = prefix.as_bytes();
    text.len() >= prefix.len() && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static HEADING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\*\*([^*]+?)\*\*\s*:?\s*$").expect("HEADING_LINE is a valid regex pattern"));

// Bold runs and bare URLs, whichever comes first.
static INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(?P<bold>[^*]+?)\*\*|(?P<url>https?://[^\s<>()\[\]]+[^\s<>()\[\].,;:!?])")
        .expect("INLINE is a valid regex pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Span {
    Text { text: String },
    Bold { text: String },
    Link { url: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub paragraphs: Vec<Vec<Span>>,
}

/// Splits generated text into sections. A line holding only `**Heading**`
/// opens a section; every other non-empty line is a paragraph.
pub fn render_sections(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = HEADING_LINE.captures(line) {
            sections.push(Section {
                title: Some(caps[1].trim().to_string()),
                paragraphs: Vec::new(),
            });
            continue;
        }

        if sections.is_empty() {
            sections.push(Section::default());
        }
        if let Some(current) = sections.last_mut() {
            current.paragraphs.push(render_inline(line));
        }
    }

    sections
}

pub fn render_inline(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in INLINE.captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > cursor {
            spans.push(Span::Text {
                text: line[cursor..whole.start()].to_string(),
            });
        }

        if let Some(bold) = caps.name("bold") {
            spans.push(Span::Bold {
                text: bold.as_str().to_string(),
            });
        } else if let Some(url) = caps.name("url") {
            spans.push(Span::Link {
                url: url.as_str().to_string(),
            });
        }
        cursor = whole.end();
    }

    if cursor < line.len() {
        spans.push(Span::Text {
            text: line[cursor..].to_string(),
        });
    }

    spans
}

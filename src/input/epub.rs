use super::{Document, LoadError, ParagraphCandidate, Selection};
use std::path::Path;

/// Load paragraphs from an EPUB file using the epub crate.
///
/// Each chapter's `<p>` elements become paragraph candidates, in reading
/// order. Paragraphs hidden by markup are kept but marked not visible.
pub fn load(path: &Path) -> Result<Document, LoadError> {
    let mut doc =
        epub::doc::EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();
    if num_chapters == 0 {
        return Err(LoadError::EpubParse("No chapters found in EPUB".to_string()));
    }

    let mut paragraphs = Vec::new();
    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }
        if let Some((chapter_content, _mime)) = doc.get_current_str() {
            paragraphs.extend(extract_paragraphs(&chapter_content));
        }
    }

    Ok(Document {
        paragraphs,
        selection: Selection::None,
        source: format!("epub:{}", path.display()),
    })
}

/// Pulls `<p>` elements out of an XHTML chapter.
fn extract_paragraphs(html: &str) -> Vec<ParagraphCandidate> {
    // ASCII lowercasing keeps byte offsets aligned with `html`
    let lower = html.to_ascii_lowercase();
    let mut paragraphs = Vec::new();
    let mut cursor = 0;

    while let Some(found) = lower[cursor..].find("<p") {
        let tag_start = cursor + found;
        let after_name = tag_start + 2;

        // Skip <pre>, <param> and friends
        match lower[after_name..].chars().next() {
            Some(c) if c == '>' || c == '/' || c.is_whitespace() => {}
            _ => {
                cursor = after_name;
                continue;
            }
        }

        let Some(tag_len) = lower[after_name..].find('>') else {
            break;
        };
        let attributes = &lower[after_name..after_name + tag_len];
        let body_start = after_name + tag_len + 1;

        if attributes.trim_end().ends_with('/') {
            cursor = body_start;
            continue;
        }

        let body_end = lower[body_start..]
            .find("</p")
            .map_or(html.len(), |offset| body_start + offset);

        let text = collapse_whitespace(&decode_entities(&strip_tags(&html[body_start..body_end])));
        if !text.is_empty() {
            paragraphs.push(ParagraphCandidate {
                text,
                visible: !is_hidden(attributes),
            });
        }
        cursor = body_end;
    }

    paragraphs
}

fn is_hidden(attributes: &str) -> bool {
    let compact: String = attributes.chars().filter(|c| !c.is_whitespace()).collect();
    let hidden_attribute = attributes
        .split(|c: char| c.is_whitespace() || c == '/')
        .any(|attr| attr == "hidden" || attr.starts_with("hidden="));

    hidden_attribute || compact.contains("display:none") || compact.contains("visibility:hidden")
}

fn strip_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut tag: Option<String> = None;

    for c in html.chars() {
        if let Some(name) = tag.as_mut() {
            if c == '>' {
                // <br> separates words, e.g. "one<br/>two"
                if name.trim_start().to_ascii_lowercase().starts_with("br") {
                    result.push(' ');
                }
                tag = None;
            } else {
                name.push(c);
            }
        } else if c == '<' {
            tag = Some(String::new());
        } else {
            result.push(c);
        }
    }

    result
}

fn decode_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        match candidate.find(';').filter(|&end| end <= 10) {
            Some(end) => match decode_entity(&candidate[1..end]) {
                Some(c) => {
                    result.push(c);
                    rest = &candidate[end + 1..];
                }
                None => {
                    result.push('&');
                    rest = &candidate[1..];
                }
            },
            None => {
                result.push('&');
                rest = &candidate[1..];
            }
        }
    }
    result.push_str(rest);

    result
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        "hellip" => Some('\u{2026}'),
        "rsquo" => Some('\u{2019}'),
        "lsquo" => Some('\u{2018}'),
        "rdquo" => Some('\u{201d}'),
        "ldquo" => Some('\u{201c}'),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(&['x', 'X'][..]) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Section capture for resume headings such as "Skills" or "Experience".
//!
//! A heading is a line that starts (after optional spaces/tabs) with the
//! keyword, case-insensitive, followed by a colon or the end of the line.
//! The section body runs from just after the heading until the next blank
//! line or the next line starting with an uppercase letter. The first body
//! line is kept even when capitalized, so an entry right under the heading is
//! part of the section; a blank first line means the section is empty.

/// Returns the trimmed body of the first section headed by `keyword`,
/// or `None` when there is no such heading or the body is empty.
pub fn capture<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let body_start = find_heading(text, keyword)?;
    let rest = text[body_start..].trim_start_matches([' ', '\t']);
    let body = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);

    let mut end = body.len();
    let mut offset = 0;
    for (index, line) in body.split_inclusive('\n').enumerate() {
        if is_blank(line) || (index > 0 && starts_uppercase(line)) {
            end = offset;
            break;
        }
        offset += line.len();
    }

    let captured = body[..end].trim();
    (!captured.is_empty()).then_some(captured)
}

/// Byte offset just past the heading delimiter of the first matching heading.
fn find_heading(text: &str, keyword: &str) -> Option<usize> {
    if keyword.is_empty() {
        return None;
    }

    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        let candidate = &line[indent..];

        let is_keyword = candidate
            .get(..keyword.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(keyword));

        if is_keyword {
            let after = &candidate[keyword.len()..];
            let gap = after.len() - after.trim_start_matches([' ', '\t']).len();
            let tail = &after[gap..];
            let consumed = offset + indent + keyword.len() + gap;

            if tail.starts_with(':') {
                return Some(consumed + 1);
            }
            if tail.is_empty() || tail.starts_with('\n') || tail.starts_with("\r\n") {
                return Some(consumed);
            }
        }

        offset += line.len();
    }

    None
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn starts_uppercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
}

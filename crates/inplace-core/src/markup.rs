//! Text transforms between display markup and edit drafts.
//!
//! The multi-line and list modes store markup in the region value but edit
//! plain text. These helpers perform the conversions; modes compose them in
//! their `begin`/`encode` steps.

/// Delete every literal newline character.
///
/// Display markup carries its line structure in `<br>` tags; literal
/// newlines are formatting noise and are dropped before tag conversion.
pub fn strip_newlines(s: &str) -> String {
    s.replace('\n', "")
}

/// Replace literal newlines with `<br />` tags.
pub fn newlines_to_br_tags(s: &str) -> String {
    s.replace('\n', "<br />")
}

/// Byte length of a line-break tag starting at `i`, if one starts there.
///
/// Accepts any case, spaces after `<` and after the name, and an optional
/// trailing slash: `<br>`, `<BR/>`, `< br />`.
fn br_tag_len(bytes: &[u8], i: usize) -> Option<usize> {
    if bytes.get(i) != Some(&b'<') {
        return None;
    }
    let mut j = i + 1;
    while bytes.get(j) == Some(&b' ') {
        j += 1;
    }
    if !matches!(bytes.get(j), Some(b'b' | b'B')) {
        return None;
    }
    j += 1;
    if !matches!(bytes.get(j), Some(b'r' | b'R')) {
        return None;
    }
    j += 1;
    while bytes.get(j) == Some(&b' ') {
        j += 1;
    }
    if bytes.get(j) == Some(&b'/') {
        j += 1;
    }
    if bytes.get(j) == Some(&b'>') {
        Some(j + 1 - i)
    } else {
        None
    }
}

/// Replace every `<br>`-family tag with a literal newline.
pub fn br_tags_to_newlines(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        if let Some(len) = br_tag_len(bytes, i) {
            out.push('\n');
            i += len;
        } else {
            match s[i..].chars().next() {
                Some(ch) => {
                    out.push(ch);
                    i += ch.len_utf8();
                }
                None => break,
            }
        }
    }
    out
}

/// Find the next markup tag (`<` + at least one non-`>` character + `>`)
/// at or after `from`. Returns the byte span including the angle brackets.
fn next_tag(s: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'<' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] != b'>' {
                j += 1;
            }
            if j < bytes.len() && j > i + 1 {
                return Some((i, j + 1));
            }
        }
        i += 1;
    }
    None
}

/// Strip only the first markup tag, leaving any others in place.
///
/// The multi-line decode step removes just one stray tag after line-break
/// conversion; values with heavier markup belong to the rich text mode.
pub fn strip_first_tag(s: &str) -> String {
    match next_tag(s, 0) {
        Some((start, end)) => {
            let mut out = String::with_capacity(s.len());
            out.push_str(&s[..start]);
            out.push_str(&s[end..]);
            out
        }
        None => s.to_string(),
    }
}

/// Strip every markup tag.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pos = 0;
    while let Some((start, end)) = next_tag(s, pos) {
        out.push_str(&s[pos..start]);
        pos = end;
    }
    out.push_str(&s[pos..]);
    out
}

fn matches_ci(bytes: &[u8], i: usize, pat: &str) -> bool {
    let pat = pat.as_bytes();
    bytes.len() >= i + pat.len() && bytes[i..i + pat.len()].eq_ignore_ascii_case(pat)
}

/// Byte position of the matching `</tag>` from `from`, plus the position
/// just past it. Unterminated elements run to the end of the input.
fn find_close(bytes: &[u8], from: usize, tag: &str) -> (usize, usize) {
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'<' && bytes.get(i + 1) == Some(&b'/') && matches_ci(bytes, i + 2, tag) {
            let mut j = i + 2 + tag.len();
            while j < bytes.len() && bytes[j] != b'>' {
                j += 1;
            }
            let end = if j < bytes.len() { j + 1 } else { bytes.len() };
            return (i, end);
        }
        i += 1;
    }
    (bytes.len(), bytes.len())
}

/// Extract the text content of each `<tag>…</tag>` element, in document
/// order. Open tags may carry attributes; markup nested inside an element
/// (such as a delete affordance) is stripped.
pub fn element_texts(s: &str, tag: &str) -> Vec<String> {
    let bytes = s.as_bytes();
    let mut items = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<' && matches_ci(bytes, i + 1, tag) {
            let mut j = i + 1 + tag.len();
            let at_name_end = bytes
                .get(j)
                .is_some_and(|b| *b == b'>' || b.is_ascii_whitespace());
            if at_name_end {
                while j < bytes.len() && bytes[j] != b'>' {
                    j += 1;
                }
                if j >= bytes.len() {
                    break;
                }
                let content_start = j + 1;
                let (content_end, after_close) = find_close(bytes, content_start, tag);
                items.push(strip_tags(&s[content_start..content_end]));
                i = after_close;
                continue;
            }
        }
        i += 1;
    }
    items
}

/// Serialize items back into a `<tag>…</tag>` element sequence.
pub fn wrap_elements(items: &[String], tag: &str) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("<{tag}>{item}</{tag}>"));
    }
    out
}

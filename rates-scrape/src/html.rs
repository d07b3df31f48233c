//! Tolerant HTML scanning helpers.
//!
//! Provider pages drift: attribute order changes, close tags go missing,
//! markup is hand-edited. These helpers favor local, case-insensitive
//! scanning over a full DOM so a broken corner of a page degrades to an
//! empty extraction instead of a parse error. Whitespace and entities
//! are normalized so synonym matching can work on plain text.

/// Case-insensitive substring search starting at `from`, byte index.
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    let end = h.len().checked_sub(n.len())?;
    (from.min(end + 1)..=end).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

fn starts_with_ci(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len() && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// True when `b` terminates a tag name (`<td>`, `<td class=..>`, `<td/>`).
fn name_boundary(b: Option<&u8>) -> bool {
    matches!(b, None | Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n'))
}

/// Inner content of every `<tag ...>...</tag>` block, case-insensitive,
/// non-overlapping. A block with no close tag is dropped.
pub fn tag_blocks<'a>(doc: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{tag}");
    let close = format!("</{tag}");
    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(start) = find_ci(doc, &open, pos) {
        if !name_boundary(doc.as_bytes().get(start + open.len())) {
            pos = start + 1;
            continue;
        }
        let Some(content_start) = doc[start..].find('>').map(|i| start + i + 1) else {
            break;
        };
        let Some(end) = find_ci(doc, &close, content_start) else {
            break;
        };
        out.push(&doc[content_start..end]);
        pos = end + close.len();
    }
    out
}

/// Splits a fragment at each `<tag ...>` open tag; each piece runs to the
/// next open tag of the same name or the end of the fragment. Tolerates
/// omitted close tags (common for `<tr>`).
pub fn split_blocks<'a>(fragment: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{tag}");
    let mut starts = Vec::new();
    let mut pos = 0;
    while let Some(start) = find_ci(fragment, &open, pos) {
        if name_boundary(fragment.as_bytes().get(start + open.len())) {
            starts.push(start);
        }
        pos = start + 1;
    }
    let mut out = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let Some(content_start) = fragment[start..].find('>').map(|j| start + j + 1) else {
            continue;
        };
        let end = starts.get(i + 1).copied().unwrap_or(fragment.len());
        if content_start <= end {
            out.push(&fragment[content_start..end]);
        }
    }
    out
}

/// All `<table>` blocks in a document.
pub fn tables(doc: &str) -> Vec<&str> {
    tag_blocks(doc, "table")
}

/// All `<tr>` blocks within a table fragment.
pub fn rows(table: &str) -> Vec<&str> {
    split_blocks(table, "tr")
}

/// A table cell: lowercased attribute blob plus normalized text.
#[derive(Debug, Clone)]
pub struct Cell {
    pub class: String,
    pub text: String,
}

/// The `<td>`/`<th>` cells of a row fragment, in document order.
pub fn cells(row: &str) -> Vec<Cell> {
    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(lt) = row[pos..].find('<').map(|i| pos + i) {
        let rest = &row[lt + 1..];
        let is_cell = (starts_with_ci(rest, "td") || starts_with_ci(rest, "th"))
            && name_boundary(rest.as_bytes().get(2));
        if !is_cell {
            pos = lt + 1;
            continue;
        }
        let Some(gt) = row[lt..].find('>').map(|i| lt + i) else {
            break;
        };
        let attrs = &row[lt + 3..gt];
        let content_start = gt + 1;
        let content_end = ["<td", "<th", "</td", "</th", "</tr"]
            .iter()
            .filter_map(|m| find_ci(row, m, content_start))
            .min()
            .unwrap_or(row.len());
        out.push(Cell {
            class: attr_value(attrs, "class").unwrap_or_default().to_lowercase(),
            text: text_of(&row[content_start..content_end]),
        });
        pos = content_end.max(gt + 1);
    }
    out
}

/// Value of `name="..."` inside an attribute blob; tolerates single
/// quotes, unquoted values and arbitrary attribute order.
pub fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let mut pos = 0;
    while let Some(i) = find_ci(attrs, name, pos) {
        let before_ok = i == 0 || {
            let b = attrs.as_bytes()[i - 1];
            !b.is_ascii_alphanumeric() && b != b'-'
        };
        let after = &attrs[i + name.len()..];
        let trimmed = after.trim_start();
        if before_ok {
            if let Some(value_part) = trimmed.strip_prefix('=') {
                let value_part = value_part.trim_start();
                return Some(match value_part.as_bytes().first() {
                    Some(&q @ (b'"' | b'\'')) => {
                        let inner = &value_part[1..];
                        &inner[..inner.find(q as char).unwrap_or(inner.len())]
                    }
                    _ => value_part
                        .split_ascii_whitespace()
                        .next()
                        .unwrap_or(value_part),
                });
            }
        }
        pos = i + name.len();
    }
    None
}

/// Normalized text of elements (`div`/`span`/`p`) whose class attribute
/// contains any of the keywords, in document order.
pub fn elements_with_class(doc: &str, keywords: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(lt) = doc[pos..].find('<').map(|i| pos + i) {
        let rest = &doc[lt + 1..];
        let name = ["div", "span", "p"]
            .into_iter()
            .find(|n| starts_with_ci(rest, n) && name_boundary(rest.as_bytes().get(n.len())));
        let Some(name) = name else {
            pos = lt + 1;
            continue;
        };
        let Some(gt) = doc[lt..].find('>').map(|i| lt + i) else {
            break;
        };
        let attrs = &doc[lt + 1 + name.len()..gt];
        let class = attr_value(attrs, "class").unwrap_or_default().to_lowercase();
        if keywords.iter().any(|k| class.contains(k)) {
            let content_start = gt + 1;
            let content_end =
                find_ci(doc, &format!("</{name}"), content_start).unwrap_or(doc.len());
            out.push(text_of(&doc[content_start..content_end]));
        }
        pos = gt + 1;
    }
    out
}

fn remove_blocks(doc: &str, tag: &str) -> String {
    let open = format!("<{tag}");
    let close = format!("</{tag}");
    let mut out = String::with_capacity(doc.len());
    let mut pos = 0;
    while let Some(start) = find_ci(doc, &open, pos) {
        out.push_str(&doc[pos..start]);
        match find_ci(doc, &close, start) {
            Some(end) => {
                let after = doc[end..].find('>').map(|i| end + i + 1).unwrap_or(doc.len());
                pos = after;
            }
            None => {
                pos = doc.len();
            }
        }
    }
    out.push_str(&doc[pos..]);
    out
}

/// Decodes the handful of entities that show up in rate tables.
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Strips markup from a fragment and normalizes whitespace/entities.
pub fn text_of(fragment: &str) -> String {
    let mut stripped = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                stripped.push(' ');
            }
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }
    decode_entities(&stripped)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The document's visible text: script and style content removed, tags
/// stripped, whitespace collapsed.
pub fn visible_text(doc: &str) -> String {
    let without_script = remove_blocks(doc, "script");
    let without_style = remove_blocks(&without_script, "style");
    text_of(&without_style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_and_rows() {
        let doc = "<html><TABLE id='x'><tr><td>a</td></tr><tr><td>b</td></tr></TABLE></html>";
        let tables = tables(doc);
        assert_eq!(tables.len(), 1);
        assert_eq!(rows(tables[0]).len(), 2);
    }

    #[test]
    fn rows_tolerate_missing_close_tags() {
        let table = "<tr><td>one<tr><td>two";
        assert_eq!(rows(table).len(), 2);
    }

    #[test]
    fn cells_carry_class_and_text() {
        let row = r#"<td class="flag"></td><TD CLASS='table-green-color'> 5.8000 </TD><th>GBP</th>"#;
        let cells = cells(row);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].class, "flag");
        assert_eq!(cells[1].class, "table-green-color");
        assert_eq!(cells[1].text, "5.8000");
        assert_eq!(cells[2].text, "GBP");
    }

    #[test]
    fn attr_value_tolerates_quoting_styles() {
        assert_eq!(attr_value(r#" class="a b" id=x"#, "class"), Some("a b"));
        assert_eq!(attr_value(" class='a'", "class"), Some("a"));
        assert_eq!(attr_value(" class=bare id=y", "class"), Some("bare"));
        assert_eq!(attr_value(" subclass='no'", "class"), None);
        assert_eq!(attr_value(" id=z", "class"), None);
    }

    #[test]
    fn elements_with_class_matches_keywords() {
        let doc = r#"<div class="exchange-rate-box">GBP 5.84</div><span class="nav">menu</span>"#;
        let found = elements_with_class(doc, &["rate", "forex"]);
        assert_eq!(found, vec!["GBP 5.84".to_string()]);
    }

    #[test]
    fn visible_text_drops_script_and_entities() {
        let doc = "<p>Jalin &amp; Duta</p><script>var x = 1;</script><p>GBP&nbsp;5.84</p>";
        assert_eq!(visible_text(doc), "Jalin & Duta GBP 5.84");
    }

    #[test]
    fn nested_table_name_is_not_confused_with_prefix() {
        // <tablefoo> must not open a table block
        let doc = "<tablefoo><tr><td>x</td></tr></tablefoo>";
        assert!(tables(doc).is_empty());
    }
}

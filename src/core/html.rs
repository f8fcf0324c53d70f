// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `<open …>…</close>` block at or after `from`.
/// Returns byte offsets of the whole block, including both tags.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// The opening tag of a block, up to and including its `>`.
/// Used for class-attribute checks without touching the body.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_scan_is_case_insensitive() {
        let doc = "x<TR class=\"a\"><TD>1</TD></TR>y";
        let (s_, e_) = next_tag_block_ci(doc, "<tr", "</tr>", 0).unwrap();
        assert_eq!(&doc[s_..e_], "<TR class=\"a\"><TD>1</TD></TR>");
    }

    #[test]
    fn open_tag_stops_at_first_gt() {
        assert_eq!(open_tag("<td class=\"x\">body</td>"), "<td class=\"x\">");
        assert_eq!(open_tag("no tag here"), "no tag here");
    }

    #[test]
    fn strip_tags_collapses_whitespace() {
        assert_eq!(strip_tags("<b>A</b>\n  B  <i>C</i>"), "A B C");
    }
}

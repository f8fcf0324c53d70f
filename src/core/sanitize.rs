// src/core/sanitize.rs

/// Decode the handful of entities the portal actually emits.
/// Course names are German/French, hence the Latin-1 set.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&auml;", "ä")
        .replace("&ouml;", "ö")
        .replace("&uuml;", "ü")
        .replace("&eacute;", "é")
        .replace("&egrave;", "è")
        .replace("&agrave;", "à")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_decode() {
        assert_eq!(normalize_entities("Fran&ccedil;ais"), "Fran&ccedil;ais"); // not in the set, left alone
        assert_eq!(normalize_entities("Franz&ouml;sisch&nbsp;E"), "Französisch E");
        assert_eq!(normalize_entities("R &amp; D"), "R & D");
    }

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  a \t b\n\nc "), "a b c");
    }
}

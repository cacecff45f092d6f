// src/core/sanitize.rs

/// Collapse inner whitespace runs to one space and trim the ends.
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
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Acme \t  Inc \n"), "Acme Inc");
        assert_eq!(normalize_ws("   "), "");
    }
}

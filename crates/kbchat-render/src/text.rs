/// Title-case like a word processor: a letter following a non-letter is
/// uppercased, every other letter lowercased. Separators are kept.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}

/// `snake_case_key` → `Snake Case Key`.
pub fn humanize_key(key: &str) -> String {
    title_case(&key.replace('_', " "))
}

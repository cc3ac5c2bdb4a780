/// Typographic punctuation folded to its plain-ASCII spelling.
const PUNCTUATION: &[(char, &str)] = &[
    ('\u{2019}', "'"),   // right single quote / apostrophe
    ('\u{2018}', "'"),   // left single quote
    ('\u{201C}', "\""),  // left double quote
    ('\u{201D}', "\""),  // right double quote
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{2026}', "..."), // ellipsis
];

/// Fold typographic punctuation to ASCII and drop every other non-ASCII char,
/// so width measurement only ever sees ASCII text.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else if let Some((_, ascii)) = PUNCTUATION.iter().find(|(c, _)| *c == ch) {
            out.push_str(ascii);
        }
    }
    out
}

/// Fold `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Words paired with the number of whitespace chars written before them.
fn words_with_gaps(text: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut gap = 0usize;
    let mut start = None;
    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                out.push((gap, &text[s..i]));
                gap = 0;
            }
            gap += 1;
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        out.push((gap, &text[s..]));
    }
    out
}

/// Greedy word wrap at whitespace. Words never break, so a word longer than
/// `width` gets a line of its own. Every whitespace char counts as one space;
/// the gap between two words on the same line is kept as written and only
/// dropped where a line breaks.
pub fn wrap_paragraph(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for (gap, word) in words_with_gaps(text) {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + gap + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.extend(std::iter::repeat_n(' ', gap));
            current_len += gap;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split an article on `"\n\n"` and wrap every paragraph, with an empty
/// separator line before each paragraph but the first.
pub fn wrap_article(article: &str, column_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, paragraph) in article.split("\n\n").enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(wrap_paragraph(&normalize(paragraph), column_width));
    }
    log::debug!(
        "wrap_article: {} chars -> {} lines at {} columns",
        article.len(),
        lines.len(),
        column_width,
    );
    lines
}

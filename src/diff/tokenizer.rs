//! Text tokenizers for each plain-text granularity.
//!
//! Every tokenizer returns slices that concatenate back to the input.

/// Character class used by the word tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Punct,
}

/// Split text into words, whitespace runs and single punctuation marks
///
/// Apostrophes between letters stay inside the word (`don't`, `l’heure`).
pub fn tokenize_words(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<CharClass> = None;

    for (i, &(offset, _)) in chars.iter().enumerate() {
        let class = classify(&chars, i);
        if let Some(prev) = current {
            if prev != class || class == CharClass::Punct {
                tokens.push(&text[start..offset]);
                start = offset;
            }
        }
        current = Some(class);
    }

    if current.is_some() {
        tokens.push(&text[start..]);
    }

    tokens
}

/// Split text into sentences and the whitespace between them
///
/// A sentence ends at `.`, `!` or `?` (plus any closing quotes or brackets)
/// followed by whitespace or end of input.
pub fn tokenize_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (offset, ch) = chars[i];

        if ch.is_whitespace() && offset == start {
            let mut j = i;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            let end = chars.get(j).map_or(text.len(), |&(o, _)| o);
            tokens.push(&text[start..end]);
            start = end;
            i = j;
            continue;
        }

        if is_sentence_terminator(ch) {
            // Closing quotes and brackets belong to the sentence they close
            let mut last = i;
            while chars
                .get(last + 1)
                .is_some_and(|&(_, next)| is_closing_mark(next))
            {
                last += 1;
            }
            let at_boundary = chars
                .get(last + 1)
                .map_or(true, |&(_, next)| next.is_whitespace());
            if at_boundary {
                let (last_offset, last_ch) = chars[last];
                let end = last_offset + last_ch.len_utf8();
                tokens.push(&text[start..end]);
                start = end;
                i = last + 1;
                continue;
            }
        }

        i += 1;
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}

/// Split text into lines, each keeping its trailing newline
pub fn tokenize_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Split text into Unicode scalar values
pub fn tokenize_chars(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(i, ch)| &text[i..i + ch.len_utf8()])
        .collect()
}

/// Whether a token consists only of whitespace
pub fn is_whitespace_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_whitespace)
}

fn classify(chars: &[(usize, char)], i: usize) -> CharClass {
    let ch = chars[i].1;
    if is_word_char(ch) {
        CharClass::Word
    } else if ch.is_whitespace() {
        CharClass::Space
    } else if is_apostrophe(ch)
        && i > 0
        && is_word_char(chars[i - 1].1)
        && chars.get(i + 1).is_some_and(|&(_, next)| is_word_char(next))
    {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_apostrophe(ch: char) -> bool {
    ch == '\'' || ch == '\u{2019}'
}

fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn is_closing_mark(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_words_split_punctuation_and_space() {
        assert_eq!(
            tokenize_words("Hello, world!"),
            vec!["Hello", ",", " ", "world", "!"]
        );
    }

    #[test]
    fn test_words_keep_inner_apostrophe() {
        assert_eq!(tokenize_words("don't 'quote'"), vec!["don't", " ", "'", "quote", "'"]);
    }

    #[test]
    fn test_words_repeated_punctuation_is_separate() {
        assert_eq!(tokenize_words("wait..."), vec!["wait", ".", ".", "."]);
    }

    #[test]
    fn test_words_empty() {
        assert!(tokenize_words("").is_empty());
    }

    #[test]
    fn test_sentences() {
        assert_eq!(
            tokenize_sentences("One fish. Two fish?  Red fish"),
            vec!["One fish.", " ", "Two fish?", "  ", "Red fish"]
        );
    }

    #[test]
    fn test_sentence_ends_after_closing_quote() {
        assert_eq!(
            tokenize_sentences("He said \"Hi.\" Then left."),
            vec!["He said \"Hi.\"", " ", "Then left."]
        );
        assert_eq!(
            tokenize_sentences("(See above.) Done!"),
            vec!["(See above.)", " ", "Done!"]
        );
    }

    #[test]
    fn test_sentence_inner_period_does_not_split() {
        assert_eq!(
            tokenize_sentences("Version 2.5 is out. Done"),
            vec!["Version 2.5 is out.", " ", "Done"]
        );
    }

    #[test]
    fn test_sentences_leading_whitespace() {
        assert_eq!(tokenize_sentences("\n\nHi."), vec!["\n\n", "Hi."]);
    }

    #[test]
    fn test_lines_keep_newline() {
        assert_eq!(tokenize_lines("a\nb\n\nc"), vec!["a\n", "b\n", "\n", "c"]);
    }

    #[test]
    fn test_chars_multibyte() {
        assert_eq!(tokenize_chars("añb"), vec!["a", "ñ", "b"]);
    }

    #[test]
    fn test_tokens_concatenate_to_input() {
        let text = "Réunion à 10h. Ça va?\nOui!  Merci.";
        assert_eq!(tokenize_words(text).concat(), text);
        assert_eq!(tokenize_sentences(text).concat(), text);
        assert_eq!(tokenize_lines(text).concat(), text);
        assert_eq!(tokenize_chars(text).concat(), text);
    }
}

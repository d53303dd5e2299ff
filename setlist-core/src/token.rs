//! Word-level tokenization
//!
//! A token is a maximal run of alphabetic characters. Digits, punctuation,
//! whitespace and symbols only ever separate tokens; they never appear in
//! one. Tokenization is total: any `&str`, including the empty string,
//! yields a (possibly empty) token list.

/// A single word within a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text, borrowed from the sentence
    pub text: &'a str,
    /// Index of this token within the sentence's token list
    pub index: usize,
    /// Byte offset of the token start within the sentence
    pub offset: usize,
}

impl Token<'_> {
    /// Lowercased token text
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Iterator over the tokens of a sentence
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    index: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let start = self.pos + rest.find(char::is_alphabetic)?;
        let end = self.text[start..]
            .find(|c: char| !c.is_alphabetic())
            .map_or(self.text.len(), |len| start + len);

        let token = Token {
            text: &self.text[start..end],
            index: self.index,
            offset: start,
        };
        self.pos = end;
        self.index += 1;
        Some(token)
    }
}

/// Lazily tokenize a sentence
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens {
        text,
        pos: 0,
        index: 0,
    }
}

/// Tokenize a sentence into a vector
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    tokens(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<&str> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_basic_words() {
        assert_eq!(
            texts("Here is the set list."),
            vec!["Here", "is", "the", "set", "list"]
        );
    }

    #[test]
    fn test_punctuation_separates() {
        assert_eq!(texts("set-list"), vec!["set", "list"]);
        assert_eq!(texts("it's"), vec!["it", "s"]);
        assert_eq!(texts("\"set,\" he said"), vec!["set", "he", "said"]);
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("  a set  ");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].offset, 2);
        assert_eq!(tokens[1].index, 1);
        assert_eq!(tokens[1].offset, 4);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("123 ... !!! —").is_empty());
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(texts("café set naïve"), vec!["café", "set", "naïve"]);
        assert_eq!(texts("「セット」です"), vec!["セット", "です"]);
    }

    #[test]
    fn test_lower() {
        let token = tokenize("SET")[0];
        assert_eq!(token.text, "SET");
        assert_eq!(token.lower(), "set");
    }
}

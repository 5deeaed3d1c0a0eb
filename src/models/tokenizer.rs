use crate::types::Token;

#[derive(Copy, Clone, Debug)]
pub struct Tokenizer {
    pub lowercase: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::text_doc_parser()
    }
}

impl Tokenizer {
    /// Configuration for arbitrary text doc parsing against lowercase lexicons
    pub fn text_doc_parser() -> Self {
        Self { lowercase: true }
    }

    /// Configuration for lexicons whose terms are case-sensitive.
    ///
    /// Only useful with lexicons built through `Lexicon::new`; CSV loading lowercases every
    /// term, so mixed-case tokens never match a CSV-loaded lexicon.
    pub fn case_sensitive_parser() -> Self {
        Self { lowercase: false }
    }

    /// Tokenizer function to split the text into individual tokens.
    ///
    /// Internal apostrophes and hyphens are kept so contractions (`don't`) and
    /// compounds (`self-made`) survive as single tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.replace("-\r\n", "") // Merge hyphenated words across lines
            .replace("-\n", "")
            .replace('\u{2019}', "'") // Normalize curly apostrophes
            .split(|c: char| !Self::is_token_char(c))
            .map(|word| word.trim_matches(|c: char| c == '\'' || c == '-'))
            .filter(|word| !word.is_empty())
            .map(|word| {
                if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .collect()
    }

    fn is_token_char(c: char) -> bool {
        c.is_alphanumeric() || c == '\'' || c == '-'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_contractions_and_compounds() {
        let tokenizer = Tokenizer::text_doc_parser();

        let tokens = tokenizer.tokenize("I DON'T care about self-made 'heroes'");
        assert_eq!(
            tokens,
            vec!["i", "don't", "care", "about", "self-made", "heroes"]
        );
    }

    #[test]
    fn test_case_sensitive_parser_preserves_case() {
        let tokenizer = Tokenizer::case_sensitive_parser();

        let tokens = tokenizer.tokenize("Power, Control.");
        assert_eq!(tokens, vec!["Power", "Control"]);
    }
}

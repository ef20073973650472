//! Syllabizer strategy for splitting words into syllables

use crate::token::{concat_text, Token, TokenKind};

/// Pluggable strategy that splits a WORD token into SYLLABLE tokens
///
/// Implementations must return at least one syllable, and the syllable
/// texts must concatenate back to the word's text.
pub trait Syllabizer: Send + Sync {
    /// Split one word into its syllables, in reading order
    fn syllabize(&self, word: &Token) -> Vec<Token>;

    /// Get a human-readable name for this strategy
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Default strategy: the whole word is one syllable
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeWordSyllabizer;

impl Syllabizer for WholeWordSyllabizer {
    fn syllabize(&self, word: &Token) -> Vec<Token> {
        vec![Token::syllable(word.text.as_str())]
    }

    fn name(&self) -> &'static str {
        "whole-word"
    }
}

impl<F> Syllabizer for F
where
    F: Fn(&Token) -> Vec<Token> + Send + Sync,
{
    fn syllabize(&self, word: &Token) -> Vec<Token> {
        self(word)
    }
}

/// Expand every WORD token with `syllabizer`; other tokens pass through
pub fn syllabize_words(tokens: Vec<Token>, syllabizer: &dyn Syllabizer) -> Vec<Token> {
    let mut syllables = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.kind != TokenKind::Word {
            syllables.push(token);
            continue;
        }

        let parts = syllabizer.syllabize(&token);
        debug_assert!(
            !parts.is_empty(),
            "syllabizer '{}' returned no syllables for {:?}",
            syllabizer.name(),
            token.text
        );
        debug_assert_eq!(
            concat_text(&parts),
            token.text,
            "syllabizer '{}' did not preserve the word text",
            syllabizer.name()
        );
        syllables.extend(parts);
    }

    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_is_one_syllable() {
        let syllables = WholeWordSyllabizer.syllabize(&Token::word("wonderful"));
        assert_eq!(syllables, vec![Token::syllable("wonderful")]);
    }

    #[test]
    fn test_syllabize_words_passes_other_kinds() {
        let tokens = vec![
            Token::word("Hi"),
            Token::space(" "),
            Token::word("there"),
            Token::period(),
        ];
        let result = syllabize_words(tokens, &WholeWordSyllabizer);
        assert_eq!(
            result,
            vec![
                Token::syllable("Hi"),
                Token::space(" "),
                Token::syllable("there"),
                Token::period(),
            ]
        );
    }

    #[test]
    fn test_closure_strategy_flattens_in_order() {
        // Split every word into two-character chunks
        let pairs = |word: &Token| -> Vec<Token> {
            let chars: Vec<char> = word.text.chars().collect();
            chars
                .chunks(2)
                .map(|chunk| Token::syllable(chunk.iter().collect::<String>()))
                .collect()
        };

        let result = syllabize_words(vec![Token::word("abcde"), Token::comma()], &pairs);
        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["ab", "cd", "e", ","]);
        assert_eq!(pairs.name(), "custom");
    }

    #[test]
    fn test_empty_word_yields_empty_syllable() {
        let result = syllabize_words(vec![Token::word(""), Token::period()], &WholeWordSyllabizer);
        assert_eq!(result, vec![Token::syllable(""), Token::period()]);
    }

    #[test]
    fn test_strategy_name() {
        assert_eq!(WholeWordSyllabizer.name(), "whole-word");
    }
}

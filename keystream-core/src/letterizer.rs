//! Letterizer: timed syllables into per-letter LETTER tokens

use crate::token::{Token, TokenKind};

/// Replace every SYLLABLE with one LETTER per character
///
/// A syllable of `L` characters and duration `D` yields `L` letters of
/// duration `D / L`. Empty syllables yield nothing. All other tokens keep
/// their duration.
pub fn literize_tokens(tokens: Vec<Token>) -> Vec<Token> {
    let mut letters = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.kind != TokenKind::Syllable {
            letters.push(token);
            continue;
        }

        let len = token.char_len();
        if len == 0 {
            continue;
        }

        let share = token.duration.unwrap_or(0.0) / len as f64;
        letters.extend(token.text.chars().map(|ch| Token::letter(ch, share)));
    }

    letters
}

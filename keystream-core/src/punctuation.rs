//! Punctuation splitter: trailing `.` / `,` out of words

use crate::error::{PipelineError, Result};
use crate::token::{Token, TokenKind};

/// Map a trailing character to its punctuation token
///
/// `Ok(None)` means the character is not punctuation and the word is kept
/// whole. ASCII punctuation without a kind of its own is an error.
fn classify_trailing(ch: char, word: &str) -> Result<Option<Token>> {
    match ch {
        '.' => Ok(Some(Token::period())),
        ',' => Ok(Some(Token::comma())),
        '_' => Ok(None),
        c if c.is_ascii_punctuation() => Err(PipelineError::UnrecognizedPunctuation {
            ch: c,
            word: word.to_string(),
        }),
        _ => Ok(None),
    }
}

/// Split a trailing `.` or `,` off every WORD token
///
/// Only the last character is inspected, so `"a.."` becomes `WORD "a."`
/// followed by PERIOD. A word that is nothing but punctuation leaves an
/// empty WORD behind; it is kept and later vanishes in the letterizer.
pub fn split_out_punctuation(tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut new_tokens = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.kind != TokenKind::Word {
            new_tokens.push(token);
            continue;
        }

        let Some(last) = token.text.chars().last() else {
            new_tokens.push(token);
            continue;
        };

        match classify_trailing(last, &token.text)? {
            Some(punctuation) => {
                let mut text = token.text;
                text.pop();
                new_tokens.push(Token {
                    kind: TokenKind::Word,
                    text,
                    duration: token.duration,
                });
                new_tokens.push(punctuation);
            }
            None => new_tokens.push(token),
        }
    }

    Ok(new_tokens)
}

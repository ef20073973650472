//! Lexer: raw text into WORD / SPACE / NEWLINE tokens

use crate::error::{PipelineError, Result};
use crate::token::Token;

/// Whether `ch` belongs to a word
///
/// ASCII alphanumerics and `_`, plus `.` and `,` so that trailing
/// punctuation stays attached until the punctuation splitter runs.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | ',')
}

/// Split `input` into words and collapsed whitespace
///
/// Runs of non-newline whitespace become one SPACE token carrying the first
/// whitespace character of the run. Every `\n` becomes its own NEWLINE token.
/// Whitespace before the first word, or right after a newline or space, is
/// dropped.
pub fn split_on_spaces(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut current_word = String::new();

    // Starts true so leading whitespace is never recorded
    let mut last_saw_space = true;

    for (position, ch) in input.chars().enumerate() {
        if is_word_char(ch) {
            current_word.push(ch);
            last_saw_space = false;
        } else if ch == '\n' {
            flush_word(&mut tokens, &mut current_word);
            tokens.push(Token::newline());
            last_saw_space = true;
        } else if ch.is_whitespace() {
            if !last_saw_space {
                flush_word(&mut tokens, &mut current_word);
                tokens.push(Token::space(ch));
                last_saw_space = true;
            }
        } else {
            return Err(PipelineError::UnrecognizedToken { ch, position });
        }
    }
    flush_word(&mut tokens, &mut current_word);

    Ok(tokens)
}

fn flush_word(tokens: &mut Vec<Token>, current_word: &mut String) {
    if !current_word.is_empty() {
        tokens.push(Token::word(std::mem::take(current_word)));
    }
}

//! The command parser.
//!
//! The first non-whitespace character of a line is the command tag. Tags that
//! take arguments (`r`, `s`, `e`, `!`) must be followed by exactly one space so
//! that concatenated input such as `r5` is rejected instead of misread.

use std::path::PathBuf;

use edlin_foundation::SyntaxError;

use crate::command::Command;
use crate::tokenizer::Scanner;

/// Parses prompt input into [`Command`]s.
pub struct CommandParser;

impl CommandParser {
    /// Parses one raw input line.
    ///
    /// A trailing `\n` or `\r\n` is ignored. Blank input yields
    /// [`Command::Empty`]; an unknown tag yields [`Command::Unrecognized`]
    /// holding the line verbatim.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] when a known tag has malformed or missing
    /// arguments.
    pub fn parse(input: &str) -> Result<Command, SyntaxError> {
        let line = strip_line_ending(input);
        let mut scanner = Scanner::new(line);
        scanner.skip_whitespace();

        let Some(tag) = scanner.next_char() else {
            return Ok(Command::Empty);
        };

        match tag {
            'l' => no_arguments(tag, &scanner).map(|()| Command::List),
            'q' => no_arguments(tag, &scanner).map(|()| Command::Quit),
            'r' => path_argument(tag, &mut scanner).map(Command::Load),
            's' => path_argument(tag, &mut scanner).map(Command::Save),
            'e' => {
                let (line, text) = numbered_argument(tag, &mut scanner, "replacement text")?;
                Ok(Command::Edit {
                    line,
                    text: text.to_string(),
                })
            }
            '!' => {
                let (line, command) = numbered_argument(tag, &mut scanner, "a shell command")?;
                if command.trim().is_empty() {
                    return Err(SyntaxError::MissingArgument {
                        tag,
                        argument: "a shell command",
                    });
                }
                Ok(Command::Filter {
                    line,
                    command: command.to_string(),
                })
            }
            _ => Ok(Command::Unrecognized(line.to_string())),
        }
    }
}

fn strip_line_ending(input: &str) -> &str {
    let line = input.strip_suffix('\n').unwrap_or(input);
    line.strip_suffix('\r').unwrap_or(line)
}

fn no_arguments(tag: char, scanner: &Scanner<'_>) -> Result<(), SyntaxError> {
    if scanner.rest_is_blank() {
        Ok(())
    } else {
        Err(SyntaxError::UnexpectedArgument {
            tag,
            rest: scanner.rest().trim().to_string(),
        })
    }
}

/// Consumes the single space that must follow an argument-taking tag. The
/// argument itself must start right after it.
fn separator(
    tag: char,
    scanner: &mut Scanner<'_>,
    argument: &'static str,
) -> Result<(), SyntaxError> {
    if scanner.rest_is_blank() {
        return Err(SyntaxError::MissingArgument { tag, argument });
    }
    if !scanner.eat(' ') {
        return Err(SyntaxError::MissingSeparator { tag });
    }
    if scanner.rest_is_blank() {
        return Err(SyntaxError::MissingArgument { tag, argument });
    }
    if scanner.peek().is_some_and(char::is_whitespace) {
        return Err(SyntaxError::MissingSeparator { tag });
    }
    Ok(())
}

fn path_argument(tag: char, scanner: &mut Scanner<'_>) -> Result<PathBuf, SyntaxError> {
    separator(tag, scanner, "a file path")?;
    Ok(PathBuf::from(scanner.take_token()))
}

/// Parses `<n> <remainder>` after a tag. The remainder is returned verbatim
/// and must not be empty.
fn numbered_argument<'a>(
    tag: char,
    scanner: &mut Scanner<'a>,
    argument: &'static str,
) -> Result<(usize, &'a str), SyntaxError> {
    separator(tag, scanner, "a line number")?;
    let line = parse_line_number(scanner.take_token())?;

    if scanner.is_at_end() {
        return Err(SyntaxError::MissingArgument { tag, argument });
    }
    if !scanner.eat(' ') {
        return Err(SyntaxError::MissingTextSeparator { tag });
    }

    let rest = scanner.rest();
    if rest.is_empty() {
        return Err(SyntaxError::MissingArgument { tag, argument });
    }
    Ok((line, rest))
}

fn parse_line_number(token: &str) -> Result<usize, SyntaxError> {
    let invalid = || SyntaxError::InvalidLineNumber {
        token: token.to_string(),
    };
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}

//! Keyword resolution.
//!
//! The lookup uses the text's length as a first-pass filter (keywords
//! range from 2-9 chars), then matches against the keywords of that
//! length. Canonical spellings are lower case; the caller folds an
//! all-upper-case spelling before calling in here.

use tali_ir::Keyword;

/// Look up a keyword by its exact spelling.
///
/// Returns `None` for anything that is not a canonical spelling —
/// including mixed-case text, which never resolves.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Keyword> {
    let len = text.len();

    // Guard: all keywords are 2-9 chars
    if !(2..=9).contains(&len) {
        return None;
    }

    match len {
        2 => match text {
            "do" => Some(Keyword::Do),
            "if" => Some(Keyword::If),
            "of" => Some(Keyword::Of),
            "to" => Some(Keyword::To),
            _ => None,
        },
        3 => match text {
            "end" => Some(Keyword::End),
            "for" => Some(Keyword::For),
            "var" => Some(Keyword::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(Keyword::Else),
            "then" => Some(Keyword::Then),
            "type" => Some(Keyword::Type),
            _ => None,
        },
        5 => match text {
            "array" => Some(Keyword::Array),
            "begin" => Some(Keyword::Begin),
            "const" => Some(Keyword::Const),
            "while" => Some(Keyword::While),
            _ => None,
        },
        6 => match text {
            "downto" => Some(Keyword::Downto),
            "record" => Some(Keyword::Record),
            _ => None,
        },
        7 => match text {
            "program" => Some(Keyword::Program),
            _ => None,
        },
        8 => match text {
            "function" => Some(Keyword::Function),
            _ => None,
        },
        9 => match text {
            "procedure" => Some(Keyword::Procedure),
            _ => None,
        },
        _ => None,
    }
}

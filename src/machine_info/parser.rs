use super::MachineMap;
use super::error::ParseError;
use crate::id::Id;

/// Parses the output of `act configure list-compilers`.
///
/// Each non-blank line is `<machine> <compiler> [ignored...]`. Blank lines
/// are skipped. A non-blank line with fewer than two tokens fails the whole
/// parse; line numbers in errors are 1-based and count blank lines.
pub fn parse_compiler_list<I, S>(lines: I) -> Result<MachineMap, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut machines = MachineMap::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_number = index + 1;

        let mut tokens = line.split_whitespace();
        let Some(machine) = tokens.next() else {
            continue;
        };
        let Some(compiler) = tokens.next() else {
            return Err(ParseError::MalformedLine {
                line_number,
                line: line.to_string(),
            });
        };

        let machine = to_id(machine, line_number)?;
        let compiler = to_id(compiler, line_number)?;
        machines.entry(machine).or_default().insert(compiler);
    }

    Ok(machines)
}

/// Splits captured output into lines.
///
/// Any of `\n`, `\r`, `\r\n`, vertical tab, form feed, the file/group/record
/// separators, NEL, and the Unicode line and paragraph separators ends a line.
/// A trailing break does not produce a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..index]);
        start = index + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

fn is_line_break(c: char) -> bool {
    LINE_BREAKS.contains(&c)
}

fn to_id(token: &str, line_number: usize) -> Result<Id, ParseError> {
    Id::new(token).map_err(|source| ParseError::InvalidId {
        line_number,
        source,
    })
}

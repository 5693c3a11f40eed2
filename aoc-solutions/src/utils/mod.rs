//! Input helpers shared by the puzzle parsers

use aoc_solver::ParseError;

/// Parse every line of the trimmed input, tagging failures with a 1-based line number
pub fn parse_lines<'a, T, F>(input: &'a str, parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    parse_lines_with_offset(input.trim(), 0, parse_line)
}

/// Like [`parse_lines`] for a block that starts `offset` lines into the input
///
/// The block is not trimmed, so `offset` stays accurate.
pub fn parse_lines_with_offset<'a, T, F>(
    block: &'a str,
    offset: usize,
    mut parse_line: F,
) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    block
        .lines()
        .enumerate()
        .map(|(line_idx, line)| {
            parse_line(line).map_err(|e| {
                ParseError::InvalidFormat(format!("(line {}) {}", line_idx + offset + 1, e))
            })
        })
        .collect()
}

/// Parse a row of single decimal digits such as `2199943210`
pub fn parse_digit_row(line: &str) -> anyhow::Result<Vec<u32>> {
    line.chars()
        .map(|c| {
            c.to_digit(10)
                .ok_or_else(|| anyhow::anyhow!("'{}' is not a decimal digit", c))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_reports_line_number() {
        let result = parse_lines("1\n2\nx\n", |line| Ok(line.parse::<u8>()?));
        match result {
            Err(ParseError::InvalidFormat(msg)) => assert!(msg.starts_with("(line 3)"), "{msg}"),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_lines_with_offset() {
        let result = parse_lines_with_offset("ok\nbad", 4, |line| {
            anyhow::ensure!(line == "ok", "unexpected {line:?}");
            Ok(())
        });
        assert_eq!(
            result,
            Err(ParseError::InvalidFormat(
                "(line 6) unexpected \"bad\"".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_digit_row() {
        assert_eq!(parse_digit_row("0907").unwrap(), vec![0, 9, 0, 7]);
        assert!(parse_digit_row("12a").is_err());
    }
}

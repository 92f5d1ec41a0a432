use std::io::{self, BufRead, Write};

/// Which of the listed files to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    /// Validated 0-based indices into the file list, in input order.
    Indices(Vec<usize>),
}

/// Source of the user's file selection. The driver only depends on this
/// trait, so tests can script a selection instead of reading a terminal.
pub trait SelectionSource {
    fn select(&mut self, count: usize) -> io::Result<Selection>;
}

/// Interactive selection from stdin: comma-separated 1-based indices or
/// the literal `all`. Re-prompts until the input yields at least one valid
/// index.
pub struct StdinSelection;

impl SelectionSource for StdinSelection {
    fn select(&mut self, count: usize) -> io::Result<Selection> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("\nEnter file numbers to analyze (comma-separated) or 'all' for all files: ");
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                // stdin closed; nothing selectable
                return Ok(Selection::Indices(Vec::new()));
            }

            match parse_selection(&line, count) {
                Some(selection) => return Ok(selection),
                None => println!("Invalid selection, please try again."),
            }
        }
    }
}

/// Parse one line of selection input against a list of `count` files.
///
/// `all` (case-insensitive) selects everything. Otherwise the input is
/// split on commas and each token parsed as a 1-based index; tokens that
/// are not numbers or fall outside 1..=count are silently dropped. Returns
/// None when nothing valid remains, which makes the caller re-prompt.
pub fn parse_selection(input: &str, count: usize) -> Option<Selection> {
    let input = input.trim().to_lowercase();
    if input == "all" {
        return Some(Selection::All);
    }

    let indices: Vec<usize> = input
        .split(',')
        .filter_map(|token| token.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1 && n <= count)
        .map(|n| n - 1)
        .collect();

    if indices.is_empty() {
        None
    } else {
        Some(Selection::Indices(indices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_keyword() {
        assert_eq!(parse_selection("all", 3), Some(Selection::All));
        assert_eq!(parse_selection("  ALL \n", 3), Some(Selection::All));
    }

    #[test]
    fn test_parse_comma_separated_indices() {
        assert_eq!(
            parse_selection("1,3", 3),
            Some(Selection::Indices(vec![0, 2]))
        );
        assert_eq!(
            parse_selection(" 2 , 1 ", 3),
            Some(Selection::Indices(vec![1, 0]))
        );
    }

    #[test]
    fn test_parse_drops_invalid_indices_silently() {
        assert_eq!(
            parse_selection("0,2,99", 3),
            Some(Selection::Indices(vec![1]))
        );
        assert_eq!(
            parse_selection("1,x,3", 3),
            Some(Selection::Indices(vec![0, 2]))
        );
    }

    #[test]
    fn test_parse_rejects_entirely_invalid_input() {
        assert_eq!(parse_selection("", 3), None);
        assert_eq!(parse_selection("0,99", 3), None);
        assert_eq!(parse_selection("foo,bar", 3), None);
    }

    #[test]
    fn test_parse_with_no_files() {
        assert_eq!(parse_selection("1", 0), None);
        assert_eq!(parse_selection("all", 0), Some(Selection::All));
    }

    #[test]
    fn test_scripted_selection_source() {
        struct Scripted(Vec<Selection>);

        impl SelectionSource for Scripted {
            fn select(&mut self, _count: usize) -> io::Result<Selection> {
                Ok(self.0.remove(0))
            }
        }

        let mut source = Scripted(vec![Selection::Indices(vec![0])]);
        assert_eq!(source.select(5).unwrap(), Selection::Indices(vec![0]));
    }
}

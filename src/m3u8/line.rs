/// A single trimmed line borrowed from the source text.
///
/// `index` counts only lines that were actually returned by the reader:
/// the first non-blank line is index 0, whatever number of blank lines
/// precede it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub index: usize,
    pub text: &'a str,
}

/// Splits source text into trimmed, indexed lines without copying.
/// Blank-after-trim lines are skipped. Running past the end yields
/// `None`, idempotently.
#[derive(Debug)]
pub struct LineReader<'a> {
    source: &'a str,
    pos: usize,
    index: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            index: 0,
        }
    }
}

fn trim(line: &str) -> &str {
    line.trim_matches(|c: char| c == ' ' || c.is_ascii_control())
}

impl<'a> Iterator for LineReader<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        while self.pos < self.source.len() {
            let rest = &self.source[self.pos..];
            let (raw, advance) = match rest.find('\n') {
                Some(at) => (&rest[..at], at + 1),
                None => (rest, rest.len()),
            };
            self.pos += advance;

            let text = trim(raw);
            if text.is_empty() {
                continue;
            }

            let index = self.index;
            self.index += 1;
            return Some(Line { index, text });
        }

        None
    }
}

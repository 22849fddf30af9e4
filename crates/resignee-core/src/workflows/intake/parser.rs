use super::record::FIELD_COUNT;

/// Ten consecutive non-blank lines, positioned by their order among all full chunks.
#[derive(Debug)]
pub(crate) struct Chunk<'a> {
    pub(crate) index: usize,
    pub(crate) fields: Vec<&'a str>,
}

/// Lazily groups significant lines into full chunks, remembering any short tail.
pub(crate) struct RecordChunks<I> {
    lines: I,
    next_index: usize,
    trailing: usize,
}

impl<I> RecordChunks<I> {
    /// Lines left over after the last full chunk; only final once iteration returned `None`.
    pub(crate) fn trailing_lines(&self) -> usize {
        self.trailing
    }
}

impl<'a, I> Iterator for RecordChunks<I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut fields = Vec::with_capacity(FIELD_COUNT);
        for line in self.lines.by_ref() {
            fields.push(line);
            if fields.len() == FIELD_COUNT {
                break;
            }
        }

        if fields.len() < FIELD_COUNT {
            if !fields.is_empty() {
                self.trailing = fields.len();
            }
            return None;
        }

        let index = self.next_index;
        self.next_index += 1;
        Some(Chunk { index, fields })
    }
}

pub(crate) fn chunk_lines(raw: &str) -> RecordChunks<impl Iterator<Item = &str>> {
    RecordChunks {
        lines: significant_lines(raw),
        next_index: 0,
        trailing: 0,
    }
}

/// Trimmed lines with blank and whitespace-only lines removed.
pub(crate) fn significant_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|line| !line.is_empty())
}

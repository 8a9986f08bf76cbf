//! Line buffer and the read/write contract every MDL block handler follows.

use std::mem;

use super::error::Result;

/// Lines of text with a cursor.
///
/// Reading advances the cursor; writing inserts at the cursor and advances
/// past the new line. Carriage returns are stripped on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLinesBuffer {
    lines: Vec<String>,
    cursor: usize,
}

impl TextLinesBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(text);
        buffer
    }

    /// Replaces the content with `text` split into lines and rewinds.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        self.cursor = 0;
    }

    pub fn set_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.lines = lines
            .iter()
            .map(|l| {
                let l = l.as_ref();
                l.strip_suffix('\r').unwrap_or(l).to_string()
            })
            .collect();
        self.cursor = 0;
    }

    /// Rewinds the cursor to the first line.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Drops every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn eof(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    pub fn current_line_no(&self) -> usize {
        self.cursor
    }

    pub fn set_current_line_no(&mut self, line_no: usize) {
        self.cursor = line_no.min(self.lines.len());
    }

    pub fn line_at(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// The line under the cursor, without advancing.
    pub fn current_line(&self) -> Option<&str> {
        self.line_at(self.cursor)
    }

    pub fn read_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.cursor).cloned();
        if line.is_some() {
            self.cursor += 1;
        }
        line
    }

    pub fn unread_lines(&self) -> &[String] {
        &self.lines[self.cursor.min(self.lines.len())..]
    }

    pub fn write_line(&mut self, line: impl Into<String>) {
        self.lines.insert(self.cursor, line.into());
        self.cursor += 1;
    }

    /// Writes every line of `text`.
    pub fn write_text(&mut self, text: &str) {
        for line in text.split('\n') {
            self.write_line(line.strip_suffix('\r').unwrap_or(line));
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Input of [`BlockReader::read_block`]: raw text or pre-split lines.
#[derive(Debug, Clone, Copy)]
pub enum BlockSource<'a> {
    Text(&'a str),
    Lines(&'a [String]),
}

impl<'a> From<&'a str> for BlockSource<'a> {
    fn from(text: &'a str) -> Self {
        BlockSource::Text(text)
    }
}

impl<'a> From<&'a String> for BlockSource<'a> {
    fn from(text: &'a String) -> Self {
        BlockSource::Text(text)
    }
}

impl<'a> From<&'a [String]> for BlockSource<'a> {
    fn from(lines: &'a [String]) -> Self {
        BlockSource::Lines(lines)
    }
}

impl<'a> From<&'a Vec<String>> for BlockSource<'a> {
    fn from(lines: &'a Vec<String>) -> Self {
        BlockSource::Lines(lines)
    }
}

/// A handler that turns one block of lines into a value.
///
/// Implementors provide [`do_read_block`](BlockReader::do_read_block);
/// [`read_block`](BlockReader::read_block) loads the handler's buffer,
/// rewinds it, runs the read, and leaves the buffer empty whatever the
/// outcome, so one handler can be reused for sequential reads.
pub trait BlockReader {
    type Output;

    fn text_buffer(&mut self) -> &mut TextLinesBuffer;

    fn do_read_block(&mut self, buffer: &mut TextLinesBuffer) -> Result<Self::Output>;

    fn read_block<'a>(&mut self, source: impl Into<BlockSource<'a>>) -> Result<Self::Output> {
        let mut buffer = mem::take(self.text_buffer());
        match source.into() {
            BlockSource::Text(text) => buffer.set_text(text),
            BlockSource::Lines(lines) => buffer.set_lines(lines),
        }
        buffer.reset();
        let result = self.do_read_block(&mut buffer);
        buffer.clear();
        *self.text_buffer() = buffer;
        result
    }
}

/// A handler that turns a value into one block of text. The buffer is
/// cleared before and after each write.
pub trait BlockWriter {
    type Input: ?Sized;

    fn text_buffer(&mut self) -> &mut TextLinesBuffer;

    fn do_write_block(&mut self, obj: &Self::Input, buffer: &mut TextLinesBuffer) -> Result<()>;

    fn write_block(&mut self, obj: &Self::Input) -> Result<String> {
        let mut buffer = mem::take(self.text_buffer());
        buffer.clear();
        let result = self.do_write_block(obj, &mut buffer).map(|()| buffer.text());
        buffer.clear();
        *self.text_buffer() = buffer;
        result
    }
}

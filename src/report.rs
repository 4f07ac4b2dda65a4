//! Report block formatting and the buffered report writer

use std::io::{self, Write};

/// Placeholder line for a directory without qualifying files
pub fn format_placeholder(dir_label: &str) -> String {
    format!("{}: no code files are added in this folder yet\n\n", dir_label)
}

/// Block holding one file's full content
pub fn format_file_block(file_label: &str, content: &str) -> String {
    format!("{}: [\n{}\n]\n\n", file_label, content)
}

/// Appends blocks to the report in the order they are produced
pub struct ReportWriter<W: Write> {
    out: W,
    blocks: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, blocks: 0 }
    }

    pub fn write_placeholder(&mut self, dir_label: &str) -> io::Result<()> {
        self.out.write_all(format_placeholder(dir_label).as_bytes())?;
        self.blocks += 1;
        Ok(())
    }

    pub fn write_file_block(&mut self, file_label: &str, content: &str) -> io::Result<()> {
        self.out
            .write_all(format_file_block(file_label, content).as_bytes())?;
        self.blocks += 1;
        Ok(())
    }

    /// Number of blocks (file blocks and placeholders) written so far
    pub fn blocks_written(&self) -> usize {
        self.blocks
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

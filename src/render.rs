//! Presenters: flush a full frame to a terminal (or nowhere).
//!
//! The canvas repaints by handing the presenter one complete frame. The
//! target is a plain terminal stream, so a repaint is always clear-screen
//! plus a full-frame print; there is no incremental patching. Encoding is
//! split from the stdout flush so frames can be inspected without a TTY.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

/// Sink for full-frame repaints.
///
/// `cells` is the complete next frame in row-major order; `width` gives
/// the row length. Implementations must consume the whole frame.
pub trait Presenter {
    fn present(&mut self, width: u16, cells: &[char]) -> Result<()>;
}

/// Presenter backed by stdout via crossterm.
///
/// Commands are queued into a reusable byte buffer and flushed in a single
/// write so a frame never reaches the terminal half-drawn.
pub struct TermPresenter {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TermPresenter {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }
}

impl Default for TermPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for TermPresenter {
    fn present(&mut self, width: u16, cells: &[char]) -> Result<()> {
        self.buf.clear();
        encode_frame_into(width, cells, &mut self.buf)?;
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Presenter that discards frames. Useful headless and in tests.
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _width: u16, _cells: &[char]) -> Result<()> {
        Ok(())
    }
}

/// Encode a clear-screen plus full-frame print into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(width: u16, cells: &[char], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for (i, row) in cells.chunks(width.max(1) as usize).enumerate() {
        if i > 0 {
            out.queue(Print("\r\n"))?;
        }
        for &ch in row {
            out.queue(Print(ch))?;
        }
    }

    Ok(())
}

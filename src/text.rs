//! Text layout: cut, letter-wrap and word-wrap placement.
//!
//! Text flows into blank cells in row-major order from a start coordinate.
//! All three modes are one batch pass; the wrap-mode visitors carry their
//! progression state (character cursor, word index, done flag) in named
//! fields rather than captured ambient variables.

use anyhow::Result;

use crate::canvas::{Canvas, CellVisitor};
use crate::grid::Grid;

/// How text behaves when it meets a non-blank cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    /// Stop at the first non-blank cell; the rest of the text is dropped.
    None,
    /// Skip non-blank cells and keep filling later blanks, ignoring row
    /// boundaries and word boundaries.
    Letters,
    /// Flow whole words; a word that does not fit the blank run at the
    /// current cell is deferred rather than split.
    Words,
}

/// Cut / letter-wrap layout: consecutive blank cells from the start
/// coordinate receive one character each.
struct LetterFlow {
    start_x: u16,
    start_y: u16,
    chars: Vec<char>,
    next: usize,
    wrap: bool,
    done: bool,
}

impl CellVisitor for LetterFlow {
    fn visit(&mut self, grid: &Grid, x: u16, y: u16) -> char {
        let old = grid.value_at(x, y);

        if self.done {
            return old;
        }
        if self.next >= self.chars.len() {
            self.done = true;
            return old;
        }
        if grid.is_before(x, y, self.start_x, self.start_y) {
            return old;
        }

        if old == Grid::BLANK {
            let c = self.chars[self.next];
            self.next += 1;
            return c;
        }

        // Hit an occupied cell: cut mode terminates, letter mode skips it.
        if !self.wrap {
            self.done = true;
        }
        old
    }
}

/// Word-wrap layout.
///
/// At each cell the visitor measures the contiguous blank run starting
/// there (linear buffer walk, which crosses row boundaries; see
/// [`Grid`]'s blank-run note) and only starts placing a word when the
/// whole word fits the run. A finished word gives up one cell as the
/// inter-word gap.
struct WordFlow {
    start_x: u16,
    start_y: u16,
    words: Vec<Vec<char>>,
    word: usize,
    letter: usize,
    done: bool,
}

impl CellVisitor for WordFlow {
    fn visit(&mut self, grid: &Grid, x: u16, y: u16) -> char {
        let old = grid.value_at(x, y);

        if self.done || grid.is_before(x, y, self.start_x, self.start_y) {
            return old;
        }

        let available = grid.blank_run(x, y);
        let remaining = self.words[self.word].len() - self.letter;

        if remaining == 0 {
            // Word complete: advance, leaving this blank cell as the gap.
            self.word += 1;
            if self.word >= self.words.len() {
                self.done = true;
                return old;
            }
            self.letter = 0;
            return old;
        }

        if remaining > available {
            // Not enough contiguous blanks here; defer the word.
            return old;
        }

        let c = self.words[self.word][self.letter];
        self.letter += 1;
        c
    }
}

impl Canvas {
    /// Lay `text` onto the canvas starting at (x, y), flowing row-major
    /// into blank cells. Cells before the start keep their values; text
    /// that finds no room is dropped, never an error.
    pub fn write_text(&mut self, x: u16, y: u16, text: &str, wrap: Wrap) -> Result<()> {
        match wrap {
            Wrap::Words => {
                let words: Vec<Vec<char>> = text
                    .split_whitespace()
                    .map(|w| w.chars().collect())
                    .collect();
                if words.is_empty() {
                    return Ok(());
                }

                self.write_batch(WordFlow {
                    start_x: x,
                    start_y: y,
                    words,
                    word: 0,
                    letter: 0,
                    done: false,
                })
            }
            Wrap::None | Wrap::Letters => self.write_batch(LetterFlow {
                start_x: x,
                start_y: y,
                chars: text.chars().collect(),
                next: 0,
                wrap: wrap == Wrap::Letters,
                done: false,
            }),
        }
    }
}

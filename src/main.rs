//! Usage demo: draws a framed scene on a 20x15 canvas.
//!
//! Top-left of the canvas is (0, 0). Every drawing call below repaints the
//! terminal only because it changes cells; repeating one would be free.

use anyhow::Result;

use termgrid::{Canvas, Wrap};

fn main() -> Result<()> {
    let mut canvas = Canvas::stdout(20, 15);

    canvas.outline('+', '-', '|')?;

    canvas.write_text(
        1,
        1,
        "Hello! This is some wrapped text. The words will not be cut in half!",
        Wrap::Words,
    )?;

    // Horizontal line.
    canvas.line('~', 1, 5, 18, 5)?;

    // Jagged diagonal line (incremental slope-error rasterizer).
    canvas.line('*', 1, 7, 18, 13)?;

    canvas.write_text(1, 6, "That line is gross... I'm not touching it", Wrap::Words)?;

    assert!(canvas.is_blank(1, 13));
    canvas.write(1, 13, '$')?;
    assert_eq!(canvas.value_at(1, 13), '$');

    // Unfilled rectangle, then a filled one.
    canvas.rect('+', 1, 10, 5, 12, false)?;
    canvas.rect('#', 7, 12, 10, 13, true)?;

    Ok(())
}

//! TerminalRenderer: flushes view lines to a real terminal.
//!
//! Full clear-and-redraw each frame. The screens are a handful of short
//! lines, so there is no diffing machinery here.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::view::{Line, LineStyle};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        self.entered = true;
        Ok(())
    }

    /// Restore the terminal. Idempotent; safe to call on every exit path.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a frame of centered lines.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        let (width, height) = terminal::size().unwrap_or((80, 24));

        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let top = height.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let x = width.saturating_sub(line.text.len() as u16) / 2;
            let y = top + i as u16;
            if y >= height {
                break;
            }
            self.stdout.queue(cursor::MoveTo(x, y))?;
            self.apply_style(line.style)?;
            self.stdout.queue(Print(&line.text))?;
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: LineStyle) -> Result<()> {
        let color = match style {
            LineStyle::Normal => Color::White,
            LineStyle::Title => Color::Cyan,
            LineStyle::Alert => Color::Red,
            LineStyle::Good => Color::Green,
            LineStyle::Dim => Color::DarkGrey,
        };
        self.stdout.queue(SetForegroundColor(color))?;
        let attr = if style == LineStyle::Title {
            Attribute::Bold
        } else {
            Attribute::Reset
        };
        self.stdout.queue(SetAttribute(attr))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

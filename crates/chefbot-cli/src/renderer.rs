//! Markdown output for the terminal.
//!
//! Relay replies and meal plan chunks are markdown. With color enabled they
//! go through a termimad skin; `--no-color` prints them untouched so the
//! output can be piped into files or other tools.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Printed between consecutive chunks of a meal plan.
pub const CHUNK_SEPARATOR: &str = "---";

pub struct TerminalRenderer {
    colored: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(colored: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bullet.set_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { colored, skin }
    }

    /// Prints one message.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let text = markdown.trim_end();
        if !self.colored {
            println!("{text}");
            return Ok(());
        }

        for line in text.lines() {
            // Section headers keep their numbering visible
            match line.strip_prefix('#') {
                Some(_) => println!("\x1b[1;32m{line}\x1b[0m"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }

    /// Prints chunks in order with a rule between them.
    pub fn render_chunks(&self, chunks: &[String]) -> Result<()> {
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                println!("\n{CHUNK_SEPARATOR}\n");
            }
            self.render(chunk)?;
        }
        Ok(())
    }
}

//! Splitting a formatted plan into size-bounded messages.
//!
//! Chat transports cap message length, so [`PlanFormatter::format`] returns
//! an ordered list of chunks. The overview always comes first; recipes follow,
//! packed greedily, and a recipe is never split across two chunks. Lengths
//! are counted in characters.

use log::{debug, warn};

use super::PlanOverview;
use crate::models::StructuredPlan;
use crate::prompt::SECTION_HEADERS;

/// Telegram's message limit.
pub const DEFAULT_MAX_CHUNK_LEN: usize = 4096;

/// Smallest limit accepted; anything lower is raised to this.
pub const MIN_CHUNK_LEN: usize = 64;

/// Appended to a recipe that had to be cut to fit in one chunk.
const TRUNCATION_NOTE: &str = "_(recipe shortened to fit one message)_";

/// Renders a [`StructuredPlan`] as display-ready chunks.
///
/// # Examples
///
/// ```rust
/// use chefbot_core::{display::PlanFormatter, parser};
///
/// let plan = parser::parse("Monday: Tacos");
/// let chunks = PlanFormatter::default().format(&plan);
/// assert!(chunks.len() >= 2);
/// assert!(chunks[0].contains("Monday: Tacos"));
/// assert!(chunks[1].contains("## Monday: Tacos"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PlanFormatter {
    max_chunk_len: usize,
}

impl Default for PlanFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_LEN)
    }
}

impl PlanFormatter {
    /// Creates a formatter with the given per-chunk character limit.
    pub fn new(max_chunk_len: usize) -> Self {
        Self {
            max_chunk_len: max_chunk_len.max(MIN_CHUNK_LEN),
        }
    }

    pub fn max_chunk_len(&self) -> usize {
        self.max_chunk_len
    }

    /// Formats the plan. Chunks are non-empty, trimmed at the end, and never
    /// longer than the configured limit.
    pub fn format(&self, plan: &StructuredPlan) -> Vec<String> {
        let mut chunks = self.split_lines(&PlanOverview(plan).to_string());

        if !plan.recipes.is_empty() {
            let mut pieces = vec![format!("# 3. {}\n\n", SECTION_HEADERS[2])];
            pieces.extend(plan.recipes.iter().map(|recipe| {
                let rendered = recipe.to_string();
                if char_len(&rendered) > self.max_chunk_len {
                    warn!(
                        "{} recipe is {} characters, shortening to fit one message",
                        recipe.day,
                        char_len(&rendered)
                    );
                    self.shorten(&rendered)
                } else {
                    rendered
                }
            }));
            chunks.extend(self.pack(pieces));
        }

        let chunks: Vec<String> = chunks
            .into_iter()
            .map(|chunk| chunk.trim_end().to_string())
            .filter(|chunk| !chunk.is_empty())
            .collect();
        debug!("Formatted meal plan into {} chunks", chunks.len());
        chunks
    }

    /// Greedily concatenates pieces that each fit the limit.
    fn pack(&self, pieces: Vec<String>) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for piece in pieces {
            let len = char_len(&piece);
            if current_len + len > self.max_chunk_len && !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current.push_str(&piece);
            current_len += len;
        }
        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }

    /// Splits text at line boundaries, hard-splitting any single line that is
    /// itself over the limit.
    fn split_lines(&self, text: &str) -> Vec<String> {
        let pieces = text
            .split_inclusive('\n')
            .flat_map(|line| self.hard_split(line))
            .collect();
        self.pack(pieces)
    }

    fn hard_split(&self, line: &str) -> Vec<String> {
        if char_len(line) <= self.max_chunk_len {
            return vec![line.to_string()];
        }
        let chars: Vec<char> = line.chars().collect();
        chars
            .chunks(self.max_chunk_len)
            .map(|part| part.iter().collect())
            .collect()
    }

    /// Keeps as many whole lines of a recipe as fit alongside the truncation
    /// note.
    fn shorten(&self, rendered: &str) -> String {
        let budget = self.max_chunk_len - char_len(TRUNCATION_NOTE) - 1;
        let mut kept = String::new();
        let mut kept_len = 0;

        for line in rendered.split_inclusive('\n') {
            let len = char_len(line);
            if kept_len + len > budget {
                if kept.is_empty() {
                    // The header line alone is too long.
                    kept = line.chars().take(budget).collect();
                }
                break;
            }
            kept.push_str(line);
            kept_len += len;
        }

        if !kept.ends_with('\n') {
            kept.push('\n');
        }
        kept.push_str(TRUNCATION_NOTE);
        kept
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

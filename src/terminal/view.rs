use std::io::{self, Write};
use std::sync::Mutex;

use sv_core::ids::EntryId;
use sv_core::ports::ResultViewPort;
use sv_core::{ResultCard, ThumbnailState};

const NO_RESULTS: &str = "No results found.";
const INDENT: &str = "    ";

/// Line-oriented result view.
///
/// Cards are written as they are rendered. Thumbnail updates are written
/// as their own line tagged with the entry number, since a terminal cannot
/// revisit an earlier card.
pub struct TerminalResultView {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalResultView {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    fn write_block(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            tracing::warn!("terminal writer lock poisoned");
            return;
        };
        if let Err(err) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }
}

impl ResultViewPort for TerminalResultView {
    fn show_no_results(&self) {
        self.write_block(NO_RESULTS);
    }

    fn render_card(&self, card: &ResultCard) {
        self.write_block(&format_card(card));
    }

    fn update_thumbnail(&self, id: EntryId, state: &ThumbnailState) {
        if let Some(line) = format_thumbnail(id, state) {
            self.write_block(&line);
        }
    }
}

/// Render a card as an indented block.
///
/// ```text
/// [1] Pixiv · 95.0%
///     Foo
///     Member: bar
///     -> https://www.pixiv.net/artworks/1
/// ```
pub fn format_card(card: &ResultCard) -> String {
    let mut header = format!("[{}] {}", card.id.display_number(), card.source_name);
    if !card.similarity.is_empty() {
        header.push_str(" · ");
        header.push_str(&card.similarity);
    }
    let mut lines = vec![header];
    if !card.title.is_empty() {
        lines.push(format!("{INDENT}{}", card.title));
    }
    lines.extend(
        card.metadata
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| format!("{INDENT}{line}")),
    );
    if let Some(url) = &card.primary_url {
        lines.push(format!("{INDENT}-> {url}"));
    }
    lines.join("\n")
}

/// `None` for `Pending`: the slot starts pending and there is nothing new
/// to say.
pub fn format_thumbnail(id: EntryId, state: &ThumbnailState) -> Option<String> {
    match state {
        ThumbnailState::Pending => None,
        ThumbnailState::Loaded(thumbnail) => Some(format!(
            "[{}] thumbnail {}x{}",
            id.display_number(),
            thumbnail.width,
            thumbnail.height
        )),
        ThumbnailState::Failed(err) => Some(format!(
            "[{}] thumbnail unavailable ({})",
            id.display_number(),
            err.kind()
        )),
    }
}

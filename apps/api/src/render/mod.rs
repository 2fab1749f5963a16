//! Resume Markdown renderer — turns the constrained Markdown the generator
//! produces into a flat sequence of display blocks.
//!
//! Only a small line-oriented subset is understood. Each line is trimmed and
//! dispatched by the first matching rule:
//!
//! 1. `# ` name heading (opens the contact block)
//! 2. `## ` section heading (closes the contact block, sets the section)
//! 3. any non-blank line inside the contact block → contact line
//! 4. any non-blank line in *Professional Summary* → summary paragraph
//! 5. `* ` list item (buffered)
//! 6. `**...**` bold label (outer markers only are stripped)
//! 7. a line that is exactly `[label](url)` → link
//! 8. anything else non-blank → paragraph
//! 9. blank lines emit nothing and do NOT close an open list
//!
//! The buffered list is flushed by rules 1, 2, 6, 7, 8 and at end of input.

use std::collections::VecDeque;
use std::str::Split;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub mod html;

static RE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]*)\]\(([^)]*)\)$").expect("link pattern is valid"));

/// Named resume section recognised from a level-2 heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Personal,
    Summary,
    Education,
    Skills,
    Experience,
    Objective,
}

impl Section {
    /// Exact heading text match; anything else is an unknown section.
    fn from_heading(text: &str) -> Option<Self> {
        match text {
            "Professional Summary" => Some(Section::Summary),
            "Education" => Some(Section::Education),
            "Skills" => Some(Section::Skills),
            "Experience & Projects" => Some(Section::Experience),
            "Career Objective" => Some(Section::Objective),
            _ => None,
        }
    }
}

/// One rendered display element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// The candidate's name.
    Title { text: String },
    Heading {
        text: String,
        section: Option<Section>,
    },
    Contact { text: String },
    Summary { text: String },
    List { items: Vec<String> },
    Label { text: String },
    Link { label: String, url: String },
    Paragraph { text: String },
}

/// Renders `markdown` lazily. The iterator is finite and deterministic.
pub fn render(markdown: &str) -> Blocks<'_> {
    Blocks {
        lines: markdown.split('\n'),
        ready: VecDeque::new(),
        list: Vec::new(),
        in_contact: false,
        section: None,
        finished: false,
    }
}

/// Convenience wrapper collecting every block.
pub fn render_all(markdown: &str) -> Vec<Block> {
    render(markdown).collect()
}

/// Single-pass parse state. At most two blocks are produced per input line
/// (a flushed list followed by the line's own block), queued in `ready`.
pub struct Blocks<'a> {
    lines: Split<'a, char>,
    ready: VecDeque<Block>,
    list: Vec<String>,
    in_contact: bool,
    section: Option<Section>,
    finished: bool,
}

impl Blocks<'_> {
    fn flush_list(&mut self) {
        if !self.list.is_empty() {
            let items = std::mem::take(&mut self.list);
            self.ready.push_back(Block::List { items });
        }
    }

    fn emit(&mut self, block: Block) {
        self.flush_list();
        self.ready.push_back(block);
    }

    fn feed(&mut self, raw: &str) {
        let line = raw.trim();

        if let Some(name) = line.strip_prefix("# ") {
            self.in_contact = true;
            self.section = Some(Section::Personal);
            self.emit(Block::Title {
                text: name.to_string(),
            });
        } else if let Some(heading) = line.strip_prefix("## ") {
            self.in_contact = false;
            self.section = Section::from_heading(heading);
            let section = self.section;
            self.emit(Block::Heading {
                text: heading.to_string(),
                section,
            });
        } else if line.is_empty() {
            // Blank lines never close an open list.
        } else if self.in_contact {
            self.ready.push_back(Block::Contact {
                text: line.to_string(),
            });
        } else if self.section == Some(Section::Summary) {
            self.ready.push_back(Block::Summary {
                text: line.to_string(),
            });
        } else if let Some(item) = line.strip_prefix("* ") {
            self.list.push(item.to_string());
        } else if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
            // Interior `**` pairs are kept verbatim.
            self.emit(Block::Label {
                text: line[2..line.len() - 2].to_string(),
            });
        } else if line.starts_with('[') && line.contains("](") {
            let block = match parse_link(line) {
                Some((label, url)) => Block::Link { label, url },
                None => Block::Paragraph {
                    text: line.to_string(),
                },
            };
            self.emit(block);
        } else {
            self.emit(Block::Paragraph {
                text: line.to_string(),
            });
        }
    }
}

fn parse_link(line: &str) -> Option<(String, String)> {
    let caps = RE_LINK.captures(line)?;
    let label = caps.get(1).map(|m| m.as_str()).filter(|s| !s.is_empty())?;
    let url = caps.get(2).map(|m| m.as_str()).filter(|s| !s.is_empty())?;
    Some((label.to_string(), url.to_string()))
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        loop {
            if let Some(block) = self.ready.pop_front() {
                return Some(block);
            }
            if self.finished {
                return None;
            }
            match self.lines.next() {
                Some(line) => self.feed(line),
                None => {
                    self.finished = true;
                    self.flush_list();
                }
            }
        }
    }
}

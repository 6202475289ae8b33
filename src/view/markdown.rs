// src/view/markdown.rs
use std::fmt::Write;

use super::document::{Block, Document};

/// Markdown rendering, suitable for pasting into reports
pub fn render_markdown(doc: &Document) -> String {
    let mut out = String::new();

    for section in &doc.sections {
        let _ = writeln!(out, "## {}\n", section.title);

        for subsection in &section.subsections {
            if let Some(title) = &subsection.title {
                let _ = writeln!(out, "### {}\n", title);
            }
            for block in &subsection.blocks {
                write_block(&mut out, block);
            }
            out.push('\n');
        }
    }

    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Field { label, value } => {
            let _ = writeln!(out, "**{}:** {}  ", label, escape(value));
        }
        Block::List { label, items } => {
            if let Some(label) = label {
                let _ = writeln!(out, "**{}:**\n", label);
            }
            for item in items {
                let _ = writeln!(out, "- {}", escape(item));
            }
            if !items.is_empty() {
                out.push('\n');
            }
        }
        Block::Link { text, url } => {
            let _ = writeln!(out, "[{}]({})\n", escape(text), link_target(url));
        }
        Block::Text(text) => {
            if !text.is_empty() {
                let _ = writeln!(out, "{}\n", escape(text));
            }
        }
    }
}

/// Percent-encodes characters that would end the link target early
fn link_target(url: &str) -> String {
    let mut target = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '(' => target.push_str("%28"),
            ')' => target.push_str("%29"),
            ' ' => target.push_str("%20"),
            '<' => target.push_str("%3C"),
            '>' => target.push_str("%3E"),
            _ => target.push(ch),
        }
    }
    target
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '*' | '_' | '[' | ']' | '`') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

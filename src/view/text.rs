// src/view/text.rs
use std::fmt::Write;

use super::document::{Block, Document};

const INDENT: &str = "  ";

/// Plain terminal rendering
pub fn render_text(doc: &Document) -> String {
    let mut out = String::new();

    for (i, section) in doc.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "== {} ==", section.title);

        for subsection in &section.subsections {
            out.push('\n');
            let indent = match &subsection.title {
                Some(title) => {
                    let _ = writeln!(out, "{}", title);
                    INDENT
                }
                None => "",
            };
            for block in &subsection.blocks {
                write_block(&mut out, indent, block);
            }
        }
    }

    out
}

fn write_block(out: &mut String, indent: &str, block: &Block) {
    match block {
        Block::Field { label, value } => {
            let _ = writeln!(out, "{}{}: {}", indent, label, value);
        }
        Block::List { label, items } => {
            let item_indent = match label {
                Some(label) => {
                    let _ = writeln!(out, "{}{}:", indent, label);
                    format!("{}{}", indent, INDENT)
                }
                None => indent.to_string(),
            };
            for item in items {
                let _ = writeln!(out, "{}- {}", item_indent, item);
            }
        }
        Block::Link { text, url } => {
            let _ = writeln!(out, "{}{} <{}>", indent, text, url);
        }
        Block::Text(text) => {
            if !text.is_empty() {
                let _ = writeln!(out, "{}{}", indent, text);
            }
        }
    }
}

// src/view/document.rs
//! Output-neutral results document

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Swot,
    Comparison,
    CompetitorProfile,
    SearchResults,
    DataFreshness,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Labelled scalar, already resolved to a display string or `N/A`
    Field { label: String, value: String },
    /// Ordered list; may be empty
    List { label: Option<String>, items: Vec<String> },
    /// Outbound link, opened outside the client
    Link { text: String, url: String },
    Text(String),
}

impl Block {
    pub fn field(label: &str, value: impl Into<String>) -> Self {
        Block::Field {
            label: label.to_string(),
            value: value.into(),
        }
    }

    pub fn list(label: &str, items: Vec<String>) -> Self {
        Block::List {
            label: Some(label.to_string()),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection {
    pub title: Option<String>,
    pub blocks: Vec<Block>,
}

impl Subsection {
    pub fn titled(title: &str, blocks: Vec<Block>) -> Self {
        Self {
            title: Some(title.to_string()),
            blocks,
        }
    }

    pub fn untitled(blocks: Vec<Block>) -> Self {
        Self {
            title: None,
            blocks,
        }
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Field { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn list(&self, label: Option<&str>) -> Option<&[String]> {
        self.blocks.iter().find_map(|block| match block {
            Block::List { label: l, items } if l.as_deref() == label => Some(items.as_slice()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub subsections: Vec<Subsection>,
}

impl Section {
    pub fn subsection(&self, title: &str) -> Option<&Subsection> {
        self.subsections
            .iter()
            .find(|s| s.title.as_deref() == Some(title))
    }

    pub fn subsection_titles(&self) -> Vec<&str> {
        self.subsections
            .iter()
            .filter_map(|s| s.title.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.kind == kind)
    }

    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}

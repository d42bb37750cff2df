// src/core/html.rs
// Thin adapter over `scraper`: class/tag lookups the extractors need, and
// BeautifulSoup-style text flattening.

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }

    pub fn root(&self) -> Node<'_> {
        Node(self.html.root_element())
    }
}

/// One element of a parsed document. Lookups search descendants only.
#[derive(Clone, Copy, Debug)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// First descendant carrying every class in `classes` ("fila parciales").
    pub fn find(&self, classes: &str) -> Result<Option<Node<'a>>, ExtractError> {
        let sel = class_selector(classes)?;
        Ok(self.0.select(&sel).next().map(Node))
    }

    /// Like `find`, but absence is a structural error naming `what`.
    pub fn require(&self, classes: &str, what: &'static str) -> Result<Node<'a>, ExtractError> {
        self.find(classes)?.ok_or(ExtractError::MissingElement(what))
    }

    pub fn find_all(&self, classes: &str) -> Result<Vec<Node<'a>>, ExtractError> {
        let sel = class_selector(classes)?;
        Ok(self.0.select(&sel).map(Node).collect())
    }

    pub fn find_tag(&self, tag: &str) -> Result<Option<Node<'a>>, ExtractError> {
        let sel = parse_selector(tag)?;
        Ok(self.0.select(&sel).next().map(Node))
    }

    pub fn find_all_tag(&self, tag: &str) -> Result<Vec<Node<'a>>, ExtractError> {
        let sel = parse_selector(tag)?;
        Ok(self.0.select(&sel).map(Node).collect())
    }

    /// All text below this node, untouched.
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    /// Each text node trimmed, empty ones dropped, the rest glued together.
    pub fn stripped_text(&self) -> String {
        self.0
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// "columna equipo local" → ".columna.equipo.local"
fn class_selector(classes: &str) -> Result<Selector, ExtractError> {
    let css: String = classes
        .split_whitespace()
        .map(|c| join!(".", c))
        .collect();
    parse_selector(&css)
}

fn parse_selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector {
        selector: s!(css),
        message: e.to_string(),
    })
}

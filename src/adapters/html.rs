//! Narrow HTML traversal interface over `scraper`, so extraction rules can
//! be unit-tested against string fixtures without a live site.

use scraper::{ElementRef, Html, Selector};

pub struct Document {
    inner: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            inner: Html::parse_document(html),
        }
    }

    /// All elements matching a CSS selector, in document order. An invalid
    /// selector yields no matches rather than an error, which the extraction
    /// contract treats the same as missing markup.
    pub fn select_all(&self, css: &str) -> Vec<Node<'_>> {
        match Selector::parse(css) {
            Ok(selector) => self.inner.select(&selector).map(Node).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn by_id(&self, id: &str) -> Option<Node<'_>> {
        let selector = Selector::parse(&format!("#{}", id)).ok()?;
        self.inner.select(&selector).next().map(Node)
    }
}

pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    pub fn select_all(&self, css: &str) -> Vec<Node<'a>> {
        match Selector::parse(css) {
            Ok(selector) => self.0.select(&selector).map(Node).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Rendered value for a line that produced no data, in both the name and
/// the price position.
pub const SENTINEL: &str = "-";

/// How a single input line was understood by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefShape {
    /// Line already carries a literal name and a `#`-numbered lookup query.
    Explicit { name: String, query: String },
    /// A series code plus a serial number, needing catalog resolution.
    SeriesSerial { series: String, serial: String },
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardReference {
    pub raw: String,
    pub shape: RefShape,
}

/// Outcome of resolving a series/serial pair against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found { name: String, query: String },
    NotFound,
}

/// Outcome of a price lookup. `Listed` keeps the price exactly as the
/// pricing site renders it, e.g. `"$12.34"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Price {
    Listed(String),
    Unavailable,
}

impl Price {
    pub fn into_rendered(self) -> String {
        match self {
            Price::Listed(value) => value,
            Price::Unavailable => SENTINEL.to_string(),
        }
    }
}

/// Index-aligned output of one batch run: one name and one price per
/// non-empty input line, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub names: Vec<String>,
    pub prices: Vec<String>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Reply text: the names block first, then the prices block, one entry
    /// per line. The transport sends this verbatim.
    pub fn render(&self) -> String {
        self.names
            .iter()
            .chain(self.prices.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

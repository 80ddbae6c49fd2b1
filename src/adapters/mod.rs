// Adapters layer: wrappers around external systems the core depends on.

pub mod html;

//! Rendering options supplied by the caller.

/// Controls how filter trees are rendered to JSON text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Emit indented multi-line JSON instead of a single line.
    pub pretty: bool,
}

impl Config {
    /// Config that renders indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

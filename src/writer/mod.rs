//! Output side: turns decoded lines into source-code records.
pub mod literal;

//! Fixed-width console table for reporting intervals.
mod columns;
mod table;


pub use columns::{Column, DEFAULT_COLUMNS, Source, Stat};
pub use table::{FIELD_WIDTH, TableDisplay, render_header, render_row};

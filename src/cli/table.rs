//! Table rendering for list and breakdown output
//!
//! A thin wrapper over `tabled`'s builder so commands describe columns once
//! and hand over plain string rows. Cells are truncated to the column width
//! before layout, keeping output stable on narrow terminals.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::helpers::truncate_str;

/// A column definition: header plus maximum rendered width
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub header: &'static str,
    pub max_width: usize,
}

impl ColumnDef {
    pub const fn new(header: &'static str, max_width: usize) -> Self {
        Self { header, max_width }
    }
}

/// Render rows under the given columns as a blank-styled table
pub fn render(columns: &[ColumnDef], rows: &[Vec<String>]) -> String {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.header.to_string()));

    for row in rows {
        builder.push_record(
            row.iter()
                .zip(columns)
                .map(|(cell, col)| truncate_str(cell, col.max_width)),
        );
    }

    let mut table = builder.build();
    table.with(Style::blank());
    table.to_string()
}

use crate::model::{Block, BlockKind};

use super::{
    context::FormattingContext, merge::merge_segments, options::PlanOptions, types::TableRow,
    walker::process_block,
};

/// Converts a table node into structured rows.
///
/// Cells are walked from the root context, so list or heading state around
/// the table never reaches its cells. Each cell is merged on its own.
pub fn extract_table_rows(table: &Block, options: &PlanOptions) -> Vec<TableRow> {
    table
        .children_of_kind(&BlockKind::TableRow)
        .map(|row| extract_row(row, options))
        .collect()
}

fn extract_row(row: &Block, options: &PlanOptions) -> TableRow {
    let is_header = row
        .child_blocks()
        .any(|cell| cell.kind == BlockKind::TableHeaderCell);
    let cells = row
        .child_blocks()
        .filter(|cell| cell.kind.is_table_cell())
        .map(|cell| merge_segments(process_block(cell, FormattingContext::root(), options)))
        .collect();
    TableRow { cells, is_header }
}

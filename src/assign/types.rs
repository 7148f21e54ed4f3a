use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One table in one block, holding the participant index seated in each chair.
/// `None` marks an empty chair (padding disabled and the headcount doesn't
/// fill every table evenly).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub block: u32,
    pub table: u32,
    pub seats: Vec<Option<usize>>,
}

/// Complete seating plan across all blocks.
///
/// Participant indices are 0-based throughout; block and table numbers are
/// 1-based. `categories[i]` is the category of participant `i`, and
/// `seats[i][b]` is the table participant `i` sits at in block `b + 1`
/// (`None` only if the participant could not be seated, which cannot happen
/// when padding is enabled).
///
/// `order` and `headcounts` are the effective inputs of the run: copies of
/// what the caller passed in, with the synthetic "extra" category appended
/// when padding was requested. The caller's own structures are never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub categories: Vec<String>,
    pub order: Vec<String>,
    pub headcounts: HashMap<String, u32>,
    pub seats: Vec<Vec<Option<u32>>>,
    pub tables: Vec<TableRow>,
    pub num_blocks: usize,
    pub num_tables: usize,
    pub chairs: usize,
}

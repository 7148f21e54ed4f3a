use std::collections::{HashMap, HashSet};
use std::ops::Range;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MixerError;

use super::types::{Assignment, TableRow};

/// Reserved label for the synthetic padding category. Padded participants
/// fill otherwise-empty chairs and render as empty seats on export.
pub const EXTRA_CATEGORY: &str = "extra";

/// Arranges participants into tables of `group_size` people, reshuffled for
/// each of `num_blocks` networking blocks.
///
/// Tables are sized from the headcount: with `total` participants there are
/// `total / group_size` tables, and if the division leaves a remainder every
/// table gets one extra chair rather than adding a partially-filled table.
/// Within each block participants are shuffled only within their own
/// category, so the category mix at each table stays roughly even while the
/// individual seating changes block to block. Blocks are shuffled
/// independently; there is no guarantee against repeat tablemates.
///
/// # Arguments
/// * `headcounts` - participant count per category label
/// * `order` - distinct category labels, all present in `headcounts`; fixes
///   both the participant numbering and the shuffle partitioning
/// * `num_blocks` - how many independent seating rounds to produce
/// * `group_size` - nominal chairs per table
/// * `pad_to_capacity` - fill leftover chairs with a synthetic "extra"
///   category so every table is exactly full
/// * `rng` - randomness source; seed it for reproducible plans
pub fn assign_groups<R: Rng>(
    headcounts: &HashMap<String, u32>,
    order: &[String],
    num_blocks: usize,
    group_size: usize,
    pad_to_capacity: bool,
    rng: &mut R,
) -> Result<Assignment, MixerError> {
    validate_inputs(headcounts, order, num_blocks, group_size, pad_to_capacity)?;

    // Work on copies so the caller's map and order are never mutated
    let mut headcounts: HashMap<String, u32> = order
        .iter()
        .map(|label| (label.clone(), headcounts[label]))
        .collect();
    let mut order: Vec<String> = order.to_vec();

    let mut total: usize = order.iter().map(|label| headcounts[label] as usize).sum();

    let num_tables = total / group_size;
    if num_tables == 0 {
        return Err(MixerError::InvalidInput(format!(
            "{} participants cannot fill a single table of {}",
            total, group_size
        )));
    }

    // A non-dividing headcount widens every table by one chair instead of
    // adding a partially-filled table
    let chairs = if total % group_size != 0 {
        group_size + 1
    } else {
        group_size
    };

    if pad_to_capacity {
        let extra = num_tables * chairs - total;
        headcounts.insert(EXTRA_CATEGORY.to_string(), extra as u32);
        order.push(EXTRA_CATEGORY.to_string());
        total += extra;
    }

    // Number the participants: concatenating each category's labels in order
    // gives every category one contiguous index range
    let mut categories: Vec<String> = Vec::with_capacity(total);
    let mut ranges: Vec<Range<usize>> = Vec::with_capacity(order.len());
    for label in &order {
        let count = headcounts[label] as usize;
        let start = categories.len();
        for _ in 0..count {
            categories.push(label.clone());
        }
        ranges.push(start..start + count);
    }

    // Table numbers 1..=num_tables tiled once per chair; indexing this with a
    // permuted participant index yields that participant's table
    let mut target_tables: Vec<u32> = Vec::with_capacity(num_tables * chairs);
    for _ in 0..chairs {
        target_tables.extend(1..=num_tables as u32);
    }

    let mut seats: Vec<Vec<Option<u32>>> = vec![vec![None; num_blocks]; total];
    let mut tables: Vec<TableRow> = Vec::with_capacity(num_tables * num_blocks);

    // Working permutation of participant indices; each category's range is
    // reshuffled in place every block
    let mut working: Vec<usize> = (0..total).collect();

    for block in 0..num_blocks {
        for range in &ranges {
            working[range.clone()].shuffle(rng);
        }

        for i in 0..total {
            seats[i][block] = Some(target_tables[working[i]]);
        }

        // Translate the block's column into per-table seat lists, chairs
        // filled in ascending participant order
        let block_label = (block + 1) as u32;
        for table in 1..=num_tables as u32 {
            let mut row = TableRow {
                block: block_label,
                table,
                seats: vec![None; chairs],
            };
            let mut chair = 0;
            for (i, participant_seats) in seats.iter().enumerate() {
                if participant_seats[block] == Some(table) {
                    row.seats[chair] = Some(i);
                    chair += 1;
                }
            }
            tables.push(row);
        }
    }

    Ok(Assignment {
        categories,
        order,
        headcounts,
        seats,
        tables,
        num_blocks,
        num_tables,
        chairs,
    })
}

/// Checks all preconditions before any block is computed, so a rejected call
/// has produced nothing
fn validate_inputs(
    headcounts: &HashMap<String, u32>,
    order: &[String],
    num_blocks: usize,
    group_size: usize,
    pad_to_capacity: bool,
) -> Result<(), MixerError> {
    if num_blocks == 0 {
        return Err(MixerError::InvalidInput(
            "at least one block is required".to_string(),
        ));
    }
    if group_size == 0 {
        return Err(MixerError::InvalidInput(
            "group size must be at least 1".to_string(),
        ));
    }
    if order.is_empty() {
        return Err(MixerError::InvalidInput(
            "category order must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for label in order {
        if !seen.insert(label) {
            return Err(MixerError::InvalidInput(format!(
                "duplicate category '{}' in order",
                label
            )));
        }
        if !headcounts.contains_key(label) {
            return Err(MixerError::MissingCategory(label.clone()));
        }
        if pad_to_capacity && label == EXTRA_CATEGORY {
            return Err(MixerError::InvalidInput(format!(
                "category label '{}' is reserved for padding",
                EXTRA_CATEGORY
            )));
        }
    }

    Ok(())
}

use std::path::Path;

use csv::WriterBuilder;

use crate::assign::{Assignment, EXTRA_CATEGORY};

/// Placeholder written for a vacant chair (or a padded "extra" participant)
pub const EMPTY_SEAT: &str = "empty";

/// Writes one row per participant: id, category, then the table number for
/// each block. Ids are 1-based.
pub fn write_people_csv(
    path: &Path,
    assignment: &Assignment,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Saving participant locations to {}", path.display());

    let mut wtr = WriterBuilder::new().from_path(path)?;

    let mut header = vec!["id".to_string(), "type".to_string()];
    header.extend((1..=assignment.num_blocks).map(|block| block.to_string()));
    wtr.write_record(&header)?;

    for (i, category) in assignment.categories.iter().enumerate() {
        let mut record = vec![(i + 1).to_string(), category.clone()];
        for block in 0..assignment.num_blocks {
            record.push(match assignment.seats[i][block] {
                Some(table) => table.to_string(),
                None => String::new(),
            });
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes one row per table per block: block, table, then one column per
/// chair with the seated participant (or the empty placeholder).
pub fn write_tables_csv(
    path: &Path,
    assignment: &Assignment,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Saving table info to {}", path.display());

    let mut wtr = WriterBuilder::new().from_path(path)?;

    let mut header = vec!["block".to_string(), "table".to_string()];
    header.extend((1..=assignment.chairs).map(|chair| format!("seat{}", chair)));
    wtr.write_record(&header)?;

    for row in &assignment.tables {
        let mut record = vec![row.block.to_string(), row.table.to_string()];
        for seat in &row.seats {
            record.push(seat_label(assignment, *seat));
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Renders one chair as "<category>-<id>" so tablemates are tellable apart.
/// Vacant chairs and padded "extra" participants both render as empty.
fn seat_label(assignment: &Assignment, seat: Option<usize>) -> String {
    match seat {
        Some(i) if assignment.categories[i] != EXTRA_CATEGORY => {
            format!("{}-{}", assignment.categories[i], i + 1)
        }
        _ => EMPTY_SEAT.to_string(),
    }
}

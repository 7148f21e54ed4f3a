mod assign;
mod error;
mod export;
mod roster;

use std::collections::HashMap;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use assign::assign_groups;
use export::{write_people_csv, write_tables_csv};
use roster::merge_categories;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Usage: networking-mixer [outname] [blocks] [groupsize] [--pad] [--seed N]
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut outname = "networking".to_string();
    let mut num_blocks = 4usize;
    let mut group_size = 4usize;
    let mut pad_to_capacity = false;
    let mut seed: Option<u64> = None;

    let mut positional = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--pad" => pad_to_capacity = true,
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                seed = Some(value.parse()?);
            }
            _ => positional.push(arg.clone()),
        }
    }
    if let Some(name) = positional.first() {
        outname = name.clone();
    }
    if let Some(blocks) = positional.get(1) {
        num_blocks = blocks.parse()?;
    }
    if let Some(size) = positional.get(2) {
        group_size = size.parse()?;
    }

    // Fine-grained RSVP tally from the signup sheet
    let rsvps: HashMap<String, u32> = [
        ("faculty", 2),
        ("staff", 6),
        ("postdoc", 7),
        ("grad2+", 2),
        ("grad12", 6),
        ("psi", 10),
    ]
    .into_iter()
    .map(|(label, count)| (label.to_string(), count))
    .collect();

    // Fold the fine labels into the seniority levels used for seating
    let groups: Vec<(String, Vec<String>)> = vec![
        (
            "senior".to_string(),
            vec!["faculty".to_string(), "staff".to_string()],
        ),
        ("postdoc".to_string(), vec!["postdoc".to_string()]),
        (
            "phd".to_string(),
            vec!["grad2+".to_string(), "grad12".to_string()],
        ),
        ("psi".to_string(), vec!["psi".to_string()]),
    ];
    let headcounts = merge_categories(&rsvps, &groups)?;
    let order: Vec<String> = groups.iter().map(|(label, _)| label.clone()).collect();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let assignment = assign_groups(
        &headcounts,
        &order,
        num_blocks,
        group_size,
        pad_to_capacity,
        &mut rng,
    )?;

    println!(
        "Assigned {} participants to {} tables of {} chairs across {} blocks",
        assignment.categories.len(),
        assignment.num_tables,
        assignment.chairs,
        assignment.num_blocks
    );

    let people_path = PathBuf::from(format!("{}_people.csv", outname));
    let tables_path = PathBuf::from(format!("{}_tables.csv", outname));
    write_people_csv(&people_path, &assignment)?;
    write_tables_csv(&tables_path, &assignment)?;

    Ok(())
}

use std::collections::HashMap;

use crate::error::MixerError;

/// Folds a fine-grained headcount map into coarser categories.
///
/// `groups` maps each coarse label to the fine labels it subsumes; the count
/// for a coarse category is the sum of its members' counts. Fine labels not
/// listed under any group are dropped from the result, so the caller is
/// responsible for covering everything that should be seated.
pub fn merge_categories(
    fine: &HashMap<String, u32>,
    groups: &[(String, Vec<String>)],
) -> Result<HashMap<String, u32>, MixerError> {
    let mut coarse = HashMap::new();

    for (label, members) in groups {
        let mut count = 0u32;
        for member in members {
            count += fine
                .get(member)
                .copied()
                .ok_or_else(|| MixerError::MissingCategory(member.clone()))?;
        }
        coarse.insert(label.clone(), count);
    }

    Ok(coarse)
}

use std::collections::HashMap;

use super::model::Table;

/// Number of listings carrying one brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandCount {
    pub brand: String,
    pub count: usize,
}

/// Count rows per brand over the whole table and keep the `top` largest groups.
///
/// Groups with equal counts stay in the order their brand first appears.
pub fn brand_counts(table: &Table, top: usize) -> Vec<BrandCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<BrandCount> = Vec::new();

    for row in table.rows() {
        match slots.get(row.brand.as_str()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                slots.insert(&row.brand, counts.len());
                counts.push(BrandCount {
                    brand: row.brand.clone(),
                    count: 1,
                });
            }
        }
    }

    // stable: ties keep first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top);
    counts
}

use rxguard_core::models::{Drug, Interaction};

/// Compute the known interactions among an ordered drug selection.
///
/// Enumerates every unordered pair exactly once (indices `i < j` over
/// the input sequence) and looks each pair up symmetrically in `table`.
/// Fewer than two drugs yields no pairs and therefore an empty result;
/// that is not an error, and neither is a pair with no table entry.
///
/// Output keeps pair-enumeration order, not severity order. A validated
/// catalog holds at most one record per pair; on an unvalidated slice
/// the first match wins.
pub fn derive_interactions(table: &[Interaction], selection: &[Drug]) -> Vec<Interaction> {
    let mut found = Vec::new();
    for i in 0..selection.len() {
        for j in (i + 1)..selection.len() {
            let (a, b) = (&selection[i], &selection[j]);
            if let Some(interaction) = table.iter().find(|record| record.matches_pair(a, b)) {
                found.push(interaction.clone());
            }
        }
    }
    found
}

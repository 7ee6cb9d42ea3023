// SPDX-License-Identifier: GPL-3.0

use crate::entities::PokemonSummary;

/// Keeps the Pokémon whose name contains the trimmed `query`, ignoring case.
/// Only the currently loaded page is searched.
pub fn filter(summaries: &[PokemonSummary], query: &str) -> Vec<PokemonSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return summaries.to_vec();
    }

    summaries
        .iter()
        .filter(|pokemon| pokemon.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

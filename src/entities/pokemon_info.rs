// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::PokemonDetails;

/// One `{name, url}` pair of the paginated PokéApi index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub url: String,
}

/// Simple owned data structure, for displaying the Pokémon in the list page (main page)
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    pub sprite_url: Option<String>,
    pub types: Vec<String>,
    /// Url of the index entry this summary was built from, used to open the details
    pub detail_url: String,
}

impl Debug for PokemonSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonSummary")
            .field("name", &self.name)
            .finish()
    }
}

impl PokemonSummary {
    /// Projects the full details into the card shown on the list page.
    /// `detail_url` is the url the index returned, not one derived from the details.
    pub fn from_details(details: &PokemonDetails, detail_url: impl Into<String>) -> Self {
        Self {
            name: details.name.clone(),
            sprite_url: details.sprites.first_available().map(String::from),
            types: details.types.clone(),
            detail_url: detail_url.into(),
        }
    }
}

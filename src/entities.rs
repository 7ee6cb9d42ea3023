// SPDX-License-Identifier: GPL-3.0-only

mod evolution;
mod pokemon_details;
mod pokemon_info;
mod pokemon_type;

pub use evolution::{EvolutionEntry, EvolutionNode, EvolutionStage};
pub use pokemon_details::{Ability, Generation, PokemonDetails, SpeciesInfo, SpriteSet, Stat};
pub use pokemon_info::{IndexEntry, PokemonSummary};
pub use pokemon_type::PokemonType;

// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Main Pokemon structure with all the info we want to display about it
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetails {
    pub id: i64,
    pub name: String,
    pub sprites: SpriteSet,
    pub types: Vec<String>,
    /// Hectograms, as PokéApi reports it
    pub weight: i64,
    /// Decimetres, as PokéApi reports it
    pub height: i64,
    pub abilities: Vec<Ability>,
    pub stats: Vec<Stat>,
    pub species_url: String,
}

impl Debug for PokemonDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonDetails")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl PokemonDetails {
    /// Returns the total value of all the stats of the Pokémon
    pub fn get_total_stats(&self) -> i64 {
        self.stats.iter().map(|stat| stat.base_value).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    pub front: Option<String>,
    pub front_shiny: Option<String>,
    pub back: Option<String>,
}

impl SpriteSet {
    /// The sprite used on list cards: front, then shiny, then back
    pub fn first_available(&self) -> Option<&str> {
        self.front
            .as_deref()
            .or(self.front_shiny.as_deref())
            .or(self.back.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

/// Pokémon base statistic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub base_value: i64,
}

/// The parts of a Pokémon specie the details view needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    pub evolution_chain_url: Option<String>,
    pub flavor_text: Option<String>,
    pub generation: Generation,
}

/// Pokémon generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generation {
    #[default]
    Unknown,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Generation::Unknown => write!(f, "Unknown"),
            Generation::One => write!(f, "Generation I"),
            Generation::Two => write!(f, "Generation II"),
            Generation::Three => write!(f, "Generation III"),
            Generation::Four => write!(f, "Generation IV"),
            Generation::Five => write!(f, "Generation V"),
            Generation::Six => write!(f, "Generation VI"),
            Generation::Seven => write!(f, "Generation VII"),
            Generation::Eight => write!(f, "Generation VIII"),
            Generation::Nine => write!(f, "Generation IX"),
        }
    }
}

impl Generation {
    /// Parses a generation name to the Generation enum
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "generation-i" => Generation::One,
            "generation-ii" => Generation::Two,
            "generation-iii" => Generation::Three,
            "generation-iv" => Generation::Four,
            "generation-v" => Generation::Five,
            "generation-vi" => Generation::Six,
            "generation-vii" => Generation::Seven,
            "generation-viii" => Generation::Eight,
            "generation-ix" => Generation::Nine,
            _ => Generation::Unknown,
        }
    }
}

// SPDX-License-Identifier: GPL-3.0-only

/// Possible Pokémon Types
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl std::fmt::Display for PokemonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl PokemonType {
    pub fn get_all() -> [PokemonType; 18] {
        [
            PokemonType::Normal,
            PokemonType::Fire,
            PokemonType::Water,
            PokemonType::Electric,
            PokemonType::Grass,
            PokemonType::Ice,
            PokemonType::Fighting,
            PokemonType::Poison,
            PokemonType::Ground,
            PokemonType::Flying,
            PokemonType::Psychic,
            PokemonType::Bug,
            PokemonType::Rock,
            PokemonType::Ghost,
            PokemonType::Dragon,
            PokemonType::Dark,
            PokemonType::Steel,
            PokemonType::Fairy,
        ]
    }

    /// PokéApi name of the type
    pub fn name(&self) -> &'static str {
        match self {
            PokemonType::Normal => "normal",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Electric => "electric",
            PokemonType::Grass => "grass",
            PokemonType::Ice => "ice",
            PokemonType::Fighting => "fighting",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Flying => "flying",
            PokemonType::Psychic => "psychic",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Fairy => "fairy",
        }
    }

    /// Unknown names (`stellar`, `shadow`...) have no badge color
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::get_all().into_iter().find(|t| t.name() == name)
    }

    /// Badge color as an RGB triple
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PokemonType::Normal => (0xA8, 0xA7, 0x7A),
            PokemonType::Fire => (0xEE, 0x81, 0x30),
            PokemonType::Water => (0x63, 0x90, 0xF0),
            PokemonType::Electric => (0xF7, 0xD0, 0x2C),
            PokemonType::Grass => (0x7A, 0xC7, 0x4C),
            PokemonType::Ice => (0x96, 0xD9, 0xD6),
            PokemonType::Fighting => (0xC2, 0x2E, 0x28),
            PokemonType::Poison => (0xA3, 0x3E, 0xA1),
            PokemonType::Ground => (0xE2, 0xBF, 0x65),
            PokemonType::Flying => (0xA9, 0x8F, 0xF3),
            PokemonType::Psychic => (0xF9, 0x55, 0x87),
            PokemonType::Bug => (0xA6, 0xB9, 0x1A),
            PokemonType::Rock => (0xB6, 0xA1, 0x36),
            PokemonType::Ghost => (0x73, 0x57, 0x97),
            PokemonType::Dragon => (0x6F, 0x35, 0xFC),
            PokemonType::Dark => (0x70, 0x57, 0x46),
            PokemonType::Steel => (0xB7, 0xB7, 0xCE),
            PokemonType::Fairy => (0xD6, 0x85, 0xAD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_the_catalogue() {
        for pokemon_type in PokemonType::get_all() {
            assert_eq!(PokemonType::from_name(pokemon_type.name()), Some(pokemon_type));
        }
        assert_eq!(PokemonType::from_name("Fire"), Some(PokemonType::Fire));
        assert_eq!(PokemonType::from_name("stellar"), None);
    }
}

// SPDX-License-Identifier: GPL-3.0-only

/// Transforms a kebab-case string into a space-separated string where each word starts with an uppercase letter.
pub fn capitalize_string(input: &str) -> String {
    let words: Vec<&str> = input.split('-').collect();

    let capitalized_words: Vec<String> = words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            if let Some(first_char) = chars.next() {
                first_char.to_uppercase().collect::<String>() + chars.as_str()
            } else {
                String::new()
            }
        })
        .collect();

    capitalized_words.join(" ")
}

/// Helper to scale some data from PokeApi such as weight...
/// scales a number down by dividing it by 10, converting it to a floating-point
pub fn scale_numbers(num: i64) -> f64 {
    (num as f64) / 10.0
}

/// Identifies a PokéApi resource by the last segment of its url
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKey {
    Id(i64),
    Name(String),
}

impl ResourceKey {
    /// Parses `https://pokeapi.co/api/v2/pokemon/1/` into `Id(1)` and
    /// `.../pokemon/bulbasaur` into `Name("bulbasaur")`.
    /// Returns `None` when the url has no usable last segment.
    pub fn from_url(url: &str) -> Option<Self> {
        let segment = url
            .split(['?', '#'])
            .next()?
            .trim_end_matches('/')
            .split('/')
            .next_back()?
            .trim();

        if segment.is_empty() || segment.contains(':') {
            return None;
        }

        match segment.parse::<i64>() {
            Ok(id) if id > 0 => Some(ResourceKey::Id(id)),
            Ok(_) => None,
            Err(_) => Some(ResourceKey::Name(segment.to_lowercase())),
        }
    }
}

/// Collapses control characters and repeated whitespace of flavor texts into single spaces
pub fn clean_flavor_text(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_kebab_case() {
        assert_eq!(capitalize_string("special-attack"), "Special Attack");
        assert_eq!(capitalize_string("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize_string(""), "");
    }

    #[test]
    fn scales_tenths() {
        assert_eq!(scale_numbers(69), 6.9);
        assert_eq!(scale_numbers(7), 0.7);
    }

    #[test]
    fn resource_keys_from_urls() {
        assert_eq!(
            ResourceKey::from_url("https://pokeapi.co/api/v2/pokemon/1/"),
            Some(ResourceKey::Id(1))
        );
        assert_eq!(
            ResourceKey::from_url("https://pokeapi.co/api/v2/evolution-chain/67"),
            Some(ResourceKey::Id(67))
        );
        assert_eq!(
            ResourceKey::from_url("https://pokeapi.co/api/v2/pokemon/Mr-Mime/"),
            Some(ResourceKey::Name("mr-mime".to_string()))
        );
        assert_eq!(ResourceKey::from_url("https://pokeapi.co/api/v2/pokemon/0/"), None);
        assert_eq!(ResourceKey::from_url("https://"), None);
        assert_eq!(ResourceKey::from_url(""), None);
    }

    #[test]
    fn flavor_text_is_flattened() {
        assert_eq!(
            clean_flavor_text("A strange seed was\nplanted on its\x0cback at birth."),
            "A strange seed was planted on its back at birth."
        );
    }
}

// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::{
    app::{ListStatus, Modal, ViewState},
    core::ResolvedDetail,
    entities::{Generation, PokemonType},
    utils::{capitalize_string, scale_numbers},
};

/// Highest base stat in the games, used to scale the stat bars
const MAX_BASE_STAT: i64 = 255;
const STAT_BAR_WIDTH: i64 = 30;

/// The list page, followed by the details view when it is open
pub fn render(state: &ViewState, colored: bool) -> String {
    let mut out = render_list(state, colored);
    if state.modal.is_open() {
        out.push('\n');
        out.push_str(&render_modal(&state.modal, colored));
    }
    out
}

pub fn render_list(state: &ViewState, colored: bool) -> String {
    let mut out = String::new();
    let title = format!("Pokédex - page {} of {}", state.page, state.total_pages);
    let _ = writeln!(out, "{}", paint_title(&title, colored));

    if !state.search.trim().is_empty() {
        let _ = writeln!(out, "Search: {}", state.search.trim());
    }

    match &state.list {
        ListStatus::Loading => {
            let _ = writeln!(out, "Loading...");
        }
        ListStatus::Loaded(_) => {
            let visible = state.visible();
            if visible.is_empty() {
                let _ = writeln!(out, "No Pokémon found on this page.");
            }
            for (index, pokemon) in visible.iter().enumerate() {
                let badges = pokemon
                    .types
                    .iter()
                    .map(|t| type_badge(t, colored))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = writeln!(
                    out,
                    "{:>3}. {:<14} {}",
                    index + 1,
                    capitalize_string(&pokemon.name),
                    badges
                );
            }
        }
    }

    out
}

pub fn render_modal(modal: &Modal, colored: bool) -> String {
    match modal {
        Modal::Closed => String::new(),
        Modal::Loading => "Loading...\n".to_string(),
        Modal::Loaded(resolved) => render_details(resolved, colored),
        Modal::Failed(reason) => {
            format!("Could not load the Pokémon information.\n  ({reason})\n")
        }
    }
}

pub fn render_details(resolved: &ResolvedDetail, colored: bool) -> String {
    let details = &resolved.details;
    let mut out = String::new();

    let heading = format!("{} #{}", capitalize_string(&details.name), details.id);
    let _ = writeln!(out, "{}", paint_title(&heading, colored));

    let badges = details
        .types
        .iter()
        .map(|t| type_badge(t, colored))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "{badges}");

    if resolved.species.generation != Generation::Unknown {
        let _ = writeln!(out, "{}", resolved.species.generation);
    }
    if let Some(flavor_text) = &resolved.species.flavor_text {
        let _ = writeln!(out, "{flavor_text}");
    }

    let sprites = [
        ("Normal", &details.sprites.front),
        ("Shiny", &details.sprites.front_shiny),
        ("Back", &details.sprites.back),
    ];
    for (label, sprite) in sprites {
        if let Some(url) = sprite {
            let _ = writeln!(out, "{label:<7} {url}");
        }
    }

    let _ = writeln!(out, "Weight: {} kg", scale_numbers(details.weight));
    let _ = writeln!(out, "Height: {} m", scale_numbers(details.height));

    let _ = writeln!(out, "Abilities:");
    for ability in &details.abilities {
        if ability.is_hidden {
            let _ = writeln!(out, "  - {} (hidden)", capitalize_string(&ability.name));
        } else {
            let _ = writeln!(out, "  - {}", capitalize_string(&ability.name));
        }
    }

    let _ = writeln!(out, "Base stats:");
    for stat in &details.stats {
        let _ = writeln!(
            out,
            "  {:<16}{:>4} {}",
            capitalize_string(&stat.name),
            stat.base_value,
            stat_bar(stat.base_value)
        );
    }
    let _ = writeln!(out, "  {:<16}{:>4}", "Total", details.get_total_stats());

    // a lone entry is the Pokémon itself
    if resolved.evolutions.len() > 1 {
        let _ = writeln!(out, "Evolutions:");
        for entry in &resolved.evolutions {
            let id = entry
                .id
                .map(|id| format!("#{id}"))
                .unwrap_or_else(|| "#?".to_string());
            let mut line = format!("  {id:>5} {}", capitalize_string(&entry.name));
            if let Some(requirement) = &entry.requirement {
                let _ = write!(line, " ({requirement})");
            }
            if let Some(sprite) = &entry.sprite_url {
                let _ = write!(line, "  {sprite}");
            }
            let _ = writeln!(out, "{line}");
        }
    }

    out
}

fn stat_bar(value: i64) -> String {
    let filled = (value.clamp(0, MAX_BASE_STAT) * STAT_BAR_WIDTH).div_euclid(MAX_BASE_STAT);
    "█".repeat(filled.max(if value > 0 { 1 } else { 0 }) as usize)
}

fn type_badge(name: &str, colored: bool) -> String {
    match PokemonType::from_name(name) {
        Some(pokemon_type) if colored => {
            let (r, g, b) = pokemon_type.color();
            format!(" {name} ")
                .white()
                .bold()
                .on_truecolor(r, g, b)
                .to_string()
        }
        _ => format!("[{name}]"),
    }
}

fn paint_title(title: &str, colored: bool) -> String {
    if colored {
        title.bold().red().to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        entities::{Ability, EvolutionEntry, PokemonDetails, SpeciesInfo, SpriteSet, Stat},
    };

    fn bulbasaur() -> ResolvedDetail {
        ResolvedDetail {
            details: PokemonDetails {
                id: 1,
                name: "bulbasaur".into(),
                sprites: SpriteSet {
                    front: Some("bulbasaur.png".into()),
                    front_shiny: Some("bulbasaur_shiny.png".into()),
                    back: None,
                },
                types: vec!["grass".into(), "poison".into()],
                weight: 69,
                height: 7,
                abilities: vec![
                    Ability {
                        name: "overgrow".into(),
                        is_hidden: false,
                    },
                    Ability {
                        name: "chlorophyll".into(),
                        is_hidden: true,
                    },
                ],
                stats: vec![Stat {
                    name: "hp".into(),
                    base_value: 45,
                }],
                species_url: "https://pokeapi.co/api/v2/pokemon-species/1/".into(),
            },
            species: SpeciesInfo {
                evolution_chain_url: None,
                flavor_text: Some("A strange seed was planted on its back at birth.".into()),
                generation: Generation::One,
            },
            evolutions: vec![
                EvolutionEntry {
                    name: "bulbasaur".into(),
                    sprite_url: Some("bulbasaur.png".into()),
                    id: Some(1),
                    requirement: None,
                },
                EvolutionEntry {
                    name: "ivysaur".into(),
                    sprite_url: None,
                    id: None,
                    requirement: Some("Level 16".into()),
                },
            ],
        }
    }

    #[test]
    fn details_show_metric_units_and_id() {
        let text = render_details(&bulbasaur(), false);
        assert!(text.contains("Bulbasaur #1"));
        assert!(text.contains("Weight: 6.9 kg"));
        assert!(text.contains("Height: 0.7 m"));
        assert!(text.contains("[grass] [poison]"));
        assert!(text.contains("Chlorophyll (hidden)"));
        assert!(text.contains("Generation I"));
        assert!(text.contains("Shiny   bulbasaur_shiny.png"));
        assert!(!text.contains("Back "));
    }

    #[test]
    fn evolutions_are_listed_with_unresolved_entries() {
        let text = render_details(&bulbasaur(), false);
        assert!(text.contains("Evolutions:"));
        assert!(text.contains("#1 Bulbasaur"));
        assert!(text.contains("#? Ivysaur (Level 16)\n"));
        assert!(text.contains("   #1 Bulbasaur  bulbasaur.png\n"));

        let mut lone = bulbasaur();
        lone.evolutions.truncate(1);
        assert!(!render_details(&lone, false).contains("Evolutions:"));
    }

    #[test]
    fn list_states() {
        let (state, _) = ViewState::new(&Config::default(), 1);
        let text = render_list(&state, false);
        assert!(text.contains("page 1 of 8"));
        assert!(text.contains("Loading..."));

        let empty = ViewState {
            list: ListStatus::Loaded(Vec::new()),
            ..state
        };
        assert!(render_list(&empty, false).contains("No Pokémon found on this page."));
    }

    #[test]
    fn failed_details_explain_why() {
        let text = render_modal(&Modal::Failed("timed out".into()), false);
        assert!(text.contains("Could not load the Pokémon information."));
        assert!(text.contains("timed out"));
    }

    #[test]
    fn stat_bars_scale_to_the_maximum() {
        assert_eq!(stat_bar(255).chars().count(), 30);
        assert_eq!(stat_bar(1).chars().count(), 1);
        assert_eq!(stat_bar(0), "");
    }
}

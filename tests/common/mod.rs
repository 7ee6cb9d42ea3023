// SPDX-License-Identifier: GPL-3.0-only

//! In-memory data source with failure injection, per-resource delays and a request log.

#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
    time::Duration,
};

use dexview::{
    core::{DataSource, FetchError},
    entities::{
        Ability, EvolutionNode, Generation, IndexEntry, PokemonDetails, SpeciesInfo, SpriteSet,
        Stat,
    },
};

pub fn pokemon_url(id: i64) -> String {
    format!("https://pokeapi.co/api/v2/pokemon/{id}/")
}

pub fn species_url(id: i64) -> String {
    format!("https://pokeapi.co/api/v2/pokemon-species/{id}/")
}

pub fn chain_url(id: i64) -> String {
    format!("https://pokeapi.co/api/v2/evolution-chain/{id}/")
}

pub fn details(id: i64, name: &str, types: &[&str]) -> PokemonDetails {
    PokemonDetails {
        id,
        name: name.to_string(),
        sprites: SpriteSet {
            front: Some(format!("{name}.png")),
            front_shiny: Some(format!("{name}_shiny.png")),
            back: Some(format!("{name}_back.png")),
        },
        types: types.iter().map(|t| t.to_string()).collect(),
        weight: 69,
        height: 7,
        abilities: vec![Ability {
            name: "overgrow".to_string(),
            is_hidden: false,
        }],
        stats: vec![Stat {
            name: "hp".to_string(),
            base_value: 45,
        }],
        species_url: species_url(id),
    }
}

#[derive(Default)]
pub struct FakeDex {
    index: Vec<IndexEntry>,
    by_url: HashMap<String, PokemonDetails>,
    by_name: HashMap<String, PokemonDetails>,
    species: HashMap<String, SpeciesInfo>,
    chains: HashMap<String, EvolutionNode>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<String>>,
}

impl FakeDex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a Pokémon in the index, reachable by url and by name
    pub fn with_pokemon(mut self, id: i64, name: &str, types: &[&str]) -> Self {
        let details = details(id, name, types);
        self.index.push(IndexEntry {
            name: name.to_string(),
            url: pokemon_url(id),
        });
        self.by_url.insert(pokemon_url(id), details.clone());
        self.by_name.insert(name.to_string(), details);
        self
    }

    /// Registers `count` filler Pokémon named `mon-<id>`
    pub fn with_numbered(mut self, count: i64) -> Self {
        for id in 1..=count {
            self = self.with_pokemon(id, &format!("mon-{id}"), &["normal"]);
        }
        self
    }

    /// Reachable by name only, like evolution lookups
    pub fn register_by_name(mut self, id: i64, name: &str, types: &[&str]) -> Self {
        self.by_name.insert(name.to_string(), details(id, name, types));
        self
    }

    pub fn with_species(mut self, id: i64, chain: Option<String>) -> Self {
        self.species.insert(
            species_url(id),
            SpeciesInfo {
                evolution_chain_url: chain,
                flavor_text: None,
                generation: Generation::One,
            },
        );
        self
    }

    pub fn with_chain(mut self, id: i64, chain: EvolutionNode) -> Self {
        self.chains.insert(chain_url(id), chain);
        self
    }

    /// Every request for `key` (a url, a name or `list`) fails
    pub fn failing(mut self, key: impl Into<String>) -> Self {
        self.failing.insert(key.into());
        self
    }

    /// Every request for `key` waits `delay` before answering
    pub fn delayed(mut self, key: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(key.into(), delay);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    async fn serve<T: Clone>(
        &self,
        key: &str,
        logged: String,
        table: &HashMap<String, T>,
    ) -> Result<T, FetchError> {
        self.requests.lock().unwrap().push(logged);

        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(key) {
            return Err(FetchError::Unavailable(format!("{key}: network error")));
        }

        table
            .get(key)
            .cloned()
            .ok_or_else(|| FetchError::Unavailable(format!("{key}: not found")))
    }
}

impl DataSource for FakeDex {
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<IndexEntry>, FetchError> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("list offset={offset} limit={limit}"));

        if let Some(delay) = self.delays.get("list") {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains("list") {
            return Err(FetchError::Unavailable("list: network error".to_string()));
        }

        Ok(self.index.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn detail(&self, url: &str) -> Result<PokemonDetails, FetchError> {
        self.serve(url, url.to_string(), &self.by_url).await
    }

    async fn detail_by_name(&self, name: &str) -> Result<PokemonDetails, FetchError> {
        self.serve(name, format!("name:{name}"), &self.by_name)
            .await
    }

    async fn species(&self, url: &str) -> Result<SpeciesInfo, FetchError> {
        self.serve(url, url.to_string(), &self.species).await
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionNode, FetchError> {
        self.serve(url, url.to_string(), &self.chains).await
    }
}

/// bulbasaur -> ivysaur -> venusaur
pub fn bulbasaur_line() -> EvolutionNode {
    EvolutionNode::with_children(
        "bulbasaur",
        vec![
            EvolutionNode::with_children("ivysaur", vec![
                EvolutionNode::leaf("venusaur").with_requirement("Level 32"),
            ])
            .with_requirement("Level 16"),
        ],
    )
}

/// The first two index entries plus the bulbasaur line
pub fn kanto_starters() -> FakeDex {
    FakeDex::new()
        .with_pokemon(1, "bulbasaur", &["grass", "poison"])
        .with_pokemon(4, "charmander", &["fire"])
        .with_species(1, Some(chain_url(1)))
        .with_chain(1, bulbasaur_line())
        .register_by_name(2, "ivysaur", &["grass", "poison"])
        .register_by_name(3, "venusaur", &["grass", "poison"])
}

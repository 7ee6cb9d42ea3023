// SPDX-License-Identifier: GPL-3.0-only

use std::{future::Future, sync::Arc, time::Duration};

use rustemon::{
    client::{CacheMode, CacheOptions, MokaManager, RustemonClient, RustemonClientBuilder},
    model::{
        evolution::{ChainLink, EvolutionDetail},
        pokemon::{Pokemon, PokemonAbility, PokemonSpecies},
    },
};

use crate::{
    config::Config,
    core::error::FetchError,
    entities::{
        Ability, EvolutionNode, Generation, IndexEntry, PokemonDetails, SpeciesInfo, SpriteSet,
        Stat,
    },
    utils::{ResourceKey, capitalize_string, clean_flavor_text},
};

pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Url of a Pokémon resource, the way PokéApi links them
pub fn pokemon_url(name_or_id: &str) -> String {
    format!(
        "{POKEAPI_BASE_URL}/pokemon/{}/",
        name_or_id.trim().to_lowercase()
    )
}

/// Read-only source of Pokémon data.
///
/// Every operation is an idempotent read; implementations decide how a url
/// maps onto their storage.
pub trait DataSource: Send + Sync {
    /// The `limit` index entries starting at `offset`
    fn list(
        &self,
        offset: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<IndexEntry>, FetchError>> + Send;

    fn detail(&self, url: &str)
    -> impl Future<Output = Result<PokemonDetails, FetchError>> + Send;

    fn detail_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<PokemonDetails, FetchError>> + Send;

    fn species(&self, url: &str) -> impl Future<Output = Result<SpeciesInfo, FetchError>> + Send;

    fn evolution_chain(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<EvolutionNode, FetchError>> + Send;
}

/// [`DataSource`] backed by PokéApi through rustemon
#[derive(Debug, Clone)]
pub struct PokeApi {
    client: Arc<RustemonClient>,
    timeout: Duration,
}

impl PokeApi {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = RustemonClientBuilder::default()
            .with_manager(MokaManager::default())
            .with_mode(CacheMode::Default)
            .with_options(CacheOptions {
                shared: true,
                cache_heuristic: 0.1,
                immutable_min_time_to_live: Duration::from_secs(config.cache_ttl_secs),
                ignore_cargo_cult: true,
            })
            .try_build()
            .map_err(|e| FetchError::Client(format!("{e:?}")))?;

        Ok(Self {
            client: Arc::new(client),
            timeout: config.request_timeout(),
        })
    }

    /// Runs a rustemon request under the configured timeout
    async fn request<T>(
        &self,
        request: impl Future<Output = Result<T, rustemon::error::Error>>,
    ) -> Result<T, FetchError> {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result.map_err(FetchError::from),
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        }
    }

    async fn pokemon(&self, key: ResourceKey) -> Result<Pokemon, FetchError> {
        log::trace!("GET pokemon {key:?}");
        match key {
            ResourceKey::Id(id) => {
                self.request(rustemon::pokemon::pokemon::get_by_id(id, &self.client))
                    .await
            }
            ResourceKey::Name(name) => {
                self.request(rustemon::pokemon::pokemon::get_by_name(&name, &self.client))
                    .await
            }
        }
    }
}

impl DataSource for PokeApi {
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<IndexEntry>, FetchError> {
        log::debug!("GET pokemon?limit={limit}&offset={offset}");
        let page = self
            .request(rustemon::pokemon::pokemon::get_page_with_param(
                i64::try_from(offset).unwrap_or(i64::MAX),
                i64::try_from(limit).unwrap_or(i64::MAX),
                &self.client,
            ))
            .await?;

        Ok(page
            .results
            .into_iter()
            .map(|entry| IndexEntry {
                name: entry.name,
                url: entry.url,
            })
            .collect())
    }

    async fn detail(&self, url: &str) -> Result<PokemonDetails, FetchError> {
        let key = ResourceKey::from_url(url).ok_or_else(|| FetchError::InvalidUrl(url.into()))?;
        self.pokemon(key).await.map(parse_pokemon)
    }

    async fn detail_by_name(&self, name: &str) -> Result<PokemonDetails, FetchError> {
        self.pokemon(ResourceKey::Name(name.to_lowercase()))
            .await
            .map(parse_pokemon)
    }

    async fn species(&self, url: &str) -> Result<SpeciesInfo, FetchError> {
        log::trace!("GET {url}");
        let species = match ResourceKey::from_url(url) {
            Some(ResourceKey::Id(id)) => {
                self.request(rustemon::pokemon::pokemon_species::get_by_id(
                    id,
                    &self.client,
                ))
                .await?
            }
            Some(ResourceKey::Name(name)) => {
                self.request(rustemon::pokemon::pokemon_species::get_by_name(
                    &name,
                    &self.client,
                ))
                .await?
            }
            None => return Err(FetchError::InvalidUrl(url.into())),
        };

        Ok(parse_species(species))
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionNode, FetchError> {
        log::trace!("GET {url}");
        // evolution chains are only addressable by id
        let Some(ResourceKey::Id(id)) = ResourceKey::from_url(url) else {
            return Err(FetchError::InvalidUrl(url.into()));
        };

        let chain = self
            .request(rustemon::evolution::evolution_chain::get_by_id(
                id,
                &self.client,
            ))
            .await?;

        Ok(parse_chain_link(&chain.chain, None))
    }
}

/// Parses the rustemon Pokémon to our own data structure
fn parse_pokemon(pokemon: Pokemon) -> PokemonDetails {
    PokemonDetails {
        id: pokemon.id,
        name: pokemon.name,
        sprites: SpriteSet {
            front: pokemon.sprites.front_default,
            front_shiny: pokemon.sprites.front_shiny,
            back: pokemon.sprites.back_default,
        },
        types: pokemon
            .types
            .iter()
            .map(|types| types.type_.name.to_string())
            .collect(),
        weight: pokemon.weight,
        height: pokemon.height,
        abilities: parse_abilities(&pokemon.abilities),
        stats: pokemon
            .stats
            .iter()
            .map(|stat| Stat {
                name: stat.stat.name.clone(),
                base_value: stat.base_stat,
            })
            .collect(),
        species_url: pokemon.species.url,
    }
}

fn parse_abilities(abilities: &[PokemonAbility]) -> Vec<Ability> {
    abilities
        .iter()
        // PokéApi leaves removed ability slots null
        .filter_map(|a| {
            a.ability.as_ref().map(|ability| Ability {
                name: ability.name.clone(),
                is_hidden: a.is_hidden,
            })
        })
        .collect()
}

/// Parses the rustemon specie, keeping the english flavor text
fn parse_species(species: PokemonSpecies) -> SpeciesInfo {
    SpeciesInfo {
        evolution_chain_url: species.evolution_chain.as_ref().map(|x| x.url.clone()),
        flavor_text: species
            .flavor_text_entries
            .iter()
            .find(|x| x.language.name == "en")
            .map(|x| clean_flavor_text(&x.flavor_text)),
        generation: Generation::from_name(&species.generation.name),
    }
}

/// Converts a rustemon ChainLink into our evolution tree
fn parse_chain_link(chain_link: &ChainLink, requirement: Option<String>) -> EvolutionNode {
    EvolutionNode {
        species_name: chain_link.species.name.clone(),
        requirement,
        children: chain_link
            .evolves_to
            .iter()
            .map(|evolution| {
                parse_chain_link(
                    evolution,
                    extract_evolution_requirement(&evolution.evolution_details),
                )
            })
            .collect(),
    }
}

/// Human readable condition of the first evolution detail.
/// Level wins over item, then held item, happiness, time of day, location,
/// known move and relative physical stats.
fn extract_evolution_requirement(evolution_details: &[EvolutionDetail]) -> Option<String> {
    fn named(prefix: &str, name: &str) -> String {
        format!("{prefix}{}", capitalize_string(name))
    }

    let detail = evolution_details.first()?;

    detail
        .min_level
        .map(|level| format!("Level {level}"))
        .or_else(|| detail.item.as_ref().map(|item| named("", &item.name)))
        .or_else(|| {
            detail
                .held_item
                .as_ref()
                .map(|item| named("Holding ", &item.name))
        })
        .or_else(|| detail.min_happiness.map(|happiness| format!("Happiness {happiness}")))
        .or_else(|| {
            (!detail.time_of_day.is_empty()).then(|| named("During ", &detail.time_of_day))
        })
        .or_else(|| {
            detail
                .location
                .as_ref()
                .map(|location| named("At ", &location.name))
        })
        .or_else(|| {
            detail
                .known_move
                .as_ref()
                .map(|known_move| named("Knowing ", &known_move.name))
        })
        .or_else(|| {
            let comparison = match detail.relative_physical_stats? {
                1 => "Attack > Defense",
                -1 => "Defense > Attack",
                0 => "Attack = Defense",
                _ => return None,
            };
            Some(comparison.to_string())
        })
}

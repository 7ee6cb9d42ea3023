// SPDX-License-Identifier: GPL-3.0-only

use futures::StreamExt;

use crate::{
    core::{
        api::DataSource,
        error::{DexError, FetchError, FetchStep},
        evolution,
    },
    entities::{EvolutionEntry, EvolutionStage, PokemonDetails, SpeciesInfo},
};

/// Everything the details view shows about one Pokémon
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDetail {
    pub details: PokemonDetails,
    pub species: SpeciesInfo,
    pub evolutions: Vec<EvolutionEntry>,
}

/// Resolves the details of the Pokémon at `detail_url` together with its evolution line.
///
/// Details, species and evolution chain are fetched one after the other and any
/// failure among them aborts the resolution. The evolution entries are then
/// looked up concurrently, a failed lookup only leaves its entry without sprite and id.
pub async fn resolve_detail<S>(
    source: &S,
    detail_url: &str,
    max_concurrent: usize,
) -> Result<ResolvedDetail, DexError>
where
    S: DataSource + ?Sized,
{
    let details = source
        .detail(detail_url)
        .await
        .map_err(|e| DexError::index(FetchStep::Detail, e))?;

    let species = source
        .species(&details.species_url)
        .await
        .map_err(|e| DexError::index(FetchStep::Species, e))?;

    let chain_url = species.evolution_chain_url.as_deref().ok_or_else(|| {
        DexError::index(FetchStep::Species, FetchError::MissingField("evolution_chain"))
    })?;

    let chain = source
        .evolution_chain(chain_url)
        .await
        .map_err(|e| DexError::index(FetchStep::EvolutionChain, e))?;

    let evolutions = lookup_evolutions(source, evolution::stages(&chain), max_concurrent).await;

    Ok(ResolvedDetail {
        details,
        species,
        evolutions,
    })
}

/// Looks up sprite and id of every stage, keeping the chain order
pub async fn lookup_evolutions<S>(
    source: &S,
    stages: Vec<EvolutionStage>,
    max_concurrent: usize,
) -> Vec<EvolutionEntry>
where
    S: DataSource + ?Sized,
{
    futures::stream::iter(stages)
        .map(|stage| async move {
            match source.detail_by_name(&stage.name).await {
                Ok(details) => EvolutionEntry {
                    name: details.name,
                    sprite_url: details.sprites.front,
                    id: Some(details.id),
                    requirement: stage.requirement,
                },
                Err(e) => {
                    log::debug!("{}", DexError::lookup(stage.name.as_str(), e));
                    EvolutionEntry::unresolved(stage)
                }
            }
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await
}

// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use thiserror::Error;

/// Failure of a single read against the data source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("PokéApi error: {0}")]
    Api(#[from] rustemon::error::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid resource url: {0}")]
    InvalidUrl(String),

    #[error("response is missing `{0}`")]
    MissingField(&'static str),

    #[error("resource unavailable: {0}")]
    Unavailable(String),

    #[error("could not build the PokéApi client: {0}")]
    Client(String),
}

/// The sequential step of a load that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStep {
    List,
    Detail,
    Species,
    EvolutionChain,
}

impl std::fmt::Display for FetchStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchStep::List => write!(f, "page index"),
            FetchStep::Detail => write!(f, "Pokémon details"),
            FetchStep::Species => write!(f, "species"),
            FetchStep::EvolutionChain => write!(f, "evolution chain"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DexError {
    /// A required step failed, the whole operation is aborted
    #[error("failed to fetch the {step}: {source}")]
    IndexFetch {
        step: FetchStep,
        #[source]
        source: FetchError,
    },

    /// A best-effort lookup failed, callers degrade the affected record
    #[error("lookup for `{name}` failed: {source}")]
    Lookup {
        name: String,
        #[source]
        source: FetchError,
    },
}

impl DexError {
    pub fn index(step: FetchStep, source: FetchError) -> Self {
        DexError::IndexFetch { step, source }
    }

    pub fn lookup(name: impl Into<String>, source: FetchError) -> Self {
        DexError::Lookup {
            name: name.into(),
            source,
        }
    }

    /// The failed step of an aborted operation
    pub fn step(&self) -> Option<FetchStep> {
        match self {
            DexError::IndexFetch { step, .. } => Some(*step),
            DexError::Lookup { .. } => None,
        }
    }
}

// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// One link of an evolution chain tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species_name: String,
    /// What it takes to evolve into this species, `None` for the base form
    pub requirement: Option<String>,
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn leaf(species_name: impl Into<String>) -> Self {
        Self {
            species_name: species_name.into(),
            requirement: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(species_name: impl Into<String>, children: Vec<EvolutionNode>) -> Self {
        Self {
            species_name: species_name.into(),
            requirement: None,
            children,
        }
    }

    pub fn with_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirement = Some(requirement.into());
        self
    }

    /// Number of nodes in the tree rooted at `self`
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(EvolutionNode::node_count)
            .sum::<usize>()
    }
}

/// A flattened member of the chain, before its details are looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStage {
    pub name: String,
    pub requirement: Option<String>,
}

/// Pokémon evolution data, `id` and `sprite_url` are `None` when its lookup failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionEntry {
    pub name: String,
    pub sprite_url: Option<String>,
    pub id: Option<i64>,
    pub requirement: Option<String>,
}

impl EvolutionEntry {
    pub fn unresolved(stage: EvolutionStage) -> Self {
        Self {
            name: stage.name,
            sprite_url: None,
            id: None,
            requirement: stage.requirement,
        }
    }
}

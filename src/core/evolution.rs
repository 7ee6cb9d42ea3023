// SPDX-License-Identifier: GPL-3.0-only

use crate::entities::{EvolutionNode, EvolutionStage};

/// Flattens an evolution chain into species names, pre-order:
/// the base species first, then every branch fully before its next sibling.
pub fn flatten(node: &EvolutionNode) -> Vec<String> {
    stages(node).into_iter().map(|stage| stage.name).collect()
}

/// Same traversal as [`flatten`], keeping the evolution requirement of every stage
pub fn stages(node: &EvolutionNode) -> Vec<EvolutionStage> {
    let mut result = Vec::with_capacity(node.node_count());
    push_stages(node, &mut result);
    result
}

fn push_stages(node: &EvolutionNode, result: &mut Vec<EvolutionStage>) {
    result.push(EvolutionStage {
        name: node.species_name.clone(),
        requirement: node.requirement.clone(),
    });

    for child in &node.children {
        push_stages(child, result);
    }
}

//! Conversion graph projection: colour spaces as nodes, transforms as
//! directed source→target edges.

use crate::catalog::{Catalog, CatalogEntry};
use crate::ctl::CtlTransform;
use crate::id::TransformType;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Directed colour-space conversion graph derived from a catalog.
///
/// Each node carries the type of the first transform that touched it, in
/// catalog order. Duplicate edges collapse; a transform whose source and
/// target coincide contributes a degenerate self-edge, not filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionGraph {
    pub nodes: BTreeMap<String, TransformType>,
    pub edges: BTreeSet<(String, String)>,
}

impl ConversionGraph {
    /// Fold every record of the catalog into the projection. Pairs
    /// contribute both halves; records without both endpoints contribute
    /// nothing.
    pub fn project(catalog: &Catalog) -> Self {
        let mut graph = Self::default();

        for classifiers in catalog.values() {
            for entries in classifiers.values() {
                for entry in entries.values() {
                    match entry {
                        CatalogEntry::Single(transform) => graph.add(transform),
                        CatalogEntry::Pair(pair) => {
                            graph.add(&pair.forward);
                            graph.add(&pair.inverse);
                        }
                    }
                }
            }
        }

        graph
    }

    fn add(&mut self, transform: &CtlTransform) {
        let Some(id) = &transform.id else { return };
        let (Some(source), Some(target)) = (&id.source, &id.target) else {
            return;
        };

        self.nodes.entry(source.clone()).or_insert(id.ty);
        self.nodes.entry(target.clone()).or_insert(id.ty);
        self.edges.insert((source.clone(), target.clone()));
    }

    /// Serializable node/edge listing handed to external renderers.
    pub fn to_data(&self) -> GraphData {
        GraphData {
            nodes: self
                .nodes
                .iter()
                .map(|(name, ty)| GraphNode {
                    name: name.clone(),
                    ty: *ty,
                })
                .collect(),
            edges: self.edges.iter().cloned().collect(),
        }
    }
}

/// JSON shape: `{"nodes": [{"name", "type"}...], "edges": [[src, dst]...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TransformType,
}

//! Read-only reconstruction of the location forest.
//!
//! Rows are flat; parent/child structure is rebuilt on every read as an
//! id-keyed arena where each node lists its children by id. Nothing here
//! is cached or written back.

use crate::{ExecutionContext, Result as HierarchyResult, UnitInputValidator};

use dms_core::{StorageLocation, UnitType};
use dms_db::StorageLocationRepository;

use std::collections::HashMap;

use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub location: StorageLocation,
    /// Ordered by unit name, then id
    pub children: Vec<i64>,
}

impl TreeNode {
    pub fn id(&self) -> i64 {
        self.location.id
    }
}

/// One step of a root-to-node path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub id: i64,
    pub unit_name: String,
}

/// Owned, nested rendering of a subtree for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestedNode {
    pub id: i64,
    pub unit_name: String,
    pub unit_type: UnitType,
    pub full_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_capacity: Option<i64>,
    pub children: Vec<NestedNode>,
}

/// Forest of one department partition.
///
/// Only nodes reachable from a root are kept. A row whose parent is not
/// in the fetched set (or that sits on a parent cycle) is left out.
#[derive(Debug, Clone, Default)]
pub struct LocationForest {
    nodes: HashMap<i64, TreeNode>,
    roots: Vec<i64>,
    // Root-first ids of every kept node, itself included
    ancestry: HashMap<i64, Vec<i64>>,
}

impl LocationForest {
    pub fn assemble(mut rows: Vec<StorageLocation>) -> Self {
        rows.sort_by(|a, b| a.unit_name.cmp(&b.unit_name).then(a.id.cmp(&b.id)));

        let links: Vec<(i64, Option<i64>)> = rows.iter().map(|r| (r.id, r.parent_id)).collect();

        let mut nodes: HashMap<i64, TreeNode> = rows
            .into_iter()
            .map(|location| {
                (
                    location.id,
                    TreeNode {
                        location,
                        children: Vec::new(),
                    },
                )
            })
            .collect();

        let mut roots = Vec::new();
        for (id, parent_id) in links {
            match parent_id {
                None => roots.push(id),
                Some(parent_id) if parent_id != id => {
                    if let Some(parent) = nodes.get_mut(&parent_id) {
                        parent.children.push(id);
                    }
                }
                Some(_) => {}
            }
        }

        // Walk down from the roots; whatever is not reached is dropped.
        let mut ancestry: HashMap<i64, Vec<i64>> = HashMap::with_capacity(nodes.len());
        let mut pending: Vec<i64> = roots.clone();
        for root in &roots {
            ancestry.insert(*root, vec![*root]);
        }

        while let Some(id) = pending.pop() {
            let Some(node) = nodes.get(&id) else {
                continue;
            };
            let Some(path) = ancestry.get(&id).cloned() else {
                continue;
            };

            for child in &node.children {
                if ancestry.contains_key(child) {
                    continue;
                }
                let mut child_path = path.clone();
                child_path.push(*child);
                ancestry.insert(*child, child_path);
                pending.push(*child);
            }
        }

        nodes.retain(|id, _| ancestry.contains_key(id));

        Self {
            nodes,
            roots,
            ancestry,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root_ids(&self) -> &[i64] {
        &self.roots
    }

    pub fn roots(&self) -> impl Iterator<Item = &TreeNode> {
        self.roots.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn node(&self, id: i64) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn children_of(&self, id: i64) -> impl Iterator<Item = &TreeNode> {
        self.nodes
            .get(&id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.nodes.get(child))
    }

    /// Root-to-node chain, the node itself last. Empty for unknown ids.
    pub fn breadcrumbs(&self, id: i64) -> Vec<Breadcrumb> {
        self.ancestry
            .get(&id)
            .map(|path| {
                path.iter()
                    .filter_map(|step| self.nodes.get(step))
                    .map(|node| Breadcrumb {
                        id: node.id(),
                        unit_name: node.location.unit_name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Pre-order traversal with depth (roots are depth 0).
    pub fn walk_depth_first(&self) -> Vec<(usize, &TreeNode)> {
        let mut visited = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, i64)> = self.roots.iter().rev().map(|id| (0, *id)).collect();

        while let Some((depth, id)) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            visited.push((depth, node));
            stack.extend(node.children.iter().rev().map(|child| (depth + 1, *child)));
        }

        visited
    }

    pub fn to_nested(&self) -> Vec<NestedNode> {
        self.roots().map(|root| self.nest(root)).collect()
    }

    fn nest(&self, node: &TreeNode) -> NestedNode {
        let location = &node.location;
        NestedNode {
            id: location.id,
            unit_name: location.unit_name.clone(),
            unit_type: location.unit_type,
            full_path: location.full_path.clone(),
            folder_capacity: location
                .unit_type
                .is_folder()
                .then_some(location.folder_capacity),
            children: self
                .children_of(location.id)
                .map(|child| self.nest(child))
                .collect(),
        }
    }
}

pub struct TreeAssembler;

impl TreeAssembler {
    /// Forest of the main department (`sub_department_id = None`) or of
    /// exactly one sub-department. The two are never merged.
    pub async fn build_tree(
        ctx: &ExecutionContext,
        department_id: i64,
        sub_department_id: Option<i64>,
    ) -> HierarchyResult<LocationForest> {
        let department_id = UnitInputValidator::validate_id(department_id, "department_id")?;
        let sub_department_id =
            UnitInputValidator::validate_optional_id(sub_department_id, "sub_department_id")?;

        let rows = StorageLocationRepository::find_by_department(
            &ctx.pool,
            department_id,
            sub_department_id,
        )
        .await?;
        let fetched = rows.len();

        let forest = LocationForest::assemble(rows);

        if forest.len() < fetched {
            debug!(
                "{} {} location(s) of department {} are not reachable from a root",
                ctx.log_prefix(),
                fetched - forest.len(),
                department_id
            );
        }

        Ok(forest)
    }
}

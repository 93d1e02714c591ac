//! Cycle and double-linkage detection over the linkage graph.
//!
//! Depth-first traversal from every root of the relation. A node
//! re-entered while still on the current path closes a cycle; a node
//! re-entered after it finished means the same template is reachable
//! from the root through two distinct paths (a double linkage). Nodes
//! that no root reaches at all can only sit on a cycle with no entry
//! point, which the final count comparison catches.

use std::collections::{HashMap, HashSet};

use crate::error::CoreError;
use crate::linkage::graph::LinkageGraph;
use crate::types::DbId;

/// Message for any cycle, rooted or not.
const CIRCULAR_LINKAGE: &str = "Circular template linkage is not allowed.";

/// Message for a template reachable twice from the same root.
const DOUBLE_LINKAGE: &str =
    "Template cannot be linked to another template more than once even through other templates.";

/// Traversal state of a node within one root's walk. Absence from the
/// path map means the node has not been entered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    OnPath,
    Done,
}

/// Walk the whole relation and fail on the first cycle or double linkage.
///
/// All traversal state is owned by this call; nothing is retained between
/// validation passes. The path map resets per root, while the visited set
/// is shared across roots so the final rootless-cycle count holds.
pub fn check_circular_and_double_linkage(graph: &LinkageGraph) -> Result<(), CoreError> {
    let mut visited: HashSet<DbId> = HashSet::new();

    for &root in graph.roots() {
        walk_from(graph, root, &mut visited)?;
    }

    // Nodes on a cycle with no in-edge-free entry point are reachable
    // from no root and never enter the visited set.
    if visited.len() < graph.node_count() {
        return Err(CoreError::Parameters(CIRCULAR_LINKAGE.to_string()));
    }

    Ok(())
}

/// Iterative DFS from a single root with an explicit frame stack; the
/// relation can nest deeply enough that recursion depth would matter.
fn walk_from(
    graph: &LinkageGraph,
    root: DbId,
    visited: &mut HashSet<DbId>,
) -> Result<(), CoreError> {
    let mut path: HashMap<DbId, NodeState> = HashMap::new();
    // Each frame is (node, cursor into its source list).
    let mut stack: Vec<(DbId, usize)> = Vec::new();

    path.insert(root, NodeState::OnPath);
    visited.insert(root);
    stack.push((root, 0));

    loop {
        let Some(&mut (node, ref mut cursor)) = stack.last_mut() else {
            break;
        };
        let sources = graph.sources_of(node);

        if *cursor == sources.len() {
            path.insert(node, NodeState::Done);
            stack.pop();
            continue;
        }

        let next = sources[*cursor];
        *cursor += 1;

        match path.get(&next) {
            Some(NodeState::OnPath) => {
                return Err(CoreError::Parameters(CIRCULAR_LINKAGE.to_string()));
            }
            Some(NodeState::Done) => {
                return Err(CoreError::Parameters(DOUBLE_LINKAGE.to_string()));
            }
            None => {
                path.insert(next, NodeState::OnPath);
                visited.insert(next);
                stack.push((next, 0));
            }
        }
    }

    Ok(())
}

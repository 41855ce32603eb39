//! Module dependency graph and execution ordering.
//!
//! Pure in-memory logic: no I/O, no async. Edges are dependency identifiers
//! resolved through the node map at sort time, so the graph never holds
//! references between nodes.

use indexmap::IndexMap;

use crate::domain::config::ModuleDecl;
use crate::domain::error::GraphError;

/// Traversal state of a node during a single sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// On the active traversal path. Reaching it again closes a cycle.
    InProgress,
    /// Already placed in the output.
    Done,
}

/// One pending node on the traversal stack and the index of the next
/// dependency to visit.
struct Frame {
    node: usize,
    next_dep: usize,
}

/// Dependency graph keyed by module path, iterated in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ExecutionGraph {
    nodes: IndexMap<String, ModuleDecl>,
}

impl ExecutionGraph {
    /// Build a graph with one node per declared module.
    ///
    /// Dependency lists are copied verbatim and are not checked here.
    /// If a path is declared twice the later declaration wins but keeps the
    /// position of the first, silently dropping the earlier dependency list.
    /// Callers that load user input should reject duplicates first with
    /// [`validate_config`](crate::domain::config::validate_config).
    #[must_use]
    pub fn build(modules: &[ModuleDecl]) -> Self {
        let mut nodes = IndexMap::with_capacity(modules.len());
        for module in modules {
            nodes.insert(module.path.clone(), module.clone());
        }
        Self { nodes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&ModuleDecl> {
        self.nodes.get(path)
    }

    /// Nodes in declaration order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleDecl> {
        self.nodes.values()
    }

    /// Order every module so each dependency precedes its dependents.
    ///
    /// Depth-first with three marks: roots are taken in declaration order and
    /// dependencies in the order the module lists them, which makes the result
    /// deterministic. The traversal keeps an explicit stack, so long
    /// dependency chains do not grow the thread stack.
    ///
    /// Marks live in a table local to this call; sorting the same graph again
    /// yields the same order.
    ///
    /// # Errors
    ///
    /// Fails on the first structural fault found:
    /// - [`GraphError::CyclicDependency`] naming the module reached while it
    ///   was still on the active path;
    /// - [`GraphError::UnknownDependency`] naming the missing dependency and
    ///   the module that declared it. Later dependencies of that module are
    ///   not visited.
    pub fn topo_sorted(&self) -> Result<Vec<&ModuleDecl>, GraphError> {
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut sorted = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<Frame> = Vec::new();

        for root in 0..self.nodes.len() {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::InProgress;
            stack.push(Frame {
                node: root,
                next_dep: 0,
            });

            while let Some(frame) = stack.last_mut() {
                let module = &self.nodes[frame.node];
                let Some(dep) = module.depends_on.get(frame.next_dep) else {
                    marks[frame.node] = Mark::Done;
                    sorted.push(module);
                    stack.pop();
                    continue;
                };
                frame.next_dep += 1;

                let Some(dep_index) = self.nodes.get_index_of(dep) else {
                    return Err(GraphError::UnknownDependency {
                        dependency: dep.clone(),
                        module: module.path.clone(),
                    });
                };
                match marks[dep_index] {
                    Mark::Done => {}
                    Mark::InProgress => {
                        return Err(GraphError::CyclicDependency {
                            module: dep.clone(),
                        });
                    }
                    Mark::Unvisited => {
                        marks[dep_index] = Mark::InProgress;
                        stack.push(Frame {
                            node: dep_index,
                            next_dep: 0,
                        });
                    }
                }
            }
        }

        Ok(sorted)
    }
}

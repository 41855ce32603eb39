//! Application service — resolve the order modules run in.

use anyhow::Result;

use crate::domain::{ExecutionGraph, ModuleDecl, TerracottaConfig, validate_config};

/// Validate the configuration and return its modules in execution order.
///
/// # Errors
///
/// Returns [`ConfigError`](crate::domain::ConfigError) for an invalid
/// declaration list and [`GraphError`](crate::domain::GraphError) for a
/// cycle or unknown dependency. Both can be recovered with
/// `anyhow::Error::downcast_ref`.
pub fn resolve_order(config: &TerracottaConfig) -> Result<Vec<ModuleDecl>> {
    validate_config(config)?;
    let graph = ExecutionGraph::build(&config.modules);
    let order: Vec<ModuleDecl> = graph.topo_sorted()?.into_iter().cloned().collect();
    tracing::debug!(
        order = ?order.iter().map(|m| m.path.as_str()).collect::<Vec<_>>(),
        "resolved module order"
    );
    Ok(order)
}

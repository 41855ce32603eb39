//! Command implementations

pub mod apply;
pub mod order;
pub mod plan;
pub mod version;

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::ports::ModuleExecutor;
use crate::application::services::{config_service, execution_order, module_run};
use crate::domain::{Action, ConfigError, ModuleDecl, TerracottaConfig};
use crate::output::json::LOAD_CONFIG_CONTEXT;

/// Loaded configuration and its modules in execution order.
pub struct Prepared {
    pub config: TerracottaConfig,
    pub order: Vec<ModuleDecl>,
}

/// Load the configuration and resolve the execution order.
///
/// # Errors
///
/// Load failures are wrapped as `Failed to load config`, validation failures
/// as `Invalid config`, and cycles or unknown dependencies as
/// `Failed to resolve module order`. The typed domain error stays reachable
/// with `downcast_ref`.
pub fn prepare(app: &AppContext) -> Result<Prepared> {
    let config =
        config_service::load_config(&app.config_store).context(LOAD_CONFIG_CONTEXT)?;
    let order = execution_order::resolve_order(&config).map_err(|e| {
        if e.downcast_ref::<ConfigError>().is_some() {
            e.context("Invalid config")
        } else {
            e.context("Failed to resolve module order")
        }
    })?;
    Ok(Prepared { config, order })
}

/// Run `action` over the prepared modules and render the summary.
///
/// Returns `ExitCode::FAILURE` when any module failed.
///
/// # Errors
///
/// Returns an error only if the summary cannot be rendered.
pub async fn run_and_report(
    app: &AppContext,
    executor: &impl ModuleExecutor,
    prepared: &Prepared,
    action: Action,
) -> Result<ExitCode> {
    let summary = {
        let reporter = app.reporter();
        module_run::run_modules(
            executor,
            &reporter,
            &prepared.config,
            &prepared.order,
            action,
        )
        .await
    };
    app.renderer().render_summary(&summary)?;
    Ok(if summary.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

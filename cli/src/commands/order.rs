//! `terracotta order` — show the resolved execution order.

use std::process::ExitCode;

use anyhow::Result;
use terracotta_common::{OrderEntry, OrderReport};

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::domain::ModuleDecl;

/// Run the order command.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let prepared = super::prepare(app)?;
    let report = order_report(&prepared.order);
    app.renderer()
        .render_order(&report, app.config_store.path())?;
    Ok(ExitCode::SUCCESS)
}

/// Number the ordered modules from 1.
#[must_use]
pub fn order_report(order: &[ModuleDecl]) -> OrderReport {
    OrderReport {
        modules: order
            .iter()
            .enumerate()
            .map(|(i, module)| OrderEntry {
                position: i + 1,
                module: module.path.clone(),
                depends_on: module.depends_on.clone(),
            })
            .collect(),
    }
}

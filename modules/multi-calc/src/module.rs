//! Multi-calc module definition

use std::sync::Arc;

use anyhow::{Context as _, Result};
use calc_sdk::CalcApi;
use calckit::{Module, ModuleCtx};

use crate::domain::MultiCalcService;

/// Multi-calc module.
///
/// Resolves `dyn CalcApi` from the `ClientHub` (so the calc module must be
/// initialized first) and registers a `MultiCalcService` built on it.
#[derive(Debug, Default)]
pub struct MultiCalcModule;

impl MultiCalcModule {
    pub const NAME: &'static str = "multi_calc";
}

impl Module for MultiCalcModule {
    fn init(&self, ctx: &ModuleCtx) -> Result<()> {
        tracing::info!("Initializing multi_calc module");

        let calc = ctx
            .client_hub()
            .get::<dyn CalcApi>()
            .context("CalcApi not available in ClientHub")?;

        ctx.client_hub()
            .register::<MultiCalcService>(Arc::new(MultiCalcService::new(calc)));

        tracing::info!("multi_calc module initialized");
        Ok(())
    }
}

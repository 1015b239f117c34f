//! Calc module definition

use std::sync::Arc;

use anyhow::Result;
use calc_sdk::CalcApi;
use calckit::{Module, ModuleCtx};

use crate::config::CalcConfig;
use crate::domain::Service;
use crate::local_client::CalcLocalClient;

/// Calc module.
///
/// Registers the domain `Service` and a `dyn CalcApi` local client in the `ClientHub`.
#[derive(Debug, Default)]
pub struct CalcModule;

impl CalcModule {
    pub const NAME: &'static str = "calc";
}

impl Module for CalcModule {
    fn init(&self, ctx: &ModuleCtx) -> Result<()> {
        tracing::info!("Initializing calc module");

        let cfg: CalcConfig = ctx.config()?;
        let service = Arc::new(Service::new(cfg));

        ctx.client_hub().register::<Service>(Arc::clone(&service));
        ctx.client_hub()
            .register::<dyn CalcApi>(Arc::new(CalcLocalClient::new(service)));

        tracing::info!(
            trace_operations = cfg.trace_operations,
            "calc module initialized"
        );
        Ok(())
    }
}

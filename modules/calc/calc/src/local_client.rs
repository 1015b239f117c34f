//! Local client implementing the `CalcApi` trait.

use std::sync::Arc;

use calc_sdk::CalcApi;

use crate::domain::Service;

/// In-process `CalcApi` that delegates to the domain service.
///
/// Registered in the `ClientHub` by `CalcModule`.
#[derive(Clone, Default)]
pub struct CalcLocalClient {
    service: Arc<Service>,
}

impl CalcLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalcApi for CalcLocalClient {
    fn add(&self, a: i32, b: i32) -> i32 {
        self.service.add(a, b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        self.service.subtract(a, b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        self.service.multiply(a, b)
    }

    fn divide(&self, a: i32, b: i32) -> i32 {
        self.service.divide(a, b)
    }
}

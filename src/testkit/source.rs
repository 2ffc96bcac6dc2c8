//! In-memory [`SymbolSource`] for tests.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use crate::domain::Symbol;
use crate::error::{Error, Result};
use crate::port::outbound::exchange::SymbolSource;

/// Returns a fixed symbol list, or a fixed error.
pub struct StaticSymbolSource {
    symbols: Vec<Symbol>,
    failure: Option<String>,
    calls: AtomicU32,
}

impl StaticSymbolSource {
    pub fn new<S: Into<Symbol>>(symbols: Vec<S>) -> Self {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            failure: None,
            calls: AtomicU32::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            symbols: Vec::new(),
            failure: Some(reason.to_string()),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SymbolSource for StaticSymbolSource {
    async fn fetch_symbols(&self) -> Result<Vec<Symbol>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(reason) => Err(Error::Connection(reason.clone())),
            None => Ok(self.symbols.clone()),
        }
    }

    fn exchange_name(&self) -> &'static str {
        "mock"
    }
}

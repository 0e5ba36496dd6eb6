//! Symbol resolver: debounced company-name auto-fill.
//!
//! Typing in the symbol field (or switching the exchange) schedules a
//! delayed name lookup. The name field is cleared on every symbol edit, so
//! a fresh response always writes into an empty field armed for autofill.
//! A failed or no-match lookup simply leaves the field blank for manual
//! entry; there is no visible empty state.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::lock_or_recover;
use crate::errors::LookupError;
use crate::models::{Exchange, LookupResult, SymbolQuery};
use crate::provider::LookupProvider;
use crate::resolver::{LookupResolver, LookupSession, ResolverConfig};

/// Form state backing the symbol/name pair.
#[derive(Clone, Debug)]
pub struct SymbolFormState {
    /// Free-text symbol input.
    pub symbol: String,
    /// Currently selected exchange.
    pub exchange: Exchange,
    /// Dependent company-name field, auto-filled on a match.
    pub company_name: String,
    /// Shown near the name field label for the debounce+in-flight window.
    pub looking_up: bool,
}

impl SymbolFormState {
    fn new(exchange: Exchange) -> Self {
        Self {
            symbol: String::new(),
            exchange,
            company_name: String::new(),
            looking_up: false,
        }
    }

    fn normalized_symbol(&self) -> String {
        self.symbol.trim().to_uppercase()
    }
}

struct SymbolSession {
    state: Arc<Mutex<SymbolFormState>>,
    provider: Arc<dyn LookupProvider>,
}

#[async_trait]
impl LookupSession for SymbolSession {
    type Query = SymbolQuery;
    type Output = LookupResult;

    fn query_text(&self) -> String {
        lock_or_recover(&self.state).symbol.clone()
    }

    fn build_query(&self) -> SymbolQuery {
        let state = lock_or_recover(&self.state);
        SymbolQuery {
            symbol: state.normalized_symbol(),
            exchange: state.exchange,
        }
    }

    fn set_searching(&self, searching: bool) {
        lock_or_recover(&self.state).looking_up = searching;
    }

    async fn fetch(&self, query: &SymbolQuery) -> Result<LookupResult, LookupError> {
        self.provider.lookup_name(&query.symbol, query.exchange).await
    }

    fn apply(&self, query: &SymbolQuery, output: LookupResult) {
        // No match must not overwrite the target field.
        let Some(name) = output.name else {
            return;
        };

        let mut state = lock_or_recover(&self.state);

        // The user may have edited the symbol since dispatch; the sequence
        // guard cannot see edits that never dispatched, so re-check the text.
        if state.normalized_symbol() != query.symbol {
            return;
        }

        // Edits clear the name field, so autofill only lands in an empty one.
        if state.company_name.is_empty() {
            state.company_name = name;
        }
    }
}

/// Symbol field with debounced company-name auto-fill.
pub struct SymbolLookupField {
    state: Arc<Mutex<SymbolFormState>>,
    resolver: LookupResolver<SymbolSession>,
}

impl SymbolLookupField {
    pub fn new(provider: Arc<dyn LookupProvider>, exchange: Exchange) -> Self {
        Self::with_config(provider, exchange, ResolverConfig::default())
    }

    pub fn with_config(
        provider: Arc<dyn LookupProvider>,
        exchange: Exchange,
        config: ResolverConfig,
    ) -> Self {
        let state = Arc::new(Mutex::new(SymbolFormState::new(exchange)));
        let session = Arc::new(SymbolSession {
            state: Arc::clone(&state),
            provider,
        });
        Self {
            state,
            resolver: LookupResolver::with_config(session, config),
        }
    }

    /// Update the symbol text. Clears the dependent name field and
    /// restarts debouncing.
    pub fn set_symbol(&mut self, text: impl Into<String>) {
        {
            let mut state = lock_or_recover(&self.state);
            state.symbol = text.into();
            state.company_name.clear();
        }
        self.resolver.notify_input();
    }

    /// Switch the exchange. Both the symbol text and the exchange are
    /// watched inputs, so this also restarts debouncing.
    pub fn set_exchange(&mut self, exchange: Exchange) {
        lock_or_recover(&self.state).exchange = exchange;
        self.resolver.notify_input();
    }

    pub fn symbol(&self) -> String {
        lock_or_recover(&self.state).symbol.clone()
    }

    pub fn exchange(&self) -> Exchange {
        lock_or_recover(&self.state).exchange
    }

    pub fn company_name(&self) -> String {
        lock_or_recover(&self.state).company_name.clone()
    }

    pub fn is_looking_up(&self) -> bool {
        lock_or_recover(&self.state).looking_up
    }

    pub fn snapshot(&self) -> SymbolFormState {
        lock_or_recover(&self.state).clone()
    }

    /// Tear down on form close/unmount: cancels the pending timer and
    /// flags any in-flight lookup to be ignored on arrival.
    pub fn close(&mut self) {
        self.resolver.close();
        lock_or_recover(&self.state).looking_up = false;
    }
}

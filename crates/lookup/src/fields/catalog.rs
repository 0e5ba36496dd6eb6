//! Catalog search resolver: debounced multi-result fund search.
//!
//! Keystrokes in the fund name field and changes to either filter all
//! reschedule one combined query. A fresh response replaces the whole
//! result list unconditionally. Picking a result is terminal for the
//! search session; dismissing the dropdown keeps the collected results so
//! refocusing can redisplay them without requerying.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::lock_or_recover;
use crate::errors::LookupError;
use crate::models::{CatalogQuery, FundMatch, FundSelection, PlanFilter, TypeFilter};
use crate::provider::LookupProvider;
use crate::resolver::{LookupResolver, LookupSession, ResolverConfig};

/// Form state backing the fund search field and its dropdown.
#[derive(Clone, Debug)]
pub struct FundSearchState {
    /// Free-text fund name input.
    pub query: String,
    /// Plan filter (direct/regular).
    pub plan: PlanFilter,
    /// Scheme type filter (growth/dividend/all).
    pub scheme_type: TypeFilter,
    /// True for the debounce+in-flight window of the latest query.
    pub is_searching: bool,
    /// Last applied result set, in backend order.
    pub results: Vec<FundMatch>,
    /// Whether the dropdown is shown.
    pub results_visible: bool,
    /// Whether a search completed for the current session. Distinguishes
    /// "no matches" from "never searched".
    searched: bool,
}

impl FundSearchState {
    fn new(plan: PlanFilter, scheme_type: TypeFilter) -> Self {
        Self {
            query: String::new(),
            plan,
            scheme_type,
            is_searching: false,
            results: Vec::new(),
            results_visible: false,
            searched: false,
        }
    }

    /// What the dropdown should render right now.
    pub fn display(&self) -> SearchDisplay<'_> {
        if !self.results_visible {
            return SearchDisplay::Hidden;
        }
        if !self.results.is_empty() {
            return SearchDisplay::Matches(&self.results);
        }
        if self.is_searching {
            return SearchDisplay::Searching;
        }
        if self.searched {
            return SearchDisplay::NoMatches;
        }
        SearchDisplay::Hidden
    }
}

/// Render state for the results dropdown.
#[derive(Debug, PartialEq)]
pub enum SearchDisplay<'a> {
    /// Nothing rendered.
    Hidden,
    /// Spinner/progress copy while a query is pending.
    Searching,
    /// Explicit "No funds found" empty state.
    NoMatches,
    /// Selectable result rows.
    Matches(&'a [FundMatch]),
}

struct CatalogSession {
    state: Arc<Mutex<FundSearchState>>,
    provider: Arc<dyn LookupProvider>,
}

#[async_trait]
impl LookupSession for CatalogSession {
    type Query = CatalogQuery;
    type Output = Vec<FundMatch>;

    fn query_text(&self) -> String {
        lock_or_recover(&self.state).query.clone()
    }

    fn build_query(&self) -> CatalogQuery {
        let state = lock_or_recover(&self.state);
        CatalogQuery {
            text: state.query.trim().to_string(),
            plan: state.plan,
            scheme_type: state.scheme_type,
        }
    }

    fn set_searching(&self, searching: bool) {
        let mut state = lock_or_recover(&self.state);
        state.is_searching = searching;
        if searching {
            state.results_visible = true;
        }
    }

    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<FundMatch>, LookupError> {
        self.provider
            .search_catalog(&query.text, query.plan, query.scheme_type)
            .await
    }

    fn apply(&self, _query: &CatalogQuery, output: Vec<FundMatch>) {
        // Freshness is already confirmed; the whole list is replaced, so no
        // text re-validation is needed here.
        let mut state = lock_or_recover(&self.state);
        state.results = output;
        state.searched = true;
        state.results_visible = true;
    }
}

/// Fund name search field with a debounced, filter-parameterized dropdown.
pub struct FundSearchField {
    state: Arc<Mutex<FundSearchState>>,
    resolver: LookupResolver<CatalogSession>,
}

impl FundSearchField {
    pub fn new(provider: Arc<dyn LookupProvider>) -> Self {
        Self::with_config(provider, ResolverConfig::default())
    }

    pub fn with_config(provider: Arc<dyn LookupProvider>, config: ResolverConfig) -> Self {
        let state = Arc::new(Mutex::new(FundSearchState::new(
            PlanFilter::default(),
            TypeFilter::default(),
        )));
        let session = Arc::new(CatalogSession {
            state: Arc::clone(&state),
            provider,
        });
        Self {
            state,
            resolver: LookupResolver::with_config(session, config),
        }
    }

    /// Update the free-text query.
    ///
    /// Below-gate text closes the search session outright (results cleared,
    /// dropdown hidden, outstanding dispatches staled); qualifying text
    /// restarts debouncing.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let below_gate = {
            let mut state = lock_or_recover(&self.state);
            state.query = text.into();
            let below = state.query.trim().chars().count() < self.resolver.config().min_query_len;
            if below {
                state.results.clear();
                state.searched = false;
                state.results_visible = false;
            }
            below
        };

        if below_gate {
            self.resolver.invalidate();
        } else {
            self.resolver.notify_input();
        }
    }

    /// Change the plan filter. Immediately reschedules with the latest
    /// combined query; the current text still goes through the gate.
    pub fn set_plan(&mut self, plan: PlanFilter) {
        lock_or_recover(&self.state).plan = plan;
        self.resolver.notify_input();
    }

    /// Change the scheme type filter. Same rescheduling rules as the plan.
    pub fn set_scheme_type(&mut self, scheme_type: TypeFilter) {
        lock_or_recover(&self.state).scheme_type = scheme_type;
        self.resolver.notify_input();
    }

    /// Pick a result from the dropdown. Terminal for this search session:
    /// the chosen identifying fields are snapshotted, the list is cleared,
    /// the dropdown hidden, and any outstanding dispatch staled.
    pub fn select(&mut self, index: usize) -> Option<FundSelection> {
        let chosen = {
            let mut state = lock_or_recover(&self.state);
            let chosen = state.results.get(index)?.clone();
            state.query = chosen.display_name.clone();
            state.results.clear();
            state.searched = false;
            state.results_visible = false;
            chosen
        };

        self.resolver.invalidate();

        Some(FundSelection {
            code: chosen.code,
            display_name: chosen.display_name,
            reference_price: chosen.reference_price,
        })
    }

    /// Click-outside: hide the dropdown without clearing collected results.
    pub fn dismiss(&mut self) {
        lock_or_recover(&self.state).results_visible = false;
    }

    /// Refocus: redisplay a non-empty last result set without requerying.
    pub fn focus(&mut self) {
        let mut state = lock_or_recover(&self.state);
        if !state.results.is_empty() {
            state.results_visible = true;
        }
    }

    pub fn query(&self) -> String {
        lock_or_recover(&self.state).query.clone()
    }

    pub fn is_searching(&self) -> bool {
        lock_or_recover(&self.state).is_searching
    }

    pub fn results(&self) -> Vec<FundMatch> {
        lock_or_recover(&self.state).results.clone()
    }

    pub fn snapshot(&self) -> FundSearchState {
        lock_or_recover(&self.state).clone()
    }

    /// Tear down on modal dismissal/unmount.
    pub fn close(&mut self) {
        self.resolver.close();
        let mut state = lock_or_recover(&self.state);
        state.is_searching = false;
        state.results_visible = false;
    }
}

use crate::api::CocktailApi;
use crate::error::FailureReason;
use crate::model::Cocktail;
use crate::resolver::{SearchOutcome, SearchResolver};
use log::{debug, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// What the presentation layer should currently show.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    ShowingList(Vec<Cocktail>),
    ShowingDetail(Cocktail),
    ShowingError(FailureReason),
}

impl From<SearchOutcome> for ViewState {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Empty => ViewState::ShowingError(FailureReason::NoResultsFound),
            SearchOutcome::Single(cocktail) => ViewState::ShowingDetail(cocktail),
            SearchOutcome::Many(cocktails) => ViewState::ShowingList(cocktails),
            SearchOutcome::Failed(reason) => ViewState::ShowingError(reason),
        }
    }
}

/// Identifies one user-triggered action. Only the most recently issued
/// ticket may write its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

struct SessionInner {
    generation: u64,
    state: ViewState,
}

/// Single-view session over a [`SearchResolver`].
///
/// Starting an action bumps the generation and sets `Loading`. When an
/// action finishes after a newer one was started, its outcome is dropped,
/// so a slow response never overwrites the result of a later action.
pub struct Session<A> {
    resolver: SearchResolver<A>,
    inner: Mutex<SessionInner>,
}

impl<A: CocktailApi> Session<A> {
    pub fn new(resolver: SearchResolver<A>) -> Self {
        Session {
            resolver,
            inner: Mutex::new(SessionInner {
                generation: 0,
                state: ViewState::Idle,
            }),
        }
    }

    pub fn state(&self) -> ViewState {
        self.lock().state.clone()
    }

    /// Search by name, falling back to ingredient
    pub async fn search(&self, query: &str) -> bool {
        let ticket = self.begin();
        let outcome = self.resolver.resolve_by_text(query).await;
        self.finish(ticket, outcome)
    }

    pub async fn random(&self) -> bool {
        let ticket = self.begin();
        let outcome = self.resolver.resolve_random().await;
        self.finish(ticket, outcome)
    }

    /// Show full details for one card of the current list. On success the
    /// list is replaced by the detail view.
    pub async fn select(&self, id: &str) -> bool {
        let ticket = self.begin();
        let outcome = self.resolver.resolve_details_by_id(id).await;
        self.finish(ticket, outcome)
    }

    /// Start a new action, invalidating any action still in flight.
    pub fn begin(&self) -> RequestTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = ViewState::Loading;
        RequestTicket(inner.generation)
    }

    /// Apply `outcome` if `ticket` is still the latest action. Returns
    /// whether the state was updated.
    pub fn finish(&self, ticket: RequestTicket, outcome: SearchOutcome) -> bool {
        let mut inner = self.lock();
        if ticket.0 != inner.generation {
            warn!(
                "Discarding stale result for request {} (current is {})",
                ticket.0, inner.generation
            );
            return false;
        }

        inner.state = ViewState::from(outcome);
        debug!("Request {} applied", ticket.0);
        true
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

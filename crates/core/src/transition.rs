//! Status graphs and the transition engine.
//!
//! A [`StatusGraph`] is a pure table of legal `(from, to)` edges over a closed set of
//! states. Entities whose lifecycle is governed by a graph implement [`Transitional`];
//! [`request_transition`] is the only path that should move them between states.
//!
//! An illegal request is *expected input*, not a programming error: it leaves the entity
//! untouched and comes back as a rejected [`TransitionOutcome`]. Callers that prefer `?`
//! can turn a rejection into [`DomainError::IllegalTransition`] with
//! [`TransitionOutcome::into_result`].

use serde::Serialize;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// Declares the legal state transitions for one entity type.
pub trait StatusGraph {
    type State: Copy + Eq + core::fmt::Debug + core::fmt::Display + 'static;

    /// Every state of the graph, in declaration order.
    const STATES: &'static [Self::State];

    /// Whether `from -> to` is a declared edge. Must be pure.
    fn can_transition(from: Self::State, to: Self::State) -> bool;

    /// Legal successors of `from`, in `STATES` order.
    fn targets(from: Self::State) -> Vec<Self::State> {
        Self::STATES
            .iter()
            .copied()
            .filter(|to| Self::can_transition(from, *to))
            .collect()
    }

    /// A state with no outgoing edge.
    fn is_terminal(state: Self::State) -> bool {
        !Self::STATES
            .iter()
            .any(|to| Self::can_transition(state, *to))
    }
}

/// An entity whose state is governed by a [`StatusGraph`].
pub trait Transitional: Entity {
    type Graph: StatusGraph;

    /// Current state.
    fn state(&self) -> <Self::Graph as StatusGraph>::State;

    /// Store a state change that [`request_transition`] has already validated.
    ///
    /// Implementations may record bookkeeping (history, timestamps) here but must not
    /// re-validate or refuse the change.
    fn commit(&mut self, to: <Self::Graph as StatusGraph>::State);
}

/// Result of a transition request: the attempted edge and whether it was taken.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionOutcome<Id, S> {
    pub entity_id: Id,
    pub from: S,
    pub to: S,
    pub success: bool,
}

impl<Id, S> TransitionOutcome<Id, S> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_rejected(&self) -> bool {
        !self.success
    }
}

impl<Id, S> TransitionOutcome<Id, S>
where
    Id: core::fmt::Display,
    S: core::fmt::Display,
{
    /// Convert a rejection into [`DomainError::IllegalTransition`].
    pub fn into_result(self) -> DomainResult<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(DomainError::illegal_transition(
                &self.entity_id,
                &self.from,
                &self.to,
            ))
        }
    }
}

impl<Id, S> core::fmt::Display for TransitionOutcome<Id, S>
where
    Id: core::fmt::Display,
    S: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.success {
            write!(f, "{}: {} -> {}", self.entity_id, self.from, self.to)
        } else {
            write!(
                f,
                "invalid transition for {}: {} -> {}",
                self.entity_id, self.from, self.to
            )
        }
    }
}

/// Move `entity` to `target` if its graph declares the edge; otherwise leave it untouched.
///
/// Always returns an outcome echoing the attempted `current -> target` edge.
pub fn request_transition<E>(
    entity: &mut E,
    target: <E::Graph as StatusGraph>::State,
) -> TransitionOutcome<E::Id, <E::Graph as StatusGraph>::State>
where
    E: Transitional,
{
    let from = entity.state();
    let success = E::Graph::can_transition(from, target);
    if success {
        entity.commit(target);
    }

    TransitionOutcome {
        entity_id: entity.id(),
        from,
        to: target,
        success,
    }
}

//! Cooperative cancellation signals consulted before store mutations.
//!
//! # Responsibility
//! - Define the single query a store needs from a cancellation source.
//! - Provide a concrete clonable token with explicit cancel and deadlines.
//!
//! # Invariants
//! - Checks never block and never wait for a state change.
//! - Once a token reports a terminal reason, that reason never changes.

use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Terminal reason reported by a fired signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// Caller explicitly gave up.
    Cancelled,
    /// The governing deadline elapsed.
    DeadlineExceeded,
}

impl Display for CancelReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => f.write_str("cancelled"),
            Self::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}

/// Read-only view of an external cancellation source.
///
/// `None` means work may proceed. Stores only ever read this signal and
/// never own its lifecycle.
pub trait CancelSignal: Send + Sync {
    fn cancelled(&self) -> Option<CancelReason>;
}

/// Clonable cancellation token; clones share state.
///
/// Explicit cancellation and parent to child propagation come from the
/// wrapped [`CancellationToken`]. This layer adds an optional deadline and
/// latches the first [`CancelReason`] it observes.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<TokenState>,
}

#[derive(Debug, Default)]
struct TokenState {
    token: CancellationToken,
    reason: OnceCell<CancelReason>,
    deadline: Option<Instant>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token that fires with `DeadlineExceeded` once `deadline` has passed.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::from_parts(CancellationToken::new(), Some(deadline))
    }

    /// Token whose deadline is `timeout` from now.
    ///
    /// A timeout too large to represent as an `Instant` means no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::from_parts(CancellationToken::new(), Instant::now().checked_add(timeout))
    }

    fn from_parts(token: CancellationToken, deadline: Option<Instant>) -> Self {
        Self {
            inner: Arc::new(TokenState {
                token,
                reason: OnceCell::new(),
                deadline,
            }),
        }
    }

    /// Derives a token that fires whenever this one does.
    ///
    /// The child inherits the deadline. Cancelling the child leaves the
    /// parent untouched.
    pub fn child(&self) -> Self {
        Self::from_parts(self.inner.token.child_token(), self.inner.deadline)
    }

    /// Fires the token. No-op when it already reported a reason.
    pub fn cancel(&self) {
        if self.reason().is_none() && self.inner.reason.set(CancelReason::Cancelled).is_ok() {
            self.inner.token.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.reason().is_some()
    }

    /// Returns the terminal reason, latching the first one observed.
    pub fn reason(&self) -> Option<CancelReason> {
        if let Some(reason) = self.inner.reason.get() {
            return Some(*reason);
        }

        if self.inner.token.is_cancelled() {
            // Fired by an ancestor or through the shared `CancellationToken`.
            let observed = if self.deadline_elapsed() {
                CancelReason::DeadlineExceeded
            } else {
                CancelReason::Cancelled
            };
            return Some(*self.inner.reason.get_or_init(|| observed));
        }

        if !self.deadline_elapsed() {
            return None;
        }
        let reason = *self
            .inner
            .reason
            .get_or_init(|| CancelReason::DeadlineExceeded);
        self.inner.token.cancel();
        Some(reason)
    }

    /// Underlying token, for handing to async code that awaits cancellation.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.inner.token.clone()
    }

    fn deadline_elapsed(&self) -> bool {
        self.inner
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

impl From<CancellationToken> for CancelToken {
    fn from(token: CancellationToken) -> Self {
        Self::from_parts(token, None)
    }
}

impl CancelSignal for CancelToken {
    fn cancelled(&self) -> Option<CancelReason> {
        self.reason()
    }
}

impl CancelSignal for CancellationToken {
    fn cancelled(&self) -> Option<CancelReason> {
        self.is_cancelled().then_some(CancelReason::Cancelled)
    }
}

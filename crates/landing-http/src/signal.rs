//! Cancellation signals.
//!
//! An [`AbortSignal`] moves from active to aborted exactly once and never
//! back. Signals are aborted through the [`AbortController`] that created
//! them, by a timer ([`create_timeout_signal`](crate::create_timeout_signal)),
//! or by one of the inputs of a [`combine_signals`] fan-in.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio_util::sync::CancellationToken;

/// Why a signal was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbortReason {
    /// Aborted explicitly through a controller.
    Aborted,
    /// Aborted because a timeout elapsed.
    TimedOut,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aborted => write!(f, "The operation was aborted"),
            Self::TimedOut => write!(f, "The operation timed out"),
        }
    }
}

/// Key of a registered listener, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnOnce(AbortReason) + Send>;

#[derive(Default)]
struct State {
    reason: Option<AbortReason>,
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
    /// Inputs a combined signal keeps alive until it fires, with the
    /// listener it registered on each.
    sources: Vec<(AbortSignal, ListenerId)>,
    /// Stops the timer task of a timeout signal.
    timer: Option<CancellationToken>,
}

#[derive(Default)]
struct Inner {
    token: CancellationToken,
    state: Mutex<State>,
}

impl Inner {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn abort(&self, reason: AbortReason) {
        let (listeners, sources) = {
            let mut state = self.state();
            if state.reason.is_some() {
                return;
            }
            state.reason = Some(reason);
            self.token.cancel();
            (
                std::mem::take(&mut state.listeners),
                std::mem::take(&mut state.sources),
            )
        };

        detach(sources);
        for (_, listener) in listeners {
            listener(reason);
        }
    }

    /// Record a listener this signal registered on `source`.
    fn track_source(&self, source: AbortSignal, id: ListenerId) {
        let mut state = self.state();
        if state.reason.is_none() {
            state.sources.push((source, id));
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(timer) = state.timer.take() {
            timer.cancel();
        }
        detach(std::mem::take(&mut state.sources));
    }
}

fn detach(sources: Vec<(AbortSignal, ListenerId)>) {
    for (source, id) in sources {
        source.remove_listener(id);
    }
}

/// Read side of a cancellation handle.
///
/// Cloning is cheap and every clone observes the same state.
#[derive(Clone)]
pub struct AbortSignal {
    inner: Arc<Inner>,
}

impl AbortSignal {
    /// A signal that is already aborted.
    pub fn aborted_with(reason: AbortReason) -> Self {
        let controller = AbortController::new();
        controller.abort_with(reason);
        controller.signal()
    }

    /// Whether the signal has fired.
    pub fn is_aborted(&self) -> bool {
        self.inner.token.is_cancelled()
    }

    /// The abort reason, once the signal has fired.
    pub fn reason(&self) -> Option<AbortReason> {
        self.inner.state().reason
    }

    /// Register a callback that runs once when the signal fires.
    ///
    /// If the signal already fired, the callback runs immediately on the
    /// calling thread and `None` is returned. Otherwise the returned key
    /// can be passed to [`remove_listener`](Self::remove_listener).
    pub fn add_listener<F>(&self, listener: F) -> Option<ListenerId>
    where
        F: FnOnce(AbortReason) + Send + 'static,
    {
        let mut state = self.inner.state();
        match state.reason {
            Some(reason) => {
                drop(state);
                listener(reason);
                None
            }
            None => {
                let id = ListenerId(state.next_id);
                state.next_id += 1;
                state.listeners.push((id, Box::new(listener)));
                Some(id)
            }
        }
    }

    /// Unregister a listener that has not run yet.
    ///
    /// Returns whether the listener was still registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let removed = {
            let mut state = self.inner.state();
            let index = state.listeners.iter().position(|(key, _)| *key == id);
            let removed = index.map(|index| state.listeners.swap_remove(index));
            removed
        };
        // The listener may own the last handle to another signal, so it is
        // dropped outside the lock.
        removed.is_some()
    }

    /// Wait until the signal fires and return the reason.
    pub async fn aborted(&self) -> AbortReason {
        self.inner.token.cancelled().await;
        self.reason().unwrap_or(AbortReason::Aborted)
    }

    /// Whether both handles refer to the same underlying signal.
    pub fn ptr_eq(&self, other: &AbortSignal) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn downgrade(&self) -> WeakAbortHandle {
        WeakAbortHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Cancel `timer` once the last handle to this signal is dropped.
    pub(crate) fn attach_timer(&self, timer: CancellationToken) {
        self.inner.state().timer = Some(timer);
    }

    #[cfg(test)]
    pub(crate) fn timer(&self) -> Option<CancellationToken> {
        self.inner.state().timer.clone()
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.inner.state().listeners.len()
    }
}

impl fmt::Debug for AbortSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbortSignal")
            .field("aborted", &self.is_aborted())
            .field("reason", &self.reason())
            .finish()
    }
}

/// Weak abort capability for timers and combined-signal listeners.
///
/// Does not keep the signal alive; aborting a dropped signal is a no-op.
#[derive(Clone)]
pub(crate) struct WeakAbortHandle {
    inner: Weak<Inner>,
}

impl WeakAbortHandle {
    pub(crate) fn abort(&self, reason: AbortReason) {
        if let Some(inner) = self.inner.upgrade() {
            inner.abort(reason);
        }
    }
}

/// Write side of a cancellation handle.
#[derive(Clone, Default)]
pub struct AbortController {
    inner: Arc<Inner>,
}

impl AbortController {
    /// Create a controller with a fresh, active signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// The signal controlled by this controller.
    pub fn signal(&self) -> AbortSignal {
        AbortSignal {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Abort the signal. Subsequent calls are no-ops.
    pub fn abort(&self) {
        self.abort_with(AbortReason::Aborted);
    }

    /// Abort the signal with an explicit reason.
    pub fn abort_with(&self, reason: AbortReason) {
        self.inner.abort(reason);
    }
}

impl fmt::Debug for AbortController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbortController")
            .field("signal", &self.signal())
            .finish()
    }
}

/// Merge several optional signals into one.
///
/// - No signals: `None`.
/// - One signal: returned as is.
/// - More: a derived signal that fires as soon as any input fires. An input
///   that has already fired short-circuits to a derived signal that is
///   aborted on return; inputs after it are not observed.
///
/// The derived signal has no controller of its own, so it can only be
/// aborted through its inputs. It keeps its inputs alive until it fires,
/// which matters for timer-driven inputs nobody else holds. Once it fires
/// or is dropped, its listeners are removed from every input.
pub fn combine_signals<I>(signals: I) -> Option<AbortSignal>
where
    I: IntoIterator<Item = Option<AbortSignal>>,
{
    let mut signals: Vec<AbortSignal> = signals.into_iter().flatten().collect();

    match signals.len() {
        0 => return None,
        1 => return signals.pop(),
        _ => {}
    }

    let derived = AbortController::new().signal();

    for signal in signals {
        let handle = derived.downgrade();
        match signal.add_listener(move |reason| handle.abort(reason)) {
            Some(id) => derived.inner.track_source(signal, id),
            // Already fired: the listener aborted `derived` on the spot.
            None => break,
        }
    }

    Some(derived)
}

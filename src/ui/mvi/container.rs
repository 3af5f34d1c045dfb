use std::future::Future;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::reducer::Reducer;
use super::state::UiState;
use crate::error::ErrorKind;
use crate::repo::Subscription;

/// Holds one screen's current state snapshot and publishes replacements.
///
/// Snapshots are never mutated in place: [`update`](Self::update) computes
/// a new one from the old, and observers are woken only if it differs.
///
/// Background work started through [`launch`](Self::launch) and
/// [`collect`](Self::collect) keeps only a weak reference to the container.
/// Once the owning view-model drops it, late results are discarded and
/// stream collectors are aborted.
pub struct StateContainer<S: UiState> {
    state: watch::Sender<S>,
    collectors: Mutex<Vec<JoinHandle<()>>>,
}

impl<S: UiState> StateContainer<S> {
    pub fn new(initial: S) -> Arc<Self> {
        let (state, _) = watch::channel(initial);
        Arc::new(Self {
            state,
            collectors: Mutex::new(Vec::new()),
        })
    }

    /// Copy of the current snapshot.
    pub fn state(&self) -> S {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.subscribe()
    }

    /// Replace the snapshot with `f(old)`.
    pub fn update(&self, f: impl FnOnce(S) -> S) {
        self.state.send_if_modified(|current| {
            let next = f(current.clone());
            if next == *current {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    /// Run an intent through reducer `R`.
    pub fn dispatch<R>(&self, intent: R::Intent)
    where
        R: Reducer<State = S>,
    {
        self.update(|state| R::reduce(state, intent));
    }

    /// Run `work` in the background and fold its output into the state.
    ///
    /// No ordering is kept between launches: whichever finishes last
    /// writes last.
    pub fn launch<T, F, M>(self: &Arc<Self>, work: F, apply: M)
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
        M: FnOnce(S, T) -> S + Send + 'static,
    {
        let container = Arc::downgrade(self);
        tokio::spawn(async move {
            let outcome = work.await;
            match container.upgrade() {
                Some(container) => container.update(|state| apply(state, outcome)),
                None => discarded::<S>(),
            }
        });
    }

    /// Fold every snapshot of `subscription` into the state until the
    /// container is dropped.
    pub fn collect<T, M>(self: &Arc<Self>, mut subscription: Subscription<T>, apply: M)
    where
        T: Send + 'static,
        M: Fn(S, Result<T, ErrorKind>) -> S + Send + 'static,
    {
        let container: Weak<Self> = Arc::downgrade(self);
        let handle = tokio::spawn(async move {
            while let Some(snapshot) = subscription.next().await {
                let Some(container) = container.upgrade() else {
                    discarded::<S>();
                    break;
                };
                container.update(|state| apply(state, snapshot));
            }
        });
        self.collectors.lock().push(handle);
    }
}

impl<S: UiState> Drop for StateContainer<S> {
    fn drop(&mut self) {
        for handle in self.collectors.get_mut().drain(..) {
            handle.abort();
        }
    }
}

fn discarded<S>() {
    tracing::debug!(
        screen = std::any::type_name::<S>(),
        "state container dropped, discarding result"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::Intent;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter {
        value: u32,
    }

    impl UiState for Counter {}

    enum CounterIntent {
        Add(u32),
    }

    impl Intent for CounterIntent {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = CounterIntent;

        fn reduce(state: Counter, intent: CounterIntent) -> Counter {
            match intent {
                CounterIntent::Add(n) => Counter {
                    value: state.value + n,
                },
            }
        }
    }

    #[test]
    fn dispatch_runs_reducer() {
        let container = StateContainer::new(Counter::default());
        container.dispatch::<CounterReducer>(CounterIntent::Add(2));
        container.dispatch::<CounterReducer>(CounterIntent::Add(3));
        assert_eq!(container.state().value, 5);
    }

    #[test]
    fn unchanged_state_is_not_published() {
        let container = StateContainer::new(Counter::default());
        let mut rx = container.subscribe();

        container.update(|state| state);
        assert!(!rx.has_changed().unwrap());

        container.update(|_| Counter { value: 1 });
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().value, 1);
    }

    #[tokio::test]
    async fn launch_applies_result() {
        let container = StateContainer::new(Counter::default());
        let mut rx = container.subscribe();

        container.launch(async { 7 }, |state, n| Counter {
            value: state.value + n,
        });

        let state = rx.wait_for(|s| s.value == 7).await.unwrap().clone();
        assert_eq!(state.value, 7);
    }

    #[tokio::test]
    async fn result_for_dropped_container_is_discarded() {
        let container = StateContainer::new(Counter::default());
        let (release, gate) = tokio::sync::oneshot::channel::<()>();
        let (done_tx, done_rx) = tokio::sync::oneshot::channel::<()>();

        container.launch(
            async move {
                let _ = gate.await;
                done_tx
            },
            |state, done_tx| {
                let _ = done_tx.send(());
                state
            },
        );
        drop(container);
        release.send(()).unwrap();

        // The apply closure never runs, so its sender is dropped unsent.
        assert!(done_rx.await.is_err());
    }
}

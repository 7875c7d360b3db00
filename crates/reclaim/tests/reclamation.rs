//! End-to-end coverage of the two release paths and their race.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};

use reclaim::{Owner, ReclamationRegistry};

#[test]
fn close_clears_count_and_releases_once() {
    let registry = ReclamationRegistry::new();
    let owner = Owner::with_registry(&registry, 3);

    assert!(owner.close());
    assert_eq!(owner.piles(), 0);
    assert_eq!(owner.state().releases(), 1);

    // Second close: still zero piles, still exactly one release.
    assert!(!owner.close());
    assert_eq!(owner.piles(), 0);
    assert_eq!(owner.state().releases(), 1);
}

#[test]
fn simulated_unreachability_alone_releases_once() {
    let registry = ReclamationRegistry::new();
    let owner = Owner::with_registry(&registry, 5);

    // The reachability signal arrives without any explicit close.
    assert!(registry.reclaim(owner.id()));
    assert_eq!(owner.piles(), 0);
    assert_eq!(owner.state().releases(), 1);

    // A late explicit close observes the record already released.
    assert!(!owner.close());
    assert_eq!(owner.state().releases(), 1);
}

#[test]
fn close_then_unreachability_releases_once() {
    let registry = ReclamationRegistry::new();
    let owner = Owner::with_registry(&registry, 5);

    assert!(owner.close());
    assert!(!registry.reclaim(owner.id()));
    assert_eq!(owner.state().releases(), 1);
}

#[test]
fn dropping_the_owner_fires_the_automatic_path() {
    let registry = ReclamationRegistry::new();
    let owner = Owner::with_registry(&registry, 4);
    let state = owner.state();

    drop(owner);
    assert_eq!(state.piles(), 0);
    assert_eq!(state.releases(), 1);
    assert_eq!(registry.live_count(), 0);
}

#[test]
fn racing_close_and_reclaim_has_exactly_one_winner() {
    for _ in 0..64 {
        let registry = ReclamationRegistry::new();
        let owner = Owner::with_registry(&registry, 1);
        let state = owner.state();
        let id = owner.id();
        let barrier = Barrier::new(2);

        let (explicit_won, reclaim_won) = std::thread::scope(|scope| {
            let closer = scope.spawn(|| {
                barrier.wait();
                owner.close()
            });
            let reclaimer = scope.spawn(|| {
                barrier.wait();
                registry.reclaim(id)
            });
            (closer.join().unwrap(), reclaimer.join().unwrap())
        });

        // Never zero winners, never two.
        assert!(explicit_won ^ reclaim_won);
        assert_eq!(state.piles(), 0);
        assert_eq!(state.releases(), 1);
    }
}

#[test]
fn owners_do_not_interfere() {
    let registry = ReclamationRegistry::new();
    let kept = Owner::with_registry(&registry, 9);
    let closed = Owner::with_registry(&registry, 3);

    assert!(closed.close());
    assert_eq!(closed.piles(), 0);
    assert_eq!(kept.piles(), 9);
    assert_eq!(kept.state().releases(), 0);
    assert_eq!(registry.live_count(), 1);
}

#[test]
fn global_registry_backs_the_default_constructor() {
    let owner = Owner::new(3);
    assert!(owner.close());
    assert_eq!(owner.piles(), 0);
    assert!(!owner.close());
}

mod release_events {
    use super::*;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::registry::Registry;

    /// Counts the one-per-release info event emitted by the registry.
    struct ReleaseCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ReleaseCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let meta = event.metadata();
            if *meta.level() == Level::INFO && meta.target() == "reclaim::registry" {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn exactly_one_release_event_per_owner() {
        let events = Arc::new(AtomicUsize::new(0));
        let subscriber = Registry::default().with(ReleaseCounter(Arc::clone(&events)));

        tracing::subscriber::with_default(subscriber, || {
            let registry = ReclamationRegistry::new();
            let owner = Owner::with_registry(&registry, 3);
            assert!(owner.close());
            assert!(!owner.close());
            drop(owner);
        });

        assert_eq!(events.load(Ordering::SeqCst), 1);
    }
}

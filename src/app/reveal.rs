use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::RevealState;

/// Fraction of a section that must be visible before its entrance
/// animation runs.
const REVEAL_THRESHOLD: f64 = 0.1;

/// One-shot visibility trigger for a section's entrance animation. The
/// returned signal latches true on first intersection and never reverts;
/// the underlying observer is stopped as soon as the latch trips.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let state = RwSignal::new(RevealState::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let in_view = entries.iter().any(|entry| entry.is_intersecting());
            state.update(|s| *s = s.observe(in_view));
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    Effect::new(move |_| {
        if state.get().is_revealed() {
            stop();
        }
    });

    Signal::derive(move || state.get().is_revealed())
}

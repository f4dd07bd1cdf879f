//! Collections of bindings and event dispatch.

use std::fmt;
use std::sync::Arc;

use crate::binding::Binding;
use crate::event::InputEvent;

/// Pre-dispatch gate over a whole [`InputBindings`] table.
pub type Filter<B> = Arc<dyn Fn(&InputEvent, &B) -> bool + Send + Sync>;

/// An immutable set of bindings for one behavior type.
///
/// Tables are built once and shared: wrap one in an `Arc` (typically behind a
/// `LazyLock`) and hand the same table to every behavior instance.
pub struct InputBindings<B> {
    kind: Kind<B>,
}

enum Kind<B> {
    Table {
        filter: Option<Filter<B>>,
        bindings: Vec<Binding<B>>,
    },
    Combined(Vec<Arc<InputBindings<B>>>),
}

impl<B> InputBindings<B> {
    /// A table with no filter.
    ///
    /// Duplicate bindings (equal phase, action, and spec list) are dropped;
    /// the rest keep declaration order, which is also firing order.
    pub fn new(bindings: impl IntoIterator<Item = Binding<B>>) -> Self {
        Self {
            kind: Kind::Table {
                filter: None,
                bindings: dedup(bindings),
            },
        }
    }

    /// A table gated by `filter`. Events the filter rejects fire nothing.
    pub fn with_filter<F>(filter: F, bindings: impl IntoIterator<Item = Binding<B>>) -> Self
    where
        F: Fn(&InputEvent, &B) -> bool + Send + Sync + 'static,
    {
        Self {
            kind: Kind::Table {
                filter: Some(Arc::new(filter)),
                bindings: dedup(bindings),
            },
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Fire each part in order. Every part keeps its own filter.
    pub fn combine(parts: impl IntoIterator<Item = Arc<InputBindings<B>>>) -> Self {
        Self {
            kind: Kind::Combined(parts.into_iter().collect()),
        }
    }

    /// Dispatch `event` to every matching binding, passing `behavior` to their actions.
    pub fn fire(&self, event: &InputEvent, behavior: &B) {
        match &self.kind {
            Kind::Table { filter, bindings } => {
                if let Some(filter) = filter
                    && !filter(event, behavior)
                {
                    log::trace!("Input filter rejected {:?}", event.kind());
                    return;
                }
                bindings
                    .iter()
                    .filter(|binding| binding.accepts_phase(event))
                    .for_each(|binding| binding.invoke(event, behavior));
            }
            Kind::Combined(parts) => {
                for part in parts {
                    part.fire(event, behavior);
                }
            }
        }
    }

    /// Every binding, flattened across combined parts, in firing order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Binding<B>> + '_> {
        match &self.kind {
            Kind::Table { bindings, .. } => Box::new(bindings.iter()),
            Kind::Combined(parts) => Box::new(parts.iter().flat_map(|part| part.iter())),
        }
    }

    /// Number of bindings, counted across combined parts.
    pub fn len(&self) -> usize {
        match &self.kind {
            Kind::Table { bindings, .. } => bindings.len(),
            Kind::Combined(parts) => parts.iter().map(|part| part.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B> Default for InputBindings<B> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<B> FromIterator<Binding<B>> for InputBindings<B> {
    fn from_iter<I: IntoIterator<Item = Binding<B>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<B> fmt::Debug for InputBindings<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Table { filter, bindings } => f
                .debug_struct("InputBindings")
                .field("filtered", &filter.is_some())
                .field("bindings", bindings)
                .finish(),
            Kind::Combined(parts) => f.debug_tuple("CombinedInputBindings").field(parts).finish(),
        }
    }
}

fn dedup<B>(bindings: impl IntoIterator<Item = Binding<B>>) -> Vec<Binding<B>> {
    let mut unique: Vec<Binding<B>> = Vec::new();
    for binding in bindings {
        if unique.contains(&binding) {
            log::debug!("Dropping duplicate binding {:?}", binding);
        } else {
            unique.push(binding);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Action, KeyBinding, MouseBinding};
    use crate::chord::KeyChord;
    use crate::event::{KeyInput, KeyPhase, MouseButton, MouseInput, MousePhase, Phase};
    use std::cell::RefCell;
    use winit::keyboard::KeyCode;

    #[derive(Default)]
    struct Recorder {
        log: RefCell<Vec<&'static str>>,
        blocked: bool,
    }

    fn record(name: &'static str) -> Action<Recorder> {
        Action::named(name, move |r: &Recorder| r.log.borrow_mut().push(name))
    }

    fn key(code: KeyCode, name: &'static str) -> Binding<Recorder> {
        KeyBinding::<Recorder>::builder()
            .with_key(code)
            .action(record(name))
            .build()
            .unwrap()
            .into()
    }

    fn catch_all(name: &'static str) -> Binding<Recorder> {
        KeyBinding::new(vec![], Phase::Any, record(name)).unwrap().into()
    }

    fn press(code: KeyCode) -> InputEvent {
        KeyInput::pressed(code).into()
    }

    #[test]
    fn test_all_matching_bindings_fire_in_declaration_order() {
        let bindings = InputBindings::new([
            key(KeyCode::KeyA, "first"),
            key(KeyCode::KeyB, "other"),
            catch_all("second"),
        ]);
        let recorder = Recorder::default();

        bindings.fire(&press(KeyCode::KeyA), &recorder);
        assert_eq!(*recorder.log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_phase_incompatible_bindings_skipped() {
        let bindings = InputBindings::new([key(KeyCode::KeyA, "press")]);
        let recorder = Recorder::default();

        bindings.fire(&KeyInput::released(KeyCode::KeyA).into(), &recorder);
        bindings.fire(
            &MouseInput::button(MousePhase::Pressed, MouseButton::Primary).into(),
            &recorder,
        );
        assert!(recorder.log.borrow().is_empty());
    }

    #[test]
    fn test_rejecting_filter_blocks_everything() {
        let bindings = InputBindings::with_filter(|_, _| false, [catch_all("never")]);
        let recorder = Recorder::default();

        bindings.fire(&press(KeyCode::KeyA), &recorder);
        bindings.fire(&KeyInput::released(KeyCode::Enter).into(), &recorder);
        assert!(recorder.log.borrow().is_empty());
    }

    #[test]
    fn test_filter_sees_behavior_state() {
        let bindings =
            InputBindings::with_filter(|_, r: &Recorder| !r.blocked, [catch_all("fired")]);

        let blocked = Recorder {
            blocked: true,
            ..Recorder::default()
        };
        bindings.fire(&press(KeyCode::KeyA), &blocked);
        assert!(blocked.log.borrow().is_empty());

        let open = Recorder::default();
        bindings.fire(&press(KeyCode::KeyA), &open);
        assert_eq!(*open.log.borrow(), vec!["fired"]);
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let binding = key(KeyCode::KeyA, "once");
        let bindings = InputBindings::new([binding.clone(), binding]);
        assert_eq!(bindings.len(), 1);

        let recorder = Recorder::default();
        bindings.fire(&press(KeyCode::KeyA), &recorder);
        assert_eq!(*recorder.log.borrow(), vec!["once"]);
    }

    #[test]
    fn test_combine_fires_parts_in_order_with_own_filters() {
        let x = Arc::new(InputBindings::new([key(KeyCode::KeyA, "x")]));
        let blocked = Arc::new(InputBindings::with_filter(
            |_, _| false,
            [key(KeyCode::KeyA, "blocked")],
        ));
        let y = Arc::new(InputBindings::new([
            catch_all("y"),
            MouseBinding::<Recorder>::builder()
                .action(record("mouse"))
                .build()
                .unwrap()
                .into(),
        ]));

        let combined = InputBindings::combine([x, blocked, y]);
        assert_eq!(combined.len(), 4);

        let recorder = Recorder::default();
        combined.fire(&press(KeyCode::KeyA), &recorder);
        assert_eq!(*recorder.log.borrow(), vec!["x", "y"]);

        combined.fire(
            &MouseInput::button(MousePhase::Pressed, MouseButton::Primary).into(),
            &recorder,
        );
        assert_eq!(*recorder.log.borrow(), vec!["x", "y", "mouse"]);
    }

    #[test]
    fn test_iter_flattens_combined_parts() {
        let a = Arc::new(InputBindings::new([key(KeyCode::KeyA, "a")]));
        let b = Arc::new(InputBindings::new([key(KeyCode::KeyB, "b")]));
        let combined = InputBindings::combine([a, b]);

        let names: Vec<_> = combined.iter().filter_map(|b| b.action().name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_tables() {
        let empty = InputBindings::<Recorder>::empty();
        assert!(empty.is_empty());
        empty.fire(&press(KeyCode::KeyA), &Recorder::default());

        let collected: InputBindings<Recorder> =
            [key(KeyCode::KeyA, "a"), key(KeyCode::KeyB, "b")].into_iter().collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn test_tables_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InputBindings<Recorder>>();
    }

    #[test]
    fn test_typed_events_never_fire_key_chords() {
        let any_phase_chord: Binding<Recorder> =
            KeyBinding::new(vec![KeyChord::new(KeyCode::KeyA)], Phase::Any, record("a"))
                .unwrap()
                .into();
        let bindings = InputBindings::new([key(KeyCode::KeyA, "pressed"), any_phase_chord]);
        let recorder = Recorder::default();
        let typed = KeyInput::new(KeyPhase::Typed, KeyCode::KeyA, Default::default());
        bindings.fire(&typed.into(), &recorder);
        assert!(recorder.log.borrow().is_empty());
    }

    #[test]
    fn test_typed_events_fire_any_phase_catch_all() {
        let bindings = InputBindings::new([key(KeyCode::KeyA, "chord"), catch_all("any")]);
        let recorder = Recorder::default();
        let typed = KeyInput::new(KeyPhase::Typed, KeyCode::KeyA, Default::default());
        bindings.fire(&typed.into(), &recorder);
        assert_eq!(*recorder.log.borrow(), vec!["any"]);
    }
}

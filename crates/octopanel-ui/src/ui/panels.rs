//! Application-owned panel instances
//!
//! Every panel type is built at most once per application. The registry is
//! owned by the UI context created at startup and handed to whoever needs to
//! open a panel, so there is no global panel cache.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
pub struct PanelRegistry {
    panels: RefCell<HashMap<TypeId, Rc<dyn Any>>>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The instance of `P`, if it has been built.
    pub fn get<P: 'static>(&self) -> Option<Rc<P>> {
        let panels = self.panels.borrow();
        let panel = panels.get(&TypeId::of::<P>())?.clone();
        panel.downcast::<P>().ok()
    }

    /// Return the instance of `P`, building it with `init` on first use.
    pub fn get_or_init<P: 'static>(&self, init: impl FnOnce() -> P) -> Rc<P> {
        match self.try_get_or_init::<P, std::convert::Infallible>(|| Ok(init())) {
            Ok(panel) => panel,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`PanelRegistry::get_or_init`]. Nothing is stored
    /// when `init` fails.
    pub fn try_get_or_init<P: 'static, E>(
        &self,
        init: impl FnOnce() -> Result<P, E>,
    ) -> Result<Rc<P>, E> {
        if let Some(panel) = self.get::<P>() {
            return Ok(panel);
        }

        // init may open other panels, so no borrow is held while it runs
        let built = Rc::new(init()?);

        let mut panels = self.panels.borrow_mut();
        let entry = panels
            .entry(TypeId::of::<P>())
            .or_insert_with(|| built as Rc<dyn Any>)
            .clone();
        drop(panels);

        Ok(entry
            .downcast::<P>()
            .unwrap_or_else(|_| unreachable!("registry entries are keyed by their own TypeId")))
    }

    pub fn len(&self) -> usize {
        self.panels.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counter(u32);
    struct Other;

    #[test]
    fn test_builds_once() {
        let registry = PanelRegistry::new();
        let builds = Cell::new(0);

        let a = registry.get_or_init(|| {
            builds.set(builds.get() + 1);
            Counter(1)
        });
        let b = registry.get_or_init(|| {
            builds.set(builds.get() + 1);
            Counter(2)
        });

        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(b.0, 1);
        assert_eq!(builds.get(), 1);
    }

    #[test]
    fn test_types_are_independent() {
        let registry = PanelRegistry::new();
        registry.get_or_init(|| Counter(3));
        assert!(registry.get::<Other>().is_none());
        registry.get_or_init(|| Other);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_failed_init_is_not_cached() {
        let registry = PanelRegistry::new();
        let err = registry.try_get_or_init::<Counter, _>(|| Err("no display"));
        assert!(err.is_err());
        assert!(registry.is_empty());

        let ok = registry.try_get_or_init::<Counter, &str>(|| Ok(Counter(4)));
        assert_eq!(ok.map(|c| c.0), Ok(4));
    }

    #[test]
    fn test_reentrant_init() {
        let registry = PanelRegistry::new();
        let outer = registry.get_or_init(|| {
            let inner = registry.get_or_init(|| Other);
            Counter(Rc::strong_count(&inner) as u32)
        });
        assert!(outer.0 >= 1);
        assert!(registry.get::<Other>().is_some());
    }
}

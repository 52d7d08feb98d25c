//! Shared-state alias used by GTK callbacks.
//!
//! GTK signal handlers capture shared state by cloning `Rc` handles, so the
//! same wrapper shows up in every panel.
//!
//! ```rust,ignore
//! use octopanel_core::types::*;
//!
//! let phase: Shared<CalibrationPhase> = shared(CalibrationPhase::Idle);
//! *phase.borrow_mut() = CalibrationPhase::Calibrating;
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Use when state is shared between GTK callbacks on the main thread.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_clones_point_to_same_value() {
        let a = shared(1);
        let b = a.clone();
        *b.borrow_mut() = 7;
        assert_eq!(*a.borrow(), 7);
        assert!(Rc::ptr_eq(&a, &b));
    }
}

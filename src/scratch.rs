//! Reusable working registers for the composite operations.
//!
//! The ladder, the Elligator maps and Decaf (de)compression run fixed
//! register programs; a [`Scratchpad`] is the register file they run in.
//! Field elements are `Copy`, so a pad costs nothing to create — the point
//! of the pool is to keep hot callers (repeated `from_hash`, batched
//! `mul_x`) off the allocator entirely and to mirror the scoped-acquisition
//! contract: a pooled pad is returned on every exit path, including panics.
//!
//! Pads are handed to callees dirty. Every register program overwrites
//! what it reads, so acquire never clears.

use crate::field::FieldOps;

/// Working registers shared by the ladder, Elligator and Decaf programs.
#[derive(Clone, Copy, Debug)]
pub struct Scratchpad<F: FieldOps> {
    pub(crate) r0: F,
    pub(crate) r1: F,
    pub(crate) r2: F,
    pub(crate) r3: F,
    pub(crate) r4: F,
    pub(crate) r5: F,
}

impl<F: FieldOps> Scratchpad<F> {
    /// Create a fresh scratchpad.
    pub fn new() -> Self {
        Self {
            r0: F::ZERO,
            r1: F::ZERO,
            r2: F::ZERO,
            r3: F::ZERO,
            r4: F::ZERO,
            r5: F::ZERO,
        }
    }
}

impl<F: FieldOps> Default for Scratchpad<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `f` with a scratchpad for the field `F`.
///
/// With `std`, pads come from a thread-local free list keyed by the
/// concrete field type and go back to it when `f` returns or unwinds; each
/// thread owns its pool, so concurrent scalar multiplications on the same
/// curve never contend. Without `std` this just builds a pad on the stack.
#[cfg(feature = "std")]
pub fn with_scratchpad<F: FieldOps, R>(f: impl FnOnce(&mut Scratchpad<F>) -> R) -> R {
    let mut guard = pool::Guard::<F>::acquire();
    f(guard.pad())
}

/// Run `f` with a scratchpad for the field `F`.
#[cfg(not(feature = "std"))]
pub fn with_scratchpad<F: FieldOps, R>(f: impl FnOnce(&mut Scratchpad<F>) -> R) -> R {
    let mut pad = Scratchpad::new();
    f(&mut pad)
}

#[cfg(feature = "std")]
mod pool {
    use super::{FieldOps, Scratchpad};
    use std::any::{Any, TypeId};
    use std::boxed::Box;
    use std::collections::HashMap;
    use std::vec::Vec;

    std::thread_local! {
        static POOL: core::cell::RefCell<HashMap<TypeId, Vec<Box<dyn Any>>>> =
            core::cell::RefCell::new(HashMap::new());
    }

    /// Owns a pad between acquisition and return-to-pool; `Drop` performs
    /// the return, so release happens on every exit path.
    pub(super) struct Guard<F: FieldOps> {
        pad: Option<Box<Scratchpad<F>>>,
    }

    impl<F: FieldOps> Guard<F> {
        pub(super) fn acquire() -> Self {
            let pad = POOL.with(|pool| {
                pool.borrow_mut()
                    .entry(TypeId::of::<Scratchpad<F>>())
                    .or_default()
                    .pop()
            });
            let pad = match pad.and_then(|any| any.downcast::<Scratchpad<F>>().ok()) {
                Some(pad) => pad,
                None => Box::new(Scratchpad::new()),
            };
            Guard { pad: Some(pad) }
        }

        pub(super) fn pad(&mut self) -> &mut Scratchpad<F> {
            self.pad.as_mut().expect("scratchpad taken")
        }
    }

    impl<F: FieldOps> Drop for Guard<F> {
        fn drop(&mut self) {
            if let Some(pad) = self.pad.take() {
                POOL.with(|pool| {
                    pool.borrow_mut()
                        .entry(TypeId::of::<Scratchpad<F>>())
                        .or_default()
                        .push(pad as Box<dyn Any>);
                });
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::super::with_scratchpad;
        use crate::curves::curve1174::Fe1174;
        use ff::Field;

        #[test]
        fn pool_reuses_pads_and_survives_dirty_state() {
            let out = with_scratchpad::<Fe1174, _>(|pad| {
                pad.r0 = Fe1174::ONE;
                pad.r5 = Fe1174::TWO;
                pad.r0 + pad.r5
            });
            assert_eq!(out, Fe1174::from_u64(3));

            // Second acquisition may see the dirty registers; callers must
            // treat them as arbitrary.
            with_scratchpad::<Fe1174, _>(|pad| {
                pad.r0 = Fe1174::ZERO;
            });
        }

        #[test]
        fn pool_restores_pad_after_panic() {
            let caught = std::panic::catch_unwind(|| {
                with_scratchpad::<Fe1174, _>(|_pad| panic!("interrupted"));
            });
            assert!(caught.is_err());
            // The pad went back to the pool; acquiring again still works.
            let one = with_scratchpad::<Fe1174, _>(|_pad| Fe1174::ONE);
            assert_eq!(one, Fe1174::ONE);
        }
    }
}

//! Compute-once, read-many memoization cell.

use std::any::type_name;
use std::cell::OnceCell;
use std::fmt;

/// A lazily computed value tied to its owner.
///
/// The cell stores a plain initializer function and runs it at most once,
/// on the first [`get_with`](Self::get_with) call; every later access
/// returns the cached value. Cloning yields a fresh, uncomputed cell: the
/// cached value is never shared between unrelated copies, it belongs to
/// the owning value alone.
///
/// Interior mutability is a single-threaded [`OnceCell`]; concurrent
/// first-use needs external synchronization.
///
/// # Examples
///
/// ```
/// use argsift_core::Memo;
///
/// let memo: Memo<usize, str> = Memo::new(|s| s.len());
/// assert!(!memo.is_computed());
///
/// assert_eq!(*memo.get_with("needle"), 6);
/// assert!(memo.is_computed());
///
/// // later accesses reuse the cached value
/// assert_eq!(*memo.get(), 6);
/// ```
pub struct Memo<T, A: ?Sized> {
    cell: OnceCell<T>,
    init: fn(&A) -> T,
}

impl<T, A: ?Sized> Memo<T, A> {
    /// Creates an empty cell around `init`.
    pub const fn new(init: fn(&A) -> T) -> Self {
        Self {
            cell: OnceCell::new(),
            init,
        }
    }

    /// Returns the cached value, computing it from `arg` on first use.
    pub fn get_with(&self, arg: &A) -> &T {
        self.cell.get_or_init(|| (self.init)(arg))
    }

    /// Returns the already-computed value.
    ///
    /// # Panics
    ///
    /// Panics when the value was never computed; the initializer needs an
    /// argument this accessor cannot supply, so calling it here would be a
    /// caller bug, not a recoverable state.
    pub fn get(&self) -> &T {
        self.cell.get().unwrap_or_else(|| {
            panic!(
                "memoized {} accessed before first computation",
                type_name::<T>()
            )
        })
    }

    /// Whether the value has been computed yet.
    pub fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T, A: ?Sized> Clone for Memo<T, A> {
    /// Clones the initializer only; the clone starts uncomputed.
    fn clone(&self) -> Self {
        Self::new(self.init)
    }
}

impl<T, A: ?Sized> fmt::Debug for Memo<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("computed", &self.is_computed())
            .finish_non_exhaustive()
    }
}

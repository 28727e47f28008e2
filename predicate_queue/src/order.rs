/// Decides which of two values must leave the queue first.
///
/// `is_lower(a, b)` returns true if `a` has lower priority than `b`,
/// so `b` is popped before `a`.
///
/// Implementation must be a strict weak ordering over the values actually
/// inserted: irreflexive and transitive.
/// It is logic error to violate it: pop order becomes unspecified,
/// but queue never panics or loses elements because of it.
pub trait Order<T> {
    fn is_lower(&self, a: &T, b: &T) -> bool;
}

/// Returns true if `a` must be popped before `b`.
///
/// This is dual of [`Order::is_lower`] with swapped arguments,
/// it is used to find the *least* prioritized element
/// using same predicate as heap itself.
#[inline(always)]
pub(crate) fn outranks<T, O: Order<T> + ?Sized>(order: &O, a: &T, b: &T) -> bool {
    order.is_lower(b, a)
}

/// Order derived from [`Ord`] implementation of values.
///
/// Ascending order pops the smallest value first (min-queue),
/// descending pops the biggest value first (max-queue).
///
/// ### Examples
///
/// ```
/// use predicate_queue::{Natural, Order};
/// assert!(Natural::ascending().is_lower(&5, &3));
/// assert!(Natural::descending().is_lower(&3, &5));
/// assert!(!Natural::ascending().is_lower(&4, &4));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Natural {
    ascending: bool,
}

impl Natural {
    /// `ascending == true` makes the lowest value the most prioritized.
    #[inline]
    pub const fn new(ascending: bool) -> Self {
        Self { ascending }
    }

    /// Lowest value has highest priority.
    #[inline]
    pub const fn ascending() -> Self {
        Self::new(true)
    }

    /// Highest value has highest priority.
    #[inline]
    pub const fn descending() -> Self {
        Self::new(false)
    }

    #[inline]
    pub const fn is_ascending(&self) -> bool {
        self.ascending
    }
}

impl<T: Ord> Order<T> for Natural {
    #[inline(always)]
    fn is_lower(&self, a: &T, b: &T) -> bool {
        if self.ascending {
            a > b
        } else {
            a < b
        }
    }
}

/// Order given by arbitrary closure with semantics of [`Order::is_lower`].
///
/// ### Examples
///
/// ```
/// use predicate_queue::{ByPredicate, Order};
/// // Shorter strings are less important.
/// let order = ByPredicate::new(|a: &&str, b: &&str| a.len() < b.len());
/// assert!(order.is_lower(&"a", &"abc"));
/// ```
#[derive(Copy, Clone)]
pub struct ByPredicate<F> {
    predicate: F,
}

impl<F> ByPredicate<F> {
    #[inline]
    pub const fn new(predicate: F) -> Self {
        Self { predicate }
    }

    #[inline]
    pub fn into_inner(self) -> F {
        self.predicate
    }
}

impl<T, F> Order<T> for ByPredicate<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn is_lower(&self, a: &T, b: &T) -> bool {
        (self.predicate)(a, b)
    }
}

impl<F> std::fmt::Debug for ByPredicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "ByPredicate")
    }
}

impl<T, O: Order<T> + ?Sized> Order<T> for &O {
    #[inline(always)]
    fn is_lower(&self, a: &T, b: &T) -> bool {
        (**self).is_lower(a, b)
    }
}

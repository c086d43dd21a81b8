//! Reductions over adjacent pairs of a sequence
//!
//! A pairwise fold takes a sequence `[a0, a1, a2, ...]`, applies a pair function to
//! every adjacent pair `(a0, a1), (a1, a2), ...` and accumulates the results left to
//! right, starting from an initial value:
//!
//! ```text
//! (a -> a -> b) -> [a] -> (c -> b -> c) -> c -> c
//! ```
//!
//! The fold is iterative, so it runs over tracks of any length without growing the stack.

/// Iterator over successive adjacent pairs of another iterator
///
/// `[1, 2, 3]` yields `(1, 2), (2, 3)`. Fewer than two elements yield nothing.
#[derive(Debug, Clone)]
pub struct Pairs<I: Iterator> {
    iter: I,
    prev: Option<I::Item>,
}

impl<I> Iterator for Pairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next = self.iter.next()?;
        let prev = self.prev.replace(next.clone())?;
        Some((prev, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.prev.is_none() {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }
}

/// Build a [`Pairs`] iterator over `items`
pub fn pairs<I>(items: I) -> Pairs<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mut iter = items.into_iter();
    let prev = iter.next();
    Pairs { iter, prev }
}

/// Fold the results of `pair_fn` over every adjacent pair through `combine`
///
/// # Arguments
/// * `items` - Ordered sequence to walk
/// * `pair_fn` - Maps two adjacent elements to a result
/// * `combine` - Merges the accumulator with one pair result
/// * `init` - Initial accumulator, returned unchanged when there are no pairs
pub fn pair_fold<I, R, B, F, G>(items: I, mut pair_fn: F, mut combine: G, init: B) -> B
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> R,
    G: FnMut(B, R) -> B,
{
    pairs(items).fold(init, |acc, (a, b)| combine(acc, pair_fn(a, b)))
}

/// Same as [`pair_fold`] with `+` as the combiner and `0.0` as the initial value
#[inline]
pub fn pair_sum<I, F>(items: I, pair_fn: F) -> f64
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> f64,
{
    pair_fold(items, pair_fn, |acc, x| acc + x, 0.0)
}

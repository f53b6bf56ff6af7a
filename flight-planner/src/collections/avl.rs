//! AVL-balanced ordered set.
//!
//! Nodes are owned top-down with no parent pointers. Every mutating helper
//! takes a subtree by value and hands back the new subtree root, so rotations
//! are plain ownership transfers.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Peekable;

/// A total order over `T`.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a comparison closure into a [`Comparator`].
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
    /// Height of the subtree rooted here; a leaf has height 0.
    height: i32,
}

fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Restores the height cache and the AVL condition at `node`.
fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        // Left-right case
        if node.left.as_ref().is_some_and(|l| l.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if balance < -1 {
        // Right-left case
        if node.right.as_ref().is_some_and(|r| r.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

fn insert_at<T, C: Comparator<T>>(
    link: Link<T>,
    value: T,
    replace: bool,
    cmp: &C,
    inserted: &mut bool,
) -> Box<Node<T>> {
    let Some(mut node) = link else {
        *inserted = true;
        return Node::leaf(value);
    };

    match cmp.compare(&value, &node.value) {
        Ordering::Less => {
            node.left = Some(insert_at(node.left.take(), value, replace, cmp, inserted));
        }
        Ordering::Greater => {
            node.right = Some(insert_at(node.right.take(), value, replace, cmp, inserted));
        }
        Ordering::Equal => {
            if replace {
                node.value = value;
            }
            return node;
        }
    }

    rebalance(node)
}

/// Detaches the minimum of a subtree, rebalancing along the left spine.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(rebalance(node)), min)
        }
    }
}

fn remove_at<T, F>(link: Link<T>, probe: &F, removed: &mut Option<T>) -> Link<T>
where
    F: Fn(&T) -> Ordering,
{
    let mut node = link?;

    match probe(&node.value) {
        Ordering::Less => node.left = remove_at(node.left.take(), probe, removed),
        Ordering::Greater => node.right = remove_at(node.right.take(), probe, removed),
        Ordering::Equal => {
            let Node {
                value, left, right, ..
            } = *node;
            *removed = Some(value);

            return match (left, right) {
                (None, None) => None,
                (Some(child), None) | (None, Some(child)) => Some(child),
                (Some(left), Some(right)) => {
                    let (right, successor) = take_min(right);
                    let replacement = Box::new(Node {
                        value: successor,
                        left: Some(left),
                        right,
                        height: 0,
                    });
                    Some(rebalance(replacement))
                }
            };
        }
    }

    Some(rebalance(node))
}

/// Builds a height-balanced tree from `len` items yielded in ascending order.
fn build_balanced<T, I: Iterator<Item = T>>(items: &mut I, len: usize) -> Link<T> {
    if len == 0 {
        return None;
    }

    let left_len = len / 2;
    let left = build_balanced(items, left_len);
    let value = items.next()?;
    let right = build_balanced(items, len - left_len - 1);

    let mut node = Box::new(Node {
        value,
        left,
        right,
        height: 0,
    });
    node.update_height();
    Some(node)
}

/// An ordered set backed by an AVL tree.
///
/// The set is ordered by a [`Comparator`] rather than by `Ord` directly, which
/// lets the same tree back an ordered map (entries compared by key only).
///
/// Lookups that only know part of an element take a *probe*: a closure that
/// returns how the sought element orders relative to the element it is shown.
#[derive(Clone)]
pub struct AvlSet<T, C = NaturalOrder> {
    root: Link<T>,
    cmp: C,
    len: usize,
}

impl<T: Ord> AvlSet<T> {
    /// Creates an empty set ordered by `Ord`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Default> Default for AvlSet<T, C> {
    fn default() -> Self {
        Self {
            root: None,
            cmp: C::default(),
            len: 0,
        }
    }
}

impl<T, C: Comparator<T>> AvlSet<T, C> {
    /// Creates an empty set ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            cmp,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree; `-1` when empty.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts `value` unless an equal element is already present.
    ///
    /// Returns `true` if the set grew.
    pub fn insert(&mut self, value: T) -> bool {
        self.insert_impl(value, false)
    }

    /// Inserts `value`, overwriting an equal element if one is present.
    ///
    /// Returns `true` if the set grew.
    pub fn insert_or_replace(&mut self, value: T) -> bool {
        self.insert_impl(value, true)
    }

    fn insert_impl(&mut self, value: T, replace: bool) -> bool {
        let mut inserted = false;
        let root = self.root.take();
        self.root = Some(insert_at(root, value, replace, &self.cmp, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes and returns the element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let cmp = &self.cmp;
        let mut removed = None;
        let root = self.root.take();
        self.root = remove_at(root, &|v: &T| cmp.compare(value, v), &mut removed);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Removes and returns the element matched by `probe`.
    pub fn remove_by<F>(&mut self, probe: F) -> Option<T>
    where
        F: Fn(&T) -> Ordering,
    {
        let mut removed = None;
        let root = self.root.take();
        self.root = remove_at(root, &probe, &mut removed);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Returns the stored element equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.find_by(|v| self.cmp.compare(value, v))
    }

    pub fn find_by<F>(&self, probe: F) -> Option<&T>
    where
        F: Fn(&T) -> Ordering,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match probe(&node.value) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Mutable access to the element matched by `probe`.
    ///
    /// Callers must not change the element's position in the order.
    pub fn find_by_mut<F>(&mut self, probe: F) -> Option<&mut T>
    where
        F: Fn(&T) -> Ordering,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match probe(&node.value) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Ascending iterator over the whole set.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Ascending iterator starting at the first element `>= value`.
    ///
    /// `value` does not need to be in the set.
    pub fn higher_iter(&self, value: &T) -> Iter<'_, T> {
        self.higher_iter_by(|v| self.cmp.compare(value, v))
    }

    /// Ascending iterator starting at the first element the probe does not
    /// place after.
    pub fn higher_iter_by<F>(&self, probe: F) -> Iter<'_, T>
    where
        F: Fn(&T) -> Ordering,
    {
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if probe(&node.value) == Ordering::Greater {
                current = node.right.as_deref();
            } else {
                stack.push(node);
                current = node.left.as_deref();
            }
        }
        Iter { stack }
    }

    /// Returns the union of `self` and `other` as a new balanced set.
    ///
    /// Both inputs are walked once in order; where both hold an equal
    /// element, the one from `self` wins. The result is built directly from
    /// the merged sequence rather than by repeated insertion.
    pub fn merge(&self, other: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        let mut merged = Vec::with_capacity(self.len + other.len);
        let mut ours: Peekable<Iter<'_, T>> = self.iter().peekable();
        let mut theirs: Peekable<Iter<'_, T>> = other.iter().peekable();

        loop {
            let order = match (ours.peek(), theirs.peek()) {
                (Some(a), Some(b)) => self.cmp.compare(a, b),
                _ => break,
            };
            match order {
                Ordering::Less => merged.extend(ours.next().cloned()),
                Ordering::Greater => merged.extend(theirs.next().cloned()),
                Ordering::Equal => {
                    merged.extend(ours.next().cloned());
                    theirs.next();
                }
            }
        }
        merged.extend(ours.cloned());
        merged.extend(theirs.cloned());

        Self::from_sorted(merged, self.cmp.clone())
    }

    /// Builds a set from a strictly ascending vector.
    fn from_sorted(items: Vec<T>, cmp: C) -> Self {
        let len = items.len();
        let root = build_balanced(&mut items.into_iter(), len);
        Self { root, cmp, len }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for AvlSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(Iter::new(self.root.as_deref()))
            .finish()
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for AvlSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, C: Comparator<T>> Extend<T> for AvlSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a AvlSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`AvlSet`].
///
/// The top of the stack is always the node whose value comes next; below it
/// sit the ancestors still waiting to be yielded.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

/// Walks the tree checking ordering, balance and cached heights.
///
/// Returns the subtree height.
#[cfg(test)]
fn check_subtree<T, C: Comparator<T>>(link: &Link<T>, cmp: &C) -> i32 {
    let Some(node) = link else {
        return -1;
    };
    if let Some(left) = &node.left {
        assert_eq!(cmp.compare(&left.value, &node.value), Ordering::Less);
    }
    if let Some(right) = &node.right {
        assert_eq!(cmp.compare(&right.value, &node.value), Ordering::Greater);
    }
    let lh = check_subtree(&node.left, cmp);
    let rh = check_subtree(&node.right, cmp);
    assert!((lh - rh).abs() <= 1, "unbalanced node: {lh} vs {rh}");
    assert_eq!(node.height, 1 + lh.max(rh), "stale height cache");
    node.height
}

#[cfg(test)]
impl<T, C: Comparator<T>> AvlSet<T, C> {
    pub(crate) fn assert_invariants(&self) {
        check_subtree(&self.root, &self.cmp);
        let values: Vec<&T> = self.iter().collect();
        assert_eq!(values.len(), self.len);
        for pair in values.windows(2) {
            assert_eq!(self.cmp.compare(pair[0], pair[1]), Ordering::Less);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(values: &[i32]) -> AvlSet<i32> {
        values.iter().copied().collect()
    }

    fn contents(set: &AvlSet<i32>) -> Vec<i32> {
        set.iter().copied().collect()
    }

    #[test]
    fn empty_set() {
        let set: AvlSet<i32> = AvlSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.height(), -1);
        assert_eq!(set.first(), None);
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn ascending_inserts_stay_balanced() {
        let mut set = AvlSet::new();
        for i in 0..1000 {
            assert!(set.insert(i));
        }
        set.assert_invariants();
        assert_eq!(set.len(), 1000);
        // An AVL tree of 1000 nodes is at most ~1.44 log2(n) high
        assert!(set.height() <= 14);
    }

    #[test]
    fn duplicate_insert_does_not_grow() {
        let mut set = set_of(&[5, 3, 8]);
        assert!(!set.insert(3));
        assert_eq!(set.len(), 3);
        assert_eq!(contents(&set), vec![3, 5, 8]);
    }

    #[test]
    fn insert_or_replace_overwrites_equal_element() {
        type Pair = (i32, &'static str);

        // Ordered by the first component only
        let mut set = AvlSet::with_comparator(FnOrder(|a: &Pair, b: &Pair| a.0.cmp(&b.0)));
        assert!(set.insert((1, "one")));
        assert!(!set.insert((1, "uno")));
        assert_eq!(set.find(&(1, "")), Some(&(1, "one")));

        assert!(!set.insert_or_replace((1, "uno")));
        assert_eq!(set.find(&(1, "")), Some(&(1, "uno")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_leaf_single_child_and_two_children() {
        let mut set = set_of(&[50, 30, 70, 20, 40, 60, 80, 10]);

        // Leaf
        assert_eq!(set.remove(&80), Some(80));
        set.assert_invariants();

        // One child (20 has left child 10)
        assert_eq!(set.remove(&20), Some(20));
        set.assert_invariants();

        // Two children
        assert_eq!(set.remove(&50), Some(50));
        set.assert_invariants();

        assert_eq!(contents(&set), vec![10, 30, 40, 60, 70]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut set = set_of(&[1, 2, 3]);
        assert_eq!(set.remove(&7), None);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn find_by_probe() {
        let set = set_of(&[2, 4, 6, 8]);
        assert_eq!(set.find_by(|v| 6.cmp(v)), Some(&6));
        assert_eq!(set.find_by(|v| 5.cmp(v)), None);
    }

    #[test]
    fn higher_iter_starts_at_first_not_less() {
        let set = set_of(&[10, 20, 30, 40, 50]);

        let from_present: Vec<i32> = set.higher_iter(&30).copied().collect();
        assert_eq!(from_present, vec![30, 40, 50]);

        let from_absent: Vec<i32> = set.higher_iter(&25).copied().collect();
        assert_eq!(from_absent, vec![30, 40, 50]);

        let from_below: Vec<i32> = set.higher_iter(&0).copied().collect();
        assert_eq!(from_below, vec![10, 20, 30, 40, 50]);

        assert_eq!(set.higher_iter(&51).next(), None);
    }

    #[test]
    fn iterators_coexist() {
        let set = set_of(&[1, 2, 3]);
        let mut a = set.iter();
        let mut b = set.iter();
        assert_eq!(a.next(), Some(&1));
        assert_eq!(a.next(), Some(&2));
        assert_eq!(b.next(), Some(&1));
        assert_eq!(a.next(), Some(&3));
        assert_eq!(b.next(), Some(&2));
    }

    #[test]
    fn merge_is_union_and_leaves_inputs() {
        let a = set_of(&[1, 3, 5, 7]);
        let b = set_of(&[2, 3, 6, 7, 9]);

        let merged = a.merge(&b);
        merged.assert_invariants();
        assert_eq!(contents(&merged), vec![1, 2, 3, 5, 6, 7, 9]);
        assert_eq!(merged.len(), 7);

        assert_eq!(contents(&a), vec![1, 3, 5, 7]);
        assert_eq!(contents(&b), vec![2, 3, 6, 7, 9]);
    }

    #[test]
    fn merge_with_empty() {
        let a = set_of(&[4, 2]);
        let empty = AvlSet::new();
        assert_eq!(contents(&a.merge(&empty)), vec![2, 4]);
        assert_eq!(contents(&empty.merge(&a)), vec![2, 4]);
        assert!(empty.merge(&empty).is_empty());
    }

    #[test]
    fn merged_set_accepts_further_mutation() {
        let a = set_of(&[1, 2, 3]);
        let b = set_of(&[4, 5, 6]);
        let mut merged = a.merge(&b);
        merged.insert(0);
        merged.remove(&4);
        merged.assert_invariants();
        assert_eq!(contents(&merged), vec![0, 1, 2, 3, 5, 6]);
    }

    #[test]
    fn first_and_last() {
        let set = set_of(&[9, 1, 5]);
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&9));
    }

    #[test]
    fn debug_lists_in_order() {
        let set = set_of(&[3, 1, 2]);
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
    }
}

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    error::TabulatedError, factory::StorageKind, function::Function, point::FunctionPoint,
};

use super::{
    ArrayTabulatedFunction, DUPLICATE_TOLERANCE, TabulatedFunction, interpolate, uniform_grid,
    validation, write_points,
};

/// Slot of the sentinel head node. The list is circular: `HEAD.next` is the
/// first point and `HEAD.prev` the last.
const HEAD: usize = 0;

#[derive(Debug, Clone, Copy)]
struct FunctionNode {
    point: FunctionPoint,
    prev: usize,
    next: usize,
}

/// Tabulated function backed by a circular doubly-linked list.
///
/// Nodes live in an arena and link to each other by slot index; freed slots
/// are recycled by later insertions. Positional access walks from whichever
/// end of the list is closer.
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<FunctionPoint>", into = "Vec<FunctionPoint>")]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<FunctionNode>,
    free: Vec<usize>,
    count: usize,
}

impl LinkedListTabulatedFunction {
    fn empty(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(FunctionNode {
            point: FunctionPoint::default(),
            prev: HEAD,
            next: HEAD,
        });
        LinkedListTabulatedFunction {
            nodes,
            free: Vec::new(),
            count: 0,
        }
    }

    fn collect<I>(points: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = FunctionPoint>,
    {
        let mut list = Self::empty(capacity);
        for point in points {
            list.add_node_to_tail(point);
        }
        list
    }

    /// `count` evenly spaced points over `[left, right]`, all with `y = 0`.
    ///
    /// # Errors
    /// `InvalidArgument` when `left >= right` or `count < 2`.
    pub fn new(left: f64, right: f64, count: usize) -> Result<Self, TabulatedError> {
        let grid = uniform_grid(left, right, count)?;
        Ok(Self::collect(grid.map(|x| FunctionPoint::new(x, 0.0)), count))
    }

    /// Evenly spaced points over `[left, right]` carrying the given values.
    ///
    /// # Errors
    /// `InvalidArgument` when `left >= right` or fewer than two values are given.
    pub fn with_values(left: f64, right: f64, values: &[f64]) -> Result<Self, TabulatedError> {
        let grid = uniform_grid(left, right, values.len())?;
        Ok(Self::collect(
            grid.zip(values).map(|(x, &y)| FunctionPoint::new(x, y)),
            values.len(),
        ))
    }

    /// Copies an explicit point sequence.
    ///
    /// # Errors
    /// `InvalidArgument` when fewer than two points are given or the x-values
    /// are not strictly increasing.
    pub fn from_points(points: &[FunctionPoint]) -> Result<Self, TabulatedError> {
        validation::check_points(points)?;
        Ok(Self::collect(points.iter().copied(), points.len()))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.nodes[HEAD].next,
            remaining: self.count,
        }
    }

    fn allocate(&mut self, node: FunctionNode) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Links a new node between `prev` and `prev.next`.
    fn link_after(&mut self, prev: usize, point: FunctionPoint) -> usize {
        let next = self.nodes[prev].next;
        let slot = self.allocate(FunctionNode { point, prev, next });
        self.nodes[prev].next = slot;
        self.nodes[next].prev = slot;
        self.count += 1;
        slot
    }

    fn add_node_to_tail(&mut self, point: FunctionPoint) -> usize {
        let last = self.nodes[HEAD].prev;
        self.link_after(last, point)
    }

    /// Slot of the node at `index`, walking from the nearer end.
    ///
    /// `index == count` resolves to the head, which is the insertion point
    /// for appending.
    fn node_at(&self, index: usize) -> usize {
        debug_assert!(index <= self.count);
        if index < self.count / 2 {
            let mut slot = self.nodes[HEAD].next;
            for _ in 0..index {
                slot = self.nodes[slot].next;
            }
            slot
        } else {
            let mut slot = HEAD;
            for _ in index..self.count {
                slot = self.nodes[slot].prev;
            }
            slot
        }
    }

    /// Inserts a node so that it ends up at `index` (`index <= count`).
    fn add_node_by_index(&mut self, index: usize, point: FunctionPoint) -> usize {
        let successor = self.node_at(index);
        let prev = self.nodes[successor].prev;
        self.link_after(prev, point)
    }

    fn delete_node_by_index(&mut self, index: usize) -> FunctionPoint {
        let slot = self.node_at(index);
        let FunctionNode { point, prev, next } = self.nodes[slot];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free.push(slot);
        self.count -= 1;
        point
    }

    fn first(&self) -> FunctionPoint {
        self.nodes[self.nodes[HEAD].next].point
    }

    fn last(&self) -> FunctionPoint {
        self.nodes[self.nodes[HEAD].prev].point
    }

    fn checked_node(&self, index: usize) -> Result<usize, TabulatedError> {
        validation::check_index(index, self.count)?;
        Ok(self.node_at(index))
    }

    fn neighbours(&self, slot: usize) -> (Option<f64>, Option<f64>) {
        let FunctionNode { prev, next, .. } = self.nodes[slot];
        let previous = (prev != HEAD).then(|| self.nodes[prev].point.x);
        let next = (next != HEAD).then(|| self.nodes[next].point.x);
        (previous, next)
    }
}

impl Clone for LinkedListTabulatedFunction {
    /// Rebuilds a compact arena holding the same points in the same order.
    fn clone(&self) -> Self {
        Self::collect(self.iter(), self.count)
    }
}

/// Forward iterator over a [`LinkedListTabulatedFunction`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a LinkedListTabulatedFunction,
    cursor: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = FunctionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a LinkedListTabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Function for LinkedListTabulatedFunction {
    fn left_border(&self) -> f64 {
        self.first().x
    }

    fn right_border(&self) -> f64 {
        self.last().x
    }

    fn value_at(&self, x: f64) -> f64 {
        if !(x >= self.left_border() && x <= self.right_border()) {
            return f64::NAN;
        }

        let mut slot = self.nodes[HEAD].next;
        while slot != HEAD {
            let node = self.nodes[slot];
            if (node.point.x - x).abs() < DUPLICATE_TOLERANCE {
                return node.point.y;
            }
            if node.next != HEAD {
                let right = self.nodes[node.next].point;
                if x > node.point.x && x < right.x {
                    return interpolate(node.point, right, x);
                }
            }
            slot = node.next;
        }

        f64::NAN
    }
}

impl TabulatedFunction for LinkedListTabulatedFunction {
    fn points_count(&self) -> usize {
        self.count
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, TabulatedError> {
        let slot = self.checked_node(index)?;
        Ok(self.nodes[slot].point)
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedError> {
        let slot = self.checked_node(index)?;
        let (previous, next) = self.neighbours(slot);
        validation::check_between(point.x, previous, next)?;
        self.nodes[slot].point = point;
        Ok(())
    }

    fn point_x(&self, index: usize) -> Result<f64, TabulatedError> {
        let slot = self.checked_node(index)?;
        Ok(self.nodes[slot].point.x)
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), TabulatedError> {
        let slot = self.checked_node(index)?;
        let (previous, next) = self.neighbours(slot);
        validation::check_between(x, previous, next)?;
        self.nodes[slot].point.x = x;
        Ok(())
    }

    fn point_y(&self, index: usize) -> Result<f64, TabulatedError> {
        let slot = self.checked_node(index)?;
        Ok(self.nodes[slot].point.y)
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedError> {
        let slot = self.checked_node(index)?;
        self.nodes[slot].point.y = y;
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedError> {
        validation::check_index(index, self.count)?;
        validation::check_deletable(self.count)?;
        let removed = self.delete_node_by_index(index);
        trace!("unlinked point {} at index {}", removed, index);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), TabulatedError> {
        let position = self.iter().take_while(|p| p.x < point.x).count();
        let previous = position
            .checked_sub(1)
            .map(|i| self.nodes[self.node_at(i)].point.x);
        let next = (position < self.count).then(|| self.nodes[self.node_at(position)].point.x);
        validation::check_insertion(point.x, previous, next)?;

        self.add_node_by_index(position, point);
        Ok(())
    }

    fn iter(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_> {
        Box::new(LinkedListTabulatedFunction::iter(self))
    }

    fn box_clone(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::LinkedList
    }
}

impl PartialEq for LinkedListTabulatedFunction {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedListTabulatedFunction {}

impl PartialEq<ArrayTabulatedFunction> for LinkedListTabulatedFunction {
    fn eq(&self, other: &ArrayTabulatedFunction) -> bool {
        self.same_points(other)
    }
}

impl Hash for LinkedListTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for LinkedListTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_points(f, self.iter())
    }
}

impl TryFrom<Vec<FunctionPoint>> for LinkedListTabulatedFunction {
    type Error = TabulatedError;

    fn try_from(points: Vec<FunctionPoint>) -> Result<Self, Self::Error> {
        Self::from_points(&points)
    }
}

impl From<LinkedListTabulatedFunction> for Vec<FunctionPoint> {
    fn from(function: LinkedListTabulatedFunction) -> Self {
        function.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_float_eq;

    fn xs(f: &LinkedListTabulatedFunction) -> Vec<f64> {
        f.iter().map(|p| p.x).collect()
    }

    #[test]
    fn test_links_are_consistent_after_construction() {
        let f = LinkedListTabulatedFunction::new(0.0, 4.0, 5).unwrap();
        assert_eq!(f.points_count(), 5);
        let mut slot = HEAD;
        for _ in 0..=f.count {
            let next = f.nodes[slot].next;
            assert_eq!(f.nodes[next].prev, slot);
            slot = next;
        }
        assert_eq!(slot, HEAD);
    }

    #[test]
    fn test_bidirectional_indexing() {
        let f = LinkedListTabulatedFunction::new(0.0, 9.0, 10).unwrap();
        for i in 0..10 {
            assert_eq!(f.point_x(i).unwrap(), i as f64);
        }
        assert_eq!(f.node_at(10), HEAD);
    }

    #[test]
    fn test_value_at_fast_path_and_interpolation() {
        let f =
            LinkedListTabulatedFunction::with_values(0.0, 4.0, &[0.0, 1.0, 4.0, 9.0, 16.0]).unwrap();
        assert_eq!(f.value_at(2.0), 4.0);
        assert_eq!(f.value_at(2.0 + 1e-12), 4.0);
        assert_eq!(f.value_at(4.0), 16.0);
        assert_float_eq(f.value_at(3.5), 12.5, 1e-12);
        assert!(f.value_at(-1.0).is_nan());
        assert!(f.value_at(5.0).is_nan());
        assert!(f.value_at(f64::NAN).is_nan());
    }

    #[test]
    fn test_insert_and_delete_reuse_slots() {
        let mut f = LinkedListTabulatedFunction::new(0.0, 3.0, 4).unwrap();
        let arena_len = f.nodes.len();

        f.delete_point(1).unwrap();
        f.delete_point(0).unwrap();
        assert_eq!(xs(&f), vec![2.0, 3.0]);

        f.add_point(FunctionPoint::new(0.5, 1.0)).unwrap();
        f.add_point(FunctionPoint::new(2.5, 1.0)).unwrap();
        assert_eq!(xs(&f), vec![0.5, 2.0, 2.5, 3.0]);
        assert_eq!(f.nodes.len(), arena_len);
        assert!(f.free.is_empty());
    }

    #[test]
    fn test_add_at_both_ends() {
        let mut f = LinkedListTabulatedFunction::new(0.0, 1.0, 2).unwrap();
        f.add_point(FunctionPoint::new(-1.0, 0.0)).unwrap();
        f.add_point(FunctionPoint::new(5.0, 0.0)).unwrap();
        assert_eq!(xs(&f), vec![-1.0, 0.0, 1.0, 5.0]);
        assert_eq!(f.left_border(), -1.0);
        assert_eq!(f.right_border(), 5.0);
    }

    #[test]
    fn test_add_rejects_near_duplicate_and_nan() {
        let mut f = LinkedListTabulatedFunction::new(0.0, 2.0, 3).unwrap();
        assert!(matches!(
            f.add_point(FunctionPoint::new(1.0 - 1e-11, 0.0)),
            Err(TabulatedError::InappropriatePoint { .. })
        ));
        assert!(matches!(
            f.add_point(FunctionPoint::new(f64::NAN, 0.0)),
            Err(TabulatedError::InappropriatePoint { .. })
        ));
        assert_eq!(f.points_count(), 3);
    }

    #[test]
    fn test_delete_checks_index_before_state() {
        let mut f = LinkedListTabulatedFunction::new(0.0, 1.0, 2).unwrap();
        assert!(matches!(
            f.delete_point(2),
            Err(TabulatedError::IndexOutOfBounds { .. })
        ));
        assert!(matches!(
            f.delete_point(1),
            Err(TabulatedError::IllegalState(_))
        ));
    }

    #[test]
    fn test_clone_is_compact_and_independent() {
        let mut f = LinkedListTabulatedFunction::new(0.0, 5.0, 6).unwrap();
        f.delete_point(2).unwrap();
        f.delete_point(2).unwrap();

        let mut copy = f.clone();
        assert_eq!(copy, f);
        assert_eq!(copy.nodes.len(), 5);
        assert!(copy.free.is_empty());

        copy.set_point_y(0, 42.0).unwrap();
        assert_eq!(f.point_y(0).unwrap(), 0.0);
    }

    #[test]
    fn test_set_point_x_ordering() {
        let mut f = LinkedListTabulatedFunction::new(0.0, 2.0, 3).unwrap();
        f.set_point_x(1, 1.5).unwrap();
        assert!(f.set_point_x(1, 2.0).is_err());
        assert!(f.set_point_x(1, f64::NAN).is_err());
        assert_eq!(f.point_x(1).unwrap(), 1.5);
    }

    #[test]
    fn test_iterator_len() {
        let f = LinkedListTabulatedFunction::new(0.0, 2.0, 3).unwrap();
        let it = f.iter();
        assert_eq!(it.len(), 3);
        assert_eq!((&f).into_iter().count(), 3);
    }
}

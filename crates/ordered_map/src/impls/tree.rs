use std::cmp::Ordering;
use std::fmt;

use crate::OrderedMap;
use crate::compare::{Compare, Natural};

/// Left-leaning red-black tree ordered by a comparator bound at construction.
///
/// Nodes live in an index arena so a freshly inserted entry can be returned
/// without searching for it again. Removing an entry may move its in-order
/// successor into the freed node, so node handles never outlive a removal.
pub struct TreeMap<K, V, C = Natural<K>> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<usize>,
    root: Link,
    len: usize,
    cmp: C,
}

type Link = Option<usize>;

struct Node<K, V> {
    key: K,
    value: V,
    red: bool,
    left: Link,
    right: Link,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, red: bool) -> Self {
        Self {
            key,
            value,
            red,
            left: None,
            right: None,
        }
    }
}

enum Placed<V> {
    New(usize),
    Occupied(usize, V),
}

impl<K, V, C: Compare<K>> TreeMap<K, V, C> {
    fn node(&self, id: usize) -> &Node<K, V> {
        self.slots[id].as_ref().expect("link points at a live node")
    }

    fn node_mut(&mut self, id: usize) -> &mut Node<K, V> {
        self.slots[id].as_mut().expect("link points at a live node")
    }

    fn alloc(&mut self, node: Node<K, V>) -> usize {
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, id: usize) -> Node<K, V> {
        let node = self.slots[id].take().expect("released node is live");
        self.free.push(id);
        node
    }

    fn is_red(&self, link: Link) -> bool {
        link.is_some_and(|id| self.node(id).red)
    }

    fn left_left_red(&self, link: Link) -> bool {
        link.is_some_and(|id| self.is_red(self.node(id).left))
    }

    fn rotate_left(&mut self, h: usize) -> usize {
        let x = self.node(h).right.expect("rotate_left requires right");
        self.node_mut(h).right = self.node(x).left;
        self.node_mut(x).left = Some(h);
        self.node_mut(x).red = self.node(h).red;
        self.node_mut(h).red = true;
        x
    }

    fn rotate_right(&mut self, h: usize) -> usize {
        let x = self.node(h).left.expect("rotate_right requires left");
        self.node_mut(h).left = self.node(x).right;
        self.node_mut(x).right = Some(h);
        self.node_mut(x).red = self.node(h).red;
        self.node_mut(h).red = true;
        x
    }

    fn flip_colors(&mut self, h: usize) {
        let node = self.node_mut(h);
        node.red = !node.red;
        let (left, right) = (node.left, node.right);
        for child in [left, right].into_iter().flatten() {
            let child = self.node_mut(child);
            child.red = !child.red;
        }
    }

    fn fix_up(&mut self, mut h: usize) -> usize {
        if self.is_red(self.node(h).right) {
            h = self.rotate_left(h);
        }
        if self.is_red(self.node(h).left) && self.left_left_red(self.node(h).left) {
            h = self.rotate_right(h);
        }
        if self.is_red(self.node(h).left) && self.is_red(self.node(h).right) {
            self.flip_colors(h);
        }
        h
    }

    fn move_red_left(&mut self, mut h: usize) -> usize {
        self.flip_colors(h);
        if self.left_left_red(self.node(h).right) {
            let right = self.node(h).right.expect("checked above");
            let right = self.rotate_right(right);
            self.node_mut(h).right = Some(right);
            h = self.rotate_left(h);
            self.flip_colors(h);
        }
        h
    }

    fn move_red_right(&mut self, mut h: usize) -> usize {
        self.flip_colors(h);
        if self.left_left_red(self.node(h).left) {
            h = self.rotate_right(h);
            self.flip_colors(h);
        }
        h
    }

    fn insert_node(&mut self, h: Link, key: K, value: V) -> (usize, Placed<V>) {
        let Some(mut h) = h else {
            let id = self.alloc(Node::new(key, value, true));
            return (id, Placed::New(id));
        };

        let placed = match self.cmp.compare(&key, &self.node(h).key) {
            Ordering::Less => {
                let (left, placed) = self.insert_node(self.node(h).left, key, value);
                self.node_mut(h).left = Some(left);
                placed
            }
            Ordering::Greater => {
                let (right, placed) = self.insert_node(self.node(h).right, key, value);
                self.node_mut(h).right = Some(right);
                placed
            }
            // Structure is untouched, so no rebalancing below this point.
            Ordering::Equal => return (h, Placed::Occupied(h, value)),
        };

        if self.is_red(self.node(h).right) && !self.is_red(self.node(h).left) {
            h = self.rotate_left(h);
        }
        if self.is_red(self.node(h).left) && self.left_left_red(self.node(h).left) {
            h = self.rotate_right(h);
        }
        if self.is_red(self.node(h).left) && self.is_red(self.node(h).right) {
            self.flip_colors(h);
        }

        (h, placed)
    }

    /// Inserts without touching an existing entry; the rejected value is handed back.
    fn place(&mut self, key: K, value: V) -> Placed<V> {
        let (root, placed) = self.insert_node(self.root, key, value);
        self.root = Some(root);
        self.node_mut(root).red = false;
        if let Placed::New(_) = placed {
            self.len += 1;
        }
        placed
    }

    fn delete_min_with_node(&mut self, mut h: usize) -> (Link, usize) {
        let Some(left) = self.node(h).left else {
            return (self.node(h).right, h);
        };
        if !self.is_red(Some(left)) && !self.left_left_red(Some(left)) {
            h = self.move_red_left(h);
        }
        let left = self.node(h).left.expect("left survives move_red_left");
        let (new_left, min) = self.delete_min_with_node(left);
        self.node_mut(h).left = new_left;
        (Some(self.fix_up(h)), min)
    }

    fn remove_node(&mut self, h: Link, key: &K) -> (Link, Option<V>) {
        let Some(mut h) = h else {
            return (None, None);
        };
        let removed = if self.cmp.compares_lt(key, &self.node(h).key) {
            let Some(left) = self.node(h).left else {
                return (Some(h), None);
            };
            if !self.is_red(Some(left)) && !self.left_left_red(Some(left)) {
                h = self.move_red_left(h);
            }
            let (new_left, removed) = self.remove_node(self.node(h).left, key);
            self.node_mut(h).left = new_left;
            removed
        } else {
            if self.is_red(self.node(h).left) {
                h = self.rotate_right(h);
            }
            if self.cmp.compares_eq(key, &self.node(h).key) && self.node(h).right.is_none() {
                return (None, Some(self.release(h).value));
            }
            let right = self.node(h).right;
            if right.is_some() && !self.is_red(right) && !self.left_left_red(right) {
                h = self.move_red_right(h);
            }

            if self.cmp.compares_eq(key, &self.node(h).key) {
                let right = self.node(h).right.expect("right exists");
                let (new_right, min) = self.delete_min_with_node(right);
                self.node_mut(h).right = new_right;
                let Node { key, value, .. } = self.release(min);
                let node = self.node_mut(h);
                node.key = key;
                Some(std::mem::replace(&mut node.value, value))
            } else {
                let (new_right, removed) = self.remove_node(self.node(h).right, key);
                self.node_mut(h).right = new_right;
                removed
            }
        };

        (Some(self.fix_up(h)), removed)
    }

    fn find_id(&self, key: &K) -> Option<usize> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.node(id);
            match self.cmp.compare(key, &node.key) {
                Ordering::Less => cur = node.left,
                Ordering::Greater => cur = node.right,
                Ordering::Equal => return Some(id),
            }
        }
        None
    }

    fn value_mut(&mut self, id: usize) -> &mut V {
        &mut self.node_mut(id).value
    }
}

impl<K, V, C: Compare<K>> OrderedMap for TreeMap<K, V, C> {
    type Key = K;
    type Value = V;
    type Cmp = C;
    type Iter<'a>
        = Iter<'a, K, V, C>
    where
        Self: 'a;
    type IterMut<'a>
        = IterMut<'a, K, V>
    where
        Self: 'a;

    fn with_cmp(cmp: C) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
            cmp,
        }
    }

    fn cmp(&self) -> &C {
        &self.cmp
    }

    fn len(&self) -> usize {
        self.len
    }

    fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let node = self.node(self.find_id(key)?);
        Some((&node.key, &node.value))
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find_id(key)?;
        Some(self.value_mut(id))
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.place(key, value) {
            Placed::New(_) => None,
            Placed::Occupied(id, value) => Some(std::mem::replace(self.value_mut(id), value)),
        }
    }

    fn try_insert(&mut self, key: K, value: V) -> (&mut V, bool) {
        match self.place(key, value) {
            Placed::New(id) => (self.value_mut(id), true),
            Placed::Occupied(id, _) => (self.value_mut(id), false),
        }
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        // Top-down deletion recolors along the search path; it must end at `key`.
        self.find_id(key)?;
        let root = self.root?;
        if !self.is_red(self.node(root).left) && !self.is_red(self.node(root).right) {
            self.node_mut(root).red = true;
        }

        let (root, removed) = self.remove_node(Some(root), key);
        self.root = root;
        if let Some(r) = root {
            self.node_mut(r).red = false;
        }
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn iter(&self) -> Iter<'_, K, V, C> {
        let mut iter = Iter {
            map: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let mut order = Vec::with_capacity(self.len);
        let mut ids = self.iter();
        while let Some(id) = ids.next_id() {
            order.push(id);
        }
        let entries = self
            .slots
            .iter_mut()
            .map(|slot| {
                slot.as_mut().map(|node| {
                    let Node { key, value, .. } = node;
                    (&*key, value)
                })
            })
            .collect();
        IterMut {
            entries,
            order: order.into_iter(),
        }
    }

    fn iter_after(&self, key: &K) -> Iter<'_, K, V, C> {
        let mut stack = Vec::new();
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.node(id);
            if self.cmp.compares_lt(key, &node.key) {
                stack.push(id);
                cur = node.left;
            } else {
                cur = node.right;
            }
        }
        Iter { map: self, stack }
    }

    fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.node(self.root?);
        while let Some(right) = node.right {
            node = self.node(right);
        }
        Some((&node.key, &node.value))
    }
}

impl<K, V, C: Compare<K> + Default> Default for TreeMap<K, V, C> {
    fn default() -> Self {
        Self::with_cmp(C::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C: Compare<K>> fmt::Debug for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// In-order iterator over a [`TreeMap`].
pub struct Iter<'a, K, V, C> {
    map: &'a TreeMap<K, V, C>,
    stack: Vec<usize>,
}

impl<K, V, C: Compare<K>> Iter<'_, K, V, C> {
    fn push_left_spine(&mut self, mut cur: Link) {
        while let Some(id) = cur {
            self.stack.push(id);
            cur = self.map.node(id).left;
        }
    }

    fn next_id(&mut self) -> Option<usize> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.map.node(id).right);
        Some(id)
    }
}

impl<'a, K, V, C: Compare<K>> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let map = self.map;
        let node = map.node(self.next_id()?);
        Some((&node.key, &node.value))
    }
}

/// In-order iterator over a [`TreeMap`] with mutable values.
pub struct IterMut<'a, K, V> {
    entries: Vec<Option<(&'a K, &'a mut V)>>,
    order: std::vec::IntoIter<usize>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.order.next()?;
        self.entries[id].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

//! Arena-backed doubly linked list.

const NIL: usize = usize::MAX;

/// Handle to a node of a [`SpliceList`].
///
/// A handle stays valid until its node is removed. Passing a removed handle,
/// or a handle from another list, is a caller bug: it trips a
/// `debug_assert!` in debug builds and has unspecified (but memory safe)
/// results in release builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    prev: usize,
    next: usize,
    live: bool,
}

/// A doubly linked list whose nodes live in a vector of slots.
///
/// Nodes refer to their neighbours by slot index, with `NIL` marking the
/// ends. Appending, inserting after a known node and removing a known node
/// are all O(1). Slots freed by [`remove`](Self::remove) are reused by later
/// insertions.
///
/// There is no random access by position: traverse with
/// [`first`](Self::first) and [`next`](Self::next), or [`iter`](Self::iter).
///
/// # Examples
///
/// ```
/// use u_tsp::splice::SpliceList;
///
/// let mut list = SpliceList::new();
/// let a = list.add('a');
/// list.add('b');
/// let c = list.insert_after(a, 'c');
/// assert_eq!(list.iter().copied().collect::<String>(), "acb");
///
/// list.remove(c);
/// assert_eq!(list.iter().copied().collect::<String>(), "ab");
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SpliceList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> SpliceList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head == NIL
    }

    /// The head node.
    pub fn first(&self) -> Option<NodeId> {
        to_id(self.head)
    }

    /// The tail node.
    pub fn last(&self) -> Option<NodeId> {
        to_id(self.tail)
    }

    /// The node following `node`, or `None` at the tail.
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        to_id(self.slot(node).next)
    }

    /// The node preceding `node`, or `None` at the head.
    pub fn prev(&self, node: NodeId) -> Option<NodeId> {
        to_id(self.slot(node).prev)
    }

    /// The value stored in `node`.
    pub fn value(&self, node: NodeId) -> &T {
        &self.slot(node).value
    }

    /// Mutable access to the value stored in `node`.
    pub fn value_mut(&mut self, node: NodeId) -> &mut T {
        debug_assert!(self.slots[node.0].live, "node {} was removed", node.0);
        &mut self.slots[node.0].value
    }

    /// Appends `value` at the tail and returns its node.
    pub fn add(&mut self, value: T) -> NodeId {
        let idx = self.alloc(value, self.tail, NIL);
        if self.tail == NIL {
            self.head = idx;
        } else {
            self.slots[self.tail].next = idx;
        }
        self.tail = idx;
        self.len += 1;
        NodeId(idx)
    }

    /// Inserts `value` directly after `node` and returns the new node.
    ///
    /// `node` must belong to this list.
    pub fn insert_after(&mut self, node: NodeId, value: T) -> NodeId {
        debug_assert!(self.slots[node.0].live, "node {} was removed", node.0);
        let at = node.0;
        let after = self.slots[at].next;
        let idx = self.alloc(value, at, after);

        self.slots[at].next = idx;
        if after == NIL {
            self.tail = idx;
        } else {
            self.slots[after].prev = idx;
        }
        self.len += 1;
        NodeId(idx)
    }

    /// Unlinks `node`, joining its neighbours. No-op on an empty list.
    ///
    /// `node` must belong to this list.
    pub fn remove(&mut self, node: NodeId) {
        if self.is_empty() {
            return;
        }
        debug_assert!(self.slots[node.0].live, "node {} was removed", node.0);

        let idx = node.0;
        let Slot { prev, next, .. } = self.slots[idx];

        if prev == NIL {
            self.head = next;
        } else {
            self.slots[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.slots[next].prev = prev;
        }

        let slot = &mut self.slots[idx];
        slot.prev = NIL;
        slot.next = NIL;
        slot.live = false;
        self.free.push(idx);
        self.len -= 1;
    }

    /// Node handles in traversal order.
    pub fn ids(&self) -> Ids<'_, T> {
        Ids {
            list: self,
            cursor: self.head,
        }
    }

    /// Values in traversal order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { ids: self.ids() }
    }

    fn slot(&self, node: NodeId) -> &Slot<T> {
        let slot = &self.slots[node.0];
        debug_assert!(slot.live, "node {} was removed", node.0);
        slot
    }

    fn alloc(&mut self, value: T, prev: usize, next: usize) -> usize {
        let slot = Slot {
            value,
            prev,
            next,
            live: true,
        };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        }
    }
}

impl<T> Default for SpliceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn to_id(idx: usize) -> Option<NodeId> {
    (idx != NIL).then_some(NodeId(idx))
}

/// Iterator over node handles, see [`SpliceList::ids`].
#[derive(Debug)]
pub struct Ids<'a, T> {
    list: &'a SpliceList<T>,
    cursor: usize,
}

impl<T> Iterator for Ids<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = to_id(self.cursor)?;
        self.cursor = self.list.slots[self.cursor].next;
        Some(id)
    }
}

/// Iterator over values, see [`SpliceList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    ids: Ids<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.ids.next()?;
        Some(&self.ids.list.slots[id.0].value)
    }
}

impl<'a, T> IntoIterator for &'a SpliceList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

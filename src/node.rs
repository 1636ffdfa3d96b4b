use core::ops::{Index, IndexMut};

/// Identifies a node within the [`NodeArena`] of one list.
pub(crate) type NodeId = usize;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

impl<T> Node<T> {
    #[inline]
    pub fn new(value: T, prev: Option<NodeId>, next: Option<NodeId>) -> Self {
        Self { value, prev, next }
    }
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

/// Owns every node of a linked list.
///
/// Nodes are addressed by id rather than by pointer, so a stale id can at
/// worst miss, never dangle. Freed slots are recycled in LIFO order.
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    len: usize,
}

impl<T> NodeArena<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub fn insert(&mut self, node: Node<T>) -> NodeId {
        self.len += 1;

        match self.free {
            Some(id) => {
                let slot = core::mem::replace(&mut self.slots[id], Slot::Occupied(node));
                self.free = match slot {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    pub fn remove(&mut self, id: NodeId) -> Option<Node<T>> {
        match self.slots.get(id)? {
            Slot::Occupied(_) => {}
            Slot::Vacant { .. } => return None,
        }

        let slot = core::mem::replace(
            &mut self.slots[id],
            Slot::Vacant {
                next_free: self.free,
            },
        );

        self.free = Some(id);
        self.len -= 1;

        match slot {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node {id} is not linked"),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("node {id} is not linked"),
        }
    }
}

// Roel Kluin, 2023, GPL v3

use crate::dbgconst::{next_size, DbgConst};
use crate::error::Result;
use crate::new_types::{node::Node, slot::Slot};

/// Where an insertion probe ended.
#[derive(Debug, PartialEq, Eq)]
enum InsertAt {
    Present(usize),
    Vacant(usize),
}

/// Open addressing set of k-mers with linear probing and tombstones.
#[derive(Debug, Clone)]
pub struct KmerSet {
    dc: DbgConst,
    size: usize,
    slots: Vec<Slot>,
}

/// The bases as decimal digits (A: 1, T: 5, C: 7, G: 9), read as one number,
/// modulo the table size. Horner's rule keeps the number in range for any k.
pub fn hash(node: &Node, map_size: usize) -> usize {
    let m = map_size as u128;
    let h = node
        .bases()
        .fold(0_u128, |acc, b| (acc * 10 + u128::from(b.digit())) % m);
    h as usize
}

impl KmerSet {
    pub fn new(dc: DbgConst) -> Self {
        KmerSet {
            dc,
            size: 0,
            slots: vec![Slot::Empty; dc.map_size],
        }
    }
    pub fn len(&self) -> usize {
        self.size
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
    pub fn map_size(&self) -> usize {
        self.slots.len()
    }
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.map_size() as f64
    }
    pub fn kmerlen(&self) -> usize {
        self.dc.kmerlen
    }

    /// The slot at `i`. Addressing past the table is a caller bug.
    pub fn slot(&self, i: usize) -> &Slot {
        assert!(
            i < self.map_size(),
            "slot {} out of bounds for map size {}",
            i,
            self.map_size()
        );
        &self.slots[i]
    }

    /// Lookup probe: stops at the node, or at the first empty or removed slot.
    /// A node of another length is never stored, so it is not found.
    pub fn index(&self, node: &Node) -> Option<usize> {
        if node.len() != self.dc.kmerlen {
            return None;
        }
        let m = self.map_size();
        let mut i = hash(node, m);
        for _ in 0..m {
            match &self.slots[i] {
                Slot::Occupied(n) if n == node => return Some(i),
                Slot::Occupied(_) => {}
                Slot::Empty | Slot::Tombstone => return None,
            }
            i += 1;
            if i == m {
                i = 0;
            }
        }
        None
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.index(node).is_some()
    }

    /// Insertion probe: steps over tombstones until the node itself or an
    /// empty slot, and reuses the first tombstone it passed.
    fn find_insert_slot(slots: &[Slot], node: &Node) -> InsertAt {
        let m = slots.len();
        let mut i = hash(node, m);
        let mut first_tombstone = None;
        for _ in 0..m {
            match &slots[i] {
                Slot::Occupied(n) if n == node => return InsertAt::Present(i),
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(i);
                }
                Slot::Empty => return InsertAt::Vacant(first_tombstone.unwrap_or(i)),
            }
            i += 1;
            if i == m {
                i = 0;
            }
        }
        match first_tombstone {
            Some(i) => InsertAt::Vacant(i),
            None => unreachable!("no free slot in a table below its load limit"),
        }
    }

    /// Add a node; false if it was already present. A node of another
    /// length than the set's k is refused.
    pub fn add(&mut self, node: Node) -> Result<bool> {
        node.check_len(self.dc.kmerlen)?;
        if let InsertAt::Present(_) = Self::find_insert_slot(&self.slots, &node) {
            return Ok(false);
        }
        if self.dc.is_overloaded(self.size + 1, self.map_size()) {
            self.resize();
        }
        Ok(match Self::find_insert_slot(&self.slots, &node) {
            InsertAt::Present(_) => false,
            InsertAt::Vacant(i) => {
                dbg_print!("[{}] = {}", i, node);
                self.slots[i] = Slot::Occupied(node);
                self.size += 1;
                true
            }
        })
    }

    /// Remove a node; returns false if the lookup probe did not find it.
    pub fn remove(&mut self, node: &Node) -> bool {
        match self.index(node) {
            Some(i) => {
                self.slots[i] = Slot::Tombstone;
                self.size -= 1;
                true
            }
            None => false,
        }
    }

    /// Live nodes in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.slots.iter().filter_map(Slot::node)
    }

    pub fn nodes(&self) -> Vec<Node> {
        self.iter().cloned().collect()
    }

    /// Rebuild into a larger prime-sized table. The new table is filled
    /// completely before it replaces the old one; tombstones are not carried.
    fn resize(&mut self) {
        let new_size = next_size(self.map_size());
        let mut slots = vec![Slot::Empty; new_size];
        let mut size = 0;
        for node in self.iter() {
            match Self::find_insert_slot(&slots, node) {
                InsertAt::Vacant(i) => {
                    slots[i] = Slot::Occupied(node.clone());
                    size += 1;
                }
                InsertAt::Present(i) => dbg_assert!(false, "duplicate {} at {}", node, i),
            }
        }
        tracing::debug!(
            "resized k-mer set from {} to {} slots, {} nodes",
            self.map_size(),
            new_size,
            size
        );
        dbg_assert_eq!(size, self.size);
        self.slots = slots;
        self.size = size;
    }
}

impl<'a> IntoIterator for &'a KmerSet {
    type Item = &'a Node;
    type IntoIter = std::iter::FilterMap<std::slice::Iter<'a, Slot>, fn(&'a Slot) -> Option<&'a Node>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().filter_map(Slot::node as fn(&'a Slot) -> Option<&'a Node>)
    }
}

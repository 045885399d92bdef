// Roel Kluin, 2023, GPL v3

use crate::dbgconst::DbgConst;
use crate::error::Result;
use crate::kmerset::KmerSet;
use crate::new_types::base::{Base, BASES};
use crate::new_types::node::Node;
use smallvec::SmallVec;

/// At most one neighbor per base.
pub type Neighbors = SmallVec<[Node; 4]>;

/// De Bruijn graph of order k. Edges are implicit: A -> B iff the last k - 1
/// bases of A are the first k - 1 of B.
#[derive(Debug, Clone)]
pub struct DeBruijnGraph {
    ks: KmerSet,
}

impl DeBruijnGraph {
    /// Build from k-mer strings, failing on the first one that is not a
    /// valid node of length `k`.
    pub fn new<I, S>(kmers: I, k: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = DeBruijnGraph::with_k(k)?;
        for kmer in kmers {
            graph.add_str(kmer.as_ref())?;
        }
        tracing::debug!(
            "graph with {} nodes in {} slots",
            graph.len(),
            graph.ks.map_size()
        );
        Ok(graph)
    }

    pub fn with_k(k: usize) -> Result<Self> {
        Ok(DeBruijnGraph {
            ks: KmerSet::new(DbgConst::new(k)?),
        })
    }

    pub fn k(&self) -> usize {
        self.ks.kmerlen()
    }
    pub fn len(&self) -> usize {
        self.ks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ks.is_empty()
    }
    pub fn kmer_set(&self) -> &KmerSet {
        &self.ks
    }

    /// validate a string as a node of this graph's order.
    pub fn node(&self, kmer: &str) -> Result<Node> {
        Node::new(kmer, self.k())
    }

    /// a node of another length than k belongs to no graph of this order.
    fn check(&self, node: &Node) -> Result<()> {
        node.check_len(self.k())
    }

    pub fn add(&mut self, node: Node) -> Result<bool> {
        self.ks.add(node)
    }
    pub fn add_str(&mut self, kmer: &str) -> Result<bool> {
        let node = self.node(kmer)?;
        self.ks.add(node)
    }
    pub fn remove(&mut self, node: &Node) -> Result<bool> {
        self.check(node)?;
        Ok(self.ks.remove(node))
    }
    pub fn contains(&self, node: &Node) -> Result<bool> {
        self.check(node)?;
        Ok(self.ks.contains(node))
    }
    pub fn contains_str(&self, kmer: &str) -> Result<bool> {
        Ok(self.ks.contains(&self.node(kmer)?))
    }
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.ks.iter()
    }
    pub fn nodes(&self) -> Vec<Node> {
        self.ks.nodes()
    }

    /// `base + node[..k - 1]` for base in A, T, C, G, if present.
    pub fn predecessors(&self, node: &Node) -> Result<Neighbors> {
        self.check(node)?;
        Ok(self.present(node, Node::predecessor))
    }

    /// `node[1..] + base` for base in A, T, C, G, if present.
    pub fn successors(&self, node: &Node) -> Result<Neighbors> {
        self.check(node)?;
        Ok(self.next_nodes(node))
    }

    /// successors of a node already known to be of length k.
    pub(crate) fn next_nodes(&self, node: &Node) -> Neighbors {
        self.present(node, Node::successor)
    }

    fn present(&self, node: &Node, shift: fn(&Node, Base) -> Node) -> Neighbors {
        BASES
            .iter()
            .map(|&b| shift(node, b))
            .filter(|n| self.ks.contains(n))
            .collect()
    }
}

impl Default for DeBruijnGraph {
    fn default() -> Self {
        DeBruijnGraph {
            ks: KmerSet::new(DbgConst::default()),
        }
    }
}

impl<'a> IntoIterator for &'a DeBruijnGraph {
    type Item = &'a Node;
    type IntoIter = <&'a KmerSet as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.ks).into_iter()
    }
}

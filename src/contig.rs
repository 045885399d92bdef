// Roel Kluin, 2023, GPL v3

use crate::error::Result;
use crate::graph::DeBruijnGraph;
use crate::new_types::node::Node;
use ahash::AHashSet;

/// Greedy depth first walk over successor edges, starting at one node.
///
/// Each step forward consumes an unstepped successor (first in A, T, C, G
/// order) and adds one base to the contig. At a dead end the contig is
/// recorded, unless it was recorded on the way back already, and the walk
/// steps back one base. The walk ends when it stands on the start node with
/// nothing left to step to.
pub struct ContigWalk<'a> {
    graph: &'a DeBruijnGraph,
    start: Node,
    current: Node,
    contig: String,
    stepped: AHashSet<Node>,
    backtracking: bool,
    pub contigs: Vec<String>,
}

impl<'a> ContigWalk<'a> {
    /// fails if `start` is not of the graph's order.
    pub fn new(graph: &'a DeBruijnGraph, start: &Node) -> Result<Self> {
        start.check_len(graph.k())?;
        Ok(ContigWalk {
            graph,
            start: start.clone(),
            current: start.clone(),
            contig: start.to_string(),
            stepped: AHashSet::new(),
            backtracking: false,
            contigs: Vec::new(),
        })
    }

    /// successors of the current node that were not stepped onto yet.
    fn candidates(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph
            .next_nodes(&self.current)
            .into_iter()
            .filter(|n| !self.stepped.contains(n))
    }

    /// One iteration; false once the walk is back at the start and stuck.
    pub fn step(&mut self) -> bool {
        let next = self.candidates().next();
        match next {
            Some(next) => {
                self.backtracking = false;
                self.contig.push_str(next.last());
                self.stepped.insert(next.clone());
                self.current = next;
                true
            }
            None if self.current == self.start => false,
            None => {
                if !self.backtracking {
                    dbg_print!("dead end at {}: {}", self.current, self.contig);
                    self.contigs.push(self.contig.clone());
                    self.backtracking = true;
                }
                self.contig.pop();
                self.current = Node::suffix_of(&self.contig, self.graph.k());
                true
            }
        }
    }

    /// Walk to the end. Every forward step takes a node not taken before and
    /// every backward step undoes a forward one, so this ends within
    /// 2 * |nodes| + 1 iterations.
    pub fn run(mut self) -> Vec<String> {
        let mut iterations = 0_usize;
        while self.step() {
            iterations += 1;
            dbg_assert!(iterations <= 2 * self.graph.len() + 1);
        }
        tracing::debug!(
            "walk from {} took {} steps, {} contigs",
            self.start,
            iterations,
            self.contigs.len()
        );
        self.contigs
    }
}

impl DeBruijnGraph {
    /// Contigs found by a depth first walk from `start`, in the order their
    /// dead ends were reached.
    pub fn assemble_contigs(&self, start: &Node) -> Result<Vec<String>> {
        Ok(ContigWalk::new(self, start)?.run())
    }
}

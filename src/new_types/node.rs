use super::base::Base;
use crate::error::{DbgError, Result};
use derive_more::{Display, Into};

/// A k-mer over A, T, C and G. Only built through validation, so every
/// byte is one of those four.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display, Into)]
pub struct Node(String);

impl Node {
    /// validate `kmer` as a node of length `k`.
    pub fn new(kmer: &str, k: usize) -> Result<Self> {
        if kmer.len() != k {
            return Err(DbgError::KmerLength {
                expected: k,
                actual: kmer.len(),
                kmer: kmer.to_string(),
            });
        }
        if let Some((offset, base)) = kmer
            .char_indices()
            .find(|&(_, c)| !c.is_ascii() || Base::try_from(c as u8).is_err())
        {
            return Err(DbgError::InvalidBase {
                base,
                offset,
                kmer: kmer.to_string(),
            });
        }
        Ok(Node(kmer.to_string()))
    }

    /// concatenate already valid parts; no checks.
    fn from_parts(head: &str, tail: &str) -> Self {
        let mut s = String::with_capacity(head.len() + tail.len());
        s.push_str(head);
        s.push_str(tail);
        Node(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bases(&self) -> impl Iterator<Item = Base> + '_ {
        // validated on construction
        self.0.bytes().filter_map(|b| Base::try_from(b).ok())
    }

    /// error unless this node has length `k`.
    pub fn check_len(&self, k: usize) -> Result<()> {
        if self.len() != k {
            return Err(DbgError::KmerLength {
                expected: k,
                actual: self.len(),
                kmer: self.0.clone(),
            });
        }
        Ok(())
    }

    /// the last base as a one character str.
    pub fn last(&self) -> &str {
        &self.0[self.0.len() - 1..]
    }

    /// drop the first base, append `b`.
    pub fn successor(&self, b: Base) -> Node {
        let mut buf = [0u8; 4];
        Node::from_parts(&self.0[1..], b.as_char().encode_utf8(&mut buf))
    }

    /// prepend `b`, drop the last base.
    pub fn predecessor(&self, b: Base) -> Node {
        let mut buf = [0u8; 4];
        Node::from_parts(b.as_char().encode_utf8(&mut buf), &self.0[..self.0.len() - 1])
    }

    /// the node spelled by the last `k` characters of a walk. The walk is
    /// built from valid nodes only.
    pub(crate) fn suffix_of(contig: &str, k: usize) -> Node {
        dbg_assert!(contig.len() >= k);
        Node(contig[contig.len() - k..].to_string())
    }
}

impl AsRef<str> for Node {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::new_types::base::BASES;

    #[test]
    fn validation() {
        assert!(Node::new("ATCG", 4).is_ok());
        assert_eq!(
            Node::new("ATC", 4),
            Err(DbgError::KmerLength {
                expected: 4,
                actual: 3,
                kmer: "ATC".to_string()
            })
        );
        assert_eq!(
            Node::new("ATNG", 4),
            Err(DbgError::InvalidBase {
                base: 'N',
                offset: 2,
                kmer: "ATNG".to_string()
            })
        );
        assert!(Node::new("atcg", 4).is_err());
    }
    #[test]
    fn non_ascii() {
        // 'é' is two bytes, so the length matches but the base is invalid.
        let err = Node::new("Aé", 3).unwrap_err();
        assert!(matches!(err, DbgError::InvalidBase { base: 'é', offset: 1, .. }));
    }
    #[test]
    fn shifts() {
        let n = Node::new("ATC", 3).unwrap();
        let succ: Vec<String> = BASES.iter().map(|&b| n.successor(b).into()).collect();
        assert_eq!(succ, vec!["TCA", "TCT", "TCC", "TCG"]);
        let pred: Vec<String> = BASES.iter().map(|&b| n.predecessor(b).into()).collect();
        assert_eq!(pred, vec!["AAT", "TAT", "CAT", "GAT"]);
        assert_eq!(n.last(), "C");
        assert!(n.check_len(3).is_ok());
        assert!(matches!(
            n.check_len(4),
            Err(DbgError::KmerLength { expected: 4, actual: 3, .. })
        ));
    }
    #[test]
    fn suffix() {
        assert_eq!(Node::suffix_of("ATCGA", 3).as_str(), "CGA");
    }
}

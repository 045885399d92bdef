// Roel Kluin, 2023, GPL v3

use crate::error::{DbgError, Result};
use num::integer::Roots;

pub const DEFAULT_K: usize = 21;

/// Slot count of a freshly created table.
pub const INITIAL_MAP_SIZE: usize = 7;

/// A table at or above this load factor is rebuilt before it receives a node.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DbgConst {
    pub kmerlen: usize,
    pub map_size: usize,
    pub max_load: f64,
}

impl DbgConst {
    pub fn new(kmerlen: usize) -> Result<Self> {
        if kmerlen == 0 {
            return Err(DbgError::InvalidK(kmerlen));
        }
        dbg_print!(
            "kmerlen: {}, map_size: {}, max_load: {}",
            kmerlen,
            INITIAL_MAP_SIZE,
            MAX_LOAD_FACTOR
        );
        Ok(DbgConst {
            kmerlen,
            map_size: INITIAL_MAP_SIZE,
            max_load: MAX_LOAD_FACTOR,
        })
    }

    /// true if holding `size` nodes in `map_size` slots is over the limit.
    pub fn is_overloaded(&self, size: usize, map_size: usize) -> bool {
        size as f64 / map_size as f64 >= self.max_load
    }
}

impl Default for DbgConst {
    fn default() -> Self {
        DbgConst {
            kmerlen: DEFAULT_K,
            map_size: INITIAL_MAP_SIZE,
            max_load: MAX_LOAD_FACTOR,
        }
    }
}

/// trial division by 2..=isqrt(n).
pub fn is_prime(n: usize) -> bool {
    n >= 2 && (2..=n.sqrt()).all(|d| n % d != 0)
}

/// smallest prime of at least twice the current size plus one. The first
/// candidate is odd, and stepping by two keeps it so.
pub fn next_size(current: usize) -> usize {
    let mut candidate = 2 * current + 1;
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

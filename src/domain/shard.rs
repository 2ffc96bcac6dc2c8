//! Symbol partitioning across streaming connections.

use super::id::Symbol;

/// An ordered, non-empty slice of the symbol universe served by one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    index: usize,
    symbols: Vec<Symbol>,
}

impl Shard {
    /// 1-based position of this shard in the partition (used for logging).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for shards produced by [`partition`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Split `symbols` into contiguous shards of at most `max_per_shard` entries.
///
/// Order is preserved: concatenating the shards reproduces the input. Only
/// the last shard may be smaller than `max_per_shard`, and no shard is empty.
/// An empty input produces no shards.
///
/// # Panics
///
/// Panics if `max_per_shard` is zero. Configuration validation rejects that
/// value before the pool is built.
#[must_use]
pub fn partition(symbols: &[Symbol], max_per_shard: usize) -> Vec<Shard> {
    assert!(max_per_shard > 0, "max_per_shard must be > 0");

    symbols
        .chunks(max_per_shard)
        .enumerate()
        .map(|(i, chunk)| Shard {
            index: i + 1,
            symbols: chunk.to_vec(),
        })
        .collect()
}

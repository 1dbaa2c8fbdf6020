//! Order-id index: hash table from order identifier to resting price.
//!
//! One instance lives in each [`super::BookSide`] and short-circuits
//! cancellation: the id resolves to a price in O(1) average time, the price
//! resolves to its level through the ordered index, and only that level's
//! queue is walked. The index stores owned copies of the id strings and
//! plain price values; it never owns book state.
//!
//! Buckets use separate chaining with the djb2 string hash. The table
//! starts at 1024 buckets per side and doubles whenever the load factor
//! exceeds 0.75.

const INITIAL_BUCKETS: usize = 1024;

/// djb2: `h = 5381; h = h * 33 + byte` over the id bytes.
fn djb2(key: &str) -> u64 {
    key.bytes()
        .fold(5381u64, |hash, byte| {
            hash.wrapping_mul(33).wrapping_add(u64::from(byte))
        })
}

/// Separate-chaining hash table mapping `order_id -> price`.
#[derive(Debug)]
pub struct OrderIdIndex {
    buckets: Vec<Vec<(String, f64)>>,
    len: usize,
}

impl Default for OrderIdIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderIdIndex {
    /// Create an index with the default initial capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_buckets(INITIAL_BUCKETS)
    }

    fn with_buckets(buckets: usize) -> Self {
        Self {
            buckets: (0..buckets.max(1)).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Number of ids currently indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when no ids are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket_of(&self, key: &str) -> usize {
        (djb2(key) % self.buckets.len() as u64) as usize
    }

    /// Map `order_id` to `price`, updating in place when the id is already
    /// present. Returns `true` when a new id was added.
    pub fn add(&mut self, order_id: &str, price: f64) -> bool {
        let slot = self.bucket_of(order_id);
        for entry in &mut self.buckets[slot] {
            if entry.0 == order_id {
                entry.1 = price;
                return false;
            }
        }
        self.buckets[slot].push((order_id.to_string(), price));
        self.len += 1;
        self.grow_if_loaded();
        true
    }

    /// The price registered for `order_id`, if any.
    #[must_use]
    pub fn get(&self, order_id: &str) -> Option<f64> {
        let slot = self.bucket_of(order_id);
        self.buckets[slot]
            .iter()
            .find(|(key, _)| key == order_id)
            .map(|&(_, price)| price)
    }

    /// Drop the mapping for `order_id`. Returns `true` when it was present.
    pub fn remove(&mut self, order_id: &str) -> bool {
        let slot = self.bucket_of(order_id);
        let chain = &mut self.buckets[slot];
        match chain.iter().position(|(key, _)| key == order_id) {
            Some(index) => {
                chain.swap_remove(index);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Load factor > 0.75 doubles the bucket array and rehashes every entry.
    fn grow_if_loaded(&mut self) {
        if self.len * 4 <= self.buckets.len() * 3 {
            return;
        }
        let doubled = self.buckets.len() * 2;
        let old = std::mem::replace(
            &mut self.buckets,
            (0..doubled).map(|_| Vec::new()).collect(),
        );
        for (key, price) in old.into_iter().flatten() {
            let slot = (djb2(&key) % doubled as u64) as usize;
            self.buckets[slot].push((key, price));
        }
    }

    #[cfg(test)]
    fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

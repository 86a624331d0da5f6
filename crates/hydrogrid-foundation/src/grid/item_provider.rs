//! Item provider trait for windowed grids.

/// Provides the needed info about items that a windowed grid can render.
///
/// Implementations should be immutable; changes to the data source should
/// produce a new provider instance.
pub trait GridItemProvider {
    /// Total number of items, rendered or not.
    fn item_count(&self) -> usize;

    /// Stable key for the item at `index`.
    ///
    /// Keys keep card identity stable across renders. Defaults to the index
    /// itself.
    fn get_key(&self, index: usize) -> u64 {
        index as u64
    }

    /// Index of the item with `key`, if present.
    fn get_index(&self, key: u64) -> Option<usize> {
        (0..self.item_count()).find(|&i| self.get_key(i) == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Keyed(Vec<u64>);

    impl GridItemProvider for Keyed {
        fn item_count(&self) -> usize {
            self.0.len()
        }

        fn get_key(&self, index: usize) -> u64 {
            self.0[index]
        }
    }

    #[test]
    fn default_key_is_the_index() {
        struct Plain(usize);
        impl GridItemProvider for Plain {
            fn item_count(&self) -> usize {
                self.0
            }
        }
        let provider = Plain(4);
        assert_eq!(provider.get_key(3), 3);
        assert_eq!(provider.get_index(2), Some(2));
    }

    #[test]
    fn get_index_finds_custom_keys() {
        let provider = Keyed(vec![100, 200, 300]);
        assert_eq!(provider.get_index(200), Some(1));
        assert_eq!(provider.get_index(999), None);
    }
}

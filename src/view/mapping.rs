//! Mapping engine boundary and the reference backing store.

/// What a view needs from the mapping that owns its elements.
///
/// Implementations must yield pairs in their own iteration order and report
/// the same count that `pairs()` produces.
pub trait Mapping {
    type Key;
    type Value;

    /// Number of stored pairs (repeated keys count once per pair).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current pairs in iteration order.
    fn pairs(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

/// Ordered list of key-value pairs; a key may appear several times.
///
/// Built once from a sequence of pairs, read through its views.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PairList<K, V> {
    pairs: Vec<(K, V)>,
}

impl<K, V> PairList<K, V> {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    pub fn as_slice(&self) -> &[(K, V)] {
        &self.pairs
    }

    pub fn keys(&self) -> super::KeysView<'_, Self> {
        super::KeysView::new(self)
    }

    pub fn values(&self) -> super::ValuesView<'_, Self> {
        super::ValuesView::new(self)
    }

    pub fn items(&self) -> super::ItemsView<'_, Self> {
        super::ItemsView::new(self)
    }
}

impl<K, V> Default for PairList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for PairList<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K, V> Mapping for PairList<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        self.pairs.len()
    }

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.pairs.iter().map(|(k, v)| (k, v))
    }
}

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};

/// An unordered pair of entities and the number of records listing both.
///
/// `source` is always the smaller of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooccurrencePair<K> {
    pub source: K,
    pub target: K,
    pub weight: usize,
}

/// Weighted undirected co-occurrence graph.
///
/// Each pair is stored once, under its canonical `(smaller, larger)` key, so
/// `weight(a, b) == weight(b, a)` and no self-pair is ever recorded.
///
/// Building the map from lists of length `k_i` costs `O(Σ k_i²)`; very long
/// lists (e.g. reference lists of review articles) dominate the running time.
///
/// Serializes as a sequence of [`CooccurrencePair`] in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooccurrenceMap<K: Ord> {
    weights: BTreeMap<(K, K), usize>,
}

impl<K: Ord> Default for CooccurrenceMap<K> {
    fn default() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone> CooccurrenceMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from one entity list per record.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibliostat::relate::CooccurrenceMap;
    ///
    /// let map = CooccurrenceMap::from_lists([vec!["X", "Y", "Z"], vec!["Y", "X"]]);
    /// assert_eq!(map.weight(&"X", &"Y"), 2);
    /// assert_eq!(map.weight(&"Z", &"Y"), 1);
    /// assert_eq!(map.weight(&"X", &"X"), 0);
    /// ```
    pub fn from_lists<I, L>(lists: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = K>,
    {
        let mut map = Self::new();
        for list in lists {
            map.add_list(list);
        }
        map
    }

    /// Adds one record's entities. Repeated entities count once.
    pub fn add_list<L: IntoIterator<Item = K>>(&mut self, list: L) {
        let distinct: BTreeSet<K> = list.into_iter().collect();
        // Set iteration is ascending, so every combination is already canonical.
        for (a, b) in distinct.iter().tuple_combinations() {
            *self.weights.entry((a.clone(), b.clone())).or_default() += 1;
        }
    }

    /// Number of records listing both `a` and `b`, 0 for `a == b`.
    pub fn weight(&self, a: &K, b: &K) -> usize {
        let key = match a.cmp(b) {
            std::cmp::Ordering::Less => (a.clone(), b.clone()),
            std::cmp::Ordering::Greater => (b.clone(), a.clone()),
            std::cmp::Ordering::Equal => return 0,
        };
        self.weights.get(&key).copied().unwrap_or(0)
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// All pairs in key order.
    pub fn pairs(&self) -> impl Iterator<Item = CooccurrencePair<K>> + '_ {
        self.weights.iter().map(|((source, target), &weight)| CooccurrencePair {
            source: source.clone(),
            target: target.clone(),
            weight,
        })
    }

    /// Pairs with a weight of at least `min_weight`, in key order.
    pub fn pairs_at_least(&self, min_weight: usize) -> Vec<CooccurrencePair<K>> {
        self.pairs().filter(|pair| pair.weight >= min_weight).collect()
    }

    /// The `n` heaviest pairs, ties in key order.
    pub fn top(&self, n: usize) -> Vec<CooccurrencePair<K>> {
        self.pairs()
            .sorted_by(|a, b| b.weight.cmp(&a.weight))
            .take(n)
            .collect()
    }

    /// Number of distinct neighbours of every entity that has at least one.
    pub fn degree(&self) -> BTreeMap<K, usize> {
        let mut degree: BTreeMap<K, usize> = BTreeMap::new();
        for (a, b) in self.weights.keys() {
            *degree.entry(a.clone()).or_default() += 1;
            *degree.entry(b.clone()).or_default() += 1;
        }
        degree
    }

    /// Sum of the weights of the pairs every entity is part of.
    pub fn strength(&self) -> BTreeMap<K, usize> {
        let mut strength: BTreeMap<K, usize> = BTreeMap::new();
        for ((a, b), &weight) in &self.weights {
            *strength.entry(a.clone()).or_default() += weight;
            *strength.entry(b.clone()).or_default() += weight;
        }
        strength
    }
}

impl<K: Ord + Clone> FromIterator<CooccurrencePair<K>> for CooccurrenceMap<K> {
    /// Collects pairs in either orientation. Self-pairs and zero weights are
    /// dropped, repeated pairs add up.
    fn from_iter<I: IntoIterator<Item = CooccurrencePair<K>>>(pairs: I) -> Self {
        let mut weights: BTreeMap<(K, K), usize> = BTreeMap::new();
        for CooccurrencePair { source, target, weight } in pairs {
            let key = match source.cmp(&target) {
                std::cmp::Ordering::Less => (source, target),
                std::cmp::Ordering::Greater => (target, source),
                std::cmp::Ordering::Equal => continue,
            };
            if weight > 0 {
                *weights.entry(key).or_default() += weight;
            }
        }
        Self { weights }
    }
}

impl<K: Ord + Clone + Serialize> Serialize for CooccurrenceMap<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.pairs())
    }
}

impl<'de, K: Ord + Clone + Deserialize<'de>> Deserialize<'de> for CooccurrenceMap<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<CooccurrencePair<K>>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

//! Path reconstruction from a predecessor map.

use crate::paths::dijkstra::PredecessorMap;

/// Walk `predecessors` back from `target` to `source` and return the forward
/// path `[source, ..., target]`.
///
/// - `source == target` yields `[source]`.
/// - A `target` with no predecessor entry is unreachable and yields `[]`.
///
/// # Panics
///
/// Panics if the backward walk does not arrive at `source` within
/// `predecessors.len() + 1` steps. That means the map did not come from a
/// run rooted at `source`.
#[must_use]
pub fn reconstruct_path(predecessors: &PredecessorMap, source: &str, target: &str) -> Vec<String> {
    if source == target {
        return vec![source.to_string()];
    }
    if !predecessors.contains(target) {
        return Vec::new();
    }

    let mut path = vec![target.to_string()];
    let mut current = target;
    for _ in 0..=predecessors.len() {
        let Some(prev) = predecessors.get(current) else {
            panic!("predecessor chain from `{target}` stops at `{current}` before reaching `{source}`");
        };
        path.push(prev.to_string());
        if prev == source {
            path.reverse();
            return path;
        }
        current = prev;
    }
    panic!("predecessor chain from `{target}` never reaches `{source}`");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preds(pairs: &[(&str, &str)]) -> PredecessorMap {
        pairs
            .iter()
            .map(|(v, p)| ((*v).to_string(), (*p).to_string()))
            .collect()
    }

    #[test]
    fn source_to_itself() {
        assert_eq!(reconstruct_path(&PredecessorMap::default(), "A", "A"), ["A"]);
    }

    #[test]
    fn missing_target_is_empty() {
        let map = preds(&[("B", "A")]);
        assert!(reconstruct_path(&map, "A", "D").is_empty());
    }

    #[test]
    fn walks_back_and_reverses() {
        let map = preds(&[("B", "A"), ("C", "B"), ("D", "C")]);
        assert_eq!(reconstruct_path(&map, "A", "D"), ["A", "B", "C", "D"]);
        assert_eq!(reconstruct_path(&map, "A", "B"), ["A", "B"]);
    }

    #[test]
    #[should_panic(expected = "stops at `X`")]
    fn chain_rooted_elsewhere_panics() {
        let map = preds(&[("B", "X"), ("C", "B")]);
        let _ = reconstruct_path(&map, "A", "C");
    }

    #[test]
    #[should_panic(expected = "never reaches")]
    fn cyclic_chain_panics_instead_of_looping() {
        let map = preds(&[("B", "C"), ("C", "B")]);
        let _ = reconstruct_path(&map, "A", "C");
    }
}

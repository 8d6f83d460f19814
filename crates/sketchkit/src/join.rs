//! Pairwise iteration helpers.

/// Every `(a, b)` pair with `a` from `left` and `b` from `right`, row-major.
pub fn nested_loop_join<'a, A, B>(
    left: &'a [A],
    right: &'a [B],
) -> impl Iterator<Item = (&'a A, &'a B)> + 'a {
    left.iter().flat_map(move |a| right.iter().map(move |b| (a, b)))
}

/// Every unordered pair of distinct positions `(items[i], items[k])`, `i < k`.
pub fn round_robin<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> + '_ {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| items[i + 1..].iter().map(move |b| (a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_join_visits_all_pairs_in_order() {
        let a = ["A0", "A1", "A2"];
        let b = ["B0", "B1"];
        let pairs: Vec<String> = nested_loop_join(&a, &b)
            .map(|(x, y)| format!("{x}-{y}"))
            .collect();
        assert_eq!(pairs, ["A0-B0", "A0-B1", "A1-B0", "A1-B1", "A2-B0", "A2-B1"]);
    }

    #[test]
    fn round_robin_visits_each_pair_once() {
        let items = [0, 1, 2, 3];
        let pairs: Vec<(i32, i32)> = round_robin(&items).map(|(a, b)| (*a, *b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(round_robin(&[1]).count(), 0);
        assert_eq!(round_robin::<u8>(&[]).count(), 0);
    }
}

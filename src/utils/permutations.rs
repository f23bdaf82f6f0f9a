use log::debug;

/// All orderings of `items`, `n!` of them for `n` items.
///
/// The order is lexicographic by position: `[a, b, c]` yields `abc, acb, bac,
/// bca, cab, cba`. Equal values at different positions are treated as distinct,
/// so duplicates appear in the output. This uses an explicit stack instead of
/// recursion.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    debug!("Generating permutations of {} items", items.len());

    let mut result = Vec::new();
    let mut stack: Vec<(Vec<T>, Vec<T>)> = vec![(Vec::with_capacity(items.len()), items.to_vec())];

    while let Some((prefix, remaining)) = stack.pop() {
        if remaining.is_empty() {
            result.push(prefix);
            continue;
        }

        // reversed so the first remaining item is popped first
        for i in (0..remaining.len()).rev() {
            let mut next_prefix = prefix.clone();
            let mut next_remaining = remaining.clone();
            next_prefix.push(next_remaining.remove(i));
            stack.push((next_prefix, next_remaining));
        }
    }

    debug!("Generated {} permutations", result.len());
    result
}

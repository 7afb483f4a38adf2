// Edit distance value with a rolling two-row buffer

/// Edit distance between two sequences without keeping the full table.
///
/// Same recurrence as [`EditMatrix`](crate::matrix::EditMatrix) but only
/// two rows are alive at a time, and the rows are sized by the shorter
/// input: O(n * m) time, O(min(n, m)) space. The distance is symmetric, so
/// swapping the inputs to put the shorter one on the columns is safe.
pub fn distance<T: PartialEq>(reference: &[T], candidate: &[T]) -> usize {
    let (long, short) = if reference.len() >= candidate.len() {
        (reference, candidate)
    } else {
        (candidate, reference)
    };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, a) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b) in short.iter().enumerate() {
            let cost = usize::from(a != b);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::EditMatrix;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty() {
        assert_eq!(distance::<char>(&[], &[]), 0);
        assert_eq!(distance(&chars(""), &chars("abc")), 3);
        assert_eq!(distance(&chars("abc"), &chars("")), 3);
    }

    #[test]
    fn basic_cases() {
        assert_eq!(distance(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(distance(&chars("sunday"), &chars("saturday")), 3);
        assert_eq!(distance(&chars("gumbo"), &chars("gambol")), 2);
        assert_eq!(distance(&chars("flaw"), &chars("lawn")), 2);
        assert_eq!(distance(&chars("abc"), &chars("abc")), 0);
    }

    #[test]
    fn token_level() {
        let r = ["good", "morning"];
        let c = ["good", "evening"];
        assert_eq!(distance(&r, &c), 1);
        assert_eq!(distance(&["hello"], &[] as &[&str]), 1);
    }

    #[test]
    fn agrees_with_full_matrix() {
        let pairs = [
            ("i like to code", "i love coding"),
            ("the quick brown fox", "the quick brwn fox"),
            ("this is a test", "this is test"),
            ("a b c d e", "e d c b a"),
            ("", "one two"),
        ];
        for (a, b) in pairs {
            let a: Vec<&str> = a.split_whitespace().collect();
            let b: Vec<&str> = b.split_whitespace().collect();
            assert_eq!(distance(&a, &b), EditMatrix::build(&a, &b).distance());
            assert_eq!(distance(&b, &a), EditMatrix::build(&b, &a).distance());
        }
    }
}

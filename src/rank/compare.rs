// Record comparison.
// Type-directed ordering over loosely-typed records with a stable sort.

use std::cmp::Ordering;

use crate::record::{Record, Value};

/// Field results are sorted by when none is given.
pub const DEFAULT_SORT_FIELD: &str = "import_count";

/// Field to sort on plus direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub reverse: bool,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, reverse: bool) -> Self {
        Self {
            field: field.into(),
            reverse,
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(DEFAULT_SORT_FIELD, false)
    }
}

/// Compare two records on `spec.field`.
///
/// Natural order per value type:
/// - strings ascend lexicographically
/// - numbers (any width, ints and floats mixed) descend
/// - `true` comes before `false`
///
/// When the field holds different kinds across records, numbers come
/// first, then strings, then booleans. Records lacking the field come after
/// records that have it. `spec.reverse` inverts every decision, including
/// the kind and missing-field ones, so ties stay ties and the stable sort
/// keeps their input order.
pub fn compare(a: &Record, b: &Record, spec: &SortSpec) -> Ordering {
    let ordering = match (a.get(&spec.field), b.get(&spec.field)) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(x), Some(y)) => compare_values(x, y),
    };

    if spec.reverse {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Position of a value's kind when kinds differ.
fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Int(_) | Value::Float(_) => 0,
        Value::String(_) => 1,
        Value::Bool(_) => 2,
    }
}

fn compare_values(x: &Value, y: &Value) -> Ordering {
    match (x, y) {
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => y.cmp(x),
        // All numbers go through f64 so ints and floats share one order.
        _ => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            _ => kind_rank(x).cmp(&kind_rank(y)),
        },
    }
}

/// Stable in-place sort of `records` by `spec`.
pub fn sort_records(records: &mut [Record], spec: &SortSpec) {
    records.sort_by(|a, b| compare(a, b, spec));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec<V: Into<Value>>(field: &str, value: V) -> Record {
        [(field, value.into())].into_iter().collect()
    }

    fn tagged(id: i64, field: &str, value: impl Into<Value>) -> Record {
        let mut r = rec(field, value);
        r.insert("id", id);
        r
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records
            .iter()
            .map(|r| match r.get("id") {
                Some(Value::Int(id)) => *id,
                _ => panic!("record without id"),
            })
            .collect()
    }

    fn sorted(mut records: Vec<Record>, field: &str, reverse: bool) -> Vec<Record> {
        sort_records(&mut records, &SortSpec::new(field, reverse));
        records
    }

    #[test]
    fn test_strings_ascend() {
        let out = sorted(vec![rec("x", "b"), rec("x", "a")], "x", false);
        assert_eq!(out, vec![rec("x", "a"), rec("x", "b")]);

        let out = sorted(vec![rec("x", "b"), rec("x", "a")], "x", true);
        assert_eq!(out, vec![rec("x", "b"), rec("x", "a")]);
    }

    #[test]
    fn test_numbers_descend() {
        let out = sorted(vec![rec("n", 1), rec("n", 5)], "n", false);
        assert_eq!(out, vec![rec("n", 5), rec("n", 1)]);

        let out = sorted(vec![rec("n", 1), rec("n", 5)], "n", true);
        assert_eq!(out, vec![rec("n", 1), rec("n", 5)]);
    }

    #[test]
    fn test_floats_and_mixed_widths_descend() {
        let out = sorted(
            vec![
                tagged(1, "score", 0.5),
                tagged(2, "score", 2),
                tagged(3, "score", 0.99),
            ],
            "score",
            false,
        );
        assert_eq!(ids(&out), vec![2, 3, 1]);
    }

    #[test]
    fn test_true_before_false() {
        let out = sorted(
            vec![
                tagged(1, "fork", false),
                tagged(2, "fork", true),
                tagged(3, "fork", false),
            ],
            "fork",
            false,
        );
        assert_eq!(ids(&out), vec![2, 1, 3]);
    }

    #[test]
    fn test_missing_field_sorts_last() {
        let out = sorted(
            vec![
                tagged(1, "other", 1),
                tagged(2, "stars", 3),
                tagged(3, "other", 2),
                tagged(4, "stars", 9),
            ],
            "stars",
            false,
        );
        assert_eq!(ids(&out), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_reverse_inverts_missing_field_rule() {
        let out = sorted(
            vec![tagged(1, "stars", 3), tagged(2, "other", 1)],
            "stars",
            true,
        );
        assert_eq!(ids(&out), vec![2, 1]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let input = vec![
            tagged(1, "n", 5),
            tagged(2, "n", 1),
            tagged(3, "n", 5),
            tagged(4, "n", 1),
        ];

        assert_eq!(ids(&sorted(input.clone(), "n", false)), vec![1, 3, 2, 4]);
        // Not the same as reversing the forward output: ties stay in input order.
        assert_eq!(ids(&sorted(input, "n", true)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_is_repeatable() {
        let input = vec![
            tagged(1, "name", "b"),
            tagged(2, "x", 1),
            tagged(3, "name", "a"),
            tagged(4, "name", "b"),
        ];
        let first = sorted(input.clone(), "name", false);
        let second = sorted(first.clone(), "name", false);
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_mixed_kinds_group_numbers_strings_bools() {
        let spec = SortSpec::new("v", false);
        assert_eq!(compare(&rec("v", 1), &rec("v", "text"), &spec), Ordering::Less);
        assert_eq!(compare(&rec("v", "text"), &rec("v", true), &spec), Ordering::Less);
        assert_eq!(compare(&rec("v", true), &rec("v", 0.5), &spec), Ordering::Greater);

        let out = sorted(
            vec![
                tagged(1, "v", true),
                tagged(2, "v", 1),
                tagged(3, "v", "x"),
                tagged(4, "v", 5),
                tagged(5, "v", 2.5),
            ],
            "v",
            false,
        );
        assert_eq!(ids(&out), vec![4, 5, 2, 3, 1]);
    }

    #[test]
    fn test_large_mixed_set_is_ordered_and_stable() {
        // Deterministic spread of all four kinds with plenty of duplicates.
        let input: Vec<Record> = (0..400i64)
            .map(|i| {
                let value = match (i * 7919) % 4 {
                    0 => Value::Int((i * 31) % 13),
                    1 => Value::Float(((i * 17) % 11) as f64 / 2.0),
                    2 => Value::String(format!("s{}", (i * 13) % 5)),
                    _ => Value::Bool(i % 3 == 0),
                };
                tagged(i, "v", value)
            })
            .collect();

        for reverse in [false, true] {
            let out = sorted(input.clone(), "v", reverse);
            assert_eq!(out.len(), input.len());

            for pair in out.windows(2) {
                let ord = compare(&pair[0], &pair[1], &SortSpec::new("v", reverse));
                assert_ne!(ord, Ordering::Greater);
                if ord == Ordering::Equal {
                    // Ties keep input order.
                    assert!(ids(pair)[0] < ids(pair)[1]);
                }
            }

            let numbers: Vec<f64> = out
                .iter()
                .filter_map(|r| r.get("v").and_then(Value::as_f64))
                .collect();
            assert!(numbers.windows(2).all(|w| if reverse {
                w[0] <= w[1]
            } else {
                w[0] >= w[1]
            }));
        }
    }

    #[test]
    fn test_nan_has_a_fixed_place() {
        let out = sorted(
            vec![
                tagged(1, "score", 1.0),
                tagged(2, "score", f64::NAN),
                tagged(3, "score", 3.0),
            ],
            "score",
            false,
        );
        assert_eq!(ids(&out), vec![2, 3, 1]);
    }

    #[test]
    fn test_int_and_float_of_same_value_tie() {
        let spec = SortSpec::new("n", false);
        assert_eq!(compare(&rec("n", 3), &rec("n", 3.0), &spec), Ordering::Equal);
    }

    #[test]
    fn test_default_spec() {
        let spec = SortSpec::default();
        assert_eq!(spec.field, "import_count");
        assert!(!spec.reverse);
    }
}

//! Behavior shared by every storage backend
//!
//! Each scenario is instantiated once per backend, plus a randomized check
//! against a plain dense vector.

use crate::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

macro_rules! conformance_tests {
    ($name:ident, $seq:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn default_ctor_counts() {
                let ints = $seq::<i32>::default();
                assert_eq!(ints.len(), 10);
                assert_eq!(ints.materialized_count(), 0);

                let floats = $seq::<f32>::default();
                assert_eq!(floats.len(), 10);
                assert_eq!(floats.materialized_count(), 0);
            }

            #[test]
            fn ctor_counts() {
                let doubles = $seq::<f64>::new(666);
                assert_eq!(doubles.len(), 666);
                assert_eq!(doubles.materialized_count(), 0);

                let strings = $seq::<String>::new(42);
                assert_eq!(strings.len(), 42);
                assert_eq!(strings.materialized_count(), 0);

                let empty = $seq::<i32>::new(0);
                assert!(empty.is_empty());
            }

            #[test]
            fn reads_return_defaults_without_materializing() {
                let ints = $seq::<i32>::new(5);
                assert_eq!(ints.get(0), Ok(0));
                for index in 0..ints.len() {
                    assert_eq!(ints.get(index), Ok(0));
                    assert_eq!(ints.is_materialized(index), Ok(false));
                }
                assert_eq!(ints.materialized_count(), 0);

                let bools = $seq::<bool>::new(7);
                for index in 0..bools.len() {
                    assert_eq!(bools.get(index), Ok(false));
                }
                assert_eq!(bools.materialized_count(), 0);
            }

            #[test]
            fn out_of_range_indices_fail() {
                let mut floats = $seq::<f32>::new(5);
                assert_eq!(floats.get(-1), Err(SeqError::InvalidArgument));
                assert_eq!(floats.get(floats.len()), Err(SeqError::InvalidArgument));
                assert_eq!(floats.get_or_insert_mut(-1), Err(SeqError::InvalidArgument));
                assert_eq!(floats.get_or_insert_mut(5), Err(SeqError::InvalidArgument));
                assert_eq!(floats.is_materialized(5), Err(SeqError::InvalidArgument));

                let strings = $seq::<String>::new(123_456_789);
                assert_eq!(strings.get(-76_543_210), Err(SeqError::InvalidArgument));
                assert_eq!(
                    strings.get(strings.len() + 12_345_678),
                    Err(SeqError::InvalidArgument)
                );

                assert_eq!(floats.materialized_count(), 0);
                assert_eq!(strings.materialized_count(), 0);
            }

            #[test]
            fn mutable_access_materializes_once() {
                let mut ints = $seq::<i32>::new(5);
                assert_eq!(*ints.get_or_insert_mut(0).unwrap(), 0);
                assert_eq!(ints.len(), 5);
                assert_eq!(ints.materialized_count(), 1);

                *ints.get_or_insert_mut(0).unwrap() = 42;
                assert_eq!(ints.get(0), Ok(42));
                assert_eq!(ints.materialized_count(), 1);
            }

            #[test]
            fn string_first_and_last() {
                let mut strings = $seq::<String>::new(11);
                let last = strings.len() - 1;
                assert_eq!(strings.get_or_insert_mut(last).unwrap().as_str(), "");
                assert_eq!(strings.materialized_count(), 1);

                *strings.get_or_insert_mut(last).unwrap() = "last".to_string();
                assert_eq!(strings.get(last), Ok("last".to_string()));
                assert_eq!(strings.materialized_count(), 1);

                *strings.get_or_insert_mut(0).unwrap() = "first".to_string();
                assert_eq!(strings.len(), 11);
                assert_eq!(strings.materialized_count(), 2);
                assert_eq!(strings.get(0), Ok("first".to_string()));
                assert_eq!(strings.get(last), Ok("last".to_string()));
            }

            #[test]
            fn assign_every_position() {
                let mut floats = $seq::<f32>::new(7);
                for index in 0..floats.len() {
                    *floats.get_or_insert_mut(index).unwrap() = index as f32;
                }

                assert_eq!(floats.len(), 7);
                assert_eq!(floats.materialized_count(), 7);
                for index in 0..floats.len() {
                    assert_eq!(floats.get(index), Ok(index as f32));
                }
                assert_eq!(floats.materialized_count(), 7);
            }

            #[test]
            fn clone_preserves_values() {
                let mut ints = $seq::<i32>::new(17);
                for index in 0..ints.len() {
                    ints.set(index, index as i32 - 9).unwrap();
                }

                let copy = ints.clone();
                ints.clear();

                assert_eq!(copy.len(), 17);
                assert_eq!(copy.materialized_count(), 17);
                for index in 0..copy.len() {
                    assert_eq!(copy.get(index), Ok(index as i32 - 9));
                }
            }

            #[test]
            fn clear_resets_entries() {
                let mut floats = $seq::<f32>::new(777);
                for index in (0..floats.len()).step_by(37) {
                    *floats.get_or_insert_mut(index).unwrap() = index as f32;
                }

                assert_eq!(floats.len(), 777);
                assert_eq!(floats.materialized_count(), 777 / 37);

                floats.clear();
                assert_eq!(floats.len(), 777);
                assert_eq!(floats.materialized_count(), 0);
                assert_eq!(floats.get(37), Ok(0.0));

                floats.clear();
                assert_eq!(floats.materialized_count(), 0);
            }

            #[test]
            fn render_empty() {
                assert_eq!($seq::<i32>::new(0).to_string(), "[]");
            }

            #[test]
            fn render_default() {
                assert_eq!($seq::<i32>::default().to_string(), "[0 0 0 0 0 0 0 0 0 0 ]");
            }

            #[test]
            fn render_even_positions() {
                let mut ints = $seq::<i32>::new(12);
                for index in (0..ints.len()).step_by(2) {
                    *ints.get_or_insert_mut(index).unwrap() = index as i32;
                }

                assert_eq!(ints.to_string(), "[0 0 2 0 4 0 6 0 8 0 10 0 ]");
            }

            #[test]
            fn dense_iteration_matches_reads() {
                let mut ints = $seq::<i32>::new(9);
                ints.set(8, 80).unwrap();
                ints.set(0, 1).unwrap();
                ints.set(4, 40).unwrap();

                let dense: Vec<i32> = ints.iter().collect();
                assert_eq!(dense.len(), ints.len());
                for (index, value) in dense.iter().enumerate() {
                    assert_eq!(ints.get(index), Ok(*value));
                }

                // Restarting yields the same view and never materializes
                assert_eq!(ints.iter().collect::<Vec<_>>(), dense);
                assert_eq!(ints.to_dense_vec(), dense);
                assert_eq!(ints.materialized_count(), 3);
            }

            #[test]
            fn randomized_against_dense_model() {
                for seed in 0..8 {
                    run_model($seq::<i32>::new(64), seed);
                }
                run_model($seq::<i32>::new(1), 99);
            }
        }
    };
}

conformance_tests!(sorted_vec, SparseVec);
conformance_tests!(btree, BTreeSparseVec);

/// Drive `seq` with random operations and compare against a dense vector
fn run_model<S: SparseSequence<Element = i32>>(mut seq: S, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = seq.len();
    let mut model = vec![0i32; len];
    let mut materialized = BTreeSet::new();

    for _ in 0..2_000 {
        let index = rng.gen_range(0..len);
        match rng.gen_range(0..100) {
            0..=39 => {
                assert_eq!(seq.get(index), Ok(model[index]));
            }
            40..=74 => {
                let value = rng.gen_range(-1_000..1_000);
                *seq.get_or_insert_mut(index).unwrap() = value;
                model[index] = value;
                materialized.insert(index);
            }
            75..=89 => {
                // Access without writing still materializes
                assert_eq!(*seq.get_or_insert_mut(index).unwrap(), model[index]);
                materialized.insert(index);
            }
            90..=97 => {
                let outside = len + rng.gen_range(0..len);
                assert_eq!(seq.get(outside), Err(SeqError::InvalidArgument));
            }
            _ => {
                seq.clear();
                model.iter_mut().for_each(|value| *value = 0);
                materialized.clear();
            }
        }

        assert_eq!(seq.materialized_count(), materialized.len());
    }

    assert_eq!(seq.to_dense_vec(), model);
    let stored: Vec<usize> = seq.entries().map(|(index, _)| index).collect();
    assert_eq!(stored, materialized.into_iter().collect::<Vec<_>>());
}

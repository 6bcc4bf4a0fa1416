//! Index Module Tests
//!
//! Validates the in-memory problem index and the membership check.
//!
//! ## Test Scopes
//! - **Idempotency**: Adding the same id twice (sequentially or concurrently) yields one entry.
//! - **Matching**: Substring containment, case folding, exclusion sets and the result cap.
//! - **Membership**: Monotonic `contains` and the `is_indexed` array quirk.

#[cfg(test)]
mod tests {
    use crate::index::membership::is_indexed;
    use crate::index::store::{IndexStore, DEFAULT_RESULT_CAP};
    use crate::problems::types::{Problem, ProblemView};
    use serde_json::json;
    use std::sync::Arc;

    const NONE: [&str; 0] = [];

    fn view(id: &str, name: &str) -> ProblemView {
        ProblemView::from(&Problem::new(id, name, true))
    }

    fn ids(list: &[ProblemView]) -> Vec<&str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    // ============================================================
    // ADD / CONTAINS
    // ============================================================

    #[test]
    fn test_new_index_is_empty() {
        let index = IndexStore::new();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(!index.contains("1"));
        assert_eq!(index.result_cap(), DEFAULT_RESULT_CAP);
    }

    #[test]
    fn test_add_makes_id_a_member() {
        let index = IndexStore::new();

        assert!(index.add(view("1", "Two Sum")));

        assert!(index.contains("1"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_add_is_idempotent() {
        let index = IndexStore::new();

        assert!(index.add(view("1", "Two Sum")));
        assert!(!index.add(view("1", "Two Sum")));

        assert_eq!(index.len(), 1);
        assert_eq!(ids(&index.matches("Two", &NONE)), vec!["1"]);
    }

    #[test]
    fn test_entries_are_write_once() {
        let index = IndexStore::new();
        index.add(view("1", "Two Sum"));

        // A renamed record with the same id does not replace the entry
        assert!(!index.add(view("1", "Three Sum")));

        assert_eq!(index.matches("Two", &NONE).len(), 1);
        assert!(index.matches("Three", &NONE).is_empty());
    }

    #[test]
    fn test_membership_is_monotonic() {
        let index = IndexStore::new();
        index.add(view("a", "Alpha problem"));

        for i in 0..50 {
            index.add(view(&format!("p{}", i), "Filler problem"));
            assert!(index.contains("a"));
        }
    }

    #[test]
    fn test_concurrent_adds_insert_once() {
        let index = Arc::new(IndexStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let index = index.clone();
                std::thread::spawn(move || {
                    let mut created = 0;
                    for i in 0..100 {
                        if index.add(view(&format!("id-{}", i), &format!("Problem {}", i))) {
                            created += 1;
                        }
                    }
                    created
                })
            })
            .collect();

        let created: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(created, 100, "Each id must be created by exactly one thread");
        assert_eq!(index.len(), 100);
        assert_eq!(ids(&index.matches("Problem 42", &NONE)), vec!["id-42"]);
    }

    #[test]
    fn test_concurrent_readers_see_consistent_state() {
        let index = Arc::new(IndexStore::with_result_cap(usize::MAX));

        let writer = {
            let index = index.clone();
            std::thread::spawn(move || {
                for i in 0..500 {
                    index.add(view(&format!("w{}", i), "Shared name"));
                }
            })
        };

        let reader = {
            let index = index.clone();
            std::thread::spawn(move || {
                for _ in 0..200 {
                    // An id reported as a member must already be searchable
                    let members: Vec<String> = (0..500)
                        .map(|i| format!("w{}", i))
                        .filter(|id| index.contains(id))
                        .collect();
                    let hits = index.matches("shared", &NONE);
                    let hit_ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
                    for id in &members {
                        assert!(hit_ids.contains(&id.as_str()));
                    }
                }
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();
        assert_eq!(index.len(), 500);
    }

    // ============================================================
    // MATCHES
    // ============================================================

    #[test]
    fn test_matches_substring() {
        let index = IndexStore::new();
        index.add(view("1", "Two Sum"));
        index.add(view("2", "Two Pointers"));
        index.add(view("3", "Graph BFS"));

        assert_eq!(ids(&index.matches("Two", &NONE)), vec!["1", "2"]);
        assert_eq!(ids(&index.matches("Sum", &NONE)), vec!["1"]);
        assert_eq!(ids(&index.matches("o S", &NONE)), vec!["1"]);
        assert!(index.matches("Dijkstra", &NONE).is_empty());
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let index = IndexStore::new();
        index.add(view("1", "Two Sum"));

        assert_eq!(ids(&index.matches("two", &NONE)), vec!["1"]);
        assert_eq!(ids(&index.matches("TWO SUM", &NONE)), vec!["1"]);
    }

    #[test]
    fn test_matches_respects_exclusions() {
        let index = IndexStore::new();
        index.add(view("1", "Two Sum"));
        index.add(view("2", "Two Pointers"));

        assert_eq!(ids(&index.matches("Two", &["1"])), vec!["2"]);
        assert!(index.matches("Two", &["1", "2"]).is_empty());
        // Unknown ids in the exclusion set are harmless
        assert_eq!(ids(&index.matches("Two", &["99"])), vec!["1", "2"]);
    }

    #[test]
    fn test_matches_never_returns_excluded_ids() {
        let index = IndexStore::with_result_cap(usize::MAX);
        for i in 0..40 {
            index.add(view(&i.to_string(), &format!("Tree problem {}", i)));
        }

        let excluded: Vec<String> = (0..40).filter(|i| i % 3 == 0).map(|i| i.to_string()).collect();
        let hits = index.matches("tree", &excluded);

        assert!(hits.iter().all(|p| !excluded.contains(&p.id)));
        assert_eq!(hits.len(), 40 - excluded.len());
    }

    #[test]
    fn test_matches_caps_results() {
        let index = IndexStore::new();
        for i in 0..25 {
            index.add(view(&i.to_string(), &format!("Segment tree {}", i)));
        }

        let hits = index.matches("segment", &NONE);

        assert_eq!(hits.len(), DEFAULT_RESULT_CAP);
        // Insertion order, deterministic
        assert_eq!(hits[0].id, "0");
        assert_eq!(hits[9].id, "9");
    }

    #[test]
    fn test_exclusions_apply_before_cap() {
        let index = IndexStore::with_result_cap(2);
        index.add(view("a", "Knapsack"));
        index.add(view("b", "Knapsack II"));
        index.add(view("c", "Knapsack III"));

        assert_eq!(ids(&index.matches("knap", &["a"])), vec!["b", "c"]);
    }

    #[test]
    fn test_matches_returns_projected_fields() {
        let index = IndexStore::new();
        let mut problem = Problem::new("abc", "Two Sum", true);
        problem.oj = Some("cf".to_string());
        problem.timelimit = Some(json!(1000));
        index.add(ProblemView::from(&problem));

        let hits = index.matches("two", &NONE);

        assert_eq!(hits[0].oj.as_deref(), Some("cf"));
        assert_eq!(hits[0].timelimit, Some(json!(1000)));
    }

    // ============================================================
    // MEMBERSHIP CHECK
    // ============================================================

    #[test]
    fn test_is_indexed_all_present() {
        let index = IndexStore::new();
        index.add(view("a", "A"));
        index.add(view("b", "B"));

        assert!(is_indexed(&index, &json!(["a", "b"])));
        assert!(is_indexed(&index, &json!([])));
    }

    #[test]
    fn test_is_indexed_missing_id() {
        let index = IndexStore::new();
        index.add(view("a", "A"));

        assert!(!is_indexed(&index, &json!(["a", "missing"])));
    }

    #[test]
    fn test_is_indexed_ignores_non_strings() {
        let index = IndexStore::new();
        index.add(view("validIndexedId", "A"));

        assert!(is_indexed(&index, &json!(["validIndexedId", 42])));
        assert!(is_indexed(&index, &json!([null, {"id": "x"}, 7])));
    }

    #[test]
    fn test_is_indexed_rejects_non_arrays() {
        let index = IndexStore::new();
        index.add(view("a", "A"));

        assert!(!is_indexed(&index, &json!("not-an-array")));
        assert!(!is_indexed(&index, &json!("a")));
        assert!(!is_indexed(&index, &json!({"0": "a"})));
        assert!(!is_indexed(&index, &json!(null)));
    }
}

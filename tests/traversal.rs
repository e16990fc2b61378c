#[cfg(test)]
mod traversal {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::thread;

    use ferrum_frame::frame::{Column, DataFrame, PrintRower, Predicate, Row, Rower};
    use ferrum_frame::store::{Key, MemoryStore};

    /// Sums column 0 and remembers which thread visited which rows.
    struct SumRower {
        total: i64,
        visited: Vec<usize>,
    }

    impl SumRower {
        fn new() -> SumRower {
            SumRower {
                total: 0,
                visited: vec![],
            }
        }
    }

    impl Rower for SumRower {
        fn accept(&mut self, row: &Row) -> bool {
            self.total += row.get_int(0).unwrap();
            self.visited.push(row.index());
            true
        }

        fn fork(&self) -> Self {
            SumRower::new()
        }

        fn merge_and_dispose(&mut self, other: Self) {
            self.total += other.total;
            self.visited.extend(other.visited);
        }
    }

    /// Records the thread it ran on, to check workers really run apart.
    struct ThreadRower {
        threads: Vec<thread::ThreadId>,
    }

    impl Rower for ThreadRower {
        fn accept(&mut self, _row: &Row) -> bool {
            let id = thread::current().id();
            if !self.threads.contains(&id) {
                self.threads.push(id);
            }
            true
        }

        fn fork(&self) -> Self {
            ThreadRower { threads: vec![] }
        }

        fn merge_and_dispose(&mut self, other: Self) {
            self.threads.extend(other.threads);
        }
    }

    fn _frame_of(n: i64) -> DataFrame {
        let mut frame = DataFrame::new();
        frame
            .add_column(Column::from((0..n).map(|i| i * 3 - 7).collect::<Vec<i64>>()))
            .unwrap();
        frame
    }

    #[test]
    fn map_visits_rows_in_order() {
        let frame = _frame_of(7);
        let mut rower = SumRower::new();

        frame.map(&mut rower);

        assert_eq!(rower.visited, (0..7).collect::<Vec<usize>>());
    }

    #[test]
    fn pmap_matches_map() {
        for n in [0, 1, 2, 7, 100] {
            let frame = _frame_of(n);

            let mut sequential = SumRower::new();
            frame.map(&mut sequential);

            let mut parallel = SumRower::new();
            frame.pmap_with_workers(&mut parallel, 2);

            assert_eq!(sequential.total, parallel.total, "n = {}", n);
            assert_eq!(sequential.visited, parallel.visited, "n = {}", n);
        }
    }

    #[test]
    fn pmap_with_many_workers_matches_map() {
        let frame = _frame_of(23);
        let mut sequential = SumRower::new();
        frame.map(&mut sequential);

        for workers in [1, 3, 4, 8, 40] {
            let mut parallel = SumRower::new();
            frame.pmap_with_workers(&mut parallel, workers);

            assert_eq!(sequential.total, parallel.total, "workers = {}", workers);
            assert_eq!(sequential.visited, parallel.visited, "workers = {}", workers);
        }
    }

    #[test]
    fn pmap_with_configured_workers_matches_map() {
        let frame = _frame_of(50);
        let mut sequential = SumRower::new();
        frame.map(&mut sequential);

        let mut parallel = SumRower::new();
        frame.pmap(&mut parallel);

        assert_eq!(sequential.total, parallel.total);
    }

    #[test]
    fn pmap_two_workers_split_at_midpoint() {
        // The original rower keeps the first half, the fork the second.
        let frame = _frame_of(5);
        let mut rower = PrintRower::new();
        let mut first_half = PrintRower::new();
        let mut second_half = PrintRower::new();

        frame.pmap_with_workers(&mut rower, 2);
        let mut row = Row::new(frame.schema());
        for index in 0..5 {
            frame.fill_row(index, &mut row).unwrap();
            if index < 2 {
                first_half.accept(&row);
            } else {
                second_half.accept(&row);
            }
        }

        let expected = format!("{}{}", first_half.output(), second_half.output());
        assert_eq!(rower.output(), expected);
    }

    #[test]
    fn pmap_runs_on_separate_threads() {
        let frame = _frame_of(10);
        let mut rower = ThreadRower { threads: vec![] };

        frame.pmap_with_workers(&mut rower, 2);

        assert_eq!(rower.threads.len(), 2);
        assert_ne!(rower.threads[0], rower.threads[1]);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn pmap_propagates_worker_panics() {
        struct Exploding;

        impl Rower for Exploding {
            fn accept(&mut self, row: &Row) -> bool {
                if row.index() == 3 {
                    panic!("boom");
                }
                true
            }

            fn fork(&self) -> Self {
                Exploding
            }

            fn merge_and_dispose(&mut self, _other: Self) {}
        }

        _frame_of(4).pmap_with_workers(&mut Exploding, 2);
    }

    #[test]
    fn filter_keeps_matching_rows_in_order() {
        let store = MemoryStore::new();
        let frame = DataFrame::from_int_array(&Key::new("digits", 0), &store, &[3, 1, 4, 1, 5]);
        let mut odd = Predicate::new(|row: &Row| row.get_int(0).unwrap() % 2 == 1);

        let odds = frame.filter(&mut odd).unwrap();

        assert_eq!(odds.nrows(), 4);
        assert_eq!(odds.ncols(), 1);
        let values: Vec<i64> = (0..4).map(|i| odds.get_int(0, i).unwrap()).collect();
        assert_eq!(values, vec![3, 1, 1, 5]);
        assert_eq!(odd.accepted(), 4);
    }

    #[test]
    fn filter_keeps_every_column() {
        let mut frame = _frame_of(4);
        frame
            .add_column(Column::from(vec!["a", "b", "c", "d"]))
            .unwrap();
        let mut late = Predicate::new(|row: &Row| row.index() >= 2);

        let kept = frame.filter(&mut late).unwrap();

        assert_eq!(kept.schema(), frame.schema());
        assert_eq!(kept.get_string(1, 0), Ok(Some("c")));
        assert_eq!(kept.get_string(1, 1), Ok(Some("d")));
    }

    #[test]
    fn filter_on_empty_frame_returns_empty_frame() {
        let frame = _frame_of(0);
        let mut all = Predicate::new(|_: &Row| true);

        let kept = frame.filter(&mut all).unwrap();

        assert_eq!(kept.nrows(), 0);
        assert_eq!(kept.ncols(), 1);
    }

    #[test]
    fn pmap_over_shared_frame() {
        let frame = Arc::new(_frame_of(30));
        let frames: Vec<_> = (0..3).map(|_| Arc::clone(&frame)).collect();

        let totals: Vec<i64> = thread::scope(|scope| {
            let handles: Vec<_> = frames
                .iter()
                .map(|frame| {
                    scope.spawn(move || {
                        let mut rower = SumRower::new();
                        frame.pmap_with_workers(&mut rower, 2);
                        rower.total
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(totals.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn pmap_with_more_workers_than_rows_matches_map() {
        let frame = _frame_of(3);
        let mut sequential = SumRower::new();
        frame.map(&mut sequential);

        let mut parallel = SumRower::new();
        frame.pmap_with_workers(&mut parallel, 100_000);

        assert_eq!(sequential.total, parallel.total);
        assert_eq!(sequential.visited, parallel.visited);
    }

    #[test]
    fn pmap_caps_workers_at_row_count() {
        let frame = _frame_of(3);
        let mut rower = ThreadRower { threads: vec![] };

        frame.pmap_with_workers(&mut rower, 100_000);

        assert!(rower.threads.len() <= 3);
    }

    #[test]
    fn map_and_filter_accept_rowers_that_are_not_send() {
        struct Tally {
            seen: Rc<Cell<usize>>,
        }

        impl Rower for Tally {
            fn accept(&mut self, row: &Row) -> bool {
                self.seen.set(self.seen.get() + 1);
                row.index() % 2 == 0
            }

            fn fork(&self) -> Self {
                Tally {
                    seen: Rc::clone(&self.seen),
                }
            }

            fn merge_and_dispose(&mut self, _other: Self) {}
        }

        let frame = _frame_of(5);
        let seen = Rc::new(Cell::new(0));
        let mut tally = Tally {
            seen: Rc::clone(&seen),
        };

        frame.map(&mut tally);
        let evens = frame.filter(&mut tally).unwrap();

        assert_eq!(seen.get(), 10);
        assert_eq!(evens.nrows(), 3);
    }

    #[test]
    fn predicate_may_capture_non_send_state() {
        let threshold = Rc::new(0_i64);
        let frame = _frame_of(5);
        let mut above = Predicate::new(|row: &Row| row.get_int(0).unwrap() > *threshold);

        let kept = frame.filter(&mut above).unwrap();

        assert_eq!(kept.nrows(), 2);
        assert_eq!(kept.get_int(0, 0), Ok(2));
    }
}

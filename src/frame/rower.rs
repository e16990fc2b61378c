use std::fmt::Display;

use super::row::Row;

/// A visitor that is called once per row of a frame.
///
/// For [`super::DataFrame::pmap`] a rower is forked once for every extra
/// worker. Each fork only ever sees its own contiguous range of rows. When
/// all workers have finished, the forks are folded back into the original
/// rower with [`Rower::merge_and_dispose`], in row order. Only `pmap`
/// needs the rower to be `Send`; `map` and `filter` accept any rower.
pub trait Rower {
    /// Visit one row. The return value decides whether
    /// [`super::DataFrame::filter`] keeps the row and is ignored by `map`.
    fn accept(&mut self, row: &Row) -> bool;

    /// Create an independent rower with equivalent state to run on another
    /// worker.
    fn fork(&self) -> Self
    where
        Self: Sized;

    /// Fold the state of a finished fork into this rower. The fork is
    /// consumed.
    fn merge_and_dispose(&mut self, other: Self)
    where
        Self: Sized;
}

/// Renders every row it visits, one per line. Used to print frames.
#[derive(Clone, Debug, Default)]
pub struct PrintRower {
    buffer: String,
}

impl PrintRower {
    pub fn new() -> PrintRower {
        PrintRower::default()
    }

    pub fn output(&self) -> &str {
        &self.buffer
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

impl Rower for PrintRower {
    fn accept(&mut self, row: &Row) -> bool {
        self.buffer.push_str(&row.to_string());
        self.buffer.push('\n');
        true
    }

    fn fork(&self) -> Self {
        PrintRower::new()
    }

    fn merge_and_dispose(&mut self, other: Self) {
        self.buffer.push_str(&other.buffer);
    }
}

impl Display for PrintRower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.buffer)
    }
}

/// A rower built from a closure, counting the rows it accepted.
///
/// ```
/// use ferrum_frame::frame::{DataFrame, Predicate, Column};
///
/// let mut frame = DataFrame::new();
/// frame.add_column(Column::from(vec![3_i64, 1, 4, 1, 5])).unwrap();
///
/// let mut odd = Predicate::new(|row| row.get_int(0).map_or(false, |v| v % 2 == 1));
/// let odds = frame.filter(&mut odd).unwrap();
///
/// assert_eq!(odds.nrows(), 4);
/// assert_eq!(odd.accepted(), 4);
/// ```
#[derive(Clone)]
pub struct Predicate<F> {
    predicate: F,
    accepted: usize,
}

impl<F> Predicate<F> {
    pub fn new(predicate: F) -> Predicate<F>
    where
        F: Fn(&Row) -> bool + Clone,
    {
        Predicate {
            predicate,
            accepted: 0,
        }
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

impl<F> Rower for Predicate<F>
where
    F: Fn(&Row) -> bool + Clone,
{
    fn accept(&mut self, row: &Row) -> bool {
        let keep = (self.predicate)(row);
        if keep {
            self.accepted += 1;
        }
        keep
    }

    fn fork(&self) -> Self {
        Predicate::new(self.predicate.clone())
    }

    fn merge_and_dispose(&mut self, other: Self) {
        self.accepted += other.accepted;
    }
}

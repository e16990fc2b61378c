use std::fmt::Display;
use std::io::{self, Write};
use std::panic;
use std::sync::Arc;
use std::thread;

use super::column::Column;
use super::row::Row;
use super::rower::{PrintRower, Rower};
use super::schema::Schema;
use super::value::Value;
use crate::config;
use crate::error::{FrameError, Result};
use crate::store::{Key, KeyValueStore};

/// A table of equally long, typed columns described by a [`Schema`].
///
/// The frame owns its columns. Every public operation leaves the frame with
/// - all columns exactly [`DataFrame::nrows`] long,
/// - one schema entry per column,
/// - column types matching the schema, in order.
#[derive(Clone, Debug, Default)]
pub struct DataFrame {
    schema: Schema,
    columns: Vec<Column>,
    length: usize,
}

impl DataFrame {
    pub fn new() -> DataFrame {
        //! An empty frame with an empty schema. Columns are added with
        //! [`DataFrame::add_column`] and the schema follows along.

        DataFrame::default()
    }

    pub fn from_schema(schema: &Schema) -> DataFrame {
        //! A frame with one empty column for every type in `schema`.

        DataFrame {
            schema: schema.clone(),
            columns: schema.types().iter().map(|t| Column::empty(*t)).collect(),
            length: 0,
        }
    }

    pub fn with_shape_of(other: &DataFrame) -> DataFrame {
        //! A frame with the same schema as `other` and no rows.

        DataFrame::from_schema(&other.schema)
    }

    fn from_column(column: Column) -> DataFrame {
        DataFrame {
            schema: Schema::from(vec![column.datatype()]),
            length: column.len(),
            columns: vec![column],
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> &Column {
        &self.columns[index]
    }

    pub fn nrows(&self) -> usize {
        self.length
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    pub fn add_column<C: Into<Option<Column>>>(&mut self, column: C) -> Result<()> {
        //! Append a column as the last column of the frame.
        //!
        //! A column shorter than the frame is padded with missing values. A
        //! longer one grows the frame and every existing column is padded to
        //! the new length. The schema gains the column's type if the frame
        //! now has more columns than the schema describes.
        //!
        //! Passing `None` is reported as [`FrameError::NullArgument`] and
        //! leaves the frame untouched.

        let Some(mut column) = column.into() else {
            log::warn!("add_column: no column given");
            return Err(FrameError::NullArgument("add_column requires a column"));
        };

        if column.len() < self.length {
            log::debug!(
                "add_column: padding new {} column from {} to {} rows",
                column.datatype(),
                column.len(),
                self.length
            );
            column.pad_to(self.length);
        } else if column.len() > self.length {
            log::debug!(
                "add_column: growing frame from {} to {} rows",
                self.length,
                column.len()
            );
            self.length = column.len();
            for existing in self.columns.iter_mut() {
                existing.pad_to(self.length);
            }
        }

        let datatype = column.datatype();
        self.columns.push(column);
        if self.columns.len() > self.schema.width() {
            self.schema.add_column(datatype);
        }

        Ok(())
    }

    pub fn get_int(&self, column: usize, row: usize) -> Result<i64> {
        let values = self.columns[column]
            .as_int()
            .map_err(|e| e.logged("get_int"))?;
        Ok(*values.get(row))
    }

    pub fn get_bool(&self, column: usize, row: usize) -> Result<bool> {
        let values = self.columns[column]
            .as_bool()
            .map_err(|e| e.logged("get_bool"))?;
        Ok(*values.get(row))
    }

    pub fn get_float(&self, column: usize, row: usize) -> Result<f64> {
        let values = self.columns[column]
            .as_float()
            .map_err(|e| e.logged("get_float"))?;
        Ok(*values.get(row))
    }

    pub fn get_string(&self, column: usize, row: usize) -> Result<Option<&str>> {
        //! `Ok(None)` is a missing string.

        let values = self.columns[column]
            .as_string()
            .map_err(|e| e.logged("get_string"))?;
        Ok(values.get_str(row))
    }

    pub fn set<V: Into<Value>>(&mut self, column: usize, row: usize, value: V) -> Result<()> {
        //! Overwrite one cell. The value must match the column's type.
        //! Out-of-range indices panic.

        let target = &mut self.columns[column];
        let result = match value.into() {
            Value::Int(v) => target.as_int_mut().map(|c| c.set(row, v)),
            Value::Bool(v) => target.as_bool_mut().map(|c| c.set(row, v)),
            Value::Float(v) => target.as_float_mut().map(|c| c.set(row, v)),
            Value::Str(v) => target.as_string_mut().map(|c| c.set(row, v)),
        };
        result.map_err(|e| e.logged("set"))
    }

    fn check_row_schema(&self, row: &Row) -> Result<()> {
        if row.schema().types() != self.schema.types() {
            log::warn!(
                "row schema [{}] does not match frame schema [{}]",
                row.schema(),
                self.schema
            );
            return Err(FrameError::SchemaMismatch {
                expected: self.schema.to_string(),
                found: row.schema().to_string(),
            });
        }
        Ok(())
    }

    fn load_row(&self, index: usize, row: &mut Row) {
        for (j, column) in self.columns.iter().enumerate() {
            row.put(j, column.get(index));
        }
    }

    pub fn fill_row(&self, index: usize, row: &mut Row) -> Result<()> {
        //! Copy the values at row `index` into `row`, which must have been
        //! built from a schema equal to this frame's.

        self.check_row_schema(row)?;
        self.load_row(index, row);
        Ok(())
    }

    pub fn add_row(&mut self, row: &Row) -> Result<()> {
        //! Append the values of `row` at the end of the frame. Strings are
        //! copied so the frame owns its own instances.

        self.check_row_schema(row)?;
        for (column, value) in self.columns.iter_mut().zip(row.values()) {
            column.push(value.clone())?;
        }
        self.length += 1;
        Ok(())
    }

    fn map_range<R: Rower>(&self, rower: &mut R, start: usize, end: usize) {
        log::trace!("map: visiting rows {}..{}", start, end);

        let mut row = Row::new(&self.schema);
        for index in start..end {
            row.set_index(index);
            self.load_row(index, &mut row);
            rower.accept(&row);
        }
    }

    pub fn map<R: Rower>(&self, rower: &mut R) {
        //! Visit every row in order.

        self.map_range(rower, 0, self.length);
    }

    pub fn pmap<R: Rower + Send>(&self, rower: &mut R) {
        //! Visit every row in parallel using the configured number of
        //! workers, see [`config::pmap_workers`].

        self.pmap_with_workers(rower, config::pmap_workers());
    }

    pub fn pmap_with_workers<R: Rower + Send>(&self, rower: &mut R, workers: usize) {
        //! Split the rows into `workers` contiguous ranges and visit them
        //! concurrently.
        //!
        //! Range `i` covers `[i * n / workers, (i + 1) * n / workers)`, so
        //! with two workers the split is at `n / 2`. The first range runs
        //! with `rower` itself and every other range with its own fork. Each
        //! worker has its own row cursor. Once every worker is done, the
        //! forks are merged into `rower` in range order.
        //!
        //! The worker count is capped at the number of rows (but never below
        //! two), so a large count never spawns idle threads. A panic in any
        //! worker is re-raised here after all workers have stopped.

        let n = self.length;
        let workers = workers.clamp(1, n.max(2));
        let ranges: Vec<(usize, usize)> = (0..workers)
            .map(|i| (range_bound(i, n, workers), range_bound(i + 1, n, workers)))
            .collect();
        log::debug!("pmap: {} rows across {} workers", n, workers);

        let mut forks: Vec<R> = (1..workers).map(|_| rower.fork()).collect();

        thread::scope(|scope| {
            let (start, end) = ranges[0];
            let first = &mut *rower;
            let mut handles = vec![scope.spawn(move || self.map_range(first, start, end))];

            for (fork, &(start, end)) in forks.iter_mut().zip(&ranges[1..]) {
                handles.push(scope.spawn(move || self.map_range(fork, start, end)));
            }

            let mut failure = None;
            for handle in handles {
                if let Err(payload) = handle.join() {
                    failure.get_or_insert(payload);
                }
            }
            if let Some(payload) = failure {
                panic::resume_unwind(payload);
            }
        });

        for fork in forks {
            rower.merge_and_dispose(fork);
        }
    }

    pub fn filter<R: Rower>(&self, rower: &mut R) -> Result<DataFrame> {
        //! Build a new frame, with the same schema, from the rows `rower`
        //! accepts. Row order is preserved and `rower` keeps whatever state
        //! it accumulated.

        let mut filtered = DataFrame::with_shape_of(self);
        let mut row = Row::new(&self.schema);
        for index in 0..self.length {
            row.set_index(index);
            self.load_row(index, &mut row);
            if rower.accept(&row) {
                filtered.add_row(&row)?;
            }
        }
        Ok(filtered)
    }

    pub fn print(&self) {
        //! Print every row to standard output, followed by a newline.

        if let Err(e) = self.print_to(&mut io::stdout().lock()) {
            log::warn!("print: {}", e);
        }
    }

    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        //! Write every row to `out`, one per line, followed by a newline.

        let mut printer = PrintRower::new();
        self.map(&mut printer);
        writeln!(out, "{}", printer.into_output())
    }

    pub fn serialize(&self) -> String {
        //! Render the frame as `{type: dataframe, columns: [<col>,...]}`.

        let columns: Vec<String> = self.columns.iter().map(Column::serialize).collect();
        format!("{{type: dataframe, columns: [{}]}}", columns.join(","))
    }

    fn register<S>(key: &Key, store: &S, column: Column) -> Arc<DataFrame>
    where
        S: KeyValueStore + ?Sized,
    {
        let frame = Arc::new(DataFrame::from_column(column));
        log::debug!("building single column frame for {}", key);
        store.put(key.clone(), Arc::clone(&frame));
        frame
    }

    pub fn from_int_array<S>(key: &Key, store: &S, values: &[i64]) -> Arc<DataFrame>
    where
        S: KeyValueStore + ?Sized,
    {
        //! Build a one-column frame from `values`, register it in `store`
        //! under `key` and return it.

        DataFrame::register(key, store, Column::from(values.to_vec()))
    }

    pub fn from_bool_array<S>(key: &Key, store: &S, values: &[bool]) -> Arc<DataFrame>
    where
        S: KeyValueStore + ?Sized,
    {
        DataFrame::register(key, store, Column::from(values.to_vec()))
    }

    pub fn from_float_array<S>(key: &Key, store: &S, values: &[f64]) -> Arc<DataFrame>
    where
        S: KeyValueStore + ?Sized,
    {
        DataFrame::register(key, store, Column::from(values.to_vec()))
    }

    pub fn from_string_array<S, V>(key: &Key, store: &S, values: &[V]) -> Arc<DataFrame>
    where
        S: KeyValueStore + ?Sized,
        V: Clone + Into<Option<String>>,
    {
        //! `None` entries become missing strings.

        let values: Vec<Option<String>> = values.iter().cloned().map(Into::into).collect();
        DataFrame::register(key, store, Column::from(values))
    }

    pub fn from_int_scalar<S>(key: &Key, store: &S, value: i64) -> Arc<DataFrame>
    where
        S: KeyValueStore + ?Sized,
    {
        //! Build a one-row, one-column frame holding `value`, register it in
        //! `store` under `key` and return it.

        DataFrame::register(key, store, Column::from(vec![value]))
    }

    pub fn from_bool_scalar<S>(key: &Key, store: &S, value: bool) -> Arc<DataFrame>
    where
        S: KeyValueStore + ?Sized,
    {
        DataFrame::register(key, store, Column::from(vec![value]))
    }

    pub fn from_float_scalar<S>(key: &Key, store: &S, value: f64) -> Arc<DataFrame>
    where
        S: KeyValueStore + ?Sized,
    {
        DataFrame::register(key, store, Column::from(vec![value]))
    }

    pub fn from_string_scalar<S>(key: &Key, store: &S, value: &str) -> Arc<DataFrame>
    where
        S: KeyValueStore + ?Sized,
    {
        DataFrame::register(key, store, Column::from(vec![value.to_string()]))
    }
}

fn range_bound(i: usize, n: usize, workers: usize) -> usize {
    (i as u128 * n as u128 / workers as u128) as usize
}

impl PartialEq for DataFrame {
    fn eq(&self, other: &Self) -> bool {
        self.ncols() == other.ncols()
            && self.nrows() == other.nrows()
            && self.columns == other.columns
    }
}

impl Display for DataFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut printer = PrintRower::new();
        self.map(&mut printer);
        write!(f, "{}\n{}", self.schema, printer)
    }
}

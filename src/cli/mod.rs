use colored::Colorize;

use ferrum_frame::config;
use ferrum_frame::frame::{DataFrame, DataType, Predicate, Row, Rower, Schema};
use ferrum_frame::store::{Key, KeyValueStore, MemoryStore};

use crate::cli::colors::FERRUM_RED;
use crate::cli::messages::{dim, highlight_argument, system_message};

mod colors;
pub mod messages;
pub mod parsers;

/// Sums one integer column. Forks start from zero so merging simply adds
/// the partial sums.
struct SumRower {
    column: usize,
    total: i64,
}

impl SumRower {
    fn new(column: usize) -> SumRower {
        SumRower { column, total: 0 }
    }
}

impl Rower for SumRower {
    fn accept(&mut self, row: &Row) -> bool {
        self.total += row.get_int(self.column).unwrap_or(0);
        true
    }

    fn fork(&self) -> Self {
        SumRower::new(self.column)
    }

    fn merge_and_dispose(&mut self, other: Self) {
        self.total += other.total;
    }
}

fn build_demo_frame(rows: usize) -> Result<DataFrame, String> {
    let schema = "IBFS".parse::<Schema>().map_err(|e| e.to_string())?;
    let mut frame = DataFrame::from_schema(&schema);
    let mut row = Row::new(&schema);

    for i in 0..rows {
        let value = (i as i64 * 7) % 11;
        row.set(0, value).map_err(|e| e.to_string())?;
        row.set(1, value % 2 == 0).map_err(|e| e.to_string())?;
        row.set(2, value as f64 / 4.0).map_err(|e| e.to_string())?;
        row.set(3, format!("row-{}", i)).map_err(|e| e.to_string())?;
        frame.add_row(&row).map_err(|e| e.to_string())?;
    }

    Ok(frame)
}

pub fn run_demo(rows: usize, workers: Option<usize>) -> Result<(), String> {
    //! Build a sample frame and run map, pmap, filter and serialize over it.

    if let Some(workers) = workers {
        config::set_pmap_workers(workers);
    }

    let frame = build_demo_frame(rows)?;
    println!(
        "{}",
        system_message(
            "frame",
            format!(
                "Built a frame of {} row(s) with schema {}.",
                highlight_argument(&frame.nrows().to_string()),
                highlight_argument(&frame.schema().to_string())
            )
        )
    );
    print!("{}", dim(&frame.to_string()));

    let mut sequential = SumRower::new(0);
    frame.map(&mut sequential);
    let mut parallel = SumRower::new(0);
    frame.pmap(&mut parallel);
    println!(
        "{}",
        system_message(
            "map",
            format!(
                "sum = {}, pmap over {} worker(s) sum = {}",
                highlight_argument(&sequential.total.to_string()),
                config::pmap_workers(),
                highlight_argument(&parallel.total.to_string())
            )
        )
    );

    let mut odd = Predicate::new(|row: &Row| row.get_int(0).is_ok_and(|v| v % 2 == 1));
    let odds = frame.filter(&mut odd).map_err(|e| e.to_string())?;
    println!(
        "{}",
        system_message(
            "filter",
            format!(
                "{} odd row(s) kept.",
                highlight_argument(&odd.accepted().to_string())
            )
        )
    );
    odds.print();

    let store = MemoryStore::new();
    let key = Key::new("demo-total", 0);
    let total = DataFrame::from_int_scalar(&key, &store, sequential.total);
    println!(
        "{}",
        system_message(
            "store",
            format!(
                "Registered {} as {}",
                highlight_argument(&key.to_string()),
                total.serialize()
            )
        )
    );

    match store.get(&key) {
        Some(_) => Ok(()),
        None => Err(format!("{} was not registered", key)),
    }
}

pub fn run_describe(tags: &str, json: bool) -> Result<(), String> {
    //! Print the column types of the schema written as `tags`.

    let schema = tags.parse::<Schema>().map_err(|e| e.to_string())?;

    if json {
        let rendered = serde_json::to_string_pretty(&schema).map_err(|e| e.to_string())?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{:6} {}", "COLUMN".color(FERRUM_RED), "TYPE");
    for (index, datatype) in schema.types().iter().enumerate() {
        let name = match datatype {
            DataType::Int => "integer",
            DataType::Bool => "boolean",
            DataType::Float => "float",
            DataType::Str => "string",
        };
        println!("{:6} {}", index.to_string().color(FERRUM_RED), name);
    }

    // An empty frame of this shape shows the serialized layout.
    let frame = DataFrame::from_schema(&schema);
    println!("{}", dim(&frame.serialize()));
    Ok(())
}

//! A frame is an in-memory table of typed columns with the following
//! components
//! - Schema (ordered column types, owned by the frame)
//! - Column (one of four typed arrays, all of the frame's length)
//! - Row (a reusable cursor shaped by a schema)
//! - Rower (a visitor driven over the rows by map, pmap and filter)
//! - DataFrame (owns the columns and keeps them in shape)
//!

//  All modules of this lib
mod column;
mod dataframe;
mod row;
mod rower;
mod schema;
mod serializer;
mod value;

//  External API
pub use column::{BoolColumn, Column, FloatColumn, IntColumn, StringColumn, TypedColumn};
pub use dataframe::DataFrame;
pub use row::Row;
pub use rower::{PrintRower, Predicate, Rower};
pub use schema::{DataType, Schema};
pub use serializer::Serializer;
pub use value::Value;

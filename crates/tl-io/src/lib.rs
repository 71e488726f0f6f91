//! `tl-io`: text formats at the edges of the planner.
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`loader`]  | `Problem`, `SimulationParams`, `load_problem`, `load_problem_reader` |
//! | [`writer`]  | `ScheduleWriter`, `write_solution`                          |
//! | [`error`]   | `FormatError`, `FormatResult<T>`                            |
//!
//! Both formats are space-separated lines, read and written with the `csv`
//! crate (space delimiter, flexible record length, no quoting).

pub mod error;
pub mod loader;
pub mod writer;


pub use error::{FormatError, FormatResult};
pub use loader::{Problem, SimulationParams, load_problem, load_problem_reader};
pub use writer::{ScheduleWriter, write_solution};

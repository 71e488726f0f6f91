//! Problem-file loader.
//!
//! # Format
//!
//! ```text
//! 6 4 5 2 1000                    D I S V F
//! 2 0 rue-de-londres 1            S lines: B E name L
//! 0 1 rue-d-amsterdam 1
//! 3 1 rue-d-athenes 1
//! 2 3 rue-de-rome 2
//! 1 2 rue-de-moscou 3
//! 4 rue-de-londres rue-d-amsterdam rue-de-moscou rue-de-rome
//! 3 rue-d-athenes rue-de-moscou rue-de-londres     V lines: P name_1 .. name_P
//! ```
//!
//! | Field | Meaning                                         |
//! |-------|-------------------------------------------------|
//! | `D`   | simulation duration                             |
//! | `I`   | intersection count                              |
//! | `S`   | street count                                    |
//! | `V`   | car count                                       |
//! | `F`   | bonus per car reaching its destination in time  |
//!
//! Every count is checked against the lines that follow, and any violation
//! (unknown or duplicate street name, endpoint out of range, short line)
//! fails the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};

use tl_core::{CarId, IntersectionId};
use tl_network::{Car, NetworkError, TrafficNetwork, TrafficNetworkBuilder};

use crate::{FormatError, FormatResult};

// ── Problem ───────────────────────────────────────────────────────────────────

/// Header values that are not part of the graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimulationParams {
    /// Simulation horizon, in the same time units as street lengths.
    pub duration: u32,
    /// Score bonus for each car that finishes before the horizon.
    pub bonus:    u32,
}

/// A fully loaded and validated problem.
#[derive(Debug)]
pub struct Problem {
    pub params:  SimulationParams,
    pub network: TrafficNetwork,
    pub cars:    Vec<Car>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a problem from a file.
pub fn load_problem(path: &Path) -> FormatResult<Problem> {
    let file = File::open(path)?;
    load_problem_reader(file)
}

/// Like [`load_problem`] but accepts any `Read` source.
pub fn load_problem_reader<R: Read>(reader: R) -> FormatResult<Problem> {
    let csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .quoting(false)
        .from_reader(reader);
    let mut lines = Lines { records: csv_reader.into_records() };

    // ── Header ────────────────────────────────────────────────────────────
    let (line, header) = lines.next_line("header line")?;
    let [duration, intersections, streets, cars, bonus] = header.as_slice() else {
        return Err(parse_error(line, format!("header needs 5 fields, found {}", header.len())));
    };
    let params = SimulationParams {
        duration: parse_field(duration, "duration", line)?,
        bonus:    parse_field(bonus, "bonus", line)?,
    };
    let intersection_count: usize = parse_field(intersections, "intersection count", line)?;
    let street_count:       usize = parse_field(streets, "street count", line)?;
    let car_count:          usize = parse_field(cars, "car count", line)?;

    if intersection_count == 0 {
        return Err(NetworkError::NoIntersections.into());
    }
    if street_count == 0 {
        return Err(NetworkError::NoStreets.into());
    }

    // ── Streets ───────────────────────────────────────────────────────────
    let mut builder = TrafficNetworkBuilder::with_capacity(intersection_count, street_count);
    for i in 0..street_count {
        let (line, fields) = lines.next_line(&format!("street {i}"))?;
        let [from, to, name, length] = fields.as_slice() else {
            return Err(parse_error(
                line,
                format!("street needs 4 fields (from to name length), found {}", fields.len()),
            ));
        };
        builder.add_street(
            IntersectionId(parse_field(from, "source intersection", line)?),
            IntersectionId(parse_field(to, "target intersection", line)?),
            name,
            parse_field(length, "street length", line)?,
        )?;
    }
    let network = builder.build()?;

    // ── Cars ──────────────────────────────────────────────────────────────
    let mut car_list = Vec::with_capacity(car_count);
    for i in 0..car_count {
        let (line, fields) = lines.next_line(&format!("car {i}"))?;
        let Some((declared, names)) = fields.split_first() else {
            return Err(parse_error(line, "empty car line".into()));
        };
        let declared: usize = parse_field(declared, "route length", line)?;
        if declared != names.len() {
            return Err(parse_error(
                line,
                format!("route declares {declared} streets but lists {}", names.len()),
            ));
        }
        let id = CarId::try_from(i).map_err(|e| parse_error(line, e.to_string()))?;
        car_list.push(Car::from_names(id, &network, names.iter().map(String::as_str))?);
    }

    if let Some((line, _)) = lines.try_next()? {
        warn!("ignoring trailing content from line {line} on");
    }

    info!(
        "loaded {} intersections, {} streets, {} cars (duration {}, bonus {})",
        network.intersection_count(),
        network.street_count(),
        car_list.len(),
        params.duration,
        params.bonus,
    );

    Ok(Problem { params, network, cars: car_list })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Line-oriented view over the CSV records, dropping the empty fields that
/// repeated or trailing spaces produce.
struct Lines<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
}

impl<R: Read> Lines<R> {
    fn try_next(&mut self) -> FormatResult<Option<(u64, Vec<String>)>> {
        for record in self.records.by_ref() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            let fields: Vec<String> =
                record.iter().filter(|f| !f.is_empty()).map(str::to_owned).collect();
            if !fields.is_empty() {
                return Ok(Some((line, fields)));
            }
        }
        Ok(None)
    }

    fn next_line(&mut self, what: &str) -> FormatResult<(u64, Vec<String>)> {
        self.try_next()?.ok_or_else(|| FormatError::Truncated(what.to_owned()))
    }
}

fn parse_field<T: FromStr>(field: &str, what: &str, line: u64) -> FormatResult<T>
where
    T::Err: std::fmt::Display,
{
    field
        .parse()
        .map_err(|e| parse_error(line, format!("invalid {what} {field:?}: {e}")))
}

fn parse_error(line: u64, msg: String) -> FormatError {
    FormatError::Parse { line, msg }
}

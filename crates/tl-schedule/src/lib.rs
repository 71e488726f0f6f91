//! `tl-schedule`: the green-phase scheduling heuristic.
//!
//! # Pipeline
//!
//! ```text
//! ① Score      -> one pass over all routes: local pressure per intersection,
//!                 position-weighted global score per street.
//! ② Assign     -> raw weights per intersection (single-incoming shortcut,
//!                 pressure counts, or round-robin fallback).
//! ③ Upscale    -> multiply the raw weight of the top-scoring fraction of
//!                 streets.
//! ④ Normalize  -> map each intersection's weights onto [min, max] and round.
//! ⑤ Sort       -> entries by duration descending, ties in assignment order.
//! ```
//!
//! All accumulators are owned by the [`solve`] call that created them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`tally`]     | `StreetTally` (insertion-ordered street → u64 map)      |
//! | [`pressure`]  | `RoutePressure`, `GlobalScores`, `score_routes`         |
//! | [`assign`]    | `RawSchedule`, `RawSchedules`, `assign_schedules`       |
//! | [`upscale`]   | `upscale_top_streets`                                   |
//! | [`normalize`] | `TimeRange`, `normalize_weights`, `normalize_schedules` |
//! | [`solver`]    | `solve`, `SolvedSchedules`, `SolveStats`                |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                    |

pub mod assign;
pub mod error;
pub mod normalize;
pub mod pressure;
pub mod solver;
pub mod tally;
pub mod upscale;


pub use assign::{AssignRule, RawSchedule, RawSchedules, assign_intersection, assign_schedules};
pub use error::{ScheduleError, ScheduleResult};
pub use normalize::{TimeRange, normalize_schedules, normalize_weights};
pub use pressure::{FIRST_LEG_BONUS, GlobalScores, RoutePressure, leg_score, score_routes};
pub use solver::{IntersectionSchedule, SolveStats, SolvedSchedules, solve};
pub use tally::StreetTally;
pub use upscale::upscale_top_streets;

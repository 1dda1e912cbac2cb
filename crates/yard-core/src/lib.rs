//! `yard-core` — foundational types for the charging-yard simulator.
//!
//! Every other `yard-*` crate depends on this one.  It has no `yard-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`ids`]       | `VehicleId`, `StationId`                        |
//! | [`time`]      | `Minute`                                        |
//! | [`rng`]       | `YardRng` (explicit entropy source)             |
//! | [`config`]    | `YardConfig`                                    |
//! | [`error`]     | `YardError`, `YardResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::YardConfig;
pub use error::{YardError, YardResult};
pub use ids::{StationId, VehicleId};
pub use rng::YardRng;
pub use time::Minute;

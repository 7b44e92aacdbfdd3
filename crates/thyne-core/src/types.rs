//! Shared type aliases

use chrono::{DateTime as ChronoDateTime, Utc};

/// Standard UTC datetime type used as the seeding clock.
///
/// The clock is threaded explicitly into fixture constructors and the
/// seeder so that runs are deterministic under test.
pub type UtcDateTime = ChronoDateTime<Utc>;

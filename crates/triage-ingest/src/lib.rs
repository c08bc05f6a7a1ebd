pub mod csv_table;
pub mod error;
pub mod roster;

pub use csv_table::{RosterTable, read_roster_table};
pub use error::{IngestError, Result};
pub use roster::{read_roster_file, records_from_table};

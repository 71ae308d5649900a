//! Facilities for parsing unit names and composite unit strings.

mod base;
mod composite;
mod default_parser;
mod prefix;
mod table;

pub use base::{UnitParser, UnitParserError};
pub use composite::parse_composite_unit;
pub use default_parser::{DEFAULT_PARSER, default_parser, default_units_table};
pub use prefix::PrefixParser;
pub use table::TableBasedParser;

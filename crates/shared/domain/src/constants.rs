//! String constants shared by the engine, the tools, and the tests.

/// Group assigned to records that carry no platform name.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Separator between a domain and a purpose tag in salted hash seeds.
pub const SALT_SEPARATOR: char = '_';

/// Default dataset locations used by the CLI.
pub const DEFAULT_INPUT: &str = "data/fediverse_raw.json";
pub const DEFAULT_OUTPUT: &str = "data/fediverse_final.json";

/// Marker for "read from stdin" / "write to stdout".
pub const STDIO_MARKER: &str = "-";

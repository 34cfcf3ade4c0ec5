use hashbrown::HashMap as FastHashMap;

/// Capture name to captured text. `None` marks an optional capture that did
/// not participate in the match.
pub type CaptureGroups = FastHashMap<String, Option<String>>;

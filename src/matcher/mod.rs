mod groups;

pub(crate) use groups::captures_to_groups;

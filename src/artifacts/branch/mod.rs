//! Branch names under `refs/heads`

pub mod branch_name;

/// Matches any name git would refuse as a ref component
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

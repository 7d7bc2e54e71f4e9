//! Declarative APPLY option schema.
//!
//! Maps each legal attribute name to a tagged shape descriptor. The
//! traversal in [`crate::validate`] consults these tables uniformly
//! instead of branching per attribute name. The tables are fixed for
//! the process lifetime.

/// Expected shape of a top-level APPLY option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionShape {
    /// JSON `true` or `false`.
    Bool,
    /// A list whose elements are strings.
    StringList,
    /// A list drawn from the GROUPEXTEND token set.
    TokenList,
    /// The literal `ALL` (case-insensitive, trimmed) or a list of strings.
    LiteralOrList,
    /// A nested mapping of BYPASS options.
    Bypass,
}

/// Expected shape of a BYPASS option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BypassShape {
    /// JSON `true` or `false`.
    Bool,
    /// A list whose elements are strings.
    StringList,
    /// A list drawn from the hold-class set.
    ClassList,
    /// A mapping keyed by system reason IDs, each value a list of strings.
    ReasonMap,
}

/// Legal top-level APPLY options and their shapes.
pub const APPLY_SCHEMA: &[(&str, OptionShape)] = &[
    ("apars", OptionShape::Bool),
    ("assem", OptionShape::Bool),
    ("bypass", OptionShape::Bypass),
    ("check", OptionShape::Bool),
    ("compress", OptionShape::LiteralOrList),
    ("exclude", OptionShape::StringList),
    ("exsrcid", OptionShape::StringList),
    ("fixcat", OptionShape::StringList),
    ("forfmid", OptionShape::StringList),
    ("functions", OptionShape::Bool),
    ("group", OptionShape::Bool),
    ("groupextend", OptionShape::TokenList),
    ("jclinreport", OptionShape::Bool),
    ("nojclin", OptionShape::StringList),
    ("ptfs", OptionShape::Bool),
    ("redo", OptionShape::Bool),
    ("retry", OptionShape::Bool),
    ("reuse", OptionShape::Bool),
    ("select", OptionShape::StringList),
    ("sourceid", OptionShape::StringList),
    ("usermods", OptionShape::Bool),
    ("xzgroup", OptionShape::StringList),
    ("xzreq", OptionShape::Bool),
];

/// Legal BYPASS options and their shapes.
pub const BYPASS_SCHEMA: &[(&str, BypassShape)] = &[
    ("holdclass", BypassShape::ClassList),
    ("holderror", BypassShape::StringList),
    ("holdfixcat", BypassShape::StringList),
    ("holdsystem", BypassShape::ReasonMap),
    ("holduser", BypassShape::StringList),
    ("id", BypassShape::Bool),
    ("ifreq", BypassShape::Bool),
    ("pre", BypassShape::Bool),
    ("req", BypassShape::Bool),
    ("xzifreq", BypassShape::StringList),
];

/// Look up the shape of a top-level APPLY option.
pub fn apply_shape(name: &str) -> Option<OptionShape> {
    APPLY_SCHEMA
        .iter()
        .find(|(attr, _)| *attr == name)
        .map(|(_, shape)| *shape)
}

/// Look up the shape of a BYPASS option.
pub fn bypass_shape(name: &str) -> Option<BypassShape> {
    BYPASS_SCHEMA
        .iter()
        .find(|(attr, _)| *attr == name)
        .map(|(_, shape)| *shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_schema_has_twenty_three_options() {
        assert_eq!(APPLY_SCHEMA.len(), 23);
    }

    #[test]
    fn bypass_schema_has_ten_options() {
        assert_eq!(BYPASS_SCHEMA.len(), 10);
    }

    #[test]
    fn apply_lookup_known() {
        assert_eq!(apply_shape("check"), Some(OptionShape::Bool));
        assert_eq!(apply_shape("groupextend"), Some(OptionShape::TokenList));
        assert_eq!(apply_shape("compress"), Some(OptionShape::LiteralOrList));
        assert_eq!(apply_shape("bypass"), Some(OptionShape::Bypass));
        assert_eq!(apply_shape("xzgroup"), Some(OptionShape::StringList));
    }

    #[test]
    fn apply_lookup_unknown() {
        assert_eq!(apply_shape("bogus"), None);
        // Lookup is case-sensitive; option names are lower case.
        assert_eq!(apply_shape("CHECK"), None);
    }

    #[test]
    fn bypass_lookup_known() {
        assert_eq!(bypass_shape("holdclass"), Some(BypassShape::ClassList));
        assert_eq!(bypass_shape("holdsystem"), Some(BypassShape::ReasonMap));
        assert_eq!(bypass_shape("ifreq"), Some(BypassShape::Bool));
        assert_eq!(bypass_shape("holduser"), Some(BypassShape::StringList));
    }

    #[test]
    fn bypass_lookup_unknown() {
        assert_eq!(bypass_shape("bogus"), None);
        // Top-level names are not BYPASS names.
        assert_eq!(bypass_shape("group"), None);
    }

    #[test]
    fn schema_names_are_unique_and_sorted() {
        let mut names: Vec<&str> = APPLY_SCHEMA.iter().map(|(n, _)| *n).collect();
        let declared = names.clone();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names, declared);

        let mut bypass: Vec<&str> = BYPASS_SCHEMA.iter().map(|(n, _)| *n).collect();
        let declared = bypass.clone();
        bypass.sort_unstable();
        bypass.dedup();
        assert_eq!(bypass, declared);
    }
}

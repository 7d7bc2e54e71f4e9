//! Closed enumerations for APPLY option values.
//!
//! Each enumeration carries an `ALL` slice for iteration and an
//! `allowed_names` helper used when a diagnostic has to name the legal
//! value set. Parsing rules differ per enumeration and match what the
//! processing engine accepts:
//!
//! - [`GroupExtendToken`]: trimmed, case-insensitive
//! - [`HoldClass`]: case-insensitive, no trimming
//! - [`SystemReason`]: exact lower-case match

use serde::{Deserialize, Serialize};
use std::fmt;

/// Modifier tokens accepted by the `groupextend` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupExtendToken {
    /// Extend grouping without pulling in APAR fixes.
    NoApars,
    /// Extend grouping without pulling in user modifications.
    NoUserMods,
}

impl GroupExtendToken {
    /// All recognized tokens.
    pub const ALL: &'static [GroupExtendToken] =
        &[GroupExtendToken::NoApars, GroupExtendToken::NoUserMods];

    /// Parse a token, trimming surrounding whitespace and ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NOAPARS" => Some(GroupExtendToken::NoApars),
            "NOUSERMODS" => Some(GroupExtendToken::NoUserMods),
            _ => None,
        }
    }

    /// Canonical upper-case spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupExtendToken::NoApars => "NOAPARS",
            GroupExtendToken::NoUserMods => "NOUSERMODS",
        }
    }

    /// Comma-separated list of all recognized tokens, for diagnostics.
    pub fn allowed_names() -> String {
        join_names(Self::ALL.iter().map(|t| t.as_str()))
    }
}

impl fmt::Display for GroupExtendToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hold classes accepted by BYPASS HOLDCLASS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HoldClass {
    /// Error-related hold.
    Errel,
    /// High-impact pervasive fix.
    Hiper,
    /// Fix in error.
    Pe,
    /// UCLIN-related hold.
    Uclrel,
    /// Year-2000 remediation hold.
    Yr2000,
}

impl HoldClass {
    /// All recognized hold classes.
    pub const ALL: &'static [HoldClass] = &[
        HoldClass::Errel,
        HoldClass::Hiper,
        HoldClass::Pe,
        HoldClass::Uclrel,
        HoldClass::Yr2000,
    ];

    /// Parse a class name, ignoring case. Surrounding whitespace is not
    /// stripped; `" PE"` is not a valid class.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ERREL" => Some(HoldClass::Errel),
            "HIPER" => Some(HoldClass::Hiper),
            "PE" => Some(HoldClass::Pe),
            "UCLREL" => Some(HoldClass::Uclrel),
            "YR2000" => Some(HoldClass::Yr2000),
            _ => None,
        }
    }

    /// Canonical upper-case spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            HoldClass::Errel => "ERREL",
            HoldClass::Hiper => "HIPER",
            HoldClass::Pe => "PE",
            HoldClass::Uclrel => "UCLREL",
            HoldClass::Yr2000 => "YR2000",
        }
    }

    /// Comma-separated list of all recognized classes, for diagnostics.
    pub fn allowed_names() -> String {
        join_names(Self::ALL.iter().map(|c| c.as_str()))
    }
}

impl fmt::Display for HoldClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// System reason IDs accepted as keys of BYPASS HOLDSYSTEM.
///
/// Reason IDs are lower-case identifiers and are matched exactly; the
/// processing engine does not fold case for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemReason {
    Action,
    Ao,
    Db2bind,
    Dddef,
    Delete,
    Dep,
    Doc,
    Downld,
    Dynact,
    Ec,
    Enh,
    Exit,
    Exrf,
    Fullgen,
    Iogen,
    Ipl,
    Msgskel,
    Multsys,
    Restart,
}

impl SystemReason {
    /// All recognized system reason IDs.
    pub const ALL: &'static [SystemReason] = &[
        SystemReason::Action,
        SystemReason::Ao,
        SystemReason::Db2bind,
        SystemReason::Dddef,
        SystemReason::Delete,
        SystemReason::Dep,
        SystemReason::Doc,
        SystemReason::Downld,
        SystemReason::Dynact,
        SystemReason::Ec,
        SystemReason::Enh,
        SystemReason::Exit,
        SystemReason::Exrf,
        SystemReason::Fullgen,
        SystemReason::Iogen,
        SystemReason::Ipl,
        SystemReason::Msgskel,
        SystemReason::Multsys,
        SystemReason::Restart,
    ];

    /// Parse a reason ID. Exact match only.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == s)
    }

    /// Canonical lower-case spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemReason::Action => "action",
            SystemReason::Ao => "ao",
            SystemReason::Db2bind => "db2bind",
            SystemReason::Dddef => "dddef",
            SystemReason::Delete => "delete",
            SystemReason::Dep => "dep",
            SystemReason::Doc => "doc",
            SystemReason::Downld => "downld",
            SystemReason::Dynact => "dynact",
            SystemReason::Ec => "ec",
            SystemReason::Enh => "enh",
            SystemReason::Exit => "exit",
            SystemReason::Exrf => "exrf",
            SystemReason::Fullgen => "fullgen",
            SystemReason::Iogen => "iogen",
            SystemReason::Ipl => "ipl",
            SystemReason::Msgskel => "msgskel",
            SystemReason::Multsys => "multsys",
            SystemReason::Restart => "restart",
        }
    }

    /// Comma-separated list of all recognized reason IDs, for diagnostics.
    pub fn allowed_names() -> String {
        join_names(Self::ALL.iter().map(|r| r.as_str()))
    }
}

impl fmt::Display for SystemReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

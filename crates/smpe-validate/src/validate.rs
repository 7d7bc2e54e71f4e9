//! Single-pass validation of an APPLY option mapping.
//!
//! The traversal walks every attribute of the input, checks its value
//! against the declared shape from [`crate::schema`], and collects every
//! violation it finds. Cross-field rules run after the per-attribute
//! pass, regardless of earlier findings. The only fatal condition is a
//! top-level value that is not a mapping.
//!
//! Element policy: when a list contains more than one offending element,
//! every offending element is reported, at most once each. The scan of
//! sibling attributes is never aborted.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, trace};

use smpe_common::{GroupExtendToken, HoldClass, SystemReason};

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::schema::{apply_shape, bypass_shape, BypassShape, OptionShape};

/// Sentinel literal accepted by the `compress` option.
const COMPRESS_ALL: &str = "ALL";

/// Fatal error: the top-level input is not a mapping.
///
/// Raised before any other check and never aggregated with diagnostics.
#[derive(Debug, Error)]
#[error("APPLY options must be supplied as a mapping, got {kind}")]
pub struct StructuralError {
    kind: &'static str,
}

impl StructuralError {
    fn from_value(value: &Value) -> Self {
        Self {
            kind: json_kind(value),
        }
    }

    /// Human-readable kind of the value that was supplied instead.
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

/// Outcome of validating one APPLY option mapping.
#[derive(Debug, Clone)]
pub enum ValidationOutcome {
    /// No violation found.
    Valid,
    /// One or more violations, in discovery order.
    Invalid(Diagnostics),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Collected violations; empty for a valid outcome.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            ValidationOutcome::Valid => &[],
            ValidationOutcome::Invalid(diags) => diags.as_slice(),
        }
    }
}

/// Error category exposed to callers that want a single `Result`.
///
/// Callers match on the variant instead of parsing message text: a
/// [`PreflightError::Structural`] means the input was not even a
/// mapping, a [`PreflightError::Rejected`] carries the full report.
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("APPLY options rejected:\n{0}")]
    Rejected(Diagnostics),
}

/// Validate an APPLY option mapping against the fixed schema.
///
/// Returns `Err` only when `options` is not a mapping. Otherwise the
/// result is [`ValidationOutcome::Valid`] or
/// [`ValidationOutcome::Invalid`] with every discovered violation.
/// The input is only read, never mutated.
pub fn validate(options: &Value) -> Result<ValidationOutcome, StructuralError> {
    let map = match options.as_object() {
        Some(map) => map,
        None => return Err(StructuralError::from_value(options)),
    };

    debug!(attributes = map.len(), "validating APPLY options");
    let mut diags = Diagnostics::new();

    for (name, value) in map {
        trace!(attribute = %name, "checking APPLY option");
        match apply_shape(name) {
            None => diags.push(format!(
                "attribute '{name}' is not a valid APPLY option"
            )),
            Some(OptionShape::Bool) => check_bool(name, value, &mut diags),
            Some(OptionShape::StringList) => check_string_list(name, value, &mut diags),
            Some(OptionShape::TokenList) => check_token_list(name, value, &mut diags),
            Some(OptionShape::LiteralOrList) => check_literal_or_list(name, value, &mut diags),
            Some(OptionShape::Bypass) => check_bypass(name, value, &mut diags),
        }
    }

    check_cross_field(map, &mut diags);

    if diags.is_empty() {
        Ok(ValidationOutcome::Valid)
    } else {
        debug!(diagnostics = diags.len(), "APPLY options rejected");
        Ok(ValidationOutcome::Invalid(diags))
    }
}

/// Validate and collapse the outcome into a single `Result`.
pub fn ensure_valid(options: &Value) -> Result<(), PreflightError> {
    match validate(options)? {
        ValidationOutcome::Valid => Ok(()),
        ValidationOutcome::Invalid(diags) => Err(PreflightError::Rejected(diags)),
    }
}

// ── Per-attribute checks ────────────────────────────────────────────────

fn check_bool(name: &str, value: &Value, diags: &mut Diagnostics) {
    if !value.is_boolean() {
        diags.push(format!("attribute '{name}' must be a boolean"));
    }
}

fn check_string_list(name: &str, value: &Value, diags: &mut Diagnostics) {
    let Some(items) = value.as_array() else {
        diags.push(format!("attribute '{name}' must be a list of strings"));
        return;
    };
    for (index, item) in items.iter().enumerate() {
        if !item.is_string() {
            diags.push(format!(
                "attribute '{name}' must be a list of strings (element {index} is not a string)"
            ));
        }
    }
}

fn check_token_list(name: &str, value: &Value, diags: &mut Diagnostics) {
    let allowed = GroupExtendToken::allowed_names();
    let Some(items) = value.as_array() else {
        diags.push(format!(
            "attribute '{name}' must be a list, empty or containing the values: {allowed}"
        ));
        return;
    };
    for (index, item) in items.iter().enumerate() {
        match item.as_str() {
            None => diags.push(format!(
                "attribute '{name}' must be a list of strings drawn from: {allowed} \
                 (element {index} is not a string)"
            )),
            Some(s) if GroupExtendToken::parse(s).is_none() => diags.push(format!(
                "attribute '{name}' value '{s}' is not one of the allowed values: {allowed}"
            )),
            Some(_) => {}
        }
    }
}

fn check_literal_or_list(name: &str, value: &Value, diags: &mut Diagnostics) {
    match value {
        Value::String(s) if s.trim().eq_ignore_ascii_case(COMPRESS_ALL) => {}
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if !item.is_string() {
                    diags.push(format!(
                        "attribute '{name}' must be either the literal '{COMPRESS_ALL}' or a \
                         list of strings (element {index} is not a string)"
                    ));
                }
            }
        }
        _ => diags.push(format!(
            "attribute '{name}' must be either the literal '{COMPRESS_ALL}' or a list of strings"
        )),
    }
}

// ── BYPASS sub-validation ───────────────────────────────────────────────

fn check_bypass(name: &str, value: &Value, diags: &mut Diagnostics) {
    let Some(map) = value.as_object() else {
        diags.push(format!(
            "attribute '{name}' must be a mapping of BYPASS options"
        ));
        return;
    };
    for (key, nested) in map {
        trace!(option = %key, "checking BYPASS option");
        match bypass_shape(key) {
            None => diags.push(format!(
                "attribute '{key}' is not a valid BYPASS option"
            )),
            Some(BypassShape::Bool) => {
                if !nested.is_boolean() {
                    diags.push(format!("BYPASS option '{key}' must be a boolean"));
                }
            }
            Some(BypassShape::StringList) => check_bypass_string_list(key, nested, diags),
            Some(BypassShape::ClassList) => check_hold_classes(key, nested, diags),
            Some(BypassShape::ReasonMap) => check_hold_system(key, nested, diags),
        }
    }
}

fn check_bypass_string_list(key: &str, value: &Value, diags: &mut Diagnostics) {
    let Some(items) = value.as_array() else {
        diags.push(format!("BYPASS option '{key}' must be a list of strings"));
        return;
    };
    for (index, item) in items.iter().enumerate() {
        if !item.is_string() {
            diags.push(format!(
                "BYPASS option '{key}' must be a list of strings (element {index} is not a string)"
            ));
        }
    }
}

fn check_hold_classes(key: &str, value: &Value, diags: &mut Diagnostics) {
    let allowed = HoldClass::allowed_names();
    let Some(items) = value.as_array() else {
        diags.push(format!("BYPASS option '{key}' must be a list of hold classes"));
        return;
    };
    for (index, item) in items.iter().enumerate() {
        match item.as_str() {
            None => diags.push(format!(
                "BYPASS HOLDCLASS must be a list of strings (element {index} is not a string)"
            )),
            Some(s) if HoldClass::parse(s).is_none() => diags.push(format!(
                "BYPASS HOLDCLASS class '{}' is not one of the possible names: {allowed}",
                s.to_ascii_uppercase()
            )),
            Some(_) => {}
        }
    }
}

fn check_hold_system(key: &str, value: &Value, diags: &mut Diagnostics) {
    let allowed = SystemReason::allowed_names();
    let Some(map) = value.as_object() else {
        diags.push(format!(
            "BYPASS option '{key}' must be a mapping keyed by system reason IDs"
        ));
        return;
    };
    for (reason, entry) in map {
        if SystemReason::parse(reason).is_none() {
            diags.push(format!(
                "BYPASS HOLDSYSTEM reason ID '{reason}' is not one of the possible names: {allowed}"
            ));
            continue;
        }
        let Some(items) = entry.as_array() else {
            diags.push(format!(
                "BYPASS HOLDSYSTEM reason ID '{reason}' must be a list of strings"
            ));
            continue;
        };
        for (index, item) in items.iter().enumerate() {
            if !item.is_string() {
                diags.push(format!(
                    "BYPASS HOLDSYSTEM reason ID '{reason}' must be a list of strings \
                     (element {index} is not a string)"
                ));
            }
        }
    }
}

// ── Cross-field rules ───────────────────────────────────────────────────

/// Rules over attribute combinations. Evaluated after the per-attribute
/// pass, whether or not it produced diagnostics. Both rules require the
/// boolean to be exactly JSON `true`; any other value does not arm them.
fn check_cross_field(map: &Map<String, Value>, diags: &mut Diagnostics) {
    if map.get("group") == Some(&Value::Bool(true)) && map.contains_key("groupextend") {
        diags.push(
            "attributes 'group' and 'groupextend' are mutually exclusive when 'group' is true",
        );
    }

    let xzgroup_empty = map
        .get("xzgroup")
        .and_then(Value::as_array)
        .is_some_and(Vec::is_empty);
    if map.get("xzreq") == Some(&Value::Bool(true)) && xzgroup_empty {
        diags.push("when 'xzreq' is specified, 'xzgroup' may not be an empty list");
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

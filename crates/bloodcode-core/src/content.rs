//! Static content provider.
//!
//! The controller reads case tables but never mutates them. Content
//! comes from two places: the built-in casebook compiled into
//! `bloodcode-logic`, and optional JSON case packs loaded here. A pack
//! is a JSON array of case objects in the same shape the data model
//! serializes to; every case must pass structural validation and ids
//! must be unique across the combined set.

use std::fmt;

use bloodcode_logic::case::{validate_case, CaseError, CrimeCase};
use bloodcode_logic::casebook;

/// Why a case pack was rejected.
#[derive(Debug)]
pub enum CasePackError {
    /// The JSON did not parse as a case array.
    Parse(serde_json::Error),
    /// A case parsed but failed structural validation.
    Invalid {
        case_id: String,
        errors: Vec<CaseError>,
    },
    /// A case id collides with one already loaded.
    DuplicateId(String),
}

impl fmt::Display for CasePackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "case pack is not valid JSON: {}", e),
            Self::Invalid { case_id, errors } => {
                write!(f, "case {:?} failed validation: {:?}", case_id, errors)
            }
            Self::DuplicateId(id) => write!(f, "duplicate case id {:?}", id),
        }
    }
}

impl std::error::Error for CasePackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CasePackError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Parse and validate a JSON case pack. All-or-nothing: the first bad
/// case rejects the whole pack.
pub fn parse_case_pack(json: &str) -> Result<Vec<CrimeCase>, CasePackError> {
    let cases: Vec<CrimeCase> = serde_json::from_str(json)?;
    let mut seen = std::collections::HashSet::new();
    for case in &cases {
        let errors = validate_case(case);
        if !errors.is_empty() {
            return Err(CasePackError::Invalid {
                case_id: case.id.clone(),
                errors,
            });
        }
        if !seen.insert(case.id.clone()) {
            return Err(CasePackError::DuplicateId(case.id.clone()));
        }
    }
    Ok(cases)
}

/// The built-in casebook plus any number of JSON packs, id-checked
/// against each other.
pub fn load_cases(packs: &[&str]) -> Result<Vec<CrimeCase>, CasePackError> {
    let mut cases = casebook::builtin_cases();
    for pack in packs {
        for case in parse_case_pack(pack)? {
            if cases.iter().any(|c| c.id == case.id) {
                return Err(CasePackError::DuplicateId(case.id));
            }
            cases.push(case);
        }
    }
    Ok(cases)
}

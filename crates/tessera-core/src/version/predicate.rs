use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version::error::VersionError;
use crate::version::semantic::{compare, SemanticVersion, Version};

/// Comparison operator of a single predicate term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `*`
    Any,
    /// bare version or `=`
    Equal,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    /// `~`: at least the operand, same major and minor
    SameMinor,
    /// `^`: at least the operand, same major
    SameMajor,
}

impl Operator {
    fn prefix(&self) -> &'static str {
        match self {
            Operator::Any => "*",
            Operator::Equal => "=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::SameMinor => "~",
            Operator::SameMajor => "^",
        }
    }
}

/// One `operator version` term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateTerm {
    pub operator: Operator,
    /// `None` only for [`Operator::Any`]
    pub operand: Option<Version>,
}

impl PredicateTerm {
    fn parse(term: &str, predicate: &str) -> Result<Self, VersionError> {
        if term == "*" {
            return Ok(Self { operator: Operator::Any, operand: None });
        }

        // Two-character prefixes must be tried before their one-character heads.
        const PREFIXES: [(&str, Operator); 7] = [
            (">=", Operator::GreaterEqual),
            ("<=", Operator::LessEqual),
            (">", Operator::Greater),
            ("<", Operator::Less),
            ("=", Operator::Equal),
            ("~", Operator::SameMinor),
            ("^", Operator::SameMajor),
        ];
        let (operator, rest) = PREFIXES
            .iter()
            .find_map(|(prefix, op)| term.strip_prefix(prefix).map(|rest| (*op, rest)))
            .unwrap_or((Operator::Equal, term));

        let operand = Version::parse(rest).map_err(|e| VersionError::InvalidPredicate {
            predicate: predicate.to_string(),
            message: e.to_string(),
        })?;
        if operator != Operator::Equal && operand.as_semantic().is_none() {
            return Err(VersionError::InvalidPredicate {
                predicate: predicate.to_string(),
                message: format!("operator '{}' requires a semantic version, got '{}'", operator.prefix(), rest),
            });
        }

        Ok(Self { operator, operand: Some(operand) })
    }

    /// Checks whether `version` satisfies this term
    pub fn matches(&self, version: &Version) -> bool {
        let operand = match (&self.operator, &self.operand) {
            (Operator::Any, _) | (_, None) => return true,
            (_, Some(operand)) => operand,
        };

        let (candidate, base) = match (version, operand) {
            (Version::Semantic(c), Version::Semantic(b)) => (c, b),
            // Non-semantic versions only support exact matches.
            _ => return self.operator == Operator::Equal && version.friendly_string() == operand.friendly_string(),
        };

        let ordering = compare(candidate, base);
        match self.operator {
            Operator::Any => true,
            Operator::Equal => ordering == Ordering::Equal,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::GreaterEqual => ordering != Ordering::Less,
            Operator::Less => ordering == Ordering::Less,
            Operator::LessEqual => ordering != Ordering::Greater,
            Operator::SameMinor => {
                ordering != Ordering::Less && same_component(candidate, base, 0) && same_component(candidate, base, 1)
            }
            Operator::SameMajor => ordering != Ordering::Less && same_component(candidate, base, 0),
        }
    }
}

fn same_component(a: &SemanticVersion, b: &SemanticVersion, pos: usize) -> bool {
    match (a.component(pos).number(), b.component(pos).number()) {
        (Some(x), Some(y)) => x == y,
        _ => true,
    }
}

/// A dependency version predicate such as `>=1.2 <2` or `1.4.x || ^2.0.0`.
///
/// Whitespace-separated terms must all hold; `||` separates alternatives.
#[derive(Debug, Clone)]
pub struct VersionPredicate {
    source: String,
    alternatives: Vec<Vec<PredicateTerm>>,
}

impl VersionPredicate {
    pub fn parse(predicate: &str) -> Result<Self, VersionError> {
        let trimmed = predicate.trim();
        if trimmed.is_empty() {
            return Err(VersionError::InvalidPredicate {
                predicate: predicate.to_string(),
                message: "predicate is empty".to_string(),
            });
        }

        let mut alternatives = Vec::new();
        for alternative in trimmed.split("||") {
            let terms = alternative
                .split_whitespace()
                .map(|term| PredicateTerm::parse(term, predicate))
                .collect::<Result<Vec<_>, _>>()?;
            if terms.is_empty() {
                return Err(VersionError::InvalidPredicate {
                    predicate: predicate.to_string(),
                    message: "empty alternative".to_string(),
                });
            }
            alternatives.push(terms);
        }

        Ok(Self { source: trimmed.to_string(), alternatives })
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives
            .iter()
            .any(|terms| terms.iter().all(|term| term.matches(version)))
    }

    pub fn alternatives(&self) -> &[Vec<PredicateTerm>] {
        &self.alternatives
    }

    /// Returns the original predicate string.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for VersionPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl FromStr for VersionPredicate {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionPredicate::parse(s)
    }
}

//! Bus operator type.

use std::fmt;

/// Error returned when parsing an unknown operator key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: {key}")]
pub struct UnknownOperator {
    key: String,
}

/// Who runs a trip: the state transport board or a private operator.
///
/// # Examples
///
/// ```
/// use bus_server::domain::Operator;
///
/// assert_eq!(Operator::parse("ctb").unwrap(), Operator::Ctb);
/// assert_eq!(Operator::Ctb.display_name(), "CTB");
/// assert!(Operator::parse("ctbx").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Ceylon Transport Board, the public authority.
    Ctb,
    /// A privately run trip.
    Private,
}

impl Operator {
    /// Both operator classes.
    pub const ALL: [Operator; 2] = [Operator::Ctb, Operator::Private];

    /// Parse an operator from its lowercase query key.
    pub fn parse(s: &str) -> Result<Self, UnknownOperator> {
        match s {
            "ctb" => Ok(Operator::Ctb),
            "private" => Ok(Operator::Private),
            _ => Err(UnknownOperator { key: s.to_string() }),
        }
    }

    /// The lowercase key used in query strings and form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Ctb => "ctb",
            Operator::Private => "private",
        }
    }

    /// Human-readable operator label, as printed on the timetable board.
    pub fn display_name(&self) -> &'static str {
        match self {
            Operator::Ctb => "CTB",
            Operator::Private => "Private",
        }
    }

    /// CSS class used for the operator's badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Operator::Ctb => "operator-ctb",
            Operator::Private => "operator-private",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_operators() {
        assert_eq!(Operator::parse("ctb").unwrap(), Operator::Ctb);
        assert_eq!(Operator::parse("private").unwrap(), Operator::Private);
    }

    #[test]
    fn reject_unknown_keys() {
        assert!(Operator::parse("").is_err());
        assert!(Operator::parse("CTB").is_err());
        assert!(Operator::parse("public").is_err());
    }

    #[test]
    fn parse_as_str_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.as_str()).unwrap(), op);
        }
    }

    #[test]
    fn display_labels() {
        assert_eq!(Operator::Ctb.to_string(), "CTB");
        assert_eq!(Operator::Private.to_string(), "Private");
    }
}

//! Rule abstract syntax tree (AST)
//!
//! This module defines the AST nodes for parsed rules.

use std::fmt;

/// A parsed rule: head `:-` body
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Output predicate
    pub head: Head,
    /// Body atoms, in evaluation order
    pub body: Vec<Atom>,
}

/// Rule head: result name and output variable order
#[derive(Debug, Clone, PartialEq)]
pub struct Head {
    /// Result relation name
    pub name: String,
    /// Output variables, in column order
    pub vars: Vec<String>,
}

/// One predicate reference in a rule body
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Relation name
    pub relation: String,
    /// Argument slots, one per relation column
    pub args: Vec<Arg>,
}

/// One atom argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Free variable, joined/projected by name
    Variable(String),
    /// `var=literal` form: binds the variable and filters the column
    Bound { var: String, value: Const },
}

/// A constant appearing in rule text
#[derive(Debug, Clone, PartialEq)]
pub enum Const {
    /// Integer constant
    Integer(i64),
    /// String constant
    String(String),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) :- ", self.head.name, self.head.vars.join(","))?;
        for (i, atom) in self.body.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", atom)?;
        }
        write!(f, ".")
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.relation)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match arg {
                Arg::Variable(v) => write!(f, "{}", v)?,
                Arg::Bound { var, value } => write!(f, "{}={}", var, value)?,
            }
        }
        write!(f, ")")
    }
}

impl fmt::Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Const::Integer(n) => write!(f, "{}", n),
            Const::String(s) => write!(f, "'{}'", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_display_round_trip_shape() {
        let rule = Rule {
            head: Head {
                name: "out".to_string(),
                vars: vec!["a".to_string(), "b".to_string()],
            },
            body: vec![
                Atom {
                    relation: "memberOf".to_string(),
                    args: vec![
                        Arg::Variable("a".to_string()),
                        Arg::Variable("b".to_string()),
                    ],
                },
                Atom {
                    relation: "rdftype".to_string(),
                    args: vec![
                        Arg::Variable("a".to_string()),
                        Arg::Bound {
                            var: "d".to_string(),
                            value: Const::String("Student".to_string()),
                        },
                    ],
                },
            ],
        };

        assert_eq!(
            rule.to_string(),
            "out(a,b) :- memberOf(a,b),rdftype(a,d='Student')."
        );
    }
}

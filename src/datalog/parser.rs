//! Rule parser
//!
//! This module parses rule tokens into an AST. The grammar is
//! `head(v1, v2, ...) :- atom1, atom2, ... .` where each atom is
//! `relation(arg, ...)` and each arg is a bare variable or a
//! `variable=literal` binding-and-filter form. The trailing dot is
//! optional.

use super::ast::{Arg, Atom, Const, Head, Rule};
use super::lexer::Lexer;
use super::token::Token;
use crate::error::{Error, Result};

/// Rule parser
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Create a new parser from rule text
    pub fn new(text: &str) -> Result<Self> {
        let mut lexer = Lexer::new(text);
        let tokens = lexer.tokenize()?;

        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse a single rule
    pub fn parse(&mut self) -> Result<Rule> {
        let head = self.parse_head()?;
        self.expect(&Token::Implies)?;
        let body = self.parse_body()?;

        // Optional trailing dot
        if self.check(&Token::Dot) {
            self.advance();
        }

        if !self.is_at_end() {
            return Err(Error::UnexpectedToken {
                expected: "end of rule".to_string(),
                found: format!("{}", self.current()),
            });
        }

        Ok(Rule { head, body })
    }

    fn parse_head(&mut self) -> Result<Head> {
        let name = self.expect_identifier()?;
        self.expect(&Token::LParen)?;

        let mut vars = Vec::new();
        loop {
            // Head arguments must be bare variables
            let var = self.expect_identifier()?;
            if self.check(&Token::Eq) {
                return Err(Error::ParseError(format!(
                    "head argument '{}' must be a bare variable",
                    var
                )));
            }
            vars.push(var);

            if !self.check(&Token::Comma) {
                break;
            }
            self.advance();
        }

        self.expect(&Token::RParen)?;
        Ok(Head { name, vars })
    }

    fn parse_body(&mut self) -> Result<Vec<Atom>> {
        if self.check(&Token::Dot) || self.is_at_end() {
            return Err(Error::EmptyRuleBody);
        }

        let mut atoms = Vec::new();
        loop {
            atoms.push(self.parse_atom()?);

            if !self.check(&Token::Comma) {
                break;
            }
            self.advance();
        }

        Ok(atoms)
    }

    fn parse_atom(&mut self) -> Result<Atom> {
        let relation = self.expect_identifier()?;
        self.expect(&Token::LParen)?;

        let mut args = Vec::new();
        loop {
            args.push(self.parse_arg()?);

            if !self.check(&Token::Comma) {
                break;
            }
            self.advance();
        }

        self.expect(&Token::RParen)?;
        Ok(Atom { relation, args })
    }

    fn parse_arg(&mut self) -> Result<Arg> {
        let var = self.expect_identifier()?;

        if !self.check(&Token::Eq) {
            return Ok(Arg::Variable(var));
        }
        self.advance(); // consume =

        let value = match self.current().clone() {
            Token::StringLiteral(s) => {
                self.advance();
                Const::String(s)
            }
            Token::IntegerLiteral(n) => {
                self.advance();
                Const::Integer(n)
            }
            Token::Eof => return Err(Error::UnexpectedEof("literal value".to_string())),
            other => {
                return Err(Error::UnexpectedToken {
                    expected: "string or integer literal".to_string(),
                    found: format!("{}", other),
                })
            }
        };

        Ok(Arg::Bound { var, value })
    }

    // ========== Token Helpers ==========

    fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn check(&self, token: &Token) -> bool {
        self.current() == token
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current(), Token::Eof)
    }

    fn expect(&mut self, token: &Token) -> Result<()> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else if self.is_at_end() {
            Err(Error::UnexpectedEof(format!("{}", token)))
        } else {
            Err(Error::UnexpectedToken {
                expected: format!("{}", token),
                found: format!("{}", self.current()),
            })
        }
    }

    fn expect_identifier(&mut self) -> Result<String> {
        match self.current().clone() {
            Token::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            Token::Eof => Err(Error::UnexpectedEof("identifier".to_string())),
            other => Err(Error::UnexpectedToken {
                expected: "identifier".to_string(),
                found: format!("{}", other),
            }),
        }
    }
}

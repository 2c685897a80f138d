use std::rc::Rc;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses an atom where one is required.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` naming the token under the
    /// cursor — end of input included — when no atom rule matches.
    pub(super) fn parse_atom(&mut self) -> ParseResult<Expr> {
        match self.try_parse_atom()? {
            Some(expr) => Ok(expr),
            None => Err(ParseError::UnexpectedToken { token:    self.tokens.peek()?.to_string(),
                                                      position: self.tokens.position(), }),
        }
    }

    /// Parses an atom if one starts at the cursor.
    ///
    /// Returns `Ok(None)` for any token that cannot begin an atom — this is
    /// what ends application chains, so operators, keywords like `then`,
    /// closing delimiters and end of input all land here.
    pub(super) fn try_parse_atom(&mut self) -> ParseResult<Option<Expr>> {
        let expr = match self.tokens.peek()? {
            Token::BooleanLit(_) => self.parse_boolean()?,
            Token::NumberLit(_) | Token::NumberContent => self.parse_number()?,
            Token::Ident(_) | Token::IdentContent => self.parse_var()?,
            Token::If => self.parse_if()?,
            Token::Backslash => self.parse_lambda()?,
            Token::LParen => self.parse_parenthesized()?,
            Token::Let => self.parse_let()?,
            Token::Loop => self.parse_loop()?,
            Token::Not => self.parse_not()?,
            Token::Colon => self.parse_binding()?,
            _ => return Ok(None),
        };

        Ok(Some(expr))
    }

    /// Parses a boolean literal.
    fn parse_boolean(&mut self) -> ParseResult<Expr> {
        match self.tokens.next()? {
            Token::BooleanLit(b) => Ok(Expr::Boolean { b }),
            actual => Err(ParseError::ExpectedToken { expected: "a boolean literal".to_string(),
                                                      actual:   actual.to_string(),
                                                      position: self.tokens.position(), }),
        }
    }

    /// Parses a number literal.
    fn parse_number(&mut self) -> ParseResult<Expr> {
        let n = self.expect_number()?;
        Ok(Expr::Number { n })
    }

    /// Parses a variable reference.
    fn parse_var(&mut self) -> ParseResult<Expr> {
        let name = self.expect_ident()?;
        Ok(Expr::Var { name })
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    ///
    /// The inner expression is returned as-is; no wrapper node.
    fn parse_parenthesized(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::LParen)?;
        let inner = self.parse_expr()?;
        self.expect(&Token::RParen)?;

        Ok(inner)
    }

    /// Parses a lambda.
    ///
    /// Grammar: `lambda := "\" ident "=>" expression`
    ///
    /// The body extends as far to the right as an expression can, so
    /// `\A => A + 1` has the whole sum as its body.
    fn parse_lambda(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::Backslash)?;
        let binder = self.expect_ident()?;
        self.expect(&Token::Arrow)?;
        let body = self.parse_expr()?;

        Ok(Expr::Lambda { binder,
                          body: Rc::new(body) })
    }

    /// Parses a conditional.
    ///
    /// Grammar: `if := "if" expression "then" expression "else" expression`
    ///
    /// The else branch is mandatory: every expression must produce a value.
    fn parse_if(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::If)?;
        let condition = self.parse_expr()?;
        self.expect(&Token::Then)?;
        let then_branch = self.parse_expr()?;
        self.expect(&Token::Else)?;
        let else_branch = self.parse_expr()?;

        Ok(Expr::If { condition:   Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch: Box::new(else_branch), })
    }

    /// Parses a scoped binding.
    ///
    /// Grammar: `let := "let" ident "=" expression "in" expression`
    fn parse_let(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::Let)?;
        let binder = self.expect_ident()?;
        self.expect(&Token::Equals)?;
        let value = self.parse_expr()?;
        self.expect(&Token::In)?;
        let body = self.parse_expr()?;

        Ok(Expr::Let { binder,
                       value: Box::new(value),
                       body: Box::new(body) })
    }

    /// Parses an accumulator loop.
    ///
    /// Grammar: `loop := "loop" number ident "{" expression "}"`
    ///
    /// The repetition count is a literal, not an expression; the braces
    /// delimit the body.
    fn parse_loop(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::Loop)?;
        let count = self.expect_number()?;
        let accumulator = self.expect_ident()?;
        self.expect(&Token::LCurly)?;
        let body = self.parse_expr()?;
        self.expect(&Token::RCurly)?;

        Ok(Expr::Loop { count,
                        accumulator,
                        body: Box::new(body) })
    }

    /// Parses a prefix logical not.
    ///
    /// Grammar: `not := "!" expression`
    ///
    /// The operand is a full expression, so `! AB == BA` negates the whole
    /// comparison.
    fn parse_not(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::Not)?;
        let operand = self.parse_expr()?;

        Ok(Expr::Unary { op: UnaryOperator::Not,
                         x:  Box::new(operand), })
    }

    /// Parses a sequential binding.
    ///
    /// Grammar: `binding := ":" ident "=" expression ";" expression`
    ///
    /// The rest after the `;` is itself a full expression, usually another
    /// binding — that right recursion is what chains bindings one after the
    /// other without any nesting syntax.
    fn parse_binding(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::Colon)?;
        let binder = self.expect_ident()?;
        self.expect(&Token::Equals)?;
        let value = self.parse_expr()?;
        self.expect(&Token::Semicolon)?;
        let rest = self.parse_expr()?;

        Ok(Expr::Binding { binder,
                           value: Box::new(value),
                           rest: Box::new(rest) })
    }
}

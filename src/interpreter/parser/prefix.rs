use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Dispatches to the prefix parse rule registered for the current token
    /// kind.
    ///
    /// This table is the entry point of every expression: literals,
    /// identifiers, unary operators, grouping, conditionals, function
    /// literals and array literals all start here. A token with no rule
    /// records a "no prefix parse rule" error; an illegal token from the
    /// lexer is reported as such.
    pub(super) fn parse_prefix(&mut self) -> Option<Expr> {
        match &self.cur.0 {
            Token::Identifier(_) => self.parse_variable(),
            Token::Integer(_) | Token::Str(_) | Token::True | Token::False => self.parse_literal(),
            Token::Bang | Token::Minus => self.parse_unary_expression(),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => self.parse_array_literal(),
            Token::Illegal(literal) => {
                self.errors.push(ParseError::IllegalToken { literal: literal.clone(),
                                                            line:    self.cur.1, });
                None
            },
            token => {
                self.errors.push(ParseError::NoPrefixRule { token: format!("{token:?}"),
                                                            line:  self.cur.1, });
                None
            },
        }
    }

    /// Parses an identifier in expression position.
    fn parse_variable(&mut self) -> Option<Expr> {
        match &self.cur.0 {
            Token::Identifier(name) => Some(Expr::Variable { name: name.clone(),
                                                             line: self.cur.1, }),
            _ => None,
        }
    }

    /// Parses an integer, string or boolean literal.
    fn parse_literal(&mut self) -> Option<Expr> {
        let line = self.cur.1;
        let value = match &self.cur.0 {
            Token::Integer(n) => LiteralValue::Integer(*n),
            Token::Str(s) => LiteralValue::Str(s.clone()),
            Token::True => LiteralValue::Bool(true),
            Token::False => LiteralValue::Bool(false),
            _ => return None,
        };

        Some(Expr::Literal { value, line })
    }

    /// Parses a unary `!` or `-` expression.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so unary operators
    /// bind tighter than any binary operator and nest right-to-left: `!-a`
    /// parses as `(!(-a))`.
    fn parse_unary_expression(&mut self) -> Option<Expr> {
        let line = self.cur.1;
        let op = match self.cur.0 {
            Token::Bang => UnaryOperator::Not,
            Token::Minus => UnaryOperator::Negate,
            _ => return None,
        };

        self.next_token();
        let expr = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::UnaryOp { op,
                             expr: Box::new(expr),
                             line })
    }

    /// Parses `( <expression> )`.
    ///
    /// The inner expression restarts at [`Precedence::Lowest`]; the
    /// parentheses leave no trace in the tree beyond the grouping itself.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(expr)
    }

    /// Parses `if ( <condition> ) { <block> }` with an optional
    /// `else { <block> }`.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        let line = self.cur.1;

        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(&Token::Else) {
            self.next_token();

            if !self.expect_peek(&Token::LBrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::IfExpr { condition: Box::new(condition),
                            consequence,
                            alternative,
                            line })
    }

    /// Parses `fn ( <parameters> ) { <block> }`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        let line = self.cur.1;

        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expr::FunctionLiteral { parameters, body, line })
    }

    /// Parses the comma-separated parameter names of a function literal,
    /// consuming the closing parenthesis.
    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut identifiers = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.next_token();
            return Some(identifiers);
        }

        identifiers.push(self.expect_peek_identifier()?);

        while self.peek_is(&Token::Comma) {
            self.next_token();
            identifiers.push(self.expect_peek_identifier()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(identifiers)
    }

    /// Parses `[ <expression list> ]`.
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let line = self.cur.1;

        let elements = self.parse_expression_list(&Token::RBracket)?;

        Some(Expr::ArrayLiteral { elements, line })
    }
}

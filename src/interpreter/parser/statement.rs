use crate::{
    ast::{Block, Program, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the whole token stream into a program.
    ///
    /// Statements that fail to parse are dropped from the tree after
    /// recording their errors; parsing continues with the next statement so
    /// one pass reports as much as possible. Check [`Parser::errors`]
    /// afterwards before evaluating the result.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.cur_is(&Token::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Program { statements }
    }

    /// Parses a single statement.
    ///
    /// `let` and `return` have dedicated grammars; any other leading token
    /// starts an expression statement.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match &self.cur.0 {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression> ;` with the trailing
    /// semicolon optional.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let line = self.cur.1;

        let name = self.expect_peek_identifier()?;

        if !self.expect_peek(&Token::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let { name, value, line })
    }

    /// Parses `return <expression> ;` with the trailing semicolon optional.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let line = self.cur.1;

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return { value, line })
    }

    /// Parses a bare expression used as a statement, consuming a trailing
    /// semicolon when one is present.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let line = self.cur.1;

        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression { expr, line })
    }

    /// Parses a brace-delimited statement sequence.
    ///
    /// The current token is the opening brace on entry. Parsing collects
    /// statements until the closing brace or end of input; a malformed
    /// statement inside the block is dropped after recording its errors,
    /// like at the top level.
    pub(super) fn parse_block_statement(&mut self) -> Block {
        let line = self.cur.1;
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_is(&Token::RBrace) && !self.cur_is(&Token::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Block { statements, line }
    }
}

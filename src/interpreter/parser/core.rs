use crate::{
    error::SyntaxError,
    interpreter::{
        function::FunctionId,
        operator::{Operator, Position},
        parser::marker::{Marker, ParenContext},
        token::{LexToken, PostfixToken, RawOperator},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Converts lexical tokens into a postfix sequence.
///
/// Every sequence this returns is well formed: replayed on a stack machine
/// it consumes exactly the values it pushes and leaves one result. Anything
/// that would break that (dangling operators, missing operands, unbalanced
/// parentheses, bad argument counts) is rejected here.
///
/// Unary minus is told apart from subtraction by whether an operand is
/// expected at its position. A prefix operator that would pop a tighter
/// binding operator is rejected: `2*-3` is fine, `2^-3` needs `2^(-3)`.
///
/// # Errors
/// Returns a `SyntaxError` describing the first violated rule.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     lexer::tokenize,
///     operator::OperatorKind,
///     parser::core::to_postfix,
///     token::PostfixToken,
/// };
///
/// let postfix = to_postfix(&tokenize("1+2*3").unwrap()).unwrap();
/// let kinds: Vec<_> = postfix.iter()
///                            .filter_map(|token| match token {
///                                PostfixToken::Operator(op) => Some(op.kind),
///                                _ => None,
///                            })
///                            .collect();
/// assert_eq!(kinds, vec![OperatorKind::Multiply, OperatorKind::Add]);
///
/// assert!(to_postfix(&tokenize("(1+2").unwrap()).is_err());
/// assert!(to_postfix(&tokenize("2^-3").unwrap()).is_err());
/// ```
pub fn to_postfix(tokens: &[LexToken]) -> ParseResult<Vec<PostfixToken>> {
    let mut yard = ShuntingYard::new();
    for &token in tokens {
        yard.accept(token)?;
    }
    yard.finish()
}

/// Working state of one shunting-yard pass.
struct ShuntingYard {
    output:            Vec<PostfixToken>,
    markers:           Vec<Marker>,
    parens:            Vec<ParenContext>,
    expecting_operand: bool,
    /// Set right after a function name until its `(` is read.
    pending_function:  Option<FunctionId>,
}

impl ShuntingYard {
    const fn new() -> Self {
        Self { output:            Vec::new(),
               markers:           Vec::new(),
               parens:            Vec::new(),
               expecting_operand: true,
               pending_function:  None, }
    }

    fn accept(&mut self, token: LexToken) -> ParseResult<()> {
        if let Some(function) = self.pending_function
           && !matches!(token, LexToken::LeftParen)
        {
            return Err(SyntaxError::MissingFunctionParen { function });
        }

        match token {
            LexToken::Number(value) => self.operand(PostfixToken::Number(value)),
            LexToken::Constant(constant) => self.operand(PostfixToken::Number(constant.value())),
            LexToken::Answer => self.operand(PostfixToken::Answer),
            LexToken::Function(function) => self.function(function),
            LexToken::LeftParen => self.left_paren(),
            LexToken::RightParen => self.right_paren(),
            LexToken::Comma => self.comma(),
            LexToken::Operator(raw) => self.operator(raw),
        }
    }

    fn operand(&mut self, token: PostfixToken) -> ParseResult<()> {
        if !self.expecting_operand {
            return Err(SyntaxError::UnexpectedOperand);
        }
        self.output.push(token);
        self.expecting_operand = false;
        Ok(())
    }

    fn function(&mut self, function: FunctionId) -> ParseResult<()> {
        if !self.expecting_operand {
            return Err(SyntaxError::UnexpectedOperand);
        }
        self.markers.push(Marker::Function(function));
        self.pending_function = Some(function);
        Ok(())
    }

    fn left_paren(&mut self) -> ParseResult<()> {
        // No implicit multiplication: `2(3)` is rejected.
        if !self.expecting_operand {
            return Err(SyntaxError::UnexpectedOperand);
        }
        let context = match (self.pending_function.take(), self.markers.last()) {
            (Some(function), Some(Marker::Function(top))) if *top == function => {
                ParenContext::call(function)
            },
            _ => ParenContext::group(),
        };
        self.parens.push(context);
        self.markers.push(Marker::LeftParen);
        self.expecting_operand = true;
        Ok(())
    }

    fn right_paren(&mut self) -> ParseResult<()> {
        if self.expecting_operand {
            return Err(SyntaxError::UnmatchedRightParen);
        }

        loop {
            match self.markers.pop() {
                Some(Marker::LeftParen) => break,
                Some(Marker::Operator(op)) => self.output.push(PostfixToken::Operator(op)),
                Some(Marker::Function(_)) | None => return Err(SyntaxError::UnmatchedRightParen),
            }
        }

        let context = self.parens.pop().ok_or(SyntaxError::UnmatchedRightParen)?;
        if let Some(function) = context.function {
            match self.markers.pop() {
                Some(Marker::Function(top)) if top == function => {},
                _ => return Err(SyntaxError::UnmatchedRightParen),
            }
            if !function.accepts(context.arg_count) {
                return Err(SyntaxError::ArityMismatch { function,
                                                        found: context.arg_count });
            }
            self.output.push(PostfixToken::FunctionCall { function,
                                                          arg_count: context.arg_count });
        }

        self.expecting_operand = false;
        Ok(())
    }

    fn comma(&mut self) -> ParseResult<()> {
        let in_call = self.parens.last().is_some_and(|context| context.function.is_some());
        if !in_call || self.expecting_operand {
            return Err(SyntaxError::MisplacedComma);
        }

        while let Some(Marker::Operator(op)) = self.markers.last().copied() {
            self.markers.pop();
            self.output.push(PostfixToken::Operator(op));
        }
        if self.markers.last() != Some(&Marker::LeftParen) {
            return Err(SyntaxError::MisplacedComma);
        }

        if let Some(context) = self.parens.last_mut() {
            context.arg_count += 1;
        }
        self.expecting_operand = true;
        Ok(())
    }

    fn operator(&mut self, raw: RawOperator) -> ParseResult<()> {
        let misplaced = SyntaxError::MisplacedOperator { symbol: raw };
        let Some(operator) = Operator::resolve(raw, self.expecting_operand) else {
            return Err(misplaced);
        };

        let placed = match operator.position {
            Position::Prefix => self.expecting_operand,
            Position::Infix | Position::Postfix => !self.expecting_operand,
        };
        if !placed {
            return Err(misplaced);
        }

        while let Some(Marker::Operator(top)) = self.markers.last().copied()
              && top.yields_to(operator)
        {
            // Popping `top` here would leave it without its right operand.
            if operator.position == Position::Prefix {
                return Err(misplaced);
            }
            self.markers.pop();
            self.output.push(PostfixToken::Operator(top));
        }

        self.markers.push(Marker::Operator(operator));
        self.expecting_operand = operator.position != Position::Postfix;
        Ok(())
    }

    fn finish(mut self) -> ParseResult<Vec<PostfixToken>> {
        if let Some(function) = self.pending_function {
            return Err(SyntaxError::MissingFunctionParen { function });
        }
        if self.expecting_operand {
            return Err(SyntaxError::UnexpectedEnd);
        }

        while let Some(marker) = self.markers.pop() {
            match marker {
                Marker::Operator(op) => self.output.push(PostfixToken::Operator(op)),
                Marker::LeftParen | Marker::Function(_) => return Err(SyntaxError::UnclosedParen),
            }
        }

        tracing::trace!(postfix = ?self.output, "converted to postfix");
        Ok(self.output)
    }
}

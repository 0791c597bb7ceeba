use crate::interpreter::token::RawOperator;

/// Which side ties between operators of equal precedence group to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// Where an operator stands relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Before its single operand, like unary minus.
    Prefix,
    /// Between two operands.
    Infix,
    /// After its single operand, like factorial.
    Postfix,
}

/// The operations an operator symbol can stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
    /// `-a`
    UnaryMinus,
    /// `a ^ b`
    Power,
    /// `a!`
    Factorial,
}

/// A resolved operator with its parsing properties.
///
/// | kind | precedence | assoc | position | arity |
/// |---|---|---|---|---|
/// | Add, Subtract | 1 | left | infix | 2 |
/// | Multiply, Divide | 2 | left | infix | 2 |
/// | UnaryMinus | 3 | right | prefix | 1 |
/// | Power | 4 | right | infix | 2 |
/// | Factorial | 5 | left | postfix | 1 |
///
/// Power binds tighter than unary minus, so `-3^2` is `-(3^2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    pub kind:          OperatorKind,
    pub precedence:    u8,
    pub associativity: Associativity,
    pub position:      Position,
    pub arity:         usize,
}

impl Operator {
    /// Builds the operator for a kind from the fixed table.
    #[must_use]
    pub const fn of(kind: OperatorKind) -> Self {
        let (precedence, associativity, position, arity) = match kind {
            OperatorKind::Add | OperatorKind::Subtract => (1, Associativity::Left, Position::Infix, 2),
            OperatorKind::Multiply | OperatorKind::Divide => {
                (2, Associativity::Left, Position::Infix, 2)
            },
            OperatorKind::UnaryMinus => (3, Associativity::Right, Position::Prefix, 1),
            OperatorKind::Power => (4, Associativity::Right, Position::Infix, 2),
            OperatorKind::Factorial => (5, Associativity::Left, Position::Postfix, 1),
        };
        Self { kind,
               precedence,
               associativity,
               position,
               arity }
    }

    /// Resolves a raw symbol given whether an operand is expected at its
    /// position.
    ///
    /// Where an operand is expected only `-` resolves (to unary minus).
    /// Elsewhere every symbol resolves to its infix or postfix form. `None`
    /// means the symbol has no form usable at that position.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{
    ///     operator::{Operator, OperatorKind},
    ///     token::RawOperator,
    /// };
    ///
    /// let neg = Operator::resolve(RawOperator::Minus, true).unwrap();
    /// assert_eq!(neg.kind, OperatorKind::UnaryMinus);
    ///
    /// let sub = Operator::resolve(RawOperator::Minus, false).unwrap();
    /// assert_eq!(sub.kind, OperatorKind::Subtract);
    ///
    /// assert!(Operator::resolve(RawOperator::Multiply, true).is_none());
    /// ```
    #[must_use]
    pub const fn resolve(raw: RawOperator, expecting_operand: bool) -> Option<Self> {
        let kind = match (raw, expecting_operand) {
            (RawOperator::Minus, true) => OperatorKind::UnaryMinus,
            (_, true) => return None,
            (RawOperator::Plus, false) => OperatorKind::Add,
            (RawOperator::Minus, false) => OperatorKind::Subtract,
            (RawOperator::Multiply, false) => OperatorKind::Multiply,
            (RawOperator::Divide, false) => OperatorKind::Divide,
            (RawOperator::Power, false) => OperatorKind::Power,
            (RawOperator::Factorial, false) => OperatorKind::Factorial,
        };
        Some(Self::of(kind))
    }

    /// Returns `true` if `self`, already on the marker stack, must be emitted
    /// before `incoming` is pushed.
    #[must_use]
    pub const fn yields_to(self, incoming: Self) -> bool {
        match incoming.associativity {
            Associativity::Left => self.precedence >= incoming.precedence,
            Associativity::Right => self.precedence > incoming.precedence,
        }
    }
}

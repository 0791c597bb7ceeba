use std::fmt;

/// The built-in functions an expression can call.
///
/// Every function takes exactly one argument except [`FunctionId::Log`],
/// which takes an optional second argument for the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionId {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Inverse sine.
    Asin,
    /// Inverse cosine.
    Acos,
    /// Inverse tangent.
    Atan,
    /// Natural logarithm.
    Ln,
    /// Logarithm, base 10 unless a second argument is given.
    Log,
    /// Square root.
    Sqrt,
    /// Absolute value.
    Abs,
    /// Natural exponential.
    Exp,
}

impl FunctionId {
    /// Every function, in the order they are looked up.
    pub const ALL: [Self; 11] = [Self::Sin,
                                 Self::Cos,
                                 Self::Tan,
                                 Self::Asin,
                                 Self::Acos,
                                 Self::Atan,
                                 Self::Ln,
                                 Self::Log,
                                 Self::Sqrt,
                                 Self::Abs,
                                 Self::Exp];

    /// The name a function is called by in source text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Exp => "exp",
        }
    }

    /// Looks a function up by its lower-case name.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::function::FunctionId;
    ///
    /// assert_eq!(FunctionId::from_name("sqrt"), Some(FunctionId::Sqrt));
    /// assert_eq!(FunctionId::from_name("floor"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }

    /// Smallest number of arguments accepted.
    #[must_use]
    pub const fn min_args(self) -> usize {
        1
    }

    /// Largest number of arguments accepted.
    #[must_use]
    pub const fn max_args(self) -> usize {
        match self {
            Self::Log => 2,
            _ => 1,
        }
    }

    /// Returns `true` if a call with `count` arguments is well formed.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        count >= self.min_args() && count <= self.max_args()
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

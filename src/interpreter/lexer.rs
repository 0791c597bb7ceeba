use logos::Logos;

use crate::{
    error::SyntaxError,
    interpreter::{
        function::FunctionId,
        token::{ConstantId, LexToken, RawOperator},
    },
};

/// Failures the raw lexer can report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token starts at this character.
    #[default]
    UnexpectedCharacter,
    /// A run of digits and dots that does not form a number.
    MalformedNumber,
}

/// Represents a raw lexical token in the source input.
///
/// Words are kept as text here; [`tokenize`] resolves them to the answer
/// register, constants or functions.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literals such as `42`, `3.14`, `.5` or `2.`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Runs of letters, lower-cased: `sin`, `ans`, `pi`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_ascii_lowercase())]
    Word(String),
    /// `π`
    #[token("π")]
    Pi,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*` or `×`
    #[token("*")]
    #[token("×")]
    Star,
    /// `/` or `÷`
    #[token("/")]
    #[token("÷")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// The slice is a run of digits and dots; it is a number only if it holds at
/// most one dot and at least one digit.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Result<f64, LexError> {
    let slice = lex.slice();
    if slice.matches('.').count() > 1 || !slice.bytes().any(|b| b.is_ascii_digit()) {
        return Err(LexError::MalformedNumber);
    }
    slice.parse().map_err(|_| LexError::MalformedNumber)
}

/// Resolves a lower-cased word to a lexical token.
///
/// Resolution order is `ans`, `pi`, `e`, then the function table.
fn resolve_word(word: String, offset: usize) -> Result<LexToken, SyntaxError> {
    match word.as_str() {
        "ans" => Ok(LexToken::Answer),
        "pi" => Ok(LexToken::Constant(ConstantId::Pi)),
        "e" => Ok(LexToken::Constant(ConstantId::E)),
        name => FunctionId::from_name(name).map(LexToken::Function)
                                           .ok_or(SyntaxError::UnknownIdentifier { name: word,
                                                                                   offset }),
    }
}

/// Scans an expression into lexical tokens.
///
/// Scanning is a single left-to-right pass. The first character that cannot
/// start a token, the first malformed numeral and the first unknown word all
/// abort with a [`SyntaxError`] carrying the byte offset of the slice.
///
/// # Errors
/// Returns a `SyntaxError` for unexpected characters, malformed numbers and
/// unknown identifiers.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     lexer::tokenize,
///     token::{ConstantId, LexToken, RawOperator},
/// };
///
/// let tokens = tokenize("2 × π").unwrap();
/// assert_eq!(tokens,
///            vec![LexToken::Number(2.0),
///                 LexToken::Operator(RawOperator::Multiply),
///                 LexToken::Constant(ConstantId::Pi)]);
///
/// assert!(tokenize("1.2.3").is_err());
/// assert!(tokenize("foo(1)").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<LexToken>, SyntaxError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        let token = token.map_err(|err| match err {
                             LexError::UnexpectedCharacter => {
                                 SyntaxError::UnexpectedCharacter { found: lexer.slice().to_string(),
                                                                    offset }
                             },
                             LexError::MalformedNumber => {
                                 SyntaxError::MalformedNumber { literal: lexer.slice().to_string(),
                                                                offset }
                             },
                         })?;

        tokens.push(match token {
                        Token::Number(value) => LexToken::Number(value),
                        Token::Word(word) => resolve_word(word, offset)?,
                        Token::Pi => LexToken::Constant(ConstantId::Pi),
                        Token::Plus => LexToken::Operator(RawOperator::Plus),
                        Token::Minus => LexToken::Operator(RawOperator::Minus),
                        Token::Star => LexToken::Operator(RawOperator::Multiply),
                        Token::Slash => LexToken::Operator(RawOperator::Divide),
                        Token::Caret => LexToken::Operator(RawOperator::Power),
                        Token::Bang => LexToken::Operator(RawOperator::Factorial),
                        Token::LParen => LexToken::LeftParen,
                        Token::RParen => LexToken::RightParen,
                        Token::Comma => LexToken::Comma,
                        Token::Ignored => continue,
                    });
    }

    tracing::trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

use crate::interpreter::function::FunctionId;

/// How the answer register is spelled in edited expressions.
pub const ANS_LITERAL: &str = "ANS";

/// Inputs that need a left operand; typed into an empty expression they get
/// `ANS` inserted in front.
///
/// Besides the keypad glyphs `+ × ÷ ^ !` this holds the ASCII `*` and `/`,
/// since the command-line session receives typed text rather than keypad
/// presses.
pub const START_OPERATORS: [&str; 7] = ["+", "×", "*", "÷", "/", "^", "!"];

/// Constant spellings removed as a whole by [`smart_backspace`].
pub const CONSTANT_TOKENS: [&str; 4] = [ANS_LITERAL, "π", "pi", "e"];

/// `sin(`, `cos(` and so on, in function table order.
fn function_openers() -> impl Iterator<Item = String> {
    FunctionId::ALL.into_iter().map(|function| format!("{function}("))
}

/// Appends keypad input to an expression.
///
/// When the expression is blank, an operator that needs a left operand
/// continues from the previous answer: `+` becomes `ANS+`. Anything else is
/// appended as typed.
///
/// # Example
/// ```
/// use reckon::session::input::apply_input_rules;
///
/// assert_eq!(apply_input_rules("", "+"), "ANS+");
/// assert_eq!(apply_input_rules("", "sin("), "sin(");
/// assert_eq!(apply_input_rules("", "-"), "-");
/// assert_eq!(apply_input_rules("12", "+"), "12+");
/// ```
#[must_use]
pub fn apply_input_rules(expression: &str, input: &str) -> String {
    if expression.trim().is_empty() {
        if START_OPERATORS.contains(&input) {
            return format!("{ANS_LITERAL}{input}");
        }
        return input.to_string();
    }
    format!("{expression}{input}")
}

/// Deletes the last token of an expression.
///
/// A function call whose only argument is an auto-filled `ANS`, like
/// `sin(ANS)`, loses the `ANS)` first. Otherwise the longest trailing
/// function opener, constant, operator or `)` is removed as a unit, and
/// failing that, the last character.
///
/// # Example
/// ```
/// use reckon::session::input::smart_backspace;
///
/// assert_eq!(smart_backspace("sin(ANS)"), "sin(");
/// assert_eq!(smart_backspace("asin("), "");
/// assert_eq!(smart_backspace("2×π"), "2×");
/// assert_eq!(smart_backspace("1234"), "123");
/// assert_eq!(smart_backspace(""), "");
/// ```
#[must_use]
pub fn smart_backspace(expression: &str) -> String {
    let auto_filled = format!("{ANS_LITERAL})");
    if let Some(call) = expression.strip_suffix(auto_filled.as_str())
       && function_openers().any(|opener| call.ends_with(&opener))
    {
        return call.to_string();
    }

    let mut units: Vec<String> = function_openers().collect();
    units.extend(CONSTANT_TOKENS.iter().map(ToString::to_string));
    units.extend(START_OPERATORS.iter().map(ToString::to_string));
    units.push(")".to_string());
    units.sort_by_key(|unit| std::cmp::Reverse(unit.chars().count()));

    if let Some(rest) = units.iter().find_map(|unit| expression.strip_suffix(unit.as_str())) {
        return rest.to_string();
    }

    let mut shortened = expression.to_string();
    shortened.pop();
    shortened
}

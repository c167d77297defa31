use crate::interpreter::error::ErrorKind;
use std::str::FromStr;

/// A numeric function that can be called from an expression, e.g. `int(13 / 4)`.
///
/// Postfix order does not record how many arguments a call had, so every builtin has a
/// fixed arity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    Int,
    Abs,
    Sqrt,
    Ln,
    Exp,
    Sin,
    Cos,
    Tan,
    Min,
    Max,
}

impl BuiltinFunction {
    pub fn arity(&self) -> usize {
        match self {
            BuiltinFunction::Min | BuiltinFunction::Max => 2,
            _ => 1,
        }
    }

    /// Applies the function to its arguments, given in call order.
    pub fn evaluate(&self, arguments: &[f64]) -> Result<f64, ErrorKind> {
        if arguments.len() != self.arity() {
            return Err(ErrorKind::StackUnderflow);
        }
        let x = arguments[0];
        let result = match self {
            BuiltinFunction::Int => x.trunc(),
            BuiltinFunction::Abs => x.abs(),
            BuiltinFunction::Sqrt => x.sqrt(),
            BuiltinFunction::Ln => x.ln(),
            BuiltinFunction::Exp => x.exp(),
            BuiltinFunction::Sin => x.sin(),
            BuiltinFunction::Cos => x.cos(),
            BuiltinFunction::Tan => x.tan(),
            BuiltinFunction::Min => x.min(arguments[1]),
            BuiltinFunction::Max => x.max(arguments[1]),
        };
        Ok(result)
    }
}

impl FromStr for BuiltinFunction {
    type Err = ErrorKind;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "int" => Ok(BuiltinFunction::Int),
            "abs" => Ok(BuiltinFunction::Abs),
            "sqrt" => Ok(BuiltinFunction::Sqrt),
            "ln" => Ok(BuiltinFunction::Ln),
            "exp" => Ok(BuiltinFunction::Exp),
            "sin" => Ok(BuiltinFunction::Sin),
            "cos" => Ok(BuiltinFunction::Cos),
            "tan" => Ok(BuiltinFunction::Tan),
            "min" => Ok(BuiltinFunction::Min),
            "max" => Ok(BuiltinFunction::Max),
            _ => Err(ErrorKind::InvalidFunction),
        }
    }
}

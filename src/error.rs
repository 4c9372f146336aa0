use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::{common::Name, ir::syntax::Term};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum Error {
	#[error("variable `{0}` is not in scope")]
	NotInScope(Name),
	#[error("applied {0}, which is not a function")]
	ExpectedFunction(ValueShape),
	#[error("expected a universe, but found {0}")]
	ExpectedUniverse(ValueShape),
	#[error("no rule infers a type for `{0}`")]
	CouldNotInfer(Term),
}

/// The head constructor of a semantic value, as reported by mismatch errors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValueShape {
	Neutral,
	Universe,
	Function,
	Pi,
}

impl Display for ValueShape {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Neutral => "a neutral value",
			Self::Universe => "a universe",
			Self::Function => "a function",
			Self::Pi => "a pi type",
		})
	}
}

use log::debug;

use crate::{
	error::Result,
	ir::{semantics::Environment, syntax::Term},
	op::{evaluate::Evaluate as _, unevaluate::Unevaluate as _},
};

pub trait Normalize {
	type Term;

	/// Reduces and quotes: the canonical form of a term up to computation.
	fn normalize(&self) -> Result<Self::Term> { self.normalize_in(&Environment::new()) }

	fn normalize_in(&self, environment: &Environment) -> Result<Self::Term>;
}

impl Normalize for Term {
	type Term = Term;

	fn normalize_in(&self, environment: &Environment) -> Result<Term> {
		debug!("normalizing `{self}`");
		self.evaluate_in(environment)?.unevaluate_in(environment)
	}
}

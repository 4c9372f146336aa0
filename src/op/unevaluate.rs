use crate::{
	common::Name,
	error::Result,
	ir::{
		semantics::{Closure, Environment, Neutral, Value},
		syntax::Term,
	},
	op::evaluate::Evaluate as _,
};

pub trait Unevaluate {
	type Term;

	/// Reads a value back into the syntax, the quotation half of normalization.
	fn unevaluate(&self) -> Result<Self::Term> { self.unevaluate_in(&Environment::new()) }

	fn unevaluate_in(&self, environment: &Environment) -> Result<Self::Term>;
}

impl Unevaluate for Value {
	type Term = Term;

	fn unevaluate_in(&self, environment: &Environment) -> Result<Term> {
		Ok(match self {
			// Neutrals.
			Value::Neutral(neutral) => neutral.unevaluate_in(environment)?,

			// Types.
			Value::Universe(level) => Term::Universe(*level),

			// Dependent functions.
			Value::Pi { base, family } => {
				let (parameter, base, family) = unevaluate_binder(base, family, environment)?;
				Term::Pi { parameter, base: base.into(), family: family.into() }
			}
			Value::Lambda { base, body } => {
				let (parameter, base, body) = unevaluate_binder(base, body, environment)?;
				Term::Lambda { parameter, base: base.into(), body: body.into() }
			}
		})
	}
}

impl Unevaluate for Neutral {
	type Term = Term;

	fn unevaluate_in(&self, environment: &Environment) -> Result<Term> {
		Ok(match self {
			Neutral::Variable(name) => Term::Variable(*name),
			Neutral::Apply(scrutinee, argument) => Term::Apply {
				scrutinee: scrutinee.unevaluate_in(environment)?.into(),
				argument: argument.unevaluate_in(environment)?.into(),
			},
		})
	}
}

/// Quotes a binder under a name unused in the environment. The quoted base is
/// re-evaluated here so the opened binding stays relative to this environment.
fn unevaluate_binder(
	base: &Value,
	closure: &Closure,
	environment: &Environment,
) -> Result<(Name, Term, Term)> {
	let parameter = environment.fresh_name();
	let base = base.unevaluate_in(environment)?;
	let opened = environment.postulate(parameter, base.evaluate_in(environment)?);
	let body = closure.apply(Value::variable(parameter))?.unevaluate_in(&opened)?;
	Ok((parameter, base, body))
}

use std::rc::Rc;

use crate::{
	common::Name,
	error::{Error, Result},
	ir::{
		semantics::{Closure, Environment, Neutral, Value},
		syntax::Term,
	},
};

pub trait Evaluate {
	type Value;

	/// Transforms a term into a value.
	fn evaluate(&self) -> Result<Self::Value> { self.evaluate_in(&Environment::new()) }

	fn evaluate_in(&self, environment: &Environment) -> Result<Self::Value>;
}

impl Evaluate for Term {
	type Value = Value;

	fn evaluate_in(&self, environment: &Environment) -> Result<Value> {
		Ok(match self {
			// Variables.
			Term::Variable(name) =>
				environment.lookup(*name).ok_or(Error::NotInScope(*name))?.value.clone(),

			// Types.
			Term::Universe(level) => Value::Universe(*level),

			// Dependent functions.
			Term::Pi { parameter, base, family } => {
				let base = Rc::new(base.evaluate_in(environment)?);
				let family = close(*parameter, base.clone(), family, environment);
				Value::Pi { base, family }
			}
			Term::Lambda { parameter, base, body } => {
				let base = Rc::new(base.evaluate_in(environment)?);
				let body = close(*parameter, base.clone(), body, environment);
				Value::Lambda { base, body }
			}
			Term::Apply { scrutinee, argument } => match scrutinee.evaluate_in(environment)? {
				Value::Lambda { body, .. } => body.apply(argument.evaluate_in(environment)?)?,
				Value::Neutral(neutral) => Value::Neutral(Neutral::Apply(
					neutral.into(),
					argument.evaluate_in(environment)?.into(),
				)),
				other => return Err(Error::ExpectedFunction(other.shape())),
			},
		})
	}
}

/// Closes a binder over its defining environment.
fn close(parameter: Name, base: Rc<Value>, body: &Term, environment: &Environment) -> Closure {
	let body = body.clone();
	let environment = environment.clone();
	Closure::new(move |argument| {
		body.evaluate_in(&environment.bind(parameter, argument, (*base).clone()))
	})
}

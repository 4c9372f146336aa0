use std::rc::Rc;

use crate::{
	common::Name,
	error::{Error, Result},
	ir::{
		semantics::{Closure, Environment, Value},
		syntax::Term,
	},
	op::evaluate::Evaluate as _,
};

pub trait Infer {
	/// Synthesizes the semantic type of a term.
	fn infer(&self) -> Result<Value> { self.infer_in(&Environment::new()) }

	fn infer_in(&self, environment: &Environment) -> Result<Value>;
}

impl Infer for Term {
	fn infer_in(&self, environment: &Environment) -> Result<Value> {
		Ok(match self {
			// Variables.
			Term::Variable(name) =>
				environment.lookup(*name).ok_or(Error::NotInScope(*name))?.ty.clone(),

			// Types: a universe inhabits the next universe up.
			Term::Universe(level) => Value::Universe(level.suc()),

			// Dependent functions.
			Term::Pi { parameter, base, family } => {
				let base_level = base.infer_in(environment)?.universe_level()?;
				let opened = environment.postulate(*parameter, base.evaluate_in(environment)?);
				let family_level = family.infer_in(&opened)?.universe_level()?;
				Value::Universe(base_level.max(family_level))
			}
			Term::Lambda { parameter, base, body } => {
				base.infer_in(environment)?.universe_level()?;
				let base = Rc::new(base.evaluate_in(environment)?);
				let opened = environment.postulate(*parameter, (*base).clone());
				// Checked eagerly; the family re-derives it per argument.
				body.infer_in(&opened)?;
				let family = infer_family(*parameter, base.clone(), body, environment);
				Value::Pi { base, family }
			}
			Term::Apply { .. } => return Err(Error::CouldNotInfer(self.clone())),
		})
	}
}

/// Closes the family of a synthesized pi type. There is no substitution operator on
/// values, so the fiber at each argument is re-derived by re-running inference on the
/// body with the parameter bound to that argument at the domain type.
fn infer_family(parameter: Name, base: Rc<Value>, body: &Term, environment: &Environment) -> Closure {
	let body = body.clone();
	let environment = environment.clone();
	Closure::new(move |argument| {
		body.infer_in(&environment.bind(parameter, argument, (*base).clone()))
	})
}

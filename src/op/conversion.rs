use log::trace;

use crate::{
	common::Name,
	error::Result,
	ir::{
		semantics::{Environment, Value},
		syntax::Term,
	},
	op::unevaluate::Unevaluate as _,
};

pub trait Conversion<T> {
	/// Decides whether two items are equal up to consistent renaming of binders.
	fn can_convert(self, left: &T, right: &T) -> bool;
}

/// Persistent stack of binder names identified with each other on each side.
#[derive(Clone, Copy, Default)]
pub struct Identifications<'a>(Option<&'a (Name, Name, Identifications<'a>)>);

impl Identifications<'_> {
	fn identifies(self, left: Name, right: Name) -> bool {
		let mut next = self.0;
		while let Some(&(l, r, previous)) = next {
			// A match on either side must be a match on both, or an inner binder
			// shadows the identification.
			if l == left || r == right {
				return l == left && r == right;
			}
			next = previous.0;
		}
		left == right
	}
}

impl Conversion<Term> for Identifications<'_> {
	fn can_convert(self, left: &Term, right: &Term) -> bool {
		use Term as T;
		match (left, right) {
			// Variables.
			(T::Variable(left), T::Variable(right)) => self.identifies(*left, *right),

			// Types.
			(T::Universe(left), T::Universe(right)) => left == right,

			// Dependent functions.
			(
				T::Pi { parameter: left_parameter, base: left_base, family: left_family },
				T::Pi { parameter: right_parameter, base: right_base, family: right_family },
			) =>
				self.can_convert(&**left_base, right_base) && {
					let identified = (*left_parameter, *right_parameter, self);
					Identifications(Some(&identified)).can_convert(&**left_family, right_family)
				},
			(
				T::Lambda { parameter: left_parameter, base: left_base, body: left_body },
				T::Lambda { parameter: right_parameter, base: right_base, body: right_body },
			) =>
				self.can_convert(&**left_base, right_base) && {
					let identified = (*left_parameter, *right_parameter, self);
					Identifications(Some(&identified)).can_convert(&**left_body, right_body)
				},
			(
				T::Apply { scrutinee: left_scrutinee, argument: left_argument },
				T::Apply { scrutinee: right_scrutinee, argument: right_argument },
			) =>
				self.can_convert(&**left_scrutinee, right_scrutinee)
					&& self.can_convert(&**left_argument, right_argument),

			// Inconvertible.
			_ => false,
		}
	}
}

/// Decides whether two terms are alpha-equivalent.
pub fn alpha_equivalent(left: &Term, right: &Term) -> bool {
	Identifications::default().can_convert(left, right)
}

/// Decides judgemental equality of two values by reading both sides back.
pub fn convertible_in(environment: &Environment, left: &Value, right: &Value) -> Result<bool> {
	let left = left.unevaluate_in(environment)?;
	let right = right.unevaluate_in(environment)?;
	trace!("comparing `{left}` with `{right}`");
	Ok(alpha_equivalent(&left, &right))
}

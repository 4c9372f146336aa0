use std::fmt::{self, Display, Formatter};

use crate::common::{Level, Name};

/// The core syntax, supplied already name-resolved by a front end and never mutated.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Term {
	// Variables.
	Variable(Name),

	// Types.
	Universe(Level),

	// Dependent functions.
	Pi { parameter: Name, base: Box<Self>, family: Box<Self> },
	Lambda { parameter: Name, base: Box<Self>, body: Box<Self> },
	Apply { scrutinee: Box<Self>, argument: Box<Self> },
}

impl Term {
	pub fn variable(name: impl Into<Name>) -> Self { Self::Variable(name.into()) }

	pub fn pi(parameter: impl Into<Name>, base: Self, family: Self) -> Self {
		Self::Pi { parameter: parameter.into(), base: base.into(), family: family.into() }
	}

	pub fn lambda(parameter: impl Into<Name>, base: Self, body: Self) -> Self {
		Self::Lambda { parameter: parameter.into(), base: base.into(), body: body.into() }
	}

	pub fn apply(scrutinee: Self, argument: Self) -> Self {
		Self::Apply { scrutinee: scrutinee.into(), argument: argument.into() }
	}
}

fn write_spine(term: &Term, f: &mut Formatter<'_>) -> fmt::Result {
	match term {
		// Any case which is not already covered by write_atom.
		Term::Apply { .. } => write_term(term, f),
		_ => write_atom(term, f),
	}
}

fn write_atom(term: &Term, f: &mut Formatter<'_>) -> fmt::Result {
	match term {
		Term::Variable(..) => write_term(term, f),
		Term::Universe(..) | Term::Pi { .. } | Term::Lambda { .. } | Term::Apply { .. } => {
			write!(f, "(")?;
			write_term(term, f)?;
			write!(f, ")")
		}
	}
}

fn write_term(term: &Term, f: &mut Formatter<'_>) -> fmt::Result {
	match term {
		Term::Variable(name) => write!(f, "{name}"),

		Term::Universe(level) => write!(f, "Type {level}"),

		Term::Pi { parameter, base, family } => {
			write!(f, "|{parameter} : ")?;
			write_term(base, f)?;
			write!(f, "| -> ")?;
			write_term(family, f)
		}
		Term::Lambda { parameter, base, body } => {
			write!(f, "|{parameter} : ")?;
			write_term(base, f)?;
			write!(f, "| ")?;
			write_term(body, f)
		}
		Term::Apply { scrutinee, argument } => {
			write_spine(scrutinee, f)?;
			write!(f, " ")?;
			write_atom(argument, f)
		}
	}
}

impl Display for Term {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write_term(self, f) }
}

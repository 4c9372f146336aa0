use std::{
	fmt::{self, Debug, Formatter},
	rc::Rc,
};

use crate::{
	common::{Level, Name},
	error::{Error, Result, ValueShape},
};

/// A term reduced as far as the environment allows.
#[derive(Clone, Debug)]
pub enum Value {
	// Neutrals.
	Neutral(Neutral),

	// Types.
	Universe(Level),

	// Dependent functions.
	Pi { base: Rc<Self>, family: Closure },
	Lambda { base: Rc<Self>, body: Closure },
}

/// A value stuck on an unresolved variable, irreducible until that variable is known.
#[derive(Clone, Debug)]
pub enum Neutral {
	Variable(Name),
	Apply(Rc<Self>, Rc<Value>),
}

impl Value {
	pub fn variable(name: impl Into<Name>) -> Self { Self::Neutral(Neutral::Variable(name.into())) }

	pub fn shape(&self) -> ValueShape {
		match self {
			Self::Neutral(..) => ValueShape::Neutral,
			Self::Universe(..) => ValueShape::Universe,
			Self::Pi { .. } => ValueShape::Pi,
			Self::Lambda { .. } => ValueShape::Function,
		}
	}

	/// Projects the universe index out of a type.
	pub fn universe_level(&self) -> Result<Level> {
		match self {
			Self::Universe(level) => Ok(*level),
			other => Err(Error::ExpectedUniverse(other.shape())),
		}
	}
}

/// A suspended computation closed over an immutable snapshot of its defining environment.
///
/// Runs on concrete and neutral arguments alike; this dual use is what lets the same
/// machinery serve beta reduction and symbolic quotation.
#[derive(Clone)]
pub struct Closure(Rc<dyn Fn(Value) -> Result<Value>>);

impl Closure {
	pub fn new(apply: impl Fn(Value) -> Result<Value> + 'static) -> Self { Self(Rc::new(apply)) }

	pub fn apply(&self, argument: Value) -> Result<Value> { (self.0)(argument) }
}

impl Debug for Closure {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str("Closure(..)") }
}

/// A value paired with its type.
#[derive(Clone, Debug)]
pub struct TypedValue {
	pub value: Value,
	pub ty: Value,
}

/// Persistent name-to-value context: extension shares the tail, nothing is mutated
/// post-construction.
#[derive(Clone, Debug, Default)]
pub struct Environment(Option<Rc<Binding>>);

#[derive(Debug)]
struct Binding {
	name: Name,
	entry: TypedValue,
	previous: Environment,
}

impl Environment {
	pub fn new() -> Self { Self(None) }

	/// Prepends a binding.
	#[must_use]
	pub fn bind(&self, name: impl Into<Name>, value: Value, ty: Value) -> Self {
		Self(Some(Rc::new(Binding {
			name: name.into(),
			entry: TypedValue { value, ty },
			previous: self.clone(),
		})))
	}

	/// Opens a binder symbolically: binds `name` to its own neutral variable.
	#[must_use]
	pub fn postulate(&self, name: impl Into<Name>, ty: Value) -> Self {
		let name = name.into();
		self.bind(name, Value::variable(name), ty)
	}

	/// Nearest-match lookup: the newest binding of a name shadows older ones.
	pub fn lookup(&self, name: impl Into<Name>) -> Option<&TypedValue> {
		let name = name.into();
		let mut next = self.0.as_deref();
		while let Some(binding) = next {
			if binding.name == name {
				return Some(&binding.entry);
			}
			next = binding.previous.0.as_deref();
		}
		None
	}

	pub fn contains(&self, name: impl Into<Name>) -> bool { self.lookup(name).is_some() }

	/// Probes `$0`, `$1`, ... upward for a name unused in this environment; a pure
	/// function of the bound-name set, so quotation stays deterministic.
	pub fn fresh_name(&self) -> Name {
		let mut attempt = 0usize;
		loop {
			let candidate = Name::from(format!("${attempt}").as_str());
			if !self.contains(candidate) {
				return candidate;
			}
			attempt += 1;
		}
	}
}

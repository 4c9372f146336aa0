use apeirogon::{
	common::Level,
	ir::{
		semantics::{Environment, Value},
		syntax::Term,
	},
	op::{
		conversion::{alpha_equivalent, convertible_in},
		evaluate::Evaluate as _,
		infer::Infer as _,
		normalize::Normalize as _,
		unevaluate::Unevaluate as _,
	},
};

fn identity(level: Level) -> Term {
	Term::lambda("x", Term::Universe(level), Term::variable("x"))
}

#[test]
fn normalization_is_idempotent() {
	let term = Term::apply(
		Term::lambda(
			"f",
			Term::pi("x", Term::Universe(Level(0)), Term::Universe(Level(0))),
			Term::lambda(
				"y",
				Term::Universe(Level(0)),
				Term::apply(Term::variable("f"), Term::variable("y")),
			),
		),
		identity(Level(0)),
	);
	let once = term.normalize().unwrap();
	let twice = once.normalize().unwrap();
	assert!(alpha_equivalent(&once, &twice));
	assert_eq!(once, twice);
}

#[test]
fn universes_inhabit_the_next_universe_up() {
	for level in 0..8usize {
		let ty = Term::Universe(Level(level)).infer().unwrap();
		assert_eq!(ty.universe_level().unwrap(), Level(level + 1));
	}
}

#[test]
fn pi_types_inhabit_the_max_of_their_part_universes() {
	let term = Term::pi("x", Term::Universe(Level(2)), Term::Universe(Level(0)));
	assert_eq!(term.infer().unwrap().universe_level().unwrap(), Level(3));
	let term = Term::pi("x", Term::Universe(Level(0)), Term::Universe(Level(4)));
	assert_eq!(term.infer().unwrap().universe_level().unwrap(), Level(5));
	// A family mentioning the bound variable sits at the variable's own type level.
	let term = Term::pi("x", Term::Universe(Level(1)), Term::variable("x"));
	assert_eq!(term.infer().unwrap().universe_level().unwrap(), Level(2));
}

#[test]
fn beta_reduction_substitutes_through_the_closure() {
	let reduced = Term::apply(
		Term::lambda(
			"x",
			Term::Universe(Level(1)),
			Term::lambda("y", Term::Universe(Level(0)), Term::variable("x")),
		),
		Term::Universe(Level(0)),
	)
	.normalize()
	.unwrap();
	let substituted =
		Term::lambda("y", Term::Universe(Level(0)), Term::Universe(Level(0))).normalize().unwrap();
	assert!(alpha_equivalent(&reduced, &substituted));
}

#[test]
fn inference_is_preserved_by_normalization() {
	for term in [
		identity(Level(0)),
		Term::lambda("a", Term::Universe(Level(0)), Term::lambda("x", Term::variable("a"), Term::variable("x"))),
		Term::pi("x", Term::Universe(Level(0)), Term::Universe(Level(0))),
		Term::Universe(Level(3)),
	] {
		let ty = term.infer().unwrap().unevaluate().unwrap();
		let reconstructed = term.evaluate().unwrap().unevaluate().unwrap();
		let reconstructed_ty = reconstructed.infer().unwrap().unevaluate().unwrap();
		assert!(alpha_equivalent(&reconstructed_ty, &ty), "`{reconstructed_ty}` is not `{ty}`");
	}
}

#[test]
fn quotation_avoids_captured_names() {
	let environment = Environment::new().postulate("$0", Value::Universe(Level(0)));
	let normal = identity(Level(0)).normalize_in(&environment).unwrap();
	assert_eq!(normal, Term::lambda("$1", Term::Universe(Level(0)), Term::variable("$1")));
}

#[test]
fn closures_snapshot_their_environment() {
	let environment =
		Environment::new().bind("a", Value::Universe(Level(0)), Value::Universe(Level(1)));
	let function =
		Term::lambda("x", Term::Universe(Level(0)), Term::variable("a")).evaluate_in(&environment).unwrap();
	// Shadowing `a` afterwards extends a separate environment; the closure keeps its snapshot.
	let _shadowed = environment.bind("a", Value::Universe(Level(7)), Value::Universe(Level(8)));
	let Value::Lambda { body, .. } = function else { panic!("expected a function") };
	let result = body.apply(Value::Universe(Level(0))).unwrap();
	assert!(matches!(result, Value::Universe(Level(0))));
}

#[test]
fn alpha_equivalence_identifies_binders_positionally() {
	assert!(alpha_equivalent(
		&identity(Level(0)),
		&Term::lambda("y", Term::Universe(Level(0)), Term::variable("y")),
	));
	assert!(!alpha_equivalent(
		&identity(Level(0)),
		&Term::lambda("y", Term::Universe(Level(0)), Term::Universe(Level(0))),
	));
	let shadowing = Term::lambda(
		"x",
		Term::Universe(Level(0)),
		Term::lambda("x", Term::Universe(Level(0)), Term::variable("x")),
	);
	let renamed = Term::lambda(
		"y",
		Term::Universe(Level(0)),
		Term::lambda("z", Term::Universe(Level(0)), Term::variable("z")),
	);
	assert!(alpha_equivalent(&shadowing, &renamed));
	let outer_reference = Term::lambda(
		"y",
		Term::Universe(Level(0)),
		Term::lambda("z", Term::Universe(Level(0)), Term::variable("y")),
	);
	assert!(!alpha_equivalent(&shadowing, &outer_reference));
}

#[test]
fn judgemental_equality_is_decided_by_quotation() {
	let environment = Environment::new();
	let left = Term::apply(identity(Level(1)), Term::Universe(Level(0))).evaluate().unwrap();
	let right = Term::Universe(Level(0)).evaluate().unwrap();
	assert!(convertible_in(&environment, &left, &right).unwrap());
	let different = Term::Universe(Level(1)).evaluate().unwrap();
	assert!(!convertible_in(&environment, &left, &different).unwrap());
}

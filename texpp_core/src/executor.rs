use std::collections::HashMap;

use crate::DirectiveError;
use crate::ExtractionRequest;
use crate::ExtractionResult;
use crate::parser::Condition;
use crate::parser::Statement;
use crate::parser::parse;

/// The two capabilities directive text can use. Implemented by the run
/// context; everything a block does goes through these calls.
pub trait Primitives {
	/// Extract the requested region without touching the output.
	fn query(&mut self, request: &ExtractionRequest) -> ExtractionResult;

	/// Extract the requested region, render it and append it to the output.
	fn splice(&mut self, request: &ExtractionRequest);
}

/// Parse and run the directive text of one block against `primitives`.
///
/// Nothing runs when the text does not parse. An evaluation error stops the
/// block; statements before it have already taken effect.
pub fn execute(source: &str, primitives: &mut impl Primitives) -> Result<(), DirectiveError> {
	let program = parse(source)?;
	let mut executor = Executor {
		primitives,
		bindings: HashMap::new(),
	};

	executor.run(&program.statements)
}

struct Executor<'a, P> {
	primitives: &'a mut P,
	bindings: HashMap<String, ExtractionResult>,
}

impl<P: Primitives> Executor<'_, P> {
	fn run(&mut self, statements: &[Statement]) -> Result<(), DirectiveError> {
		for statement in statements {
			match statement {
				Statement::Splice(request) => self.primitives.splice(request),
				Statement::Query(request) => {
					let _ = self.primitives.query(request);
				}
				Statement::Let { name, request } => {
					let result = self.primitives.query(request);
					self.bindings.insert(name.clone(), result);
				}
				Statement::If {
					negated,
					condition,
					then,
					otherwise,
				} => {
					let holds = self.holds(condition)? != *negated;
					self.run(if holds { then } else { otherwise })?;
				}
			}
		}

		Ok(())
	}

	fn holds(&mut self, condition: &Condition) -> Result<bool, DirectiveError> {
		match condition {
			Condition::Binding(name) => {
				self.bindings
					.get(name)
					.map(Result::is_ok)
					.ok_or_else(|| DirectiveError::UnknownBinding(name.clone()))
			}
			Condition::Query(request) => Ok(self.primitives.query(request).is_ok()),
		}
	}
}

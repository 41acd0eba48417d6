use logos::Logos;

/// Raw lexemes of a single VHDL source line. Only the handful of shapes the
/// region scanners care about are distinguished; everything else is `Word` or
/// an error.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawLexeme {
	#[regex(r"[ \t\r\n\x0B\x0C]+")]
	Space,
	#[regex(r"--[^\n]*", allow_greedy = true)]
	Comment,
	#[token("package")]
	Package,
	#[token("component")]
	Component,
	#[token("end")]
	End,
	#[token("is")]
	Is,
	#[token(":")]
	Colon,
	#[token(";")]
	Semicolon,
	#[token(")")]
	CloseParen,
	#[regex(r"[A-Za-z0-9_]+")]
	Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lexeme {
	Space,
	Comment,
	Package,
	Component,
	End,
	Is,
	Colon,
	Semicolon,
	CloseParen,
	Word,
	/// Any byte sequence the lexer does not recognize.
	Other,
}

impl From<RawLexeme> for Lexeme {
	fn from(raw: RawLexeme) -> Self {
		match raw {
			RawLexeme::Space => Self::Space,
			RawLexeme::Comment => Self::Comment,
			RawLexeme::Package => Self::Package,
			RawLexeme::Component => Self::Component,
			RawLexeme::End => Self::End,
			RawLexeme::Is => Self::Is,
			RawLexeme::Colon => Self::Colon,
			RawLexeme::Semicolon => Self::Semicolon,
			RawLexeme::CloseParen => Self::CloseParen,
			RawLexeme::Word => Self::Word,
		}
	}
}

type Lexed<'a> = (Lexeme, &'a str);

/// A lexed source line with predicates for each structural marker.
///
/// Whitespace is kept as tokens so that the predicates can tell apart places
/// where whitespace is required, optional or forbidden.
#[derive(Debug, Clone)]
pub(crate) struct SourceLine<'a> {
	tokens: Vec<Lexed<'a>>,
}

impl<'a> SourceLine<'a> {
	pub(crate) fn lex(line: &'a str) -> Self {
		let tokens = RawLexeme::lexer(line)
			.spanned()
			.map(|(result, span)| (result.map_or(Lexeme::Other, Lexeme::from), &line[span]))
			.collect();

		Self { tokens }
	}

	/// Tokens without leading and trailing whitespace.
	fn trimmed(&self) -> &[Lexed<'a>] {
		let mut tokens = self.tokens.as_slice();
		if let [(Lexeme::Space, _), rest @ ..] = tokens {
			tokens = rest;
		}
		if let [rest @ .., (Lexeme::Space, _)] = tokens {
			tokens = rest;
		}
		tokens
	}

	/// `package <name> is`
	pub(crate) fn package_name(&self) -> Option<&'a str> {
		match self.trimmed() {
			[
				(Lexeme::Package, _),
				(Lexeme::Space, _),
				name,
				(Lexeme::Space, _),
				(Lexeme::Is, _),
			] => identifier(name),
			_ => None,
		}
	}

	/// `component <name>`
	pub(crate) fn component_name(&self) -> Option<&'a str> {
		match self.trimmed() {
			[(Lexeme::Component, _), (Lexeme::Space, _), name] => identifier(name),
			_ => None,
		}
	}

	/// `end component;` with optional whitespace between every part.
	pub(crate) fn is_component_end(&self) -> bool {
		let significant: Vec<_> = self
			.tokens
			.iter()
			.filter(|(lexeme, _)| *lexeme != Lexeme::Space)
			.collect();

		match significant.as_slice() {
			[(Lexeme::End, _), (Lexeme::Component, _), (Lexeme::Semicolon, _)] => true,
			[(Lexeme::Word, word), (Lexeme::Semicolon, _)] => *word == "endcomponent",
			_ => false,
		}
	}

	/// `<label> : ...`
	pub(crate) fn instance_label(&self) -> Option<&'a str> {
		let (first, rest) = self.trimmed().split_first()?;
		let label = identifier(first)?;
		let rest = match rest {
			[(Lexeme::Space, _), rest @ ..] => rest,
			_ => rest,
		};

		matches!(rest.first(), Some((Lexeme::Colon, _))).then_some(label)
	}

	/// `[<identifier>]);` with nothing between the identifier, the parenthesis
	/// and the semicolon.
	pub(crate) fn is_instance_end(&self) -> bool {
		match self.trimmed() {
			[(Lexeme::CloseParen, _), (Lexeme::Semicolon, _)] => true,
			[word, (Lexeme::CloseParen, _), (Lexeme::Semicolon, _)] => identifier(word).is_some(),
			_ => false,
		}
	}

	/// `-- ...`
	pub(crate) fn is_comment(&self) -> bool {
		matches!(self.trimmed().first(), Some((Lexeme::Comment, _)))
	}
}

/// Keywords are still valid identifiers in the positions the scanners read.
fn identifier<'a>(token: &Lexed<'a>) -> Option<&'a str> {
	match token {
		(
			Lexeme::Word | Lexeme::Package | Lexeme::Component | Lexeme::End | Lexeme::Is,
			text,
		) => Some(*text),
		_ => None,
	}
}

use std::fmt::Display;

/// Tokens of the directive language used inside texpp blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// `let`
	Let,
	/// `if`
	If,
	/// `else`
	Else,
	/// `splice`
	Splice,
	/// `query`
	Query,
	/// `!`
	Bang,
	/// `=`
	Equals,
	/// `,`
	Comma,
	/// `;`
	Semicolon,
	/// `(`
	OpenParen,
	/// `)`
	CloseParen,
	/// `{`
	OpenBrace,
	/// `}`
	CloseBrace,
	/// A quoted string with its quotes removed, e.g. `"begin_note"`
	String(String),
	/// A bare word such as an identifier or a relative path, e.g. `rtl/adder.vhd`
	Word(String),
}

impl Token {
	/// The text of a token that can stand for a bare word. Keywords count, so
	/// `name=query` is a valid argument.
	pub fn as_word(&self) -> Option<&str> {
		match self {
			Token::Word(word) => Some(word),
			Token::Let => Some("let"),
			Token::If => Some("if"),
			Token::Else => Some("else"),
			Token::Splice => Some("splice"),
			Token::Query => Some("query"),
			_ => None,
		}
	}
}

impl Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Token::Bang => write!(f, "!"),
			Token::Equals => write!(f, "="),
			Token::Comma => write!(f, ","),
			Token::Semicolon => write!(f, ";"),
			Token::OpenParen => write!(f, "("),
			Token::CloseParen => write!(f, ")"),
			Token::OpenBrace => write!(f, "{{"),
			Token::CloseBrace => write!(f, "}}"),
			Token::String(string) => write!(f, "{string:?}"),
			Token::Let | Token::If | Token::Else | Token::Splice | Token::Query | Token::Word(_) => {
				write!(f, "{}", self.as_word().unwrap_or_default())
			}
		}
	}
}

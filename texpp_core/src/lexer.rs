use logos::Logos;
use snailquote::unescape;

use crate::DirectiveError;
use crate::tokens::Token;

/// Raw tokens produced by logos for directive text. Whitespace and `#`
/// comments are skipped.
#[derive(Logos, Debug, PartialEq)]
#[logos(skip(r"([ \t\r\n\f]+|#[^\n]*)", allow_greedy = true))]
enum RawToken {
	#[token("let")]
	Let,
	#[token("if")]
	If,
	#[token("else")]
	Else,
	#[token("splice")]
	Splice,
	#[token("query")]
	Query,
	#[token("!")]
	Bang,
	#[token("=")]
	Equals,
	#[token(",")]
	Comma,
	#[token(";")]
	Semicolon,
	#[token("(")]
	OpenParen,
	#[token(")")]
	CloseParen,
	#[token("{")]
	OpenBrace,
	#[token("}")]
	CloseBrace,
	#[regex(r#""([^"\\]|\\.)*""#)]
	DoubleQuotedString,
	#[regex(r"'[^']*'")]
	SingleQuotedString,
	#[regex(r"[A-Za-z0-9_./\-]+")]
	Word,
}

/// Tokenize the directive text of one block.
pub fn tokenize(source: &str) -> Result<Vec<Token>, DirectiveError> {
	let mut tokens = Vec::new();

	for (result, span) in RawToken::lexer(source).spanned() {
		let slice = &source[span.clone()];
		let Ok(raw) = result else {
			return Err(DirectiveError::UnexpectedCharacter {
				found: slice.to_string(),
				offset: span.start,
			});
		};

		let token = match raw {
			RawToken::Let => Token::Let,
			RawToken::If => Token::If,
			RawToken::Else => Token::Else,
			RawToken::Splice => Token::Splice,
			RawToken::Query => Token::Query,
			RawToken::Bang => Token::Bang,
			RawToken::Equals => Token::Equals,
			RawToken::Comma => Token::Comma,
			RawToken::Semicolon => Token::Semicolon,
			RawToken::OpenParen => Token::OpenParen,
			RawToken::CloseParen => Token::CloseParen,
			RawToken::OpenBrace => Token::OpenBrace,
			RawToken::CloseBrace => Token::CloseBrace,
			RawToken::DoubleQuotedString => {
				// Strip surrounding quotes
				let inner = &slice[1..slice.len() - 1];
				let value = if inner.contains('\\') {
					unescape(inner).map_err(|_| DirectiveError::InvalidString { offset: span.start })?
				} else {
					inner.to_string()
				};
				Token::String(value)
			}
			// Single quotes are raw, which keeps regular expressions readable.
			RawToken::SingleQuotedString => Token::String(slice[1..slice.len() - 1].to_string()),
			RawToken::Word => Token::Word(slice.to_string()),
		};

		tokens.push(token);
	}

	Ok(tokens)
}

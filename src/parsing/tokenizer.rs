use super::error::EvalError;
use super::source::{SourceOffset, Span};

use regex::Regex;
use once_cell::sync::Lazy;

use std::fmt::{self, Display, Formatter};

/// A unit symbol: letters (including `µ` and `°`), underscores, and
/// the percent sign.
static SYMBOL_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[\p{Alphabetic}_°%]+").unwrap());

static INTEGER_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[0-9]+").unwrap());

/// Operators, longest first so that `**` wins over `*`.
const OPERATORS: [(&str, TokenKind); 8] = [
  ("**", TokenKind::Caret),
  ("*", TokenKind::Star),
  ("/", TokenKind::Slash),
  ("^", TokenKind::Caret),
  ("+", TokenKind::Plus),
  ("-", TokenKind::Minus),
  ("(", TokenKind::LeftParen),
  (")", TokenKind::RightParen),
];

#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
  end: SourceOffset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub text: String,
  pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Symbol,
  Integer,
  Star,
  Slash,
  Caret,
  Plus,
  Minus,
  LeftParen,
  RightParen,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self { input, position: SourceOffset(0) }
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances the position of `self` by `amount` bytes, returning the
  /// skipped portion. Never advances beyond the end of the input.
  pub fn advance(&mut self, mut amount: usize) -> TokenizerMatch<'a> {
    amount = amount.min(self.input.len());

    let match_pos = self.current_pos();
    let (prefix, suffix) = self.input.split_at(amount);
    self.position.0 += amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start: match_pos,
      end: match_pos + amount,
    }
  }

  pub fn read_literal(&mut self, literal: &str) -> Option<TokenizerMatch<'a>> {
    self.input.starts_with(literal).then(|| {
      self.advance(literal.len())
    })
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");

    Some(self.advance(m.len()))
  }

  pub fn consume_spaces(&mut self) {
    let spaces = self.input.len() - self.input.trim_start().len();
    self.advance(spaces);
  }
}

impl<'h> TokenizerMatch<'h> {
  pub fn as_str(&self) -> &'h str {
    self.matched_str
  }
  pub fn span(&self) -> Span {
    Span::new(self.start, self.end)
  }
}

impl Token {
  fn from_match(kind: TokenKind, m: TokenizerMatch<'_>) -> Self {
    Token { kind, text: m.as_str().to_owned(), span: m.span() }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.text)
  }
}

/// Splits a sanitized unit expression into tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
  let mut state = TokenizerState::new(input);
  let mut tokens = Vec::new();
  loop {
    state.consume_spaces();
    let Some(next_char) = state.peek() else {
      break;
    };
    if let Some(m) = state.read_regex(&SYMBOL_RE) {
      tokens.push(Token::from_match(TokenKind::Symbol, m));
    } else if let Some(m) = state.read_regex(&INTEGER_RE) {
      tokens.push(Token::from_match(TokenKind::Integer, m));
    } else if let Some(token) = read_operator(&mut state) {
      tokens.push(token);
    } else {
      return Err(EvalError::InvalidCharacter { ch: next_char, offset: state.current_pos() });
    }
  }
  Ok(tokens)
}

fn read_operator(state: &mut TokenizerState<'_>) -> Option<Token> {
  OPERATORS.iter().find_map(|(literal, kind)| {
    state.read_literal(literal).map(|m| Token::from_match(*kind, m))
  })
}

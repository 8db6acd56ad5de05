//! Loads grammars from `HEAD ::= ALT1 | ALT2 | ...` lines.

use std::borrow::Cow;

use log::debug;
use lookahead_grammar::{Grammar, Symbol, SymbolPolicy};

use crate::string_interner::StringInterner;
use crate::LoadErrorKind::{
    EmptyAlternative, InvalidHead, MissingSeparator, NoAlternatives, UnknownStart,
};
use crate::{LoadError, LoadErrorKind};

/// Separates the head of a rule from its alternatives.
pub const SEPARATOR: &str = "::=";
/// Stands for the empty string.
pub const EPSILON: &str = "ε";
const ALTERNATIVE: char = '|';
const COMMENT: char = '#';

/// Options for [`GrammarLoadExt::load_with`].
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    /// How symbols without rules are validated.
    pub policy: SymbolPolicy,
    /// Names declared as terminals. Only needed with
    /// [`SymbolPolicy::Strict`].
    pub terminals: Vec<String>,
    /// The start symbol. Defaults to the head of the first rule.
    pub start: Option<String>,
}

/// Loading grammars from text.
pub trait GrammarLoadExt: Sized {
    /// Loads a grammar, treating every symbol without rules as a terminal.
    fn load(text: &str) -> Result<Self, LoadError> {
        Self::load_with(text, &LoadOptions::default())
    }

    /// Loads and validates a grammar with the given options.
    fn load_with(text: &str, options: &LoadOptions) -> Result<Self, LoadError>;
}

impl GrammarLoadExt for Grammar {
    fn load_with(text: &str, options: &LoadOptions) -> Result<Self, LoadError> {
        let mut loader = Loader::new();
        for (line_idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
                continue;
            }
            loader.line(line, line_idx + 1)?;
        }
        for name in &options.terminals {
            let sym = loader.intern(name);
            loader.grammar.declare_terminal(sym);
        }
        if let Some(start) = &options.start {
            let sym = loader
                .grammar
                .sym_by_name(start)
                .ok_or_else(|| LoadError::whole(UnknownStart(start.clone())))?;
            loader.grammar.set_start(sym);
        }
        loader.grammar.validate(options.policy)?;
        debug!(
            "loaded {} rules with {} distinct symbols",
            loader.grammar.num_rules(),
            loader.symbols.len()
        );
        Ok(loader.grammar)
    }
}

struct Loader {
    grammar: Grammar,
    interner: StringInterner,
    /// Symbols by interned index.
    symbols: Vec<Symbol>,
}

impl Loader {
    fn new() -> Self {
        Loader {
            grammar: Grammar::new(),
            interner: StringInterner::new(),
            symbols: vec![],
        }
    }

    fn intern(&mut self, name: &str) -> Symbol {
        let index = self.interner.get_or_intern(name);
        if index == self.symbols.len() {
            let sym = self.grammar.next_sym(Some(Cow::Borrowed(name)));
            self.symbols.push(sym);
        }
        self.symbols[index]
    }

    fn line(&mut self, line: &str, line_no: usize) -> Result<(), LoadError> {
        let error = |kind: LoadErrorKind, offset: usize| {
            LoadError::at(kind, line_no, column(line, offset))
        };
        let indent = line.len() - line.trim_start().len();

        let (head, body) = line
            .split_once(SEPARATOR)
            .ok_or_else(|| error(MissingSeparator, indent))?;
        let mut head_tokens = head.split_whitespace();
        let lhs = match (head_tokens.next(), head_tokens.next()) {
            (Some(lhs), None) if lhs != EPSILON => lhs,
            _ => return Err(error(InvalidHead(head.trim().to_string()), indent)),
        };

        let mut offset = head.len() + SEPARATOR.len();
        if body.trim().is_empty() {
            return Err(error(NoAlternatives(lhs.to_string()), offset));
        }
        let mut alternatives = vec![];
        for alternative in body.split(ALTERNATIVE) {
            if alternative.trim().is_empty() {
                return Err(error(EmptyAlternative(lhs.to_string()), offset));
            }
            alternatives.push(alternative);
            offset += alternative.len() + ALTERNATIVE.len_utf8();
        }

        let lhs = self.intern(lhs);
        for alternative in alternatives {
            // ε is the identity of concatenation.
            let rhs = alternative
                .split_whitespace()
                .filter(|&name| name != EPSILON)
                .map(|name| self.intern(name))
                .collect::<Vec<_>>();
            self.grammar.rule(lhs).rhs(rhs);
        }
        Ok(())
    }
}

/// One-indexed column of a byte offset.
fn column(line: &str, offset: usize) -> usize {
    line[..offset].chars().count() + 1
}

//! Scanning rules: an anchored pattern, what it produces, and an optional
//! context check the pattern language cannot express.

use regex::Regex;

use crate::lexer::TokenKind;

/// What a rule produces when its pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Emit a token of a fixed kind.
    Emit(TokenKind),
    /// Classify the matched word through the keyword table.
    Keyword,
    /// The pattern matched an opening `$tag$`; the token extends to the
    /// identical closing tag.
    DollarQuoted,
}

/// Context checks on the characters around a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// No check.
    None,
    /// The match must not follow a word character.
    NotAfterWord,
    /// The match must not follow a word character, `]` or `)`.
    NotAfterWordOrClose,
    /// The match must not run into a word character.
    NotBeforeWord,
    /// The match must be followed (optionally after whitespace) by a `.`
    /// that does not start a number.
    BeforeDot,
    /// The match must directly follow a `.`.
    AfterDot,
    /// The match must be directly followed by `(`.
    BeforeParen,
}

impl Guard {
    /// Checks the guard for a match spanning `start..end` of `input`.
    #[must_use]
    pub fn allows(self, input: &str, start: usize, end: usize) -> bool {
        let before = input[..start].chars().next_back();
        let rest = &input[end..];
        match self {
            Self::None => true,
            Self::NotAfterWord => !before.is_some_and(is_word_char),
            Self::NotAfterWordOrClose => {
                !before.is_some_and(|c| is_word_char(c) || c == ']' || c == ')')
            }
            Self::NotBeforeWord => !rest.chars().next().is_some_and(is_word_char),
            Self::BeforeDot => {
                let mut chars = rest.trim_start().chars();
                chars.next() == Some('.') && !chars.next().is_some_and(|c| c.is_ascii_digit())
            }
            Self::AfterDot => before == Some('.'),
            Self::BeforeParen => rest.starts_with('('),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A single scanning rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    action: RuleAction,
    guard: Guard,
}

impl Rule {
    /// Creates a rule from a pattern source. The pattern is anchored at the
    /// scan position and matched case-insensitively.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a valid pattern. Rule sources are static.
    #[must_use]
    pub fn new(source: &str, action: RuleAction) -> Self {
        let pattern =
            Regex::new(&format!("(?i)^(?:{source})")).expect("Invalid scanning rule pattern");
        Self {
            pattern,
            action,
            guard: Guard::None,
        }
    }

    /// Creates a rule emitting a fixed token kind.
    #[must_use]
    pub fn emit(source: &str, kind: TokenKind) -> Self {
        Self::new(source, RuleAction::Emit(kind))
    }

    /// Creates a rule whose matches go through keyword classification.
    #[must_use]
    pub fn keyword(source: &str) -> Self {
        Self::new(source, RuleAction::Keyword)
    }

    /// Creates a dollar-quoted literal rule from the opening tag pattern.
    #[must_use]
    pub fn dollar_quoted(source: &str) -> Self {
        Self::new(source, RuleAction::DollarQuoted)
    }

    /// Attaches a context guard.
    #[must_use]
    pub const fn guarded(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    /// Returns the rule action.
    #[must_use]
    pub const fn action(&self) -> RuleAction {
        self.action
    }

    /// Returns the context guard.
    #[must_use]
    pub const fn guard(&self) -> Guard {
        self.guard
    }

    /// Returns the pattern source, anchoring included.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Tries the rule at byte offset `pos` of `input` and returns the length
    /// of the match in bytes.
    #[must_use]
    pub fn apply(&self, input: &str, pos: usize) -> Option<usize> {
        let rest = &input[pos..];
        let found = self.pattern.find(rest)?;
        let mut len = found.end();
        if len == 0 {
            return None;
        }
        if self.action == RuleAction::DollarQuoted {
            let tag = found.as_str();
            let close = rest[len..].find(tag)?;
            len += close + tag.len();
        }
        self.guard.allows(input, pos, pos + len).then_some(len)
    }
}

/// Builds the rule list shared by every dialect. `dialect_rules` are tried
/// after placeholders and before names, so dialect specific sigils win over
/// the generic name patterns.
pub(crate) fn standard_rules(dialect_rules: Vec<Rule>) -> Vec<Rule> {
    use TokenKind as K;

    let mut rules = vec![
        Rule::emit(r"(?:--|# )[^\r\n]*(?:\r\n|\r|\n)?", K::SingleLineComment),
        Rule::emit(r"/\*(?s:.)*?\*/", K::MultiLineComment),
        Rule::emit(r"\s+", K::Whitespace),
        Rule::emit(r":=", K::Assignment),
        Rule::emit(r"::", K::Punctuation),
        Rule::emit(r"\*", K::Wildcard),
        Rule::emit(r"`(?:``|[^`])*`", K::Name),
        Rule::dollar_quoted(r"\$(?:[_\p{L}]\w*)?\$"),
        Rule::emit(r"\?", K::Placeholder),
        Rule::emit(r"%(?:\(\w+\))?s", K::Placeholder),
        Rule::emit(r"[$:?]\w+", K::Placeholder).guarded(Guard::NotAfterWord),
    ];
    rules.extend(dialect_rules);
    rules.extend([
        // IN may be followed by a parenthesis but never names a function
        Rule::emit(r"(?:CASE|IN|VALUES|USING)\b", K::Keyword),
        Rule::emit(r"(?:@|##|#)\w+", K::Name),
        Rule::emit(r"[_\p{L}]\w*", K::Name).guarded(Guard::BeforeDot),
        Rule::emit(r"[_\p{L}]\w*", K::Name).guarded(Guard::AfterDot),
        Rule::emit(r"[_\p{L}]\w*", K::Name).guarded(Guard::BeforeParen),
        Rule::emit(r"0x[0-9a-f]+", K::Hexadecimal).guarded(Guard::NotBeforeWord),
        // A mantissa is required, so `e0` is a name where looser lexers see a float.
        Rule::emit(r"(?:\d+(?:\.\d*)?|\.\d+)e[+-]?\d+", K::Float).guarded(Guard::NotBeforeWord),
        Rule::emit(r"\d*\.\d+", K::Float).guarded(Guard::NotBeforeWord),
        Rule::emit(r"\d+", K::Integer).guarded(Guard::NotBeforeWord),
        Rule::emit(r"'(?:''|\\\\|\\'|[^'])*'", K::Single),
        Rule::emit(r#""(?:""|\\\\|\\"|[^"])*""#, K::Name),
        Rule::emit(r"\[[^\]]+\]", K::Name).guarded(Guard::NotAfterWordOrClose),
        Rule::emit(
            r"(?:(?:LEFT\s+|RIGHT\s+|FULL\s+)?(?:INNER\s+|OUTER\s+|STRAIGHT\s+)?|(?:CROSS\s+|NATURAL\s+)?)?JOIN\b",
            K::Keyword,
        ),
        Rule::emit(r"END(?:\s+IF|\s+LOOP|\s+WHILE)?\b", K::Keyword),
        Rule::emit(r"NOT\s+NULL\b", K::Keyword),
        Rule::emit(r"UNION\s+ALL\b", K::Keyword),
        Rule::emit(r"CREATE(?:\s+OR\s+REPLACE)?\b", K::Ddl),
        Rule::emit(r"DOUBLE\s+PRECISION\b", K::Builtin),
        Rule::keyword(r"\w[\w$#]*"),
        Rule::emit(r"[;:()\[\],.]", K::Punctuation),
        Rule::emit(r"[<>=~!]+", K::Comparison),
        Rule::emit(r"[+/@#%^&|-]+", K::Operator),
    ]);
    rules
}

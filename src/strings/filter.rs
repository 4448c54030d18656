//! Character filters and character-type classification

/// Accepts or rejects single characters
///
/// Implemented for closures, for single `char`s (exact match) and for the
/// built-in filters below.
pub trait CharFilter {
    /// `true` if `c` passes the filter
    fn accept(&self, c: char) -> bool;
}

impl<F> CharFilter for F
where
    F: Fn(char) -> bool,
{
    fn accept(&self, c: char) -> bool {
        self(c)
    }
}

impl CharFilter for char {
    fn accept(&self, c: char) -> bool {
        *self == c
    }
}

/// Accepts any character from a fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyOf(Vec<char>);

impl AnyOf {
    /// Build from every character of `chars`
    pub fn new(chars: &str) -> Self {
        AnyOf(chars.chars().collect())
    }
}

impl CharFilter for AnyOf {
    fn accept(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

/// Accepts Unicode whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct Whitespace;

impl CharFilter for Whitespace {
    fn accept(&self, c: char) -> bool {
        c.is_whitespace()
    }
}

/// Accepts Unicode numeric characters
#[derive(Debug, Clone, Copy, Default)]
pub struct Digit;

impl CharFilter for Digit {
    fn accept(&self, c: char) -> bool {
        c.is_numeric()
    }
}

/// Accepts Unicode alphabetic characters
#[derive(Debug, Clone, Copy, Default)]
pub struct Letter;

impl CharFilter for Letter {
    fn accept(&self, c: char) -> bool {
        c.is_alphabetic()
    }
}

/// Negates another filter
#[derive(Debug, Clone, Copy, Default)]
pub struct Not<F>(pub F);

impl<F: CharFilter> CharFilter for Not<F> {
    fn accept(&self, c: char) -> bool {
        !self.0.accept(c)
    }
}

/// Character category, used to split text at category changes
///
/// Letters, numbers and whitespace follow the Unicode properties. ASCII
/// punctuation and symbols get their own general category. Outside ASCII
/// only dashes, currency signs and math operators are told apart; every
/// other mark is [`CharType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    /// Upper-case or title-case letter
    Uppercase,
    /// Lower-case letter
    Lowercase,
    /// Letter without case, such as CJK ideographs
    OtherLetter,
    /// Any numeric character
    Number,
    /// Any whitespace
    Whitespace,
    /// Opening bracket: `(`, `[`, `{`
    OpenPunctuation,
    /// Closing bracket: `)`, `]`, `}`
    ClosePunctuation,
    /// Hyphen and dashes
    DashPunctuation,
    /// Underscore
    ConnectorPunctuation,
    /// Remaining punctuation such as `.`, `,`, `!`, `@`
    OtherPunctuation,
    /// Math operators such as `+`, `<`, `=`, `×`
    MathSymbol,
    /// Currency signs such as `$`, `£`, `€`
    CurrencySymbol,
    /// Spacing modifiers: `^` and `` ` ``
    ModifierSymbol,
    /// Anything else
    Other,
}

impl CharType {
    /// Category of `c`
    pub fn of(c: char) -> Self {
        if c.is_uppercase() {
            CharType::Uppercase
        } else if c.is_lowercase() {
            CharType::Lowercase
        } else if c.is_alphabetic() {
            CharType::OtherLetter
        } else if c.is_numeric() {
            CharType::Number
        } else if c.is_whitespace() {
            CharType::Whitespace
        } else {
            Self::of_mark(c)
        }
    }

    fn of_mark(c: char) -> Self {
        match c {
            '(' | '[' | '{' => CharType::OpenPunctuation,
            ')' | ']' | '}' => CharType::ClosePunctuation,
            '-' | '\u{2010}'..='\u{2015}' => CharType::DashPunctuation,
            '_' => CharType::ConnectorPunctuation,
            '+' | '<' | '=' | '>' | '|' | '~' | '\u{ac}' | '\u{b1}' | '\u{d7}' | '\u{f7}' => CharType::MathSymbol,
            '\u{2200}'..='\u{22ff}' => CharType::MathSymbol,
            '$' | '\u{a2}'..='\u{a5}' | '\u{20a0}'..='\u{20cf}' => CharType::CurrencySymbol,
            '^' | '`' => CharType::ModifierSymbol,
            c if c.is_ascii_punctuation() => CharType::OtherPunctuation,
            _ => CharType::Other,
        }
    }
}

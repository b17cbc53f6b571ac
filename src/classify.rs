//! Natural-language vs code classification
//!
//! The classifier is a table of independent pattern rules. A fragment is
//! non-textual as soon as one applicable rule matches its trimmed text, so
//! rule order only matters for [`matching_rules`] output.
//!
//! Two smaller heuristics live here as well because they answer the same
//! question for a narrower input: [`is_literal_noise`] for the raw content of
//! script string literals and [`looks_like_inline_script`] for markup inner
//! text.

use once_cell::sync::Lazy;
use regex::Regex;

/// When a rule takes part in classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    Always,
    /// Skipped for attribute values, which often hold hyphenated phrases
    ExceptAttribute,
    /// Only for text taken from script literals
    ScriptOnly,
}

impl Applicability {
    fn applies(self, is_attribute: bool, is_script: bool) -> bool {
        match self {
            Self::Always => true,
            Self::ExceptAttribute => !is_attribute,
            Self::ScriptOnly => is_script,
        }
    }
}

/// A single compiled classifier rule
#[derive(Debug)]
pub struct ClassifierRule {
    pub id: &'static str,
    pub pattern: Regex,
    pub applies_to: Applicability,
}

impl ClassifierRule {
    pub fn is_match(&self, text: &str, is_attribute: bool, is_script: bool) -> bool {
        self.applies_to.applies(is_attribute, is_script) && self.pattern.is_match(text)
    }
}

use Applicability::{Always, ExceptAttribute, ScriptOnly};

const RULE_TABLE: &[(&str, &str, Applicability)] = &[
    // Markup syntax
    ("markup-entity", r"^&[a-zA-Z]+;$", Always),
    // Locations
    ("url", r"^https?://", Always),
    ("api-host", r"(?i)api\..*\.com", Always),
    ("file-path", r"^/[[:word:]/-]+$", Always),
    ("file-name", r"(?i)^[[:word:]-]+\.(js|css|png|jpg|gif|svg)$", Always),
    // Numbers, symbols, whitespace
    ("numeric", r"^[0-9\s\-+()]+$", Always),
    ("blank", r"^\s*$", Always),
    ("symbols-only", r#"^[\\/*{}\[\]()<>;,.:!?'"=+\-~\^&|%$#@]+$"#, Always),
    ("single-bracket", r"^[{}\[\]()<>]$", Always),
    ("punctuation-only", r#"^[;,.:!?'"]+$"#, Always),
    ("operators-only", r"^[+\-*/%=&|\^~<>]+$", Always),
    ("semicolon", r"^;\s*$", Always),
    ("escape-sequence", r#"^\\[nrtbfv\\'"0]$"#, Always),
    ("comment-open", r"^/\*$", Always),
    ("comment-close", r"^\*/$", Always),
    ("line-comment", r"^//$", Always),
    // Identifier shapes
    ("upper-constant", r"^[A-Z_]{5,}$", Always),
    ("upper-snake-case", r"^[A-Z]+_[A-Z0-9_]+$", Always),
    ("script-constant", r"^[A-Z][A-Z0-9_]{4,}$", ScriptOnly),
    ("camel-case", r"^[a-z]+([A-Z][a-z]*)*$", Always),
    ("camel-case-humps", r"^[a-z]+([A-Z][a-z]*)+$", Always),
    ("camel-case-two-humps", r"^[a-z]+[A-Z][a-z]*[A-Z][a-z]*$", Always),
    ("kebab-case", r"^[a-z]+-[a-z-]+$", Always),
    ("kebab-case-multi", r"^[a-z]+-[a-z]+-[a-z-]+$", Always),
    ("dashed-word", r"^[a-zA-Z]*-[a-zA-Z-]*$", ExceptAttribute),
    ("snake-case", r"(?i)^[a-z]+_[a-z_]+$", Always),
    // Short technical tokens
    ("technical-word", r"(?i)^(ok|yes|no|true|false)$", Always),
    ("technical-abbreviation", r"(?i)^(src|alt|id|css|js|php|html|xml|json)$", Always),
    ("too-short", r"^[[:word:]]{1,2}$", Always),
    // Template and concatenation leftovers
    ("template-interpolation", r"^\$\{", Always),
    ("trailing-brace", r"^.*\}$", Always),
    ("concatenation", r"^.*content\s*\+=", Always),
    ("switch-case", r"^:\s*\n\s*case\s*$", Always),
    ("dangling-comma", r"^,\s*\n\s*$", Always),
    // Regular expression shapes
    ("regex-group-open", r#"^['"]\([^'"]*$"#, Always),
    ("regex-class-close", r#"^\][^'"]*['"]*$"#, Always),
    ("regex-group-close", r#"^[^'"]*\)['"]*$"#, Always),
    ("regex-literal", r"^/.*/[gimsuyx]*$", Always),
];

static RULES: Lazy<Vec<ClassifierRule>> = Lazy::new(|| {
    RULE_TABLE
        .iter()
        .map(|&(id, pattern, applies_to)| ClassifierRule {
            id,
            pattern: Regex::new(pattern).expect("classifier rule patterns are valid"),
            applies_to,
        })
        .collect()
});

/// The full rule table, in authoring order
pub fn rules() -> &'static [ClassifierRule] {
    &RULES
}

/// Returns true when `text` looks like code or technical content.
///
/// `is_attribute` disables the `dashed-word` rule; `is_script` enables the
/// `script-constant` rule. Length policy is left to callers.
pub fn is_non_textual(text: &str, is_attribute: bool, is_script: bool) -> bool {
    let text = text.trim();
    RULES
        .iter()
        .any(|rule| rule.is_match(text, is_attribute, is_script))
}

/// Ids of every rule matching `text`
pub fn matching_rules(text: &str, is_attribute: bool, is_script: bool) -> Vec<&'static str> {
    let text = text.trim();
    RULES
        .iter()
        .filter(|rule| rule.is_match(text, is_attribute, is_script))
        .map(|rule| rule.id)
        .collect()
}

static LITERAL_NOISE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Regex source pieces
        r"^[\[\](){}.*+?\^$\\|]+$",
        r"^\[.*\]$",
        r"^\(.*\)$",
        r"^\\[a-z]$",
        r"\[\^[^\[\]]*\]",
        r"\$\{|\}\$",
        // Translation helpers and calls
        r"\$t\(|\\.t\(|i18n\\.t\(",
        r"\bt\s*\(",
        // Nothing letter-like at all
        r"^[^a-zA-Z0-9\s\x{00C0}-\x{017F}\x{0100}-\x{024F}\x{1E00}-\x{1EFF}\x{0400}-\x{04FF}\x{0370}-\x{03FF}\x{0590}-\x{05FF}\x{0600}-\x{06FF}\x{4E00}-\x{9FFF}\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{AC00}-\x{D7AF}]+$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("literal noise patterns are valid"))
    .collect()
});

/// Returns true when the content of a script literal is a code fragment
/// rather than candidate text: regex pieces, translation calls, symbol runs
/// and anything of two characters or fewer.
pub fn is_literal_noise(content: &str) -> bool {
    content.chars().count() <= 2 || LITERAL_NOISE.iter().any(|re| re.is_match(content))
}

static INLINE_SCRIPT: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // call: func(...)
        r"[[:word:]]+\([^)]*\)",
        // member access: obj.prop
        r"[[:word:]]+\.[[:word:]]+",
        // object property: key: 'value'
        r#"[[:word:]]+:\s*['"]"#,
        // directive binding: :prop=
        r":[[:word:]]+\s*=",
        r"\$t\(",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("inline script patterns are valid"))
    .collect()
});

/// Returns true when markup inner text reads like stray script.
pub fn looks_like_inline_script(text: &str) -> bool {
    text.contains("=>")
        || text.contains("function")
        || INLINE_SCRIPT.iter().any(|re| re.is_match(text))
}

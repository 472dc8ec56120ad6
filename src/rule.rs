//! Rule notation: life-like `B<digits>/S<digits>` text and elementary rule numbers.
//!
//! Parsing never fails. Anything unreadable degrades to the closest sensible
//! interpretation, and an empty result falls back to Conway's `B3/S23`.

use serde::{Deserialize, Serialize};

/// Rule used whenever the text yields no birth and no survive digits
pub const DEFAULT_LIFE_RULE: &str = "B3/S23";
/// Splits birth/survive halves when no explicit B/S tokens are present
pub const SEPARATOR: char = '/';
/// Neighbor counts 0..=8
pub const MASK_LEN: usize = 9;

/// Which update semantics the grid follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleFamily {
    /// 2D birth/survive rules over a neighborhood
    #[default]
    Life,
    /// Row-wise 1D rules (Wolfram numbering)
    Elementary,
}

impl RuleFamily {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "life" | "lifelike" | "life-like" | "2d" => Some(Self::Life),
            "elementary" | "eca" | "1d" => Some(Self::Elementary),
            _ => None,
        }
    }
}

/// Initial fill for elementary automata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartMode {
    /// One live cell at the center of each row
    #[default]
    Single,
    /// Density-based random fill, same as life-like seeding
    Random,
}

impl StartMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "single" | "center" => Some(Self::Single),
            "random" | "rand" => Some(Self::Random),
            _ => None,
        }
    }
}

/// Digits recognized from rule text, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    pub birth: String,
    pub survive: String,
    /// `B<birth>/S<survive>`
    pub normalized: String,
}

/// Lookup tables indexed by live neighbor count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMasks {
    pub birth: [bool; MASK_LEN],
    pub survive: [bool; MASK_LEN],
}

impl RuleMasks {
    /// Next state of a cell with `count` live neighbors
    #[inline]
    pub fn next_state(&self, alive: bool, count: u8) -> bool {
        let table = if alive { &self.survive } else { &self.birth };
        table.get(count as usize).copied().unwrap_or(false)
    }
}

/// A parsed life-like rule together with its masks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeRule {
    parsed: ParsedRule,
    masks: RuleMasks,
}

impl LifeRule {
    pub fn parse(text: &str) -> Self {
        let parsed = parse_life_rule(text);
        let masks = build_masks(&parsed.birth, &parsed.survive);
        Self { parsed, masks }
    }

    /// Normalized `B.../S...` text
    pub fn text(&self) -> &str {
        &self.parsed.normalized
    }

    pub fn masks(&self) -> &RuleMasks {
        &self.masks
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::parse(DEFAULT_LIFE_RULE)
    }
}

#[inline]
fn is_rule_digit(c: char) -> bool {
    ('0'..='8').contains(&c)
}

/// Digit run directly after the first `marker`, or None if the marker is absent.
///
/// The whole run is kept, `9` included; [`build_masks`] drops what is out of range.
fn token_digits(text: &str, marker: char) -> Option<String> {
    let start = text.find(marker)? + marker.len_utf8();
    Some(text[start..].chars().take_while(char::is_ascii_digit).collect())
}

fn rule_digits(half: &str) -> String {
    half.chars().filter(|&c| is_rule_digit(c)).collect()
}

/// Parses life-like rule text.
///
/// Case-insensitive, whitespace is ignored. Explicit `B`/`S` tokens win;
/// without them a `birth/survive` pair split on the first `/` is accepted.
/// Duplicate digits and their order are echoed as given.
pub fn parse_life_rule(text: &str) -> ParsedRule {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();

    let birth_token = token_digits(&cleaned, 'B');
    let survive_token = token_digits(&cleaned, 'S');

    let (birth, survive) = if birth_token.is_none() && survive_token.is_none() {
        match cleaned.split_once(SEPARATOR) {
            Some((b, s)) => (rule_digits(b), rule_digits(s)),
            None => (String::new(), String::new()),
        }
    } else {
        (birth_token.unwrap_or_default(), survive_token.unwrap_or_default())
    };

    if birth.is_empty() && survive.is_empty() {
        return ParsedRule {
            birth: "3".to_string(),
            survive: "23".to_string(),
            normalized: DEFAULT_LIFE_RULE.to_string(),
        };
    }

    let normalized = format!("B{}/S{}", birth, survive);
    ParsedRule { birth, survive, normalized }
}

/// Builds birth/survive tables. Characters other than '0'..='8' are ignored.
pub fn build_masks(birth: &str, survive: &str) -> RuleMasks {
    fn fill(digits: &str) -> [bool; MASK_LEN] {
        let mut table = [false; MASK_LEN];
        for n in digits.chars().filter_map(|c| c.to_digit(10)) {
            if let Some(slot) = table.get_mut(n as usize) {
                *slot = true;
            }
        }
        table
    }

    RuleMasks {
        birth: fill(birth),
        survive: fill(survive),
    }
}

/// Rounds to the nearest integer and clamps into 0..=255. NaN maps to 0.
pub fn clamp_eca_rule(n: f64) -> u8 {
    n.round().clamp(0.0, 255.0) as u8
}

/// Named life-like rules
pub const LIFE_PRESETS: &[(&str, &str)] = &[
    ("life", "B3/S23"),
    ("highlife", "B36/S23"),
    ("seeds", "B2/S"),
    ("daynight", "B3678/S34678"),
    ("maze", "B3/S12345"),
    ("diamoeba", "B35678/S5678"),
    ("replicator", "B1357/S1357"),
];

/// Well-known elementary rules
pub mod elementary_rules {
    /// Chaotic
    pub const RULE_30: u8 = 30;
    /// Sierpinski triangle
    pub const RULE_90: u8 = 90;
    /// Turing complete
    pub const RULE_110: u8 = 110;
    /// Traffic flow
    pub const RULE_184: u8 = 184;
    pub const RULE_250: u8 = 250;
}

/// Named elementary rules. `ruleN` forms are matched separately.
pub const ELEMENTARY_PRESETS: &[(&str, u8)] = &[
    ("chaos", elementary_rules::RULE_30),
    ("sierpinski", elementary_rules::RULE_90),
    ("universal", elementary_rules::RULE_110),
    ("traffic", elementary_rules::RULE_184),
    ("growth", elementary_rules::RULE_250),
];

/// Elementary rule from a preset name, `ruleN`, or a number (rounded and clamped).
///
/// Returns None for text that is none of these.
pub fn parse_eca_rule(text: &str) -> Option<u8> {
    let key: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if let Some((_, rule)) = ELEMENTARY_PRESETS.iter().find(|(name, _)| *name == key) {
        return Some(*rule);
    }
    let number = key.strip_prefix("rule").unwrap_or(&key);
    number.parse::<f64>().ok().map(clamp_eca_rule)
}

/// Looks up a life-like preset by name (case-insensitive)
pub fn preset(name: &str) -> Option<&'static str> {
    let key: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    LIFE_PRESETS
        .iter()
        .find(|(preset, _)| *preset == key)
        .map(|(_, rule)| *rule)
}

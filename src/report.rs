//! Evaluation result types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Width of a full strength bar. Tier widths are fractions of it.
pub const BAR_MAX_WIDTH: u32 = 300;

/// Outcome of the five checklist sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CharacterClassFlags {
    pub length_ok: bool,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl CharacterClassFlags {
    /// Number of satisfied rules, 0 to 5.
    pub fn score(&self) -> u8 {
        self.checklist().iter().filter(|(_, ok)| *ok).count() as u8
    }

    /// Labelled flags in display order.
    pub fn checklist(&self) -> [(&'static str, bool); 5] {
        [
            ("Length (8+)", self.length_ok),
            ("Lowercase", self.has_lower),
            ("Uppercase", self.has_upper),
            ("Numbers", self.has_digit),
            ("Special Characters", self.has_special),
        ]
    }
}

/// Final classification of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum StrengthTier {
    Weak,
    Moderate,
    Strong,
}

impl StrengthTier {
    /// Classifies from entropy and checklist score.
    ///
    /// Rows are checked in order and the first match wins:
    ///
    /// | Condition                          | Tier     |
    /// |------------------------------------|----------|
    /// | `entropy < 30` or `score <= 2`     | Weak     |
    /// | `entropy < 50` or `score <= 3`     | Moderate |
    /// | otherwise                          | Strong   |
    pub fn classify(entropy_bits: f64, score: u8) -> Self {
        if entropy_bits < 30.0 || score <= 2 {
            StrengthTier::Weak
        } else if entropy_bits < 50.0 || score <= 3 {
            StrengthTier::Moderate
        } else {
            StrengthTier::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Moderate => "Moderate",
            StrengthTier::Strong => "Strong",
        }
    }

    /// Suggested bar width out of [`BAR_MAX_WIDTH`].
    pub fn bar_width(self) -> u32 {
        match self {
            StrengthTier::Weak => 100,
            StrengthTier::Moderate => 200,
            StrengthTier::Strong => 300,
        }
    }

    /// Display color as an RGB triple.
    pub fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            StrengthTier::Weak => (0xff, 0x44, 0x44),
            StrengthTier::Moderate => (0xff, 0xbb, 0x33),
            StrengthTier::Strong => (0x00, 0xc8, 0x51),
        }
    }

    /// Display color as a `#rrggbb` string.
    pub fn color_hex(self) -> String {
        let (r, g, b) = self.color_rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strength estimate for one password.
///
/// `score` always equals the number of true flags and `tier` is always
/// `StrengthTier::classify(entropy_bits, score)`. Built by
/// [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StrengthReport {
    entropy_bits: f64,
    flags: CharacterClassFlags,
    score: u8,
    tier: StrengthTier,
}

impl StrengthReport {
    pub(crate) fn new(entropy_bits: f64, flags: CharacterClassFlags) -> Self {
        let score = flags.score();
        Self {
            entropy_bits,
            flags,
            score,
            tier: StrengthTier::classify(entropy_bits, score),
        }
    }

    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }

    pub fn flags(&self) -> CharacterClassFlags {
        self.flags
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn tier(&self) -> StrengthTier {
        self.tier
    }
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Password Strength: {}", self.tier)?;
        writeln!(f, "Entropy: {:.2} bits", self.entropy_bits)?;
        writeln!(f)?;
        write!(f, "Checklist:")?;
        for (label, ok) in self.flags.checklist() {
            write!(f, "\n✓ {}: {}", label, if ok { "Yes" } else { "No" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(bits: [bool; 5]) -> CharacterClassFlags {
        CharacterClassFlags {
            length_ok: bits[0],
            has_lower: bits[1],
            has_upper: bits[2],
            has_digit: bits[3],
            has_special: bits[4],
        }
    }

    #[test]
    fn test_score_counts_flags() {
        assert_eq!(flags([false; 5]).score(), 0);
        assert_eq!(flags([true, false, true, false, false]).score(), 2);
        assert_eq!(flags([true; 5]).score(), 5);
    }

    #[test]
    fn test_classify_weak_on_low_entropy() {
        assert_eq!(StrengthTier::classify(29.99, 5), StrengthTier::Weak);
    }

    #[test]
    fn test_classify_weak_on_low_score() {
        assert_eq!(StrengthTier::classify(120.0, 2), StrengthTier::Weak);
    }

    #[test]
    fn test_classify_moderate() {
        assert_eq!(StrengthTier::classify(30.0, 5), StrengthTier::Moderate);
        assert_eq!(StrengthTier::classify(49.99, 4), StrengthTier::Moderate);
        assert_eq!(StrengthTier::classify(80.0, 3), StrengthTier::Moderate);
    }

    #[test]
    fn test_classify_strong() {
        assert_eq!(StrengthTier::classify(50.0, 4), StrengthTier::Strong);
        assert_eq!(StrengthTier::classify(65.5, 5), StrengthTier::Strong);
    }

    #[test]
    fn test_tier_presentation() {
        assert_eq!(StrengthTier::Weak.bar_width(), 100);
        assert_eq!(StrengthTier::Moderate.bar_width(), 200);
        assert_eq!(StrengthTier::Strong.bar_width(), BAR_MAX_WIDTH);
        assert_eq!(StrengthTier::Weak.color_hex(), "#ff4444");
        assert_eq!(StrengthTier::Moderate.color_hex(), "#ffbb33");
        assert_eq!(StrengthTier::Strong.color_hex(), "#00c851");
        assert_eq!(StrengthTier::Moderate.to_string(), "Moderate");
    }

    #[test]
    fn test_report_invariants() {
        let report = StrengthReport::new(47.63, flags([true, true, true, true, false]));
        assert_eq!(report.score(), 4);
        assert_eq!(report.tier(), StrengthTier::Moderate);
    }

    #[test]
    fn test_report_display() {
        let report = StrengthReport::new(37.6035, flags([true, true, false, false, false]));
        let expected = "Password Strength: Weak\n\
                        Entropy: 37.60 bits\n\
                        \n\
                        Checklist:\n\
                        ✓ Length (8+): Yes\n\
                        ✓ Lowercase: Yes\n\
                        ✓ Uppercase: No\n\
                        ✓ Numbers: No\n\
                        ✓ Special Characters: No";
        assert_eq!(report.to_string(), expected);
    }
}

//! The rule catalogue and user rule-name normalisation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Short codes for the replacement and inference rules the detector
/// recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCode {
    // replacement rules
    Dist,
    Comm,
    Assoc,
    Exp,
    Dn,
    DeM,
    Contra,
    Simp,
    Be,
    Taut,
    // inference rules
    Cpa,
    Raa,
    NegIntro,
    Mp,
    Mt,
    Mpt,
    Hs,
    Ds,
    Cd,
    Dd,
    AndIntro,
    AndElim,
    OrIntro,
    OrElim,
    Abs,
}

impl RuleCode {
    /// The short code used in proof output
    pub fn code(self) -> &'static str {
        match self {
            RuleCode::Dist => "Dist",
            RuleCode::Comm => "Comm",
            RuleCode::Assoc => "Assoc",
            RuleCode::Exp => "Exp",
            RuleCode::Dn => "DN",
            RuleCode::DeM => "DeM",
            RuleCode::Contra => "Contra",
            RuleCode::Simp => "Simp",
            RuleCode::Be => "BE",
            RuleCode::Taut => "T",
            RuleCode::Cpa => "CPA",
            RuleCode::Raa => "RAA",
            RuleCode::NegIntro => "¬I",
            RuleCode::Mp => "MP",
            RuleCode::Mt => "MT",
            RuleCode::Mpt => "MPT",
            RuleCode::Hs => "HS",
            RuleCode::Ds => "DS",
            RuleCode::Cd => "CD",
            RuleCode::Dd => "DD",
            RuleCode::AndIntro => "∧I",
            RuleCode::AndElim => "∧E",
            RuleCode::OrIntro => "∨I",
            RuleCode::OrElim => "∨E",
            RuleCode::Abs => "Abs",
        }
    }

    /// Normalise a user-written rule name to a short code.
    ///
    /// Matching is case-insensitive and ignores spaces and hyphens.
    pub fn normalise(name: &str) -> Option<RuleCode> {
        let key: String = name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        let code = match key.as_str() {
            "dist" | "distribution" | "distributive" => RuleCode::Dist,
            "comm" | "commutation" | "commutative" | "commutativity" => RuleCode::Comm,
            "assoc" | "association" | "associative" | "associativity" => RuleCode::Assoc,
            "exp" | "exportation" => RuleCode::Exp,
            "dn" | "doublenegation" => RuleCode::Dn,
            "dem" | "dm" | "demorgan" | "demorgans" => RuleCode::DeM,
            "contra" | "contraposition" | "transposition" => RuleCode::Contra,
            "simp" | "impl" | "materialimplication" => RuleCode::Simp,
            "be" | "equiv" | "biconditionalexchange" => RuleCode::Be,
            "t" | "taut" | "tautology" => RuleCode::Taut,
            "cpa" | "cp" | "conditionalproof" => RuleCode::Cpa,
            "raa" | "reductio" | "reductioadabsurdum" => RuleCode::Raa,
            "¬i" | "~i" | "!i" | "ni" | "noti" | "negationintroduction" => RuleCode::NegIntro,
            "mp" | "modusponens" => RuleCode::Mp,
            "mt" | "modustollens" => RuleCode::Mt,
            "mpt" | "modusponendotollens" => RuleCode::Mpt,
            "hs" | "hypotheticalsyllogism" => RuleCode::Hs,
            "ds" | "disjunctivesyllogism" => RuleCode::Ds,
            "cd" | "constructivedilemma" => RuleCode::Cd,
            "dd" | "destructivedilemma" => RuleCode::Dd,
            "∧i" | "&i" | "ci" | "andi" | "conjunctionintroduction" => RuleCode::AndIntro,
            "∧e" | "&e" | "ce" | "ande" | "conjunctionelimination" => RuleCode::AndElim,
            "∨i" | "|i" | "di" | "ori" | "disjunctionintroduction" => RuleCode::OrIntro,
            "∨e" | "|e" | "de" | "ore" | "disjunctionelimination" => RuleCode::OrElim,
            "abs" | "absorption" => RuleCode::Abs,
            _ => return None,
        };
        Some(code)
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_aliases() {
        assert_eq!(RuleCode::normalise("MP"), Some(RuleCode::Mp));
        assert_eq!(RuleCode::normalise("modusponens"), Some(RuleCode::Mp));
        assert_eq!(RuleCode::normalise("Modus Ponens"), Some(RuleCode::Mp));
        assert_eq!(RuleCode::normalise("DeMorgan"), Some(RuleCode::DeM));
        assert_eq!(RuleCode::normalise("dem"), Some(RuleCode::DeM));
        assert_eq!(RuleCode::normalise("∧I"), Some(RuleCode::AndIntro));
        assert_eq!(RuleCode::normalise("ci"), Some(RuleCode::AndIntro));
        assert_eq!(RuleCode::normalise("∨E"), Some(RuleCode::OrElim));
        assert_eq!(RuleCode::normalise("double negation"), Some(RuleCode::Dn));
        assert_eq!(RuleCode::normalise("T"), Some(RuleCode::Taut));
    }

    #[test]
    fn test_normalise_unknown() {
        assert_eq!(RuleCode::normalise("Premise"), None);
        assert_eq!(RuleCode::normalise("Assume"), None);
        assert_eq!(RuleCode::normalise("xyzzy"), None);
    }

    #[test]
    fn test_code_round_trip() {
        for code in [
            RuleCode::Dist,
            RuleCode::DeM,
            RuleCode::NegIntro,
            RuleCode::AndIntro,
            RuleCode::OrElim,
            RuleCode::Taut,
        ] {
            assert_eq!(RuleCode::normalise(code.code()), Some(code));
        }
    }
}

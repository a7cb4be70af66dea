//! Word tokenisation and part-of-speech tagging.
//!
//! The engine only needs to tell nouns from everything else, so the built-in
//! [`LexiconTagger`] is a small rule tagger: a closed-class lexicon, a few
//! hundred common verbs and adjectives, suffix rules, then left-context rules
//! for whatever is still unknown. Anything implementing [`Tagger`] can be
//! swapped in through [`LinguisticResources`](super::resources::LinguisticResources).
//!
//! ## Tag order of precedence
//!
//! 1. punctuation / numbers
//! 2. closed-class lexicon (determiners, pronouns, auxiliaries, ...)
//! 3. capitalisation (mid-sentence capital → proper noun)
//! 4. verb lexicon, including `-s`, `-ed`, `-ing` inflections
//! 5. adjective / adverb lexicon
//! 6. derivational suffixes (`-tion` → noun, `-ous` → adjective, ...)
//! 7. left context (after `to` or a modal → verb; after a noun → verb)
//! 8. fallback: common noun, plural if it ends in a plain `s`

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Penn Treebank-style tags (the subset the tagger emits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Common noun, singular.
    NN,
    /// Common noun, plural.
    NNS,
    /// Proper noun, singular.
    NNP,
    /// Proper noun, plural.
    NNPS,
    VB,
    VBD,
    VBG,
    VBN,
    VBP,
    VBZ,
    JJ,
    RB,
    DT,
    IN,
    CC,
    CD,
    MD,
    PRP,
    PRPS,
    TO,
    EX,
    WDT,
    WP,
    WRB,
    POS,
    /// Punctuation and symbols.
    Punct,
}

impl PosTag {
    /// `NN`, `NNS`, `NNP` or `NNPS`.
    pub fn is_noun(self) -> bool {
        matches!(self, PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::NNPS)
    }

    pub fn is_verb(self) -> bool {
        matches!(
            self,
            PosTag::VB | PosTag::VBD | PosTag::VBG | PosTag::VBN | PosTag::VBP | PosTag::VBZ
        )
    }
}

/// Assigns one tag per token.
pub trait Tagger: Send + Sync {
    fn tag(&self, tokens: &[&str]) -> Vec<PosTag>;
}

/// Split a sentence into word and punctuation tokens.
///
/// Leading and trailing punctuation is peeled off each whitespace chunk, and
/// possessive `'s` / `n't` clitics become tokens of their own. Internal
/// hyphens, apostrophes and decimal points stay inside the word.
pub fn tokenize_words(sentence: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for chunk in sentence.split_whitespace() {
        let core_start = chunk
            .char_indices()
            .find(|&(_, c)| c.is_alphanumeric())
            .map(|(i, _)| i);
        let Some(core_start) = core_start else {
            push_punct(chunk, &mut tokens);
            continue;
        };
        let core_end = chunk
            .char_indices()
            .rev()
            .find(|&(_, c)| c.is_alphanumeric())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(chunk.len());

        push_punct(&chunk[..core_start], &mut tokens);

        let core = &chunk[core_start..core_end];
        let lower = core.to_ascii_lowercase();
        if lower.ends_with("n't") && core.len() > 3 {
            let split = core.len() - 3;
            tokens.push(&core[..split]);
            tokens.push(&core[split..]);
        } else if (lower.ends_with("'s") || lower.ends_with("\u{2019}s")) && core.chars().count() > 2 {
            let split = core.len() - core.chars().rev().take(2).map(char::len_utf8).sum::<usize>();
            tokens.push(&core[..split]);
            tokens.push(&core[split..]);
        } else {
            tokens.push(core);
        }

        push_punct(&chunk[core_end..], &mut tokens);
    }
    tokens
}

fn push_punct<'a>(s: &'a str, tokens: &mut Vec<&'a str>) {
    for (i, c) in s.char_indices() {
        tokens.push(&s[i..i + c.len_utf8()]);
    }
}

/// Returns `true` if the token contains no letters or digits.
pub fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

const CLOSED_CLASS: &[(&str, PosTag)] = &[
    ("a", PosTag::DT), ("an", PosTag::DT), ("the", PosTag::DT), ("this", PosTag::DT),
    ("that", PosTag::DT), ("these", PosTag::DT), ("those", PosTag::DT), ("each", PosTag::DT),
    ("every", PosTag::DT), ("some", PosTag::DT), ("any", PosTag::DT), ("no", PosTag::DT),
    ("all", PosTag::DT), ("both", PosTag::DT), ("either", PosTag::DT), ("neither", PosTag::DT),
    ("another", PosTag::DT),
    ("of", PosTag::IN), ("in", PosTag::IN), ("on", PosTag::IN), ("at", PosTag::IN),
    ("by", PosTag::IN), ("for", PosTag::IN), ("with", PosTag::IN), ("from", PosTag::IN),
    ("into", PosTag::IN), ("onto", PosTag::IN), ("about", PosTag::IN), ("as", PosTag::IN),
    ("through", PosTag::IN), ("during", PosTag::IN), ("before", PosTag::IN), ("after", PosTag::IN),
    ("above", PosTag::IN), ("below", PosTag::IN), ("between", PosTag::IN), ("among", PosTag::IN),
    ("under", PosTag::IN), ("over", PosTag::IN), ("within", PosTag::IN), ("without", PosTag::IN),
    ("against", PosTag::IN), ("across", PosTag::IN), ("toward", PosTag::IN), ("towards", PosTag::IN),
    ("upon", PosTag::IN), ("via", PosTag::IN), ("per", PosTag::IN), ("than", PosTag::IN),
    ("because", PosTag::IN), ("if", PosTag::IN), ("while", PosTag::IN), ("although", PosTag::IN),
    ("though", PosTag::IN), ("unless", PosTag::IN), ("since", PosTag::IN), ("until", PosTag::IN),
    ("whether", PosTag::IN), ("like", PosTag::IN), ("near", PosTag::IN), ("around", PosTag::IN),
    ("and", PosTag::CC), ("or", PosTag::CC), ("but", PosTag::CC), ("nor", PosTag::CC),
    ("yet", PosTag::CC), ("so", PosTag::CC),
    ("to", PosTag::TO),
    ("there", PosTag::EX),
    ("can", PosTag::MD), ("could", PosTag::MD), ("may", PosTag::MD), ("might", PosTag::MD),
    ("must", PosTag::MD), ("shall", PosTag::MD), ("should", PosTag::MD), ("will", PosTag::MD),
    ("would", PosTag::MD), ("ca", PosTag::MD), ("wo", PosTag::MD),
    ("i", PosTag::PRP), ("you", PosTag::PRP), ("he", PosTag::PRP), ("she", PosTag::PRP),
    ("it", PosTag::PRP), ("we", PosTag::PRP), ("they", PosTag::PRP), ("me", PosTag::PRP),
    ("him", PosTag::PRP), ("us", PosTag::PRP), ("them", PosTag::PRP), ("itself", PosTag::PRP),
    ("themselves", PosTag::PRP), ("himself", PosTag::PRP), ("herself", PosTag::PRP),
    ("my", PosTag::PRPS), ("your", PosTag::PRPS), ("his", PosTag::PRPS), ("her", PosTag::PRPS),
    ("its", PosTag::PRPS), ("our", PosTag::PRPS), ("their", PosTag::PRPS),
    ("which", PosTag::WDT), ("what", PosTag::WP), ("who", PosTag::WP), ("whom", PosTag::WP),
    ("whose", PosTag::WP), ("when", PosTag::WRB), ("where", PosTag::WRB), ("why", PosTag::WRB),
    ("how", PosTag::WRB),
    ("is", PosTag::VBZ), ("has", PosTag::VBZ), ("does", PosTag::VBZ),
    ("are", PosTag::VBP), ("am", PosTag::VBP), ("have", PosTag::VBP), ("do", PosTag::VBP),
    ("was", PosTag::VBD), ("were", PosTag::VBD), ("had", PosTag::VBD), ("did", PosTag::VBD),
    ("be", PosTag::VB), ("been", PosTag::VBN), ("being", PosTag::VBG),
    ("not", PosTag::RB), ("n't", PosTag::RB), ("very", PosTag::RB), ("also", PosTag::RB),
    ("too", PosTag::RB), ("then", PosTag::RB), ("now", PosTag::RB), ("here", PosTag::RB),
    ("often", PosTag::RB), ("always", PosTag::RB), ("never", PosTag::RB), ("only", PosTag::RB),
    ("just", PosTag::RB), ("even", PosTag::RB), ("still", PosTag::RB), ("however", PosTag::RB),
    ("thus", PosTag::RB), ("therefore", PosTag::RB), ("again", PosTag::RB), ("further", PosTag::RB),
    ("once", PosTag::RB), ("almost", PosTag::RB), ("already", PosTag::RB), ("together", PosTag::RB),
    ("'s", PosTag::POS), ("\u{2019}s", PosTag::POS),
];

/// Base forms; inflected forms are recognised by stripping `-s`, `-ed`, `-ing`.
const VERBS: &[&str] = &[
    "accept", "achieve", "act", "add", "affect", "allow", "appear", "apply", "argue", "arise",
    "become", "begin", "believe", "belong", "boil", "break", "bring", "build", "call", "carry",
    "cause", "change", "choose", "claim", "come", "compare", "connect", "consider", "consist",
    "contain", "continue", "control", "convert", "create", "decide", "define", "depend",
    "describe", "design", "determine", "develop", "die", "differ", "discover", "discuss",
    "divide", "eat", "enable", "enter", "establish", "exist", "expand", "explain", "express",
    "fall", "feel", "find", "flow", "follow", "form", "function", "get", "give", "go", "grow",
    "happen", "help", "hold", "identify", "improve", "include", "increase", "indicate",
    "influence", "involve", "keep", "know", "lead", "learn", "leave", "let", "live", "look",
    "lose", "make", "mean", "measure", "meet", "move", "need", "observe", "obtain", "occur",
    "offer", "operate", "perform", "play", "prevent", "produce", "protect", "provide", "put",
    "reach", "read", "receive", "reduce", "refer", "reflect", "release", "remain", "remove",
    "replace", "represent", "require", "result", "return", "rise", "run", "say", "see", "seem",
    "serve", "set", "show", "spread", "start", "stay", "store", "study", "suggest", "supply",
    "support", "take", "tell", "tend", "think", "transfer", "transform", "travel", "try", "turn",
    "understand", "use", "vary", "want", "work", "write",
    // irregular past forms
    "became", "began", "brought", "built", "came", "chose", "found", "gave", "got", "grew",
    "held", "kept", "knew", "led", "left", "lost", "made", "meant", "met", "ran", "rose", "said",
    "saw", "seen", "taken", "took", "thought", "told", "went", "wrote", "written", "known",
    "given", "shown", "grown", "done", "gone",
];

const ADJECTIVES: &[&str] = &[
    "able", "bad", "basic", "big", "certain", "clear", "common", "complex", "current",
    "different", "difficult", "due", "early", "easy", "entire", "few", "final", "fine", "first",
    "free", "full", "general", "good", "great", "high", "hot", "important", "large", "last",
    "late", "less", "likely", "little", "long", "low", "main", "major", "many", "modern", "more",
    "most", "much", "new", "next", "old", "open", "other", "own", "particular", "possible",
    "primary", "real", "recent", "same", "second", "several", "short", "significant", "similar",
    "simple", "single", "small", "specific", "strong", "such", "third", "true", "false", "various",
    "whole", "wide", "young", "cold", "warm", "key", "essential", "necessary", "overall",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ism", "ist", "ship", "hood",
    "ure", "age", "ery", "logy", "phy", "cy", "dom", "ium", "ogen",
];

const ADJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ical", "ish", "ary", "ic", "al",
];

/// Rule-and-lexicon tagger for English.
pub struct LexiconTagger {
    closed: HashMap<&'static str, PosTag>,
    verbs: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::english()
    }
}

impl LexiconTagger {
    pub fn english() -> Self {
        LexiconTagger {
            closed: CLOSED_CLASS.iter().copied().collect(),
            verbs: VERBS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
        }
    }

    /// Tag for a verb-lexicon hit, accounting for inflection.
    fn verb_form(&self, lower: &str) -> Option<PosTag> {
        if self.verbs.contains(lower) {
            return Some(PosTag::VB);
        }
        if let Some(stem) = lower.strip_suffix("ing") {
            if self.verb_stem(stem) {
                return Some(PosTag::VBG);
            }
        }
        if let Some(stem) = lower.strip_suffix("ed") {
            if self.verb_stem(stem) {
                return Some(PosTag::VBD);
            }
        }
        if let Some(stem) = lower.strip_suffix("ies") {
            if self.verbs.contains(format!("{stem}y").as_str()) {
                return Some(PosTag::VBZ);
            }
        }
        if let Some(stem) = lower.strip_suffix("es") {
            if self.verbs.contains(stem) {
                return Some(PosTag::VBZ);
            }
        }
        if let Some(stem) = lower.strip_suffix('s') {
            if self.verbs.contains(stem) {
                return Some(PosTag::VBZ);
            }
        }
        None
    }

    /// Stem after `-ed`/`-ing` removal: "form", "produc(e)", "divid(e)", "stopp" → "stop".
    fn verb_stem(&self, stem: &str) -> bool {
        if stem.is_empty() {
            return false;
        }
        if self.verbs.contains(stem) || self.verbs.contains(format!("{stem}e").as_str()) {
            return true;
        }
        let bytes = stem.as_bytes();
        let n = bytes.len();
        if stem.is_ascii() && n >= 2 && bytes[n - 1] == bytes[n - 2] {
            return self.verbs.contains(&stem[..n - 1]);
        }
        if let Some(s) = stem.strip_suffix('i') {
            return self.verbs.contains(format!("{s}y").as_str());
        }
        false
    }

    fn tag_one(&self, token: &str, prev: Option<PosTag>, sentence_start: bool) -> PosTag {
        if is_punctuation(token) {
            return PosTag::Punct;
        }
        if token.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%')) {
            return PosTag::CD;
        }

        let lower = token.to_lowercase();
        if let Some(&tag) = self.closed.get(lower.as_str()) {
            // "that"/"there" after a noun behave as relatives; noun status is all we need.
            return tag;
        }

        let capitalised = token.chars().next().is_some_and(char::is_uppercase);
        if capitalised && !sentence_start {
            let plural = lower.ends_with('s') && !lower.ends_with("ss") && token.len() > 3;
            return if plural && prev.is_some_and(|p| p == PosTag::DT) {
                PosTag::NNPS
            } else {
                PosTag::NNP
            };
        }

        let after_infinitive = matches!(prev, Some(PosTag::TO) | Some(PosTag::MD));
        if let Some(tag) = self.verb_form(&lower) {
            if after_infinitive {
                return PosTag::VB;
            }
            // Determiner or adjective directly before: it's being used as a noun ("the function").
            if matches!(prev, Some(PosTag::DT) | Some(PosTag::JJ) | Some(PosTag::PRPS) | Some(PosTag::POS)) {
                return if tag == PosTag::VBZ { PosTag::NNS } else { noun_for(&lower) };
            }
            return match tag {
                PosTag::VB if matches!(prev, Some(p) if p.is_noun() || p == PosTag::PRP) => PosTag::VBP,
                other => other,
            };
        }

        if self.adjectives.contains(lower.as_str()) {
            return PosTag::JJ;
        }
        if lower.ends_with("ly") && lower.len() > 4 {
            return PosTag::RB;
        }
        if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s) && lower.len() > s.len() + 2) {
            return noun_for(&lower);
        }
        if plural_of_suffix(&lower) {
            return PosTag::NNS;
        }
        if ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s) && lower.len() > s.len() + 2) {
            return PosTag::JJ;
        }
        if lower.ends_with("ing") && lower.len() > 5 {
            return if matches!(prev, Some(PosTag::DT)) { PosTag::NN } else { PosTag::VBG };
        }
        if lower.ends_with("ed") && lower.len() > 4 {
            return PosTag::VBD;
        }

        if after_infinitive {
            return PosTag::VB;
        }
        noun_for(&lower)
    }
}

/// `NNS` for a plain plural ending, otherwise `NN`.
fn noun_for(lower: &str) -> PosTag {
    let plural = lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
        && lower.len() > 3;
    if plural { PosTag::NNS } else { PosTag::NN }
}

/// Plural of a noun-suffixed word ("functions", "communities").
fn plural_of_suffix(lower: &str) -> bool {
    let singular = if let Some(s) = lower.strip_suffix("ies") {
        format!("{s}y")
    } else if let Some(s) = lower.strip_suffix('s') {
        s.to_string()
    } else {
        return false;
    };
    NOUN_SUFFIXES
        .iter()
        .any(|s| singular.ends_with(s) && singular.len() > s.len() + 2)
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[&str]) -> Vec<PosTag> {
        let mut tags: Vec<PosTag> = Vec::with_capacity(tokens.len());
        let mut sentence_start = true;
        for token in tokens {
            let prev = tags.iter().rev().copied().find(|t| *t != PosTag::Punct);
            let tag = self.tag_one(token, prev, sentence_start);
            // Quotes and brackets at the front don't end the sentence-start window.
            if tag != PosTag::Punct {
                sentence_start = false;
            }
            tags.push(tag);
        }
        tags
    }
}

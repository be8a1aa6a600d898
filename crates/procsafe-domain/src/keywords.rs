//! Keyword groups and the phrase matcher.
//!
//! Matching is deliberately simple: lowercase the history once, then look for each phrase
//! of a group. There is no regex engine and no notion of negation, so "no latex allergy"
//! still mentions latex. False positives and negatives at word edges are accepted.

use crate::policy::{EffectiveConfig, MatchMode};
use procsafe_types::ids;

/// A named set of trigger phrases. Phrases are lowercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordGroup {
    pub id: &'static str,
    pub phrases: &'static [&'static str],
}

pub const ANTICOAGULANTS: KeywordGroup = KeywordGroup {
    id: ids::GROUP_ANTICOAGULANTS,
    phrases: &[
        "warfarin",
        "apixaban",
        "rivaroxaban",
        "dabigatran",
        "edoxaban",
        "heparin",
        "enoxaparin",
        "clopidogrel",
        "ticagrelor",
        "prasugrel",
    ],
};

pub const LATEX: KeywordGroup = KeywordGroup {
    id: ids::GROUP_LATEX,
    phrases: &["latex"],
};

pub const CHLORHEXIDINE: KeywordGroup = KeywordGroup {
    id: ids::GROUP_CHLORHEXIDINE,
    phrases: &["chlorhexidine", "chloraprep"],
};

pub const ARM_AVOIDANCE: KeywordGroup = KeywordGroup {
    id: ids::GROUP_ARM_AVOIDANCE,
    phrases: &[
        "lymphoedema",
        "lymphedema",
        "mastectomy",
        "av fistula",
        "cellulitis",
    ],
};

pub const LP_NEURO: KeywordGroup = KeywordGroup {
    id: ids::GROUP_LP_NEURO,
    phrases: &[
        "papilloedema",
        "papilledema",
        "focal neurology",
        "seizure",
        "reduced consciousness",
        "brain tumour",
        "brain tumor",
        "mass lesion",
        "raised icp",
        "intracranial pressure",
    ],
};

pub const NG_TRAUMA: KeywordGroup = KeywordGroup {
    id: ids::GROUP_NG_TRAUMA,
    phrases: &[
        "basal skull fracture",
        "mid-face fracture",
        "midface fracture",
        "facial trauma",
    ],
};

pub const CATHETER_TRAUMA: KeywordGroup = KeywordGroup {
    id: ids::GROUP_CATHETER_TRAUMA,
    phrases: &[
        "blood at meatus",
        "pelvic fracture",
        "high-riding prostate",
        "urethral injury",
    ],
};

/// Built-in groups, in the order of [`ids::ALL_KEYWORD_GROUPS`].
pub const BUILTIN_GROUPS: &[KeywordGroup] = &[
    ANTICOAGULANTS,
    LATEX,
    CHLORHEXIDINE,
    ARM_AVOIDANCE,
    LP_NEURO,
    NG_TRAUMA,
    CATHETER_TRAUMA,
];

pub fn group_by_id(id: &str) -> Option<&'static KeywordGroup> {
    BUILTIN_GROUPS.iter().find(|g| g.id == id)
}

/// A history normalized once for repeated group lookups.
#[derive(Debug)]
pub struct History<'a> {
    text: String,
    cfg: &'a EffectiveConfig,
}

impl<'a> History<'a> {
    pub fn new(raw: &str, cfg: &'a EffectiveConfig) -> Self {
        Self {
            text: raw.to_lowercase(),
            cfg,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Does the history contain any phrase of `group`, built-in or configured?
    pub fn mentions(&self, group: &KeywordGroup) -> bool {
        let builtin = group.phrases.iter().copied();
        let extra = self
            .cfg
            .extra_keywords(group.id)
            .iter()
            .map(String::as_str);

        builtin
            .chain(extra)
            .any(|phrase| contains_phrase(&self.text, phrase, self.cfg.matching))
    }
}

/// Phrase lookup in already-lowercased text. Empty phrases never match.
pub fn contains_phrase(haystack: &str, phrase: &str, mode: MatchMode) -> bool {
    if phrase.is_empty() {
        return false;
    }
    match mode {
        MatchMode::Substring => haystack.contains(phrase),
        MatchMode::WordBoundary => contains_bounded(haystack, phrase),
    }
}

fn contains_bounded(haystack: &str, phrase: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(phrase) {
        let start = from + pos;
        let end = start + phrase.len();

        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        if !is_letter(before) && !is_letter(after) {
            return true;
        }

        // Step one char so overlapping occurrences are still considered.
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

fn is_letter(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_alphabetic())
}

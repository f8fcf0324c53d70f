// src/classify.rs
//
// Courses are bucketed by their code. The portal encodes the program in the
// code ("S-INA24aL-Scc", "BMFR-E-BMLT24b"); the loose lowercase tag catches
// codes from other semesters with the same program letters.

use crate::core::html::to_lower;

/// Closed, ordered set of course buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    Ina,
    Bm,
    Other,
}

impl Group {
    pub fn label(self) -> &'static str {
        match self {
            Group::Ina => "INA",
            Group::Bm => "BM",
            Group::Other => "Other",
        }
    }
}

/// One classification rule: exact program-code fragment (case-sensitive)
/// or loose lowercase tag, either one matches.
#[derive(Clone, Debug)]
pub struct GroupRule {
    pub group: Group,
    pub program_code: String,
    pub tag: String,
}

/// Ordered rule list, first match wins. `Other` is the implicit fallback.
#[derive(Clone, Debug)]
pub struct GroupRules(Vec<GroupRule>);

impl Default for GroupRules {
    fn default() -> Self {
        GroupRules(vec![
            GroupRule { group: Group::Ina, program_code: s!("S-INA24aL-Scc"), tag: s!("ina") },
            GroupRule { group: Group::Bm, program_code: s!("BMFR-E-BMLT24b"), tag: s!("bm") },
        ])
    }
}

impl GroupRules {
    pub fn new(rules: Vec<GroupRule>) -> Self {
        GroupRules(rules)
    }

    /// Total and deterministic. An empty code never matches anything.
    pub fn classify(&self, code: &str) -> Group {
        if code.is_empty() {
            return Group::Other;
        }
        let lc = to_lower(code);
        for rule in &self.0 {
            if code.contains(&rule.program_code) || lc.contains(&rule.tag) {
                return rule.group;
            }
        }
        Group::Other
    }
}

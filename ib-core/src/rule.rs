use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::Severity;

/// Identifies a rule within a repository (a rule catalog namespace) of the host.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleKey {
    repository: SmolStr,
    rule: SmolStr,
}

impl RuleKey {
    pub fn of(repository: impl Into<SmolStr>, rule: impl Into<SmolStr>) -> Self {
        Self { repository: repository.into(), rule: rule.into() }
    }

    #[inline]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    #[inline]
    pub fn rule(&self) -> &str {
        &self.rule
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.rule)
    }
}

impl fmt::Debug for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for RuleKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (repository, rule) = s.split_once(':').ok_or_else(|| {
            anyhow::anyhow!("invalid rule key: {s} (expected `<repository>:<rule>`)")
        })?;
        anyhow::ensure!(!repository.is_empty(), "invalid rule key: {s} (empty repository)");
        Ok(Self::of(repository, rule))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRule {
    pub rule_key: RuleKey,
    /// The severity configured for the rule in the quality profile.
    pub severity: Severity,
}

/// The rules activated in the host's quality profile.
pub trait ActiveRules {
    fn find(&self, rule_key: &RuleKey) -> Option<&ActiveRule>;
}

impl<A: ActiveRules + ?Sized> ActiveRules for &A {
    #[inline]
    fn find(&self, rule_key: &RuleKey) -> Option<&ActiveRule> {
        (**self).find(rule_key)
    }
}

#[derive(Debug, Default, Clone)]
pub struct DefaultActiveRules {
    rules: FxHashMap<RuleKey, ActiveRule>,
}

impl DefaultActiveRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self, rule_key: RuleKey, severity: Severity) -> &mut Self {
        self.rules.insert(rule_key.clone(), ActiveRule { rule_key, severity });
        self
    }

    pub fn deactivate(&mut self, rule_key: &RuleKey) -> Option<ActiveRule> {
        self.rules.remove(rule_key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl ActiveRules for DefaultActiveRules {
    #[inline]
    fn find(&self, rule_key: &RuleKey) -> Option<&ActiveRule> {
        self.rules.get(rule_key)
    }
}

impl FromIterator<(RuleKey, Severity)> for DefaultActiveRules {
    fn from_iter<T: IntoIterator<Item = (RuleKey, Severity)>>(iter: T) -> Self {
        let mut rules = Self::new();
        for (rule_key, severity) in iter {
            rules.activate(rule_key, severity);
        }
        rules
    }
}

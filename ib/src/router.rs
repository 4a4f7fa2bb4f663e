use std::fmt;

use ib_core::{ActiveRules, Diagnostic, RuleKey};
use smol_str::SmolStr;

use crate::Settings;

/// The engine id and repository of diagnostics produced by the embedded language server.
pub const BSL_LS_ENGINE_ID: &str = "bsl-language-server";
pub const BSL_LS_REPOSITORY_KEY: &str = "bsl-language-server";

/// The `source` tag and repository of diagnostics produced by the ACC secondary engine.
pub const ACC_SOURCE: &str = "acc";
pub const ACC_REPOSITORY_KEY: &str = "acc-rules";

/// Which rule catalog a diagnostic's code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// The embedded analysis engine.
    Primary,
    /// Diagnostics tagged with [`ACC_SOURCE`].
    Secondary,
}

impl Namespace {
    pub fn of(diagnostic: &Diagnostic) -> Self {
        match diagnostic.source.as_deref() {
            Some(ACC_SOURCE) => Namespace::Secondary,
            _ => Namespace::Primary,
        }
    }

    pub fn repository_key(self) -> &'static str {
        match self {
            Namespace::Primary => BSL_LS_REPOSITORY_KEY,
            Namespace::Secondary => ACC_REPOSITORY_KEY,
        }
    }

    pub fn engine_id(self) -> &'static str {
        match self {
            Namespace::Primary => BSL_LS_ENGINE_ID,
            Namespace::Secondary => ACC_SOURCE,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum Routing {
    /// File the diagnostic against an active rule.
    Bound(RuleKey),
    /// File the diagnostic as an external issue with explicit severity and type.
    External { engine_id: SmolStr, rule_id: SmolStr },
    /// Drop the diagnostic.
    Discarded,
}

impl fmt::Debug for Routing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Routing::Bound(rule_key) => write!(f, "bound {rule_key}"),
            Routing::External { engine_id, rule_id } => write!(f, "external {engine_id}:{rule_id}"),
            Routing::Discarded => write!(f, "discarded"),
        }
    }
}

/// Decide how `diagnostic` is reported.
///
/// A diagnostic with an active rule is always bound to it. Otherwise diagnostics of the embedded
/// engine are always reported as external issues, while those of the secondary engine are only
/// reported when [`Settings::create_external_issues`] is set.
pub fn route(
    diagnostic: &Diagnostic,
    active_rules: &(impl ActiveRules + ?Sized),
    settings: &Settings,
) -> Routing {
    let rule_id = diagnostic.rule_id();
    let namespace = Namespace::of(diagnostic);
    let rule_key = RuleKey::of(namespace.repository_key(), rule_id.clone());

    if active_rules.find(&rule_key).is_some() {
        return Routing::Bound(rule_key);
    }

    match namespace {
        Namespace::Secondary if !settings.create_external_issues => Routing::Discarded,
        Namespace::Primary | Namespace::Secondary => {
            Routing::External { engine_id: namespace.engine_id().into(), rule_id }
        }
    }
}

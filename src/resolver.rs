//! Command-line flag resolution with alias normalization and defaults.
//!
//! Flags are declared up front in a [`FlagSpec`]; resolution walks the raw
//! argument tokens once, left to right, consuming each recognized flag
//! together with the token that follows it. Tokens that match nothing in
//! the specification are treated as noise, not errors. A flag supplied more
//! than once keeps its last value.

use std::collections::HashMap;

use thiserror::Error;

use crate::diag::DiagnosticSink;

/// Errors detected while building the alias index from a [`FlagSpec`].
///
/// Overlapping tokens are rejected at construction time rather than
/// resolved by precedence.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("canonical flag '{0}' is declared twice")]
    DuplicateCanonical(String),

    #[error("token '{token}' is declared for both '{first}' and '{second}'")]
    AliasCollision {
        token: String,
        first: String,
        second: String,
    },
}

/// One flag definition: a canonical name, its aliases, and an optional
/// default value.
#[derive(Debug, Clone)]
struct FlagDef {
    canonical: String,
    aliases: Vec<String>,
    default: Option<String>,
}

/// Declares the set of recognized flags.
///
/// The specification is supplied once at startup and never mutated; the
/// resolver derives everything else from it.
#[derive(Debug, Clone, Default)]
pub struct FlagSpec {
    defs: Vec<FlagDef>,
}

impl FlagSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a flag with its aliases and an optional default value.
    pub fn flag(mut self, canonical: &str, aliases: &[&str], default: Option<&str>) -> Self {
        self.defs.push(FlagDef {
            canonical: canonical.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            default: default.map(|d| d.to_string()),
        });
        self
    }

    fn defaults(&self) -> HashMap<String, String> {
        self.defs
            .iter()
            .filter_map(|d| {
                d.default
                    .as_ref()
                    .map(|v| (d.canonical.clone(), v.clone()))
            })
            .collect()
    }
}

/// Immutable mapping from every recognized token (canonical name or alias)
/// to its canonical flag name.
///
/// Built in one pass over the specification; duplicate registrations are a
/// [`SpecError`], never a silent overwrite.
#[derive(Debug)]
struct AliasIndex {
    index: HashMap<String, String>,
}

impl AliasIndex {
    fn build(spec: &FlagSpec) -> Result<Self, SpecError> {
        let mut index: HashMap<String, String> = HashMap::new();

        for def in &spec.defs {
            if let Some(prev) = index.get(&def.canonical) {
                if prev == &def.canonical {
                    return Err(SpecError::DuplicateCanonical(def.canonical.clone()));
                }
                return Err(SpecError::AliasCollision {
                    token: def.canonical.clone(),
                    first: prev.clone(),
                    second: def.canonical.clone(),
                });
            }
            index.insert(def.canonical.clone(), def.canonical.clone());

            for alias in &def.aliases {
                if let Some(prev) = index.insert(alias.clone(), def.canonical.clone()) {
                    return Err(SpecError::AliasCollision {
                        token: alias.clone(),
                        first: prev,
                        second: def.canonical.clone(),
                    });
                }
            }
        }

        Ok(Self { index })
    }

    fn canonical(&self, token: &str) -> Option<&str> {
        self.index.get(token).map(|s| s.as_str())
    }
}

/// Resolved command-line arguments plus the declared defaults.
///
/// A canonical flag appears in the resolved map only when it was explicitly
/// supplied; [`FlagResolver::value`] falls back to the default otherwise.
#[derive(Debug)]
pub struct FlagResolver {
    resolved: HashMap<String, String>,
    defaults: HashMap<String, String>,
}

impl FlagResolver {
    /// Scans `args` against `spec` and records the value following each
    /// recognized flag token.
    ///
    /// A recognized flag in final position has no value to consume; that is
    /// reported through `diag` and resolution continues. Unrecognized
    /// tokens are skipped silently.
    pub fn resolve(
        args: &[String],
        spec: &FlagSpec,
        diag: &mut dyn DiagnosticSink,
    ) -> Result<Self, SpecError> {
        let index = AliasIndex::build(spec)?;
        let mut resolved = HashMap::new();

        let mut i = 0;
        while i < args.len() {
            let token = &args[i];
            match index.canonical(token) {
                Some(canonical) => {
                    if let Some(value) = args.get(i + 1) {
                        resolved.insert(canonical.to_string(), value.clone());
                        i += 2;
                    } else {
                        diag.warn(&format!("no value provided for flag {}", token));
                        i += 1;
                    }
                }
                None => {
                    log::debug!("Ignoring unrecognized token: {}", token);
                    i += 1;
                }
            }
        }

        Ok(Self {
            resolved,
            defaults: spec.defaults(),
        })
    }

    /// Returns the effective value for a canonical flag: the explicitly
    /// supplied value if present, else the declared default, else `None`.
    pub fn value(&self, canonical: &str) -> Option<&str> {
        self.resolved
            .get(canonical)
            .or_else(|| self.defaults.get(canonical))
            .map(|s| s.as_str())
    }

    /// Whether the flag's value came from the command line rather than a
    /// default.
    pub fn is_explicit(&self, canonical: &str) -> bool {
        self.resolved.contains_key(canonical)
    }
}

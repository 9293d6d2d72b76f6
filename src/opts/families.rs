//! Option family table: alias spellings and merge policies.
//!
//! Each family maps every accepted input spelling to one canonical legacy
//! spelling and one canonical modern spelling, plus the rule deciding how
//! repeated values combine. Adding a family is a data change to
//! [`FAMILIES`], not a logic change.

/// Platform path-list separator, used to join repeated path values.
pub const PATH_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// A recognised option identity unifying all of its flag spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    ClassPath,
    SourcePath,
    AddModules,
    LimitModules,
    PatchModule,
    AddExports,
    AddReads,
}

/// How repeated values for one entry combine into a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// Append every occurrence and join with [`PATH_SEPARATOR`]; no
    /// deduplication, so a repeated literal appears twice.
    PathJoin,
    /// Comma-split each occurrence and union the tokens, keeping the order
    /// in which each distinct token was first seen.
    CommaUnion,
    /// Comma-split and append only tokens not already present. Behaves as
    /// [`Combine::CommaUnion`]; kept distinct because module lists append
    /// while keyed target lists union, even though both reduce to the same
    /// first-seen set.
    CommaAppendUnique,
}

impl Combine {
    /// Separator used when rendering the accumulated values.
    pub fn separator(self) -> &'static str {
        match self {
            Self::PathJoin => PATH_SEPARATOR,
            Self::CommaUnion | Self::CommaAppendUnique => ",",
        }
    }

    /// Fold one occurrence's value into the accumulated values.
    pub(crate) fn merge_into(self, values: &mut Vec<String>, value: &str) {
        match self {
            Self::PathJoin => values.push(value.to_owned()),
            Self::CommaUnion | Self::CommaAppendUnique => {
                for token in value.split(',').filter(|token| !token.is_empty()) {
                    if !values.iter().any(|seen| seen == token) {
                        values.push(token.to_owned());
                    }
                }
            }
        }
    }
}

/// Merge policy for an option family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// One entry per family; the whole value feeds the combine rule.
    Flat(Combine),
    /// The value carries a `key=subvalue` sub-key (a module name or a
    /// `module/package` pair); one entry per distinct key, each combined
    /// independently.
    Keyed(Combine),
}

impl Policy {
    pub fn combine(self) -> Combine {
        match self {
            Self::Flat(combine) | Self::Keyed(combine) => combine,
        }
    }

    pub fn is_keyed(self) -> bool {
        matches!(self, Self::Keyed(_))
    }
}

/// One row of the family table.
#[derive(Debug)]
pub struct FamilySpec {
    pub family: Family,
    pub policy: Policy,
    /// Canonical short, old-style spelling.
    pub legacy: &'static str,
    /// Canonical long, new-style spelling.
    pub modern: &'static str,
    /// Accepted input spellings. A trailing `:` marks a prefix alias whose
    /// remainder is the inline `key=value` payload.
    pub aliases: &'static [&'static str],
}

/// Every recognised option family.
///
/// No alias overlaps another, so lookup order is immaterial and the first
/// hit wins.
pub const FAMILIES: &[FamilySpec] = &[
    FamilySpec {
        family: Family::ClassPath,
        policy: Policy::Flat(Combine::PathJoin),
        legacy: "-classpath",
        modern: "--class-path",
        aliases: &["-cp", "-classpath", "--class-path"],
    },
    FamilySpec {
        family: Family::SourcePath,
        policy: Policy::Flat(Combine::PathJoin),
        legacy: "-sourcepath",
        modern: "--source-path",
        aliases: &["-sourcepath", "--source-path"],
    },
    FamilySpec {
        family: Family::AddModules,
        policy: Policy::Flat(Combine::CommaAppendUnique),
        legacy: "-addmods",
        modern: "--add-modules",
        aliases: &["-addmods", "--add-modules"],
    },
    FamilySpec {
        family: Family::LimitModules,
        policy: Policy::Flat(Combine::CommaAppendUnique),
        legacy: "-limitmods",
        modern: "--limit-modules",
        aliases: &["-limitmods", "--limit-modules"],
    },
    FamilySpec {
        family: Family::PatchModule,
        policy: Policy::Keyed(Combine::PathJoin),
        legacy: "-Xpatch",
        modern: "--patch-module",
        aliases: &["-Xpatch:", "--patch-module"],
    },
    FamilySpec {
        family: Family::AddExports,
        policy: Policy::Keyed(Combine::CommaUnion),
        legacy: "-XaddExports",
        modern: "--add-exports",
        aliases: &["-XaddExports:", "--add-exports"],
    },
    FamilySpec {
        family: Family::AddReads,
        policy: Policy::Keyed(Combine::CommaUnion),
        legacy: "-XaddReads",
        modern: "--add-reads",
        aliases: &["-XaddReads:", "--add-reads"],
    },
];

/// How a token matched an alias.
#[derive(Debug, PartialEq, Eq)]
pub enum TokenMatch<'a> {
    /// The alias matched exactly; the value is the next input token.
    Separate,
    /// The value was embedded in the token (`--flag=value` or
    /// `-Xflag:key=value`).
    Inline(&'a str),
}

/// Match a raw token against the alias table, case-sensitively.
///
/// Long spellings additionally accept the `--flag=value` form; prefix
/// aliases carry their payload after the colon. Returns `None` for tokens
/// no family claims.
pub fn recognize(token: &str) -> Option<(&'static FamilySpec, TokenMatch<'_>)> {
    for spec in FAMILIES {
        for alias in spec.aliases {
            if alias.ends_with(':') {
                if let Some(value) = token.strip_prefix(alias) {
                    return Some((spec, TokenMatch::Inline(value)));
                }
            } else if token == *alias {
                return Some((spec, TokenMatch::Separate));
            } else if alias.starts_with("--") {
                let inline = token
                    .strip_prefix(alias)
                    .and_then(|rest| rest.strip_prefix('='));
                if let Some(value) = inline {
                    return Some((spec, TokenMatch::Inline(value)));
                }
            }
        }
    }
    None
}

//! Merge duplicated JDK tool options into a canonical argument list.
//!
//! `java` and `javac` accept several options only once, yet callers routinely
//! supply them repeatedly and under alternative spellings. [`OptionMerger`]
//! folds every occurrence of a family into a single entry per the family's
//! combine rule, keeping first-seen order for entries and for values, and
//! renders the result in either the legacy or the modern spelling.

use std::str::FromStr;

use clap::ValueEnum;
use log::debug;

use crate::JoptsError;
use crate::opts::families::{FamilySpec, TokenMatch, recognize};

pub mod families;


/// Rendering style for the merged list, fixed at construction.
///
/// Style affects rendering only: occurrences merge identically no matter
/// which alias spelling supplied them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Style {
    /// Short old-style spellings; keyed entries render as one
    /// `-Xflag:key=value` token.
    #[default]
    Legacy,
    /// Long new-style spellings; keyed entries render as a repeated
    /// `--flag` + `key=value` token pair per distinct key.
    Modern,
}

impl FromStr for Style {
    type Err = JoptsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" | "old" => Ok(Self::Legacy),
            "modern" | "new" => Ok(Self::Modern),
            other => Err(JoptsError::InvalidStyle(other.to_owned())),
        }
    }
}

/// One accumulated output unit.
#[derive(Debug)]
enum Entry {
    /// Token no family claimed; emitted unchanged in position.
    Verbatim(String),
    /// Merged values for a family, or for one sub-key of a keyed family.
    Merged {
        spec: &'static FamilySpec,
        key: Option<String>,
        values: Vec<String>,
    },
}

/// Accumulates option tokens and renders them as one canonical list.
///
/// Ingestion is total: unrecognised tokens, dangling flags, and keyed
/// values without a `key=value` shape are carried through verbatim rather
/// than rejected.
///
/// # Examples
///
/// ```
/// use jopts::{OptionMerger, Style};
///
/// let mut merger = OptionMerger::new(Style::Legacy);
/// merger.add_all(["-addmods", "m1,m2", "-addmods", "m2,m3"]);
/// assert_eq!(merger.to_list(), ["-addmods", "m1,m2,m3"]);
/// ```
#[derive(Debug)]
pub struct OptionMerger {
    style: Style,
    entries: Vec<Entry>,
}

impl OptionMerger {
    #[must_use]
    pub fn new(style: Style) -> Self {
        Self {
            style,
            entries: Vec::new(),
        }
    }

    /// Rendering style this merger was constructed with.
    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// Ingest a sequence of raw tokens as they would appear on a command
    /// line.
    ///
    /// A flag expecting a separate value consumes the next token of the
    /// same call, so flag/value pairs must not be split across calls.
    /// Later occurrences of an already-seen family (or sub-key) update its
    /// entry in place and never reorder it.
    pub fn add_all<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = tokens.into_iter();
        while let Some(token) = iter.next() {
            let token = token.as_ref();
            match recognize(token) {
                Some((spec, TokenMatch::Inline(value))) => {
                    if !self.try_merge(spec, value) {
                        debug!("keyed token '{token}' lacks 'key=value'; keeping verbatim");
                        self.entries.push(Entry::Verbatim(token.to_owned()));
                    }
                }
                Some((spec, TokenMatch::Separate)) => match iter.next() {
                    Some(value) => {
                        let value = value.as_ref();
                        if !self.try_merge(spec, value) {
                            debug!("value '{value}' for '{token}' lacks 'key='; keeping verbatim");
                            self.entries.push(Entry::Verbatim(token.to_owned()));
                            self.entries.push(Entry::Verbatim(value.to_owned()));
                        }
                    }
                    None => {
                        debug!("flag '{token}' has no value; keeping verbatim");
                        self.entries.push(Entry::Verbatim(token.to_owned()));
                    }
                },
                None => {
                    debug!("unrecognised token '{token}'; keeping verbatim");
                    self.entries.push(Entry::Verbatim(token.to_owned()));
                }
            }
        }
    }

    /// Render the accumulated entries in first-seen order.
    ///
    /// Read-only: repeated calls return the same list.
    ///
    /// # Examples
    ///
    /// ```
    /// use jopts::{OptionMerger, Style};
    ///
    /// let mut merger = OptionMerger::new(Style::Modern);
    /// merger.add_all(["-XaddExports:m1/p1=a", "--add-exports=m1/p1=b"]);
    /// assert_eq!(merger.to_list(), ["--add-exports", "m1/p1=a,b"]);
    /// ```
    #[must_use]
    pub fn to_list(&self) -> Vec<String> {
        let mut out = Vec::new();
        for entry in &self.entries {
            match entry {
                Entry::Verbatim(token) => out.push(token.clone()),
                Entry::Merged { spec, key, values } => {
                    let joined = values.join(spec.policy.combine().separator());
                    match (key.as_deref(), self.style) {
                        (None, Style::Legacy) => {
                            out.push(spec.legacy.to_owned());
                            out.push(joined);
                        }
                        (None, Style::Modern) => {
                            out.push(spec.modern.to_owned());
                            out.push(joined);
                        }
                        (Some(key), Style::Legacy) => {
                            out.push(format!("{}:{key}={joined}", spec.legacy));
                        }
                        (Some(key), Style::Modern) => {
                            out.push(spec.modern.to_owned());
                            out.push(format!("{key}={joined}"));
                        }
                    }
                }
            }
        }
        out
    }

    /// Merge a recognised value, splitting off the sub-key for keyed
    /// families. Returns `false` when a keyed value lacks the `key=value`
    /// shape and could not be merged.
    fn try_merge(&mut self, spec: &'static FamilySpec, value: &str) -> bool {
        if spec.policy.is_keyed() {
            match value.split_once('=') {
                Some((key, subvalue)) => {
                    self.merge_entry(spec, Some(key), subvalue);
                    true
                }
                None => false,
            }
        } else {
            self.merge_entry(spec, None, value);
            true
        }
    }

    fn merge_entry(&mut self, spec: &'static FamilySpec, key: Option<&str>, value: &str) {
        let combine = spec.policy.combine();
        match self.position(spec, key) {
            Some(index) => {
                if let Some(Entry::Merged { values, .. }) = self.entries.get_mut(index) {
                    combine.merge_into(values, value);
                }
            }
            None => {
                debug!(
                    "new entry for {:?}{}",
                    spec.family,
                    key.map_or_else(String::new, |key| format!(" key '{key}'"))
                );
                let mut values = Vec::new();
                combine.merge_into(&mut values, value);
                self.entries.push(Entry::Merged {
                    spec,
                    key: key.map(str::to_owned),
                    values,
                });
            }
        }
    }

    /// Index of the entry for `(family, key)`, if one was already created.
    fn position(&self, spec: &FamilySpec, key: Option<&str>) -> Option<usize> {
        self.entries.iter().position(|entry| match entry {
            Entry::Merged {
                spec: entry_spec,
                key: entry_key,
                ..
            } => entry_spec.family == spec.family && entry_key.as_deref() == key,
            Entry::Verbatim(_) => false,
        })
    }
}

//! Damage-relation sentences for a type: one sentence per non-empty bucket,
//! optionally qualified by the generation they applied to.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::fragment::SentenceFragment;
use crate::list::ListFormatter;
use crate::names::NameStyle;
use crate::reference::{NamedReference, TemporalContext};

pub const DEFAULT_TYPE_PATH: &str = "/pokemon/type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationBucket {
    DoubleDamageFrom,
    DoubleDamageTo,
    HalfDamageFrom,
    HalfDamageTo,
    NoDamageFrom,
    NoDamageTo,
}

impl RelationBucket {
    /// Canonical output order.
    pub const ALL: [RelationBucket; 6] = [
        RelationBucket::DoubleDamageFrom,
        RelationBucket::DoubleDamageTo,
        RelationBucket::HalfDamageFrom,
        RelationBucket::HalfDamageTo,
        RelationBucket::NoDamageFrom,
        RelationBucket::NoDamageTo,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    #[default]
    Present,
    Past,
}

pub type RelationBuckets = HashMap<RelationBucket, Vec<NamedReference>>;

/// Built-in verb phrase for a bucket in a tense.
pub fn default_verb(bucket: RelationBucket, tense: Tense) -> &'static str {
    use RelationBucket::*;
    match (tense, bucket) {
        (Tense::Present, DoubleDamageFrom) => "takes double damage from",
        (Tense::Present, DoubleDamageTo) => "deals double damage to",
        (Tense::Present, HalfDamageFrom) => "takes half damage from",
        (Tense::Present, HalfDamageTo) => "deals half damage to",
        (Tense::Present, NoDamageFrom) => "takes no damage from",
        (Tense::Present, NoDamageTo) => "deals no damage to",
        (Tense::Past, DoubleDamageFrom) => "took double damage from",
        (Tense::Past, DoubleDamageTo) => "dealt double damage to",
        (Tense::Past, HalfDamageFrom) => "took half damage from",
        (Tense::Past, HalfDamageTo) => "dealt half damage to",
        (Tense::Past, NoDamageFrom) => "took no damage from",
        (Tense::Past, NoDamageTo) => "dealt no damage to",
    }
}

/// Built-in phrase used when every bucket is empty.
pub fn default_no_relations(tense: Tense) -> &'static str {
    match tense {
        Tense::Present | Tense::Past => "has no specific damage relations listed",
    }
}

/// Per-tense overrides of the built-in phrases. Unset entries keep the
/// built-in wording.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerbOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_damage_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_damage_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_damage_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_damage_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_damage_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_damage_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_relations: Option<String>,
}

impl VerbOverrides {
    fn get(&self, bucket: RelationBucket) -> Option<&str> {
        let verb = match bucket {
            RelationBucket::DoubleDamageFrom => &self.double_damage_from,
            RelationBucket::DoubleDamageTo => &self.double_damage_to,
            RelationBucket::HalfDamageFrom => &self.half_damage_from,
            RelationBucket::HalfDamageTo => &self.half_damage_to,
            RelationBucket::NoDamageFrom => &self.no_damage_from,
            RelationBucket::NoDamageTo => &self.no_damage_to,
        };
        verb.as_deref()
    }
}

fn default_during() -> String {
    "During".to_string()
}

fn default_during_lower() -> String {
    "during".to_string()
}

/// Wording for relation sentences; any phrase can be overridden from the
/// config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationWording {
    #[serde(default)]
    pub present: VerbOverrides,
    #[serde(default)]
    pub past: VerbOverrides,
    /// Opens a temporally qualified sentence: `During <generation>, ...`
    #[serde(default = "default_during")]
    pub during: String,
    /// Closes the fallback sentence: `... listed during <generation>.`
    #[serde(default = "default_during_lower")]
    pub during_lower: String,
}

impl Default for RelationWording {
    fn default() -> Self {
        Self {
            present: VerbOverrides::default(),
            past: VerbOverrides::default(),
            during: default_during(),
            during_lower: default_during_lower(),
        }
    }
}

impl RelationWording {
    fn overrides(&self, tense: Tense) -> &VerbOverrides {
        match tense {
            Tense::Present => &self.present,
            Tense::Past => &self.past,
        }
    }

    pub fn verb(&self, bucket: RelationBucket, tense: Tense) -> &str {
        self.overrides(tense)
            .get(bucket)
            .unwrap_or_else(|| default_verb(bucket, tense))
    }

    pub fn no_relations(&self, tense: Tense) -> &str {
        self.overrides(tense)
            .no_relations
            .as_deref()
            .unwrap_or_else(|| default_no_relations(tense))
    }
}

/// Relation sentences with default wording, raw type names and
/// `/pokemon/type` links.
pub fn format_relations(
    subject: &str,
    buckets: &RelationBuckets,
    tense: Tense,
    temporal: Option<&TemporalContext>,
) -> Vec<SentenceFragment> {
    RelationFormatter::default().format(subject, buckets, tense, temporal)
}

#[derive(Debug, Clone)]
pub struct RelationFormatter {
    wording: RelationWording,
    list: ListFormatter,
}

impl Default for RelationFormatter {
    fn default() -> Self {
        Self::new(RelationWording::default(), DEFAULT_TYPE_PATH)
    }
}

impl RelationFormatter {
    pub fn new(wording: RelationWording, type_path: impl Into<String>) -> Self {
        Self {
            wording,
            list: ListFormatter::new(type_path).with_style(NameStyle::Raw),
        }
    }

    pub fn with_name_style(mut self, style: NameStyle) -> Self {
        self.list = self.list.with_style(style);
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.list = self.list.with_delimiter(delimiter);
        self
    }

    /// One fragment per non-empty bucket in canonical order, or a single
    /// fallback fragment when every bucket is empty. Never returns an empty
    /// vector.
    pub fn format(
        &self,
        subject: &str,
        buckets: &RelationBuckets,
        tense: Tense,
        temporal: Option<&TemporalContext>,
    ) -> Vec<SentenceFragment> {
        let mut sentences = Vec::new();

        for bucket in RelationBucket::ALL {
            let items = match buckets.get(&bucket) {
                Some(items) if !items.is_empty() => items,
                _ => continue,
            };

            let mut sentence = SentenceFragment::new();
            if let Some(ctx) = temporal {
                sentence.push_text(format!("{} ", self.wording.during));
                sentence.push_link(ctx.label.clone(), ctx.target.clone());
                sentence.push_text(", ");
            }
            sentence.push_text(format!(
                "{} {} ",
                subject,
                self.wording.verb(bucket, tense)
            ));
            sentence.append(self.list.format(items));
            sentences.push(sentence);
        }

        if sentences.is_empty() {
            sentences.push(self.fallback(subject, tense, temporal));
        }

        sentences
    }

    fn fallback(
        &self,
        subject: &str,
        tense: Tense,
        temporal: Option<&TemporalContext>,
    ) -> SentenceFragment {
        let context = temporal
            .map(|ctx| format!(" {} {}", self.wording.during_lower, ctx.label))
            .unwrap_or_default();
        SentenceFragment::from_text(format!(
            "{} {}{}.",
            subject,
            self.wording.no_relations(tense),
            context
        ))
    }
}

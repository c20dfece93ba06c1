//! Sentence builders used by the region, generation, pokedex and type pages.
//! Each wraps a formatted list in its page-specific prose and supplies the
//! fallback sentence for an empty list.

use crate::fragment::SentenceFragment;
use crate::list::ListFormatter;
use crate::names::NameStyle;
use crate::reference::{NamedReference, TemporalContext};
use crate::relations::{RelationFormatter, Tense};
use crate::source::{GenerationGameIndex, PastDamageRelations};

/// `<intro> A, B and C` with capitalized link text, or `empty` when there is
/// nothing to list.
pub fn named_resource_sentence(
    intro: &str,
    empty: &str,
    link_base: &str,
    items: &[NamedReference],
) -> SentenceFragment {
    if items.is_empty() {
        return SentenceFragment::from_text(empty);
    }
    let mut sentence = SentenceFragment::from_text(format!("{} ", intro));
    sentence.append(
        ListFormatter::new(link_base)
            .with_style(NameStyle::Capitalized)
            .format(items),
    );
    sentence
}

pub fn version_groups_sentence(
    subject: &str,
    items: &[NamedReference],
    link_base: &str,
) -> SentenceFragment {
    if items.is_empty() {
        return SentenceFragment::from_text(format!(
            "The {} is not associated with any specific version groups.",
            subject
        ));
    }
    let mut sentence = SentenceFragment::from_text(format!(
        "The {} is associated with the version groups: ",
        subject
    ));
    sentence.append(
        ListFormatter::new(link_base)
            .with_style(NameStyle::Raw)
            .format(items),
    );
    sentence
}

/// Generations in which the subject has a game index.
pub fn game_indices_sentence(
    subject: &str,
    indices: &[GenerationGameIndex],
    generation_base: &str,
) -> SentenceFragment {
    if indices.is_empty() {
        return SentenceFragment::from_text(format!("{} has no game indices.", subject));
    }
    let generations: Vec<NamedReference> =
        indices.iter().map(|i| i.generation.clone()).collect();
    let mut sentence = SentenceFragment::from_text(format!("{} has game indices of ", subject));
    sentence.append(
        ListFormatter::new(generation_base)
            .with_style(NameStyle::Raw)
            .format(&generations),
    );
    sentence
}

/// Past-tense relation sentences, each qualified by the generation it
/// applied to. Entries keep their input order.
pub fn past_relations_sentences(
    subject: &str,
    past: &[PastDamageRelations],
    generation_base: &str,
    formatter: &RelationFormatter,
) -> Vec<SentenceFragment> {
    if past.is_empty() {
        return vec![SentenceFragment::from_text(format!(
            "{} has no past damage relations.",
            subject
        ))];
    }

    past.iter()
        .flat_map(|entry| {
            let ctx = TemporalContext::generation(&entry.generation, generation_base);
            formatter.format(
                subject,
                &entry.damage_relations.to_buckets(),
                Tense::Past,
                Some(&ctx),
            )
        })
        .collect()
}

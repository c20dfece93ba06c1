//! Page composition: gathers the sentences for one resource and the static
//! metadata that goes with them. Layout stays with the renderer.

use serde::Serialize;

use crate::catalog::TypeCatalog;
use crate::config::Config;
use crate::fragment::SentenceFragment;
use crate::names::display_name_with;
use crate::reference::{format_entry_number, link_target, resource_id_from_url, NamedReference};
use crate::relations::Tense;
use crate::render::Render;
use crate::sentences::{
    game_indices_sentence, named_resource_sentence, past_relations_sentences,
    version_groups_sentence,
};
use crate::source::{GenerationResource, PokedexResource, RegionResource, TypeResource};

const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";
const MISSING_SPRITE: &str = "/images/pokedex/question_mark.png";

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub heading: String,
    pub sentences: Vec<SentenceFragment>,
}

impl Section {
    pub fn new(heading: &str, sentences: Vec<SentenceFragment>) -> Self {
        Self {
            heading: heading.to_string(),
            sentences,
        }
    }
}

/// A headline number with its label, e.g. `25` / `Ice Pokémon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub label: String,
    pub value: usize,
}

impl Count {
    fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn fragment(&self) -> SentenceFragment {
        SentenceFragment::from_text(format!("{} {}", self.value, self.label))
    }
}

/// `<prefix> <raw name link><suffix>`, the shape of every "main region" and
/// "first introduced" line.
fn linked_name_sentence(
    prefix: &str,
    reference: &NamedReference,
    link_base: &str,
    suffix: &str,
) -> SentenceFragment {
    let mut sentence = SentenceFragment::from_text(format!("{} ", prefix));
    sentence.push_link(
        reference.name.clone(),
        link_target(link_base, &reference.name),
    );
    sentence.push_text(suffix);
    sentence
}

#[derive(Debug, Clone, Serialize)]
pub struct TypePage {
    pub title: String,
    pub description: String,
    pub badge_class: String,
    pub icon: Option<String>,
    pub counts: Vec<Count>,
    pub sections: Vec<Section>,
}

impl TypePage {
    pub fn compose(resource: &TypeResource, catalog: &TypeCatalog, config: &Config) -> Self {
        let title = display_name_with(&resource.name, &config.names.delimiter);
        let relations = config.relation_formatter();
        let links = &config.links;

        let mut sections = vec![
            Section::new(
                "Damage Relations",
                relations.format(
                    &title,
                    &resource.damage_relations.to_buckets(),
                    Tense::Present,
                    None,
                ),
            ),
            Section::new(
                "Past Damage Relations",
                past_relations_sentences(
                    &title,
                    &resource.past_damage_relations,
                    &links.generation,
                    &relations,
                ),
            ),
            Section::new(
                "Game Indices",
                vec![game_indices_sentence(
                    &title,
                    &resource.game_indices,
                    &links.generation,
                )],
            ),
        ];

        if let Some(generation) = &resource.generation {
            sections.push(Section::new(
                "Introduced",
                vec![linked_name_sentence(
                    &format!("{} type pokémon were first introduced in", title),
                    generation,
                    &links.generation,
                    " of Pokémon.",
                )],
            ));
        }

        if let Some(class) = &resource.move_damage_class {
            sections.push(Section::new(
                "Damage Class",
                vec![SentenceFragment::from_text(format!(
                    "The class of damage inflicted by this type is {}",
                    class.name
                ))],
            ));
        }

        let counts = vec![
            Count::new(format!("{} Pokémon", title), resource.pokemon.len()),
            Count::new(format!("{}-type moves", title), resource.moves.len()),
        ];

        Self {
            badge_class: catalog.badge_class(&resource.name).to_string(),
            description: catalog.description(&resource.name).to_string(),
            icon: catalog.get(&resource.name).map(|m| m.icon.clone()),
            title,
            counts,
            sections,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryLine {
    pub number: String,
    pub name: String,
    pub target: String,
    pub sprite: String,
}

impl EntryLine {
    pub fn fragment(&self) -> SentenceFragment {
        let mut fragment = SentenceFragment::from_text(format!("#{} ", self.number));
        fragment.push_link(self.name.clone(), self.target.clone());
        fragment
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PokedexPage {
    pub title: String,
    pub is_main_series: bool,
    pub sections: Vec<Section>,
    pub entries: Vec<EntryLine>,
}

impl PokedexPage {
    pub fn compose(resource: &PokedexResource, config: &Config) -> Self {
        let delimiter = &config.names.delimiter;
        let title = display_name_with(&resource.name, delimiter);
        let links = &config.links;

        let region = match &resource.region {
            Some(region) if !region.name.is_empty() => {
                let mut sentence = SentenceFragment::from_text("This Pokédex is from the ");
                sentence.push_link(
                    display_name_with(&region.name, delimiter),
                    link_target(&links.region, &region.name),
                );
                sentence.push_text(" region.");
                sentence
            }
            _ => SentenceFragment::from_text(
                "This Pokédex is not associated with a specific main region.",
            ),
        };

        let mut sorted: Vec<_> = resource.pokemon_entries.iter().collect();
        sorted.sort_by_key(|entry| entry.entry_number);

        let entries: Vec<EntryLine> = sorted
            .into_iter()
            .map(|entry| {
                let species = &entry.pokemon_species;
                let sprite = match resource_id_from_url(&species.target) {
                    Some(id) => format!("{}/{}.png", SPRITE_BASE, id),
                    None => MISSING_SPRITE.to_string(),
                };
                EntryLine {
                    number: format_entry_number(entry.entry_number),
                    name: config.names.list_style.apply(&species.name, delimiter),
                    target: link_target(&links.pokemon, &species.name),
                    sprite,
                }
            })
            .collect();

        Self {
            sections: vec![
                Section::new("Region", vec![region]),
                Section::new(
                    "Game Versions",
                    vec![version_groups_sentence(
                        &format!("{} Pokédex", title),
                        &resource.version_groups,
                        &links.version_group,
                    )],
                ),
            ],
            title,
            is_main_series: resource.is_main_series,
            entries,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionPage {
    pub title: String,
    pub sections: Vec<Section>,
}

impl RegionPage {
    pub fn compose(resource: &RegionResource, config: &Config) -> Self {
        let title = display_name_with(&resource.name, &config.names.delimiter);
        let links = &config.links;

        let generation = match &resource.main_generation {
            Some(generation) if !generation.name.is_empty() => linked_name_sentence(
                &format!("The main generation for {} is", title),
                generation,
                &links.generation,
                ".",
            ),
            _ => SentenceFragment::from_text("There is no main generation data for this region"),
        };

        Self {
            sections: vec![
                Section::new("Main Generation", vec![generation]),
                Section::new(
                    "Game Versions",
                    vec![named_resource_sentence(
                        &format!("{} Region is associated with the version groups:", title),
                        &format!("{} is not associated with any specific version groups", title),
                        &links.version_group,
                        &resource.version_groups,
                    )],
                ),
                Section::new(
                    "Pokédexes",
                    vec![named_resource_sentence(
                        &format!("{} has {} Pokédexes:", title, resource.pokedexes.len()),
                        &format!("{} has no Pokédexes.", title),
                        &links.pokedex,
                        &resource.pokedexes,
                    )],
                ),
            ],
            title,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationPage {
    pub title: String,
    pub counts: Vec<Count>,
    pub sections: Vec<Section>,
}

impl GenerationPage {
    pub fn compose(resource: &GenerationResource, config: &Config) -> Self {
        let title = display_name_with(&resource.name, &config.names.delimiter);
        let links = &config.links;

        let region = match &resource.main_region {
            Some(region) if !region.name.is_empty() => linked_name_sentence(
                &format!("The main region for {} is", title),
                region,
                &links.region,
                ".",
            ),
            _ => SentenceFragment::from_text("There is no main region data for this generation"),
        };

        let counts = vec![
            Count::new("Pokémon", resource.pokemon_species.len()),
            Count::new("Pokémon Types", resource.types.len()),
            Count::new("Moves", resource.moves.len()),
            Count::new("Abilities", resource.abilities.len()),
        ];

        Self {
            sections: vec![
                Section::new("Region", vec![region]),
                Section::new(
                    "Game Versions",
                    vec![named_resource_sentence(
                        &format!("{} is associated with the version groups:", title),
                        &format!("{} is not associated with any specific version groups", title),
                        &links.version_group,
                        &resource.version_groups,
                    )],
                ),
                Section::new(
                    "Pokémon Types",
                    vec![named_resource_sentence(
                        &format!("{} introduced the following pokémon types:", title),
                        &format!("{} did not introduce any pokémon types.", title),
                        &links.r#type,
                        &resource.types,
                    )],
                ),
                Section::new(
                    "Moves Introduced",
                    vec![named_resource_sentence(
                        &format!("{} introduced the moves:", title),
                        &format!("{} did not introduce any moves.", title),
                        &links.r#move,
                        &resource.moves,
                    )],
                ),
            ],
            title,
            counts,
        }
    }
}

fn counts_section(heading: &str, counts: &[Count]) -> Section {
    Section::new(heading, counts.iter().map(Count::fragment).collect())
}

/// Title, then each section as a heading followed by its sentences. The
/// renderer decides how the whole document is laid out; `Json` emits a
/// single object.
pub fn render_page(renderer: &dyn Render, title: &str, sections: &[Section]) -> String {
    renderer.document(title, sections)
}

pub fn render_type_page(renderer: &dyn Render, page: &TypePage) -> String {
    let mut sections = vec![Section::new(
        "About",
        vec![SentenceFragment::from_text(page.description.clone())],
    )];
    sections.push(counts_section("At a Glance", &page.counts));
    sections.extend(page.sections.iter().cloned());
    render_page(renderer, &page.title, &sections)
}

pub fn render_pokedex_page(renderer: &dyn Render, page: &PokedexPage) -> String {
    let mut sections = page.sections.clone();
    sections.push(Section::new(
        "Pokémon",
        page.entries.iter().map(EntryLine::fragment).collect(),
    ));
    render_page(renderer, &format!("{} (Pokédex)", page.title), &sections)
}

pub fn render_region_page(renderer: &dyn Render, page: &RegionPage) -> String {
    render_page(renderer, &format!("{} (region)", page.title), &page.sections)
}

pub fn render_generation_page(renderer: &dyn Render, page: &GenerationPage) -> String {
    let mut sections = vec![counts_section(
        &format!("Introduced in {}", page.title),
        &page.counts,
    )];
    sections.extend(page.sections.iter().cloned());
    render_page(renderer, &format!("{} (generation)", page.title), &sections)
}

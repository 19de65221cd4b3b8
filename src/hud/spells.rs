//! Spells domain
//!
//! One derived subcategory per spellbook in use, each with its caster level
//! and concentration checks and ten derived level subcategories (0..=9).
//! Level subcategories are emitted even when empty so the layout of a book
//! stays stable while slots are spent.

use serde_json::Value;

use crate::actions::catalog::{ActionDescriptor, DerivedKey, Info, RollType, SubcategoryData, SubcategoryId};
use crate::core::config::SpellPreparation;
use crate::core::error::Result;
use crate::core::types::SPELL_LEVELS;
use crate::hud::builder::{emit, BuildPass};
use crate::hud::expander::{add_item_actions, no_charges, ChargeLabels};
use crate::registry::Domain;
use crate::snapshot::{Item, Spellbook, SubAction};
use crate::ui::sink::ActionListSink;

/// Which spells a preparation setting shows
pub fn preparation_filter(preparation: SpellPreparation) -> fn(&Item) -> bool {
    match preparation {
        SpellPreparation::AllSpells => |_: &Item| true,
        SpellPreparation::AllPrepared => |item: &Item| item.uses.has_max(),
        SpellPreparation::OnlyRemaining => |item: &Item| item.uses.has_remaining(),
    }
}

/// Prepared casters show "remaining/prepared" per spell
fn prepared_charges(item: &Item) -> Option<Info> {
    item.uses.counter().map(Info::text)
}

fn book_labels(book: &Spellbook) -> ChargeLabels {
    ChargeLabels {
        item: if book.spontaneous { no_charges::<Item> } else { prepared_charges },
        sub_action: no_charges::<SubAction>,
    }
}

/// Translated book label, else the book's own name
fn book_name(pass: &BuildPass<'_>, book: &Spellbook) -> String {
    book.label
        .as_deref()
        .and_then(|label| pass.ctx.strings.get(label))
        .filter(|name| !name.is_empty())
        .map_or_else(|| book.name.clone(), str::to_string)
}

fn book_check(pass: &BuildPass<'_>, id: &str, roll_type: RollType, name_key: &str, book: &Spellbook) -> Result<ActionDescriptor> {
    let encoded = pass
        .encoder
        .encode_with(roll_type, id, [("book", Value::from(book.key.as_str()))])?;
    Ok(ActionDescriptor::new(id, pass.localize(name_key), encoded))
}

pub(crate) fn build_spells(pass: &BuildPass<'_>, sink: &mut dyn ActionListSink) -> Result<()> {
    if pass.snapshot.is_multi() {
        return Ok(());
    }

    let root = pass.subcategory(Domain::Spells, "spells")?;
    let prepared = preparation_filter(pass.settings().spell_preparation);
    let spells: Vec<&Item> = pass
        .snapshot
        .items()
        .iter()
        .filter(|item| item.kind.spell().is_some() && item.can_use)
        .collect();

    for book in pass.snapshot.spellbooks().iter().filter(|book| book.in_use) {
        let book_spells: Vec<&Item> = spells
            .iter()
            .copied()
            .filter(|item| item.kind.spell().is_some_and(|spell| spell.spellbook == book.key))
            .filter(|&item| prepared(item))
            .collect();
        build_book(pass, sink, &root, book, &book_spells)?;
    }
    Ok(())
}

fn build_book(
    pass: &BuildPass<'_>,
    sink: &mut dyn ActionListSink,
    root: &SubcategoryId,
    book: &Spellbook,
    spells: &[&Item],
) -> Result<()> {
    let book_data = SubcategoryData::derived(root.derive(DerivedKey::book(book.key.as_str())), book_name(pass, book)).hosting_derived();
    let book_id = book_data.id.clone();
    tracing::trace!(book = %book.key, spells = spells.len(), "spellbook");
    sink.add_subcategory_to_action_list(root, book_data);

    let checks = vec![
        book_check(pass, "casterLevel", RollType::CasterLevel, "PF1.CasterLevelCheck", book)?,
        book_check(pass, "concentration", RollType::Concentration, "PF1.ConcentrationCheck", book)?,
    ];
    emit(sink, checks, &book_id);

    let labels = book_labels(book);
    for level in 0..SPELL_LEVELS {
        let level_data = SubcategoryData::derived(
            book_id.derive(DerivedKey::Level(level)),
            pass.localize(&format!("PF1.SpellLevel{}", level)),
        )
        .with_info1(book.slot_counter(level))
        .hosting_derived();
        let level_id = level_data.id.clone();
        sink.add_subcategory_to_action_list(&book_id, level_data);

        let level_spells: Vec<&Item> = spells
            .iter()
            .copied()
            .filter(|item| item.kind.spell().is_some_and(|spell| spell.level == level))
            .collect();
        add_item_actions(pass, sink, &level_spells, &level_id, labels)?;
    }
    Ok(())
}

//! Ability checks and saving throws
//!
//! Both are flat lists over a fixed rules table and stay available when
//! several actors are selected.

use crate::actions::catalog::{ActionDescriptor, RollType};
use crate::core::error::Result;
use crate::hud::builder::{emit, BuildPass};
use crate::registry::Domain;
use crate::rules::Labeled;
use crate::ui::sink::ActionListSink;

fn labeled_actions(pass: &BuildPass<'_>, roll_type: RollType, table: &[Labeled]) -> Result<Vec<ActionDescriptor>> {
    table
        .iter()
        .map(|entry| {
            let encoded = pass.encoder.encode(roll_type, &entry.key)?;
            Ok(ActionDescriptor::new(entry.key.as_str(), entry.label.as_str(), encoded))
        })
        .collect()
}

pub(crate) fn build_checks(pass: &BuildPass<'_>, sink: &mut dyn ActionListSink) -> Result<()> {
    let subcategory = pass.subcategory(Domain::Checks, "checks")?;
    let actions = labeled_actions(pass, RollType::AbilityCheck, &pass.ctx.rules.abilities)?;
    emit(sink, actions, &subcategory);
    Ok(())
}

pub(crate) fn build_saves(pass: &BuildPass<'_>, sink: &mut dyn ActionListSink) -> Result<()> {
    let subcategory = pass.subcategory(Domain::Saves, "saves")?;
    let actions = labeled_actions(pass, RollType::Save, &pass.ctx.rules.saving_throws)?;
    emit(sink, actions, &subcategory);
    Ok(())
}

//! Combat domain
//!
//! The "base" subcategory carries the fixed rolls plus the encounter
//! controls. Attack items follow in their subtype subcategories, single
//! selections only.

use crate::actions::catalog::{active_class, ActionDescriptor, Info, RollType};
use crate::core::error::Result;
use crate::hud::builder::{emit, BuildPass};
use crate::hud::expander::build_filtered_item_actions;
use crate::registry::Domain;
use crate::rules::Combatant;
use crate::snapshot::COMBAT_SUBCATEGORIES;
use crate::ui::sink::ActionListSink;

/// Fixed rolls of the base subcategory: (leaf id, roll type, name key)
const BASE_ROLLS: [(&str, RollType, &str); 5] = [
    ("showDefenses", RollType::Defenses, "actions.displayDefenses"),
    ("bab", RollType::Bab, "PF1.BABAbbr"),
    ("cmb", RollType::Cmb, "PF1.CMBAbbr"),
    ("melee", RollType::Melee, "PF1.Melee"),
    ("ranged", RollType::Ranged, "PF1.Ranged"),
];

fn simple_action(pass: &BuildPass<'_>, id: &str, roll_type: RollType, name_key: &str) -> Result<ActionDescriptor> {
    let encoded = pass.encoder.encode(roll_type, id)?;
    Ok(ActionDescriptor::new(id, pass.localize(name_key), encoded))
}

/// Encounter entry of the selected token, single selections in combat only
fn own_combatant<'a>(pass: &BuildPass<'a>) -> Option<&'a Combatant> {
    if pass.snapshot.is_multi() || !pass.snapshot.in_combat() {
        return None;
    }
    let encounter = pass.ctx.encounter.as_ref()?;
    let actor_id = pass.snapshot.actor_id()?;
    let token_id = pass.snapshot.token_id()?;
    encounter.combatant(actor_id, token_id)
}

fn base_actions(pass: &BuildPass<'_>) -> Result<Vec<ActionDescriptor>> {
    let mut actions = BASE_ROLLS
        .iter()
        .map(|&(id, roll_type, key)| simple_action(pass, id, roll_type, key))
        .collect::<Result<Vec<_>>>()?;

    let combatant = own_combatant(pass);
    let rolled = combatant.and_then(|c| c.initiative);
    actions.push(
        simple_action(pass, "initiative", RollType::Initiative, "PF1.Initiative")?
            .with_css_class(active_class(rolled.is_some()))
            .with_info1(rolled.map(|value| Info::text(value.to_string()))),
    );

    if pass.ctx.user.is_gm {
        let action = if pass.snapshot.in_combat() {
            simple_action(pass, "removeFromCombat", RollType::RemoveFromCombat, "COMBAT.CombatantRemove")?
        } else {
            simple_action(pass, "addToCombat", RollType::AddToCombat, "COMBAT.CombatantCreate")?
        };
        actions.push(action);
    }

    let current_turn = match (combatant, pass.ctx.encounter.as_ref()) {
        (Some(combatant), Some(encounter)) => encounter.is_current_turn(combatant),
        _ => false,
    };
    if current_turn {
        actions.push(simple_action(pass, "endTurn", RollType::EndTurn, "COMBAT.TurnEnd")?);
    }

    Ok(actions)
}

pub(crate) fn build_combat(pass: &BuildPass<'_>, sink: &mut dyn ActionListSink) -> Result<()> {
    let base = pass.subcategory(Domain::Combat, "base")?;
    emit(sink, base_actions(pass)?, &base);

    if pass.snapshot.is_multi() {
        return Ok(());
    }

    for name in COMBAT_SUBCATEGORIES {
        let subcategory = pass.subcategory(Domain::Combat, name)?;
        let include_unusable = name == "other" && pass.settings().show_passive_features;
        build_filtered_item_actions(
            pass,
            sink,
            |item| item.kind.combat_subcategory() == Some(name),
            &subcategory,
            include_unusable,
        )?;
    }
    Ok(())
}

use crate::actions::catalog::{active_class, ActionDescriptor, RollType};
use crate::core::error::Result;
use crate::hud::builder::{emit, BuildPass};
use crate::registry::Domain;
use crate::ui::sink::ActionListSink;

fn utility_action(pass: &BuildPass<'_>, id: &str, roll_type: RollType, name_key: &str) -> Result<ActionDescriptor> {
    let encoded = pass.encoder.encode(roll_type, id)?;
    Ok(ActionDescriptor::new(id, pass.localize(name_key), encoded))
}

/// Token visibility and configuration; visibility is GM-only
fn token_actions(pass: &BuildPass<'_>) -> Result<Vec<ActionDescriptor>> {
    let tokens = pass.snapshot.tokens();
    let mut actions = Vec::new();

    if pass.ctx.user.is_gm {
        let action = if tokens.iter().all(|token| token.hidden) {
            utility_action(pass, "makeVisible", RollType::MakeVisible, "categories.makeVisible")?
        } else {
            utility_action(pass, "makeInvisible", RollType::MakeInvisible, "categories.makeInvisible")?
        };
        actions.push(action);
    }

    if pass.ctx.user.can_configure_tokens && tokens.iter().all(|token| token.owned) {
        actions.push(utility_action(
            pass,
            "openTokenConfig",
            RollType::OpenTokenConfig,
            "actions.openTokenConfig",
        )?);
    }
    Ok(actions)
}

fn hud_actions(pass: &BuildPass<'_>) -> Result<Vec<ActionDescriptor>> {
    let settings = pass.settings();
    let skip_key = if settings.skip_action_dialogs {
        "actions.toggleSkipEnabled"
    } else {
        "actions.toggleSkipDisabled"
    };

    Ok(vec![
        utility_action(pass, "toggleTahGrid", RollType::ToggleTahGrid, "actions.toggleTahGrid")?
            .with_css_class(active_class(settings.show_grid)),
        utility_action(pass, "toggleSkip", RollType::ToggleSkip, skip_key)?
            .with_css_class(active_class(settings.skip_action_dialogs)),
        utility_action(pass, "openSettings", RollType::OpenSettings, "actions.openSettings")?,
    ])
}

pub(crate) fn build_utility(pass: &BuildPass<'_>, sink: &mut dyn ActionListSink) -> Result<()> {
    let rest = pass.subcategory(Domain::Utility, "rest")?;
    emit(sink, vec![utility_action(pass, "rest", RollType::Rest, "PF1.Rest")?], &rest);

    let token = pass.subcategory(Domain::Utility, "token")?;
    emit(sink, token_actions(pass)?, &token);

    let utility = pass.subcategory(Domain::Utility, "utility")?;
    emit(sink, hud_actions(pass)?, &utility);
    Ok(())
}

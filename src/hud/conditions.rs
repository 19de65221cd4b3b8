use serde_json::Value;

use crate::actions::catalog::{toggle_class, ActionDescriptor, RollType};
use crate::core::error::Result;
use crate::hud::builder::{emit, BuildPass};
use crate::registry::Domain;
use crate::ui::sink::ActionListSink;

/// One toggle per condition; a condition counts as on only when every
/// selected actor has it, and the payload asks for the opposite state
pub(crate) fn build_conditions(pass: &BuildPass<'_>, sink: &mut dyn ActionListSink) -> Result<()> {
    let subcategory = pass.subcategory(Domain::Conditions, "conditions")?;
    let actors = pass.snapshot.actors();

    let actions = pass
        .ctx
        .rules
        .conditions
        .iter()
        .map(|condition| {
            let enabled = actors.iter().all(|actor| actor.has_condition(&condition.key));
            let encoded = pass
                .encoder
                .encode_with(RollType::Condition, &condition.key, [("enable", Value::Bool(!enabled))])?;
            Ok(ActionDescriptor::new(condition.key.as_str(), condition.label.as_str(), encoded)
                .with_img(condition.texture.clone())
                .with_css_class(toggle_class(enabled)))
        })
        .collect::<Result<Vec<_>>>()?;

    emit(sink, actions, &subcategory);
    Ok(())
}

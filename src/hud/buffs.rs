use serde_json::Value;

use crate::actions::catalog::{toggle_class, ActionDescriptor, RollType};
use crate::core::error::Result;
use crate::hud::builder::{emit, BuildPass};
use crate::registry::Domain;
use crate::snapshot::{Item, BUFF_SUBCATEGORIES};
use crate::ui::sink::ActionListSink;

fn buff_toggle(pass: &BuildPass<'_>, item: &Item) -> Result<ActionDescriptor> {
    let encoded = pass
        .encoder
        .encode_with(RollType::Buff, item.id.as_str(), [("enable", Value::Bool(!item.active))])?;
    Ok(ActionDescriptor::new(item.id.as_str(), item.name.clone(), encoded)
        .with_img(item.img.clone())
        .with_css_class(toggle_class(item.active)))
}

/// Buff toggles by subtype; usability does not matter for a toggle
pub(crate) fn build_buffs(pass: &BuildPass<'_>, sink: &mut dyn ActionListSink) -> Result<()> {
    if pass.snapshot.is_multi() {
        return Ok(());
    }

    for name in BUFF_SUBCATEGORIES {
        let subcategory = pass.subcategory(Domain::Buffs, name)?;
        let actions = pass
            .snapshot
            .items()
            .iter()
            .filter(|item| item.kind.buff_subcategory() == Some(name))
            .map(|item| buff_toggle(pass, item))
            .collect::<Result<Vec<_>>>()?;
        emit(sink, actions, &subcategory);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::EncodedPayload;
    use crate::core::context::HudContext;
    use crate::registry::CategoryRegistry;
    use crate::snapshot::{ActorRef, ActorSnapshot, BuffKind, ItemKind, TokenRef};
    use crate::ui::tree::ActionTree;

    #[test]
    fn test_buff_toggles_request_the_opposite_state() {
        let ctx = HudContext::default();
        let registry = CategoryRegistry::standard();
        let snapshot = ActorSnapshot::single(ActorRef::new("a1"), TokenRef::new("t1")).with_items(vec![
            Item::new("rage", "Rage", ItemKind::Buff(BuffKind::Temp)).with_active(true),
            Item::new("bless", "Bless", ItemKind::Buff(BuffKind::Other("mythic".into()))).unusable(),
        ]);
        let pass = BuildPass::new(&ctx, &registry, &snapshot);
        let mut tree = ActionTree::new();
        build_buffs(&pass, &mut tree).unwrap();

        let temporary = tree.actions_in(&registry.subcategory(Domain::Buffs, "temporary").unwrap());
        assert_eq!(temporary.len(), 1);
        assert_eq!(temporary[0].css_class.as_deref(), Some("toggle active"));
        let payload = EncodedPayload::decode(&temporary[0].encoded_value).unwrap();
        assert_eq!(payload.extra_bool("enable"), Some(false));

        let other = tree.actions_in(&registry.subcategory(Domain::Buffs, "other").unwrap());
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].id, "bless");
        assert_eq!(other[0].css_class.as_deref(), Some("toggle"));
    }
}

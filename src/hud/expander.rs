//! Item to leaf expansion shared by the item-backed domains
//!
//! Each [`ActionLayout`] is a pure function from an item list to a list of
//! placements; [`add_item_actions`] then hands the placements to the sink.

use serde_json::Value;

use crate::actions::catalog::{ActionDescriptor, DerivedKey, Info, RollType, SubcategoryData, SubcategoryId};
use crate::actions::encoder::ActionEncoder;
use crate::core::config::ActionLayout;
use crate::core::error::Result;
use crate::hud::builder::{emit, BuildPass};
use crate::snapshot::{Item, SubAction};
use crate::ui::sink::ActionListSink;

/// Side-label rules for item leaves and sub-action leaves
#[derive(Clone, Copy)]
pub(crate) struct ChargeLabels {
    pub item: fn(&Item) -> Option<Info>,
    pub sub_action: fn(&SubAction) -> Option<Info>,
}

impl Default for ChargeLabels {
    fn default() -> Self {
        Self {
            item: item_charges,
            sub_action: sub_action_charges,
        }
    }
}

/// "current/max" for items that declare a charge limit
pub(crate) fn item_charges(item: &Item) -> Option<Info> {
    if !item.uses.has_max() {
        return None;
    }
    item.uses.counter().map(Info::charged)
}

/// Charge cost and self-charged pool, comma separated
pub(crate) fn sub_action_charges(action: &SubAction) -> Option<Info> {
    let mut values = Vec::new();
    if action.charge_cost != 0 {
        values.push(action.charge_cost.to_string());
    }
    if let Some(pool) = action.self_uses.filter(|pool| pool.max > 0) {
        values.push(format!("{}/{}", pool.value, pool.max));
    }
    (!values.is_empty()).then(|| Info::charged(values.join(", ")))
}

pub(crate) fn no_charges<T>(_: &T) -> Option<Info> {
    None
}

/// Where one produced leaf or group goes
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Placement {
    /// Leaf in the parent subcategory
    Leaf(ActionDescriptor),
    /// Derived subcategory under the parent with its leaves
    Group(SubcategoryData, Vec<ActionDescriptor>),
}

struct LayoutInput<'i> {
    items: &'i [&'i Item],
    parent: &'i SubcategoryId,
    labels: ChargeLabels,
    encoder: &'i ActionEncoder<'i>,
}

fn run_strategy(layout: ActionLayout, input: &LayoutInput<'_>) -> Result<Vec<Placement>> {
    match layout {
        ActionLayout::OnlyItems => only_items(input),
        ActionLayout::OnlyActions => only_actions(input),
        ActionLayout::Categorized => categorized(input),
    }
}

fn item_leaf(input: &LayoutInput<'_>, item: &Item) -> Result<ActionDescriptor> {
    let encoded = input.encoder.encode(RollType::Item, item.id.as_str())?;
    Ok(ActionDescriptor::new(item.id.as_str(), item.name.clone(), encoded)
        .with_img(item.img.clone())
        .with_info3((input.labels.item)(item)))
}

fn sub_action_leaf(input: &LayoutInput<'_>, item: &Item, action: &SubAction, name: String) -> Result<ActionDescriptor> {
    let encoded = input.encoder.encode_with(
        RollType::Item,
        item.id.as_str(),
        [("subActionId", Value::from(action.id.as_str()))],
    )?;
    Ok(ActionDescriptor::new(action.id.as_str(), name, encoded)
        .with_img(item.img.clone())
        .with_info3((input.labels.sub_action)(action)))
}

fn only_items(input: &LayoutInput<'_>) -> Result<Vec<Placement>> {
    input
        .items
        .iter()
        .map(|item| item_leaf(input, item).map(Placement::Leaf))
        .collect()
}

fn only_actions(input: &LayoutInput<'_>) -> Result<Vec<Placement>> {
    let mut placements = Vec::new();
    for item in input.items {
        if item.actions.len() > 1 {
            for action in &item.actions {
                let name = format!("{} - {}", item.name, action.name);
                placements.push(Placement::Leaf(sub_action_leaf(input, item, action, name)?));
            }
        } else {
            placements.push(Placement::Leaf(item_leaf(input, item)?));
        }
    }
    Ok(placements)
}

fn categorized(input: &LayoutInput<'_>) -> Result<Vec<Placement>> {
    let mut placements = Vec::new();
    for item in input.items {
        if item.actions.len() > 1 {
            let leaves = item
                .actions
                .iter()
                .map(|action| sub_action_leaf(input, item, action, action.name.clone()))
                .collect::<Result<Vec<_>>>()?;
            let group = SubcategoryData::derived(input.parent.derive(DerivedKey::Item(item.id.clone())), item.name.clone())
                .with_info1((input.labels.item)(item));
            placements.push(Placement::Group(group, leaves));
        } else {
            // zero actions (use script only) or a single action
            placements.push(Placement::Leaf(item_leaf(input, item)?));
        }
    }
    Ok(placements)
}

/// Lay out `items` under `parent` with the given strategy
pub(crate) fn layout_items(
    layout: ActionLayout,
    encoder: &ActionEncoder<'_>,
    items: &[&Item],
    parent: &SubcategoryId,
    labels: ChargeLabels,
) -> Result<Vec<Placement>> {
    let input = LayoutInput {
        items,
        parent,
        labels,
        encoder,
    };
    run_strategy(layout, &input)
}

/// Expand `items` into the sink under `parent`
pub(crate) fn add_item_actions(
    pass: &BuildPass<'_>,
    sink: &mut dyn ActionListSink,
    items: &[&Item],
    parent: &SubcategoryId,
    labels: ChargeLabels,
) -> Result<()> {
    if pass.snapshot.is_multi() {
        return Ok(());
    }

    let placements = layout_items(pass.settings().action_layout, &pass.encoder, items, parent, labels)?;

    let mut pending = Vec::new();
    for placement in placements {
        match placement {
            Placement::Leaf(action) => pending.push(action),
            Placement::Group(group, leaves) => {
                emit(sink, std::mem::take(&mut pending), parent);
                let group_id = group.id.clone();
                tracing::trace!(subcategory = %group_id, leaves = leaves.len(), "item group");
                sink.add_subcategory_to_action_list(parent, group);
                emit(sink, leaves, &group_id);
            }
        }
    }
    emit(sink, pending, parent);
    Ok(())
}

/// Usable items matching `filter` go to `parent`; with `include_unusable`
/// the rest are surfaced in a nested passive subcategory
pub(crate) fn build_filtered_item_actions<F>(
    pass: &BuildPass<'_>,
    sink: &mut dyn ActionListSink,
    filter: F,
    parent: &SubcategoryId,
    include_unusable: bool,
) -> Result<()>
where
    F: Fn(&Item) -> bool,
{
    if pass.snapshot.is_multi() {
        return Ok(());
    }

    let (usable, unusable): (Vec<&Item>, Vec<&Item>) = pass
        .snapshot
        .items()
        .iter()
        .filter(|item| filter(*item))
        .partition(|item| item.can_use);

    add_item_actions(pass, sink, &usable, parent, ChargeLabels::default())?;

    if include_unusable && !unusable.is_empty() {
        let passive = SubcategoryData::derived(parent.derive(DerivedKey::Passive), pass.localize("PF1.ActivationTypePassive"));
        let passive_id = passive.id.clone();
        sink.add_subcategory_to_action_list(parent, passive);
        add_item_actions(pass, sink, &unusable, &passive_id, ChargeLabels::default())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{ActorRef, ActorSnapshot, ItemKind, TokenRef, Uses};

    fn snapshot() -> ActorSnapshot {
        ActorSnapshot::single(ActorRef::new("a1"), TokenRef::new("t1"))
    }

    fn two_action_item() -> Item {
        Item::new("wand", "Wand of Fire", ItemKind::Equipment)
            .with_uses(Uses::limited(4, 10))
            .with_actions(vec![SubAction::new("bolt", "Bolt"), SubAction::new("ray", "Ray")])
    }

    fn layout(layout: ActionLayout, items: &[&Item]) -> Vec<Placement> {
        let snapshot = snapshot();
        let encoder = ActionEncoder::new(&snapshot);
        let parent = SubcategoryId::registered("inventory_equipment");
        layout_items(layout, &encoder, items, &parent, ChargeLabels::default()).unwrap()
    }

    #[test]
    fn test_categorized_groups_multi_action_items() {
        let item = two_action_item();
        let placements = layout(ActionLayout::Categorized, &[&item]);
        assert_eq!(placements.len(), 1);
        match &placements[0] {
            Placement::Group(group, leaves) => {
                assert_eq!(group.id, SubcategoryId::registered("inventory_equipment").derive(DerivedKey::item("wand")));
                assert_eq!(group.name, "Wand of Fire");
                assert_eq!(group.info1, Some(Info::charged("4/10")));
                let ids: Vec<_> = leaves.iter().map(|l| l.id.as_str()).collect();
                assert_eq!(ids, vec!["bolt", "ray"]);
            }
            other => panic!("expected a group, got {:?}", other),
        }
    }

    #[test]
    fn test_only_items_ignores_sub_actions() {
        let item = two_action_item();
        let placements = layout(ActionLayout::OnlyItems, &[&item]);
        assert_eq!(placements.len(), 1);
        assert!(matches!(&placements[0], Placement::Leaf(leaf) if leaf.id == "wand"));
    }

    #[test]
    fn test_only_actions_prefixes_item_name() {
        let item = two_action_item();
        let placements = layout(ActionLayout::OnlyActions, &[&item]);
        let names: Vec<_> = placements
            .iter()
            .map(|p| match p {
                Placement::Leaf(leaf) => leaf.name.clone(),
                Placement::Group(..) => panic!("only-actions never groups"),
            })
            .collect();
        assert_eq!(names, vec!["Wand of Fire - Bolt", "Wand of Fire - Ray"]);
    }

    #[test]
    fn test_single_action_item_stays_a_leaf_in_every_layout() {
        let item = Item::new("potion", "Potion", ItemKind::Consumable).with_actions(vec![SubAction::new("drink", "Drink")]);
        for mode in [ActionLayout::OnlyItems, ActionLayout::OnlyActions, ActionLayout::Categorized] {
            let placements = layout(mode, &[&item]);
            assert!(
                matches!(&placements[..], [Placement::Leaf(leaf)] if leaf.id == "potion"),
                "{:?} produced {:?}",
                mode,
                placements
            );
        }
    }

    #[test]
    fn test_item_charge_label() {
        let charged = Item::new("i", "I", ItemKind::Equipment).with_uses(Uses::limited(1, 3));
        assert_eq!(item_charges(&charged), Some(Info::charged("1/3")));
        let plain = Item::new("i", "I", ItemKind::Equipment);
        assert_eq!(item_charges(&plain), None);
        let at_will = Item::new("i", "I", ItemKind::Equipment).with_uses(Uses::Unlimited);
        assert_eq!(item_charges(&at_will), None);
    }

    #[test]
    fn test_sub_action_charge_label() {
        assert_eq!(sub_action_charges(&SubAction::new("a", "A")), None);
        assert_eq!(
            sub_action_charges(&SubAction::new("a", "A").with_charge_cost(2)),
            Some(Info::charged("2"))
        );
        assert_eq!(
            sub_action_charges(&SubAction::new("a", "A").with_charge_cost(1).with_self_uses(3, 5)),
            Some(Info::charged("1, 3/5"))
        );
        assert_eq!(
            sub_action_charges(&SubAction::new("a", "A").with_self_uses(0, 0)),
            None
        );
    }

    #[test]
    fn test_sub_action_payload_names_the_action() {
        let item = two_action_item();
        let placements = layout(ActionLayout::OnlyActions, &[&item]);
        let Placement::Leaf(leaf) = &placements[1] else {
            panic!("expected leaf");
        };
        let payload = crate::actions::EncodedPayload::decode(&leaf.encoded_value).unwrap();
        assert_eq!(payload.roll_type, RollType::Item);
        assert_eq!(payload.action_id, "wand");
        assert_eq!(payload.extra_str("subActionId"), Some("ray"));
    }
}

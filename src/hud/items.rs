//! Inventory, features and the "other" catch-all
//!
//! All three are subtype-bucketed item lists run through the shared
//! expander. Each bucket list ends with "other", which takes every subtype
//! the bucket list does not name.

use crate::core::error::Result;
use crate::hud::builder::BuildPass;
use crate::hud::expander::build_filtered_item_actions;
use crate::registry::Domain;
use crate::snapshot::{Item, ItemKind, FEATURE_SUBCATEGORIES, INVENTORY_SUBCATEGORIES};
use crate::ui::sink::ActionListSink;

fn build_buckets(
    pass: &BuildPass<'_>,
    sink: &mut dyn ActionListSink,
    domain: Domain,
    buckets: &[&str],
    bucket_of: fn(&ItemKind) -> Option<&'static str>,
    show_passive: bool,
) -> Result<()> {
    if pass.snapshot.is_multi() {
        return Ok(());
    }

    for &name in buckets {
        let subcategory = pass.subcategory(domain, name)?;
        build_filtered_item_actions(
            pass,
            sink,
            |item: &Item| bucket_of(&item.kind) == Some(name),
            &subcategory,
            show_passive,
        )?;
    }
    Ok(())
}

pub(crate) fn build_inventory(pass: &BuildPass<'_>, sink: &mut dyn ActionListSink) -> Result<()> {
    build_buckets(
        pass,
        sink,
        Domain::Inventory,
        &INVENTORY_SUBCATEGORIES,
        ItemKind::inventory_subcategory,
        // every bucket, "other" included, follows the inventory setting
        pass.settings().show_passive_inventory,
    )
}

pub(crate) fn build_features(pass: &BuildPass<'_>, sink: &mut dyn ActionListSink) -> Result<()> {
    build_buckets(
        pass,
        sink,
        Domain::Features,
        &FEATURE_SUBCATEGORIES,
        ItemKind::feature_subcategory,
        pass.settings().show_passive_features,
    )
}

/// Items whose type no other domain handles
pub(crate) fn build_other_items(pass: &BuildPass<'_>, sink: &mut dyn ActionListSink) -> Result<()> {
    if pass.snapshot.is_multi() {
        return Ok(());
    }

    let subcategory = pass.subcategory(Domain::Other, "other")?;
    build_filtered_item_actions(
        pass,
        sink,
        |item: &Item| matches!(item.kind, ItemKind::Unrecognized(_)),
        &subcategory,
        pass.settings().show_passive_features,
    )
}

//! Build orchestration
//!
//! One build = one snapshot, one pass over the domain builders in a fixed
//! order. Nothing survives between builds; the caller clears the sink
//! before re-running.

use crate::actions::catalog::{ActionDescriptor, SubcategoryId};
use crate::actions::encoder::ActionEncoder;
use crate::core::config::HudSettings;
use crate::core::context::HudContext;
use crate::core::error::Result;
use crate::hud::{buffs, checks, combat, conditions, items, skills, spells, utility};
use crate::registry::{CategoryRegistry, Domain};
use crate::snapshot::{ActorSnapshot, SnapshotAdapter};
use crate::ui::sink::ActionListSink;

/// Everything a domain builder can read during one build
pub(crate) struct BuildPass<'a> {
    pub ctx: &'a HudContext,
    pub registry: &'a CategoryRegistry,
    pub snapshot: &'a ActorSnapshot,
    pub encoder: ActionEncoder<'a>,
}

impl<'a> BuildPass<'a> {
    pub fn new(ctx: &'a HudContext, registry: &'a CategoryRegistry, snapshot: &'a ActorSnapshot) -> Self {
        Self {
            ctx,
            registry,
            snapshot,
            encoder: ActionEncoder::new(snapshot),
        }
    }

    pub fn settings(&self) -> &HudSettings {
        &self.ctx.settings
    }

    pub fn subcategory(&self, domain: Domain, name: &str) -> Result<SubcategoryId> {
        self.registry.subcategory(domain, name)
    }

    pub fn localize(&self, key: &str) -> String {
        self.ctx.localize(key)
    }
}

/// Hand leaves to the sink, skipping empty batches
pub(crate) fn emit(sink: &mut dyn ActionListSink, actions: Vec<ActionDescriptor>, subcategory: &SubcategoryId) {
    if actions.is_empty() {
        return;
    }
    sink.add_actions_to_action_list(actions, subcategory);
}

type DomainBuilder = fn(&BuildPass<'_>, &mut dyn ActionListSink) -> Result<()>;

/// Domain builders in on-screen order
const DOMAIN_BUILDERS: [(Domain, DomainBuilder); 11] = [
    (Domain::Checks, checks::build_checks),
    (Domain::Saves, checks::build_saves),
    (Domain::Skills, skills::build_skills),
    (Domain::Conditions, conditions::build_conditions),
    (Domain::Combat, combat::build_combat),
    (Domain::Buffs, buffs::build_buffs),
    (Domain::Inventory, items::build_inventory),
    (Domain::Spells, spells::build_spells),
    (Domain::Features, items::build_features),
    (Domain::Other, items::build_other_items),
    (Domain::Utility, utility::build_utility),
];

/// Builds the HUD action tree for a selection
#[derive(Debug, Clone, Copy)]
pub struct ActionTreeBuilder<'a> {
    ctx: &'a HudContext,
    registry: &'a CategoryRegistry,
}

impl<'a> ActionTreeBuilder<'a> {
    pub fn new(ctx: &'a HudContext, registry: &'a CategoryRegistry) -> Self {
        Self { ctx, registry }
    }

    /// Build every domain for `snapshot` into `sink`
    ///
    /// An invalid snapshot emits nothing and is not an error. A registry
    /// without a subcategory a builder needs fails the build.
    pub fn build(&self, snapshot: &ActorSnapshot, sink: &mut dyn ActionListSink) -> Result<()> {
        if !snapshot.is_valid() {
            tracing::debug!("snapshot is not valid, skipping HUD build");
            return Ok(());
        }

        tracing::debug!(
            actors = snapshot.actors().len(),
            multi = snapshot.is_multi(),
            "building HUD action tree"
        );

        let pass = BuildPass::new(self.ctx, self.registry, snapshot);
        for (domain, build) in DOMAIN_BUILDERS {
            tracing::trace!(?domain, "building domain");
            build(&pass, sink)?;
        }
        Ok(())
    }

    /// Take a fresh snapshot of `characters` through the host adapter, then build
    pub fn build_for<A: SnapshotAdapter>(
        &self,
        adapter: &A,
        characters: &[A::Character],
        sink: &mut dyn ActionListSink,
    ) -> Result<()> {
        let snapshot = adapter.snapshot(characters);
        self.build(&snapshot, sink)
    }
}

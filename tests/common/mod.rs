//! Shared fixtures for the integration tests

#![allow(dead_code)]

use action_hud::core::config::HudSettings;
use action_hud::core::context::{HudContext, UserContext};
use action_hud::rules::{Combatant, Encounter};
use action_hud::snapshot::{
    ActorRef, ActorSnapshot, AttackKind, BuffKind, FeatKind, Item, ItemKind, LootKind, SkillEntry, SpellInfo,
    SpellSlots, Spellbook, SubAction, TokenRef, Uses,
};
use action_hud::{ActionTree, ActionTreeBuilder, CategoryRegistry};
use action_hud::core::types::{ActorId, TokenId};

pub fn spell(id: &str, name: &str, book: &str, level: u8, uses: Uses) -> Item {
    Item::new(
        id,
        name,
        ItemKind::Spell(SpellInfo {
            spellbook: book.to_string(),
            level,
        }),
    )
    .with_uses(uses)
}

/// A fighter/wizard with something in every item domain
pub fn adventurer() -> ActorSnapshot {
    let items = vec![
        Item::new("longsword", "Longsword", ItemKind::Attack(AttackKind::Weapon)),
        Item::new("bite", "Bite", ItemKind::Attack(AttackKind::Natural)),
        Item::new("smite", "Smite", ItemKind::Attack(AttackKind::Other("homebrew".into()))),
        Item::new("aura", "Aura", ItemKind::Attack(AttackKind::Other("homebrew".into()))).unusable(),
        Item::new("rage", "Rage", ItemKind::Buff(BuffKind::Temp)).with_active(true),
        Item::new("haste", "Haste", ItemKind::Buff(BuffKind::Misc)),
        Item::new("sword-item", "Longsword", ItemKind::Weapon),
        Item::new("wand", "Wand of Fire", ItemKind::Equipment)
            .with_uses(Uses::limited(4, 10))
            .with_actions(vec![
                SubAction::new("bolt", "Bolt").with_charge_cost(1),
                SubAction::new("ray", "Ray").with_charge_cost(2),
            ]),
        Item::new("potion", "Potion of Healing", ItemKind::Consumable),
        Item::new("ruby", "Ruby", ItemKind::Loot(LootKind::TradeGoods)),
        Item::new("power-attack", "Power Attack", ItemKind::Feat(FeatKind::Feat)),
        Item::new("darkvision", "Darkvision", ItemKind::Feat(FeatKind::Racial)).unusable(),
        Item::new("implant", "Implant", ItemKind::Unrecognized("cyberware".into())),
        spell("detect", "Detect Magic", "primary", 0, Uses::Unlimited),
        spell("missile", "Magic Missile", "primary", 1, Uses::limited(2, 2)),
        spell("sleep", "Sleep", "primary", 1, Uses::limited(0, 1)),
        spell("fireball", "Fireball", "primary", 3, Uses::limited(1, 1)),
    ];

    let skills = vec![
        SkillEntry::new("acr"),
        SkillEntry::new("clm"),
        SkillEntry::new("crf").with_sub_skill("bows", "Craft (Bows)"),
        SkillEntry::new("prf"),
        SkillEntry::new("kar"),
        SkillEntry::new("kpl"),
        SkillEntry::new("hom").named("Homebrew Lore"),
    ];

    ActorSnapshot::single(ActorRef::new("a1").with_condition("prone"), TokenRef::new("t1"))
        .with_items(items)
        .with_skills(skills)
        .with_spellbooks(vec![Spellbook::new("primary", "Wizard")])
}

pub fn party() -> ActorSnapshot {
    ActorSnapshot::new(
        vec![
            ActorRef::new("a1").with_condition("prone"),
            ActorRef::new("a2").with_condition("prone").with_condition("shaken"),
        ],
        vec![TokenRef::new("t1"), TokenRef::new("t2")],
    )
    .with_items(vec![Item::new("longsword", "Longsword", ItemKind::Weapon)])
}

pub fn sorcerer() -> ActorSnapshot {
    let slots = vec![
        SpellSlots { value: 0, max: 0 },
        SpellSlots { value: 3, max: 5 },
        SpellSlots { value: 0, max: 3 },
    ];
    ActorSnapshot::single(ActorRef::new("s1"), TokenRef::new("st1"))
        .with_items(vec![
            spell("missile", "Magic Missile", "primary", 1, Uses::Unlimited),
            spell("mirror", "Mirror Image", "primary", 2, Uses::Unlimited),
        ])
        .with_spellbooks(vec![Spellbook::new("primary", "Sorcerer").spontaneous(slots)])
}

pub fn allow_background_skills(mut ctx: HudContext) -> HudContext {
    ctx.rules.allow_background_skills = true;
    ctx
}

pub fn gm() -> UserContext {
    UserContext {
        is_gm: true,
        can_configure_tokens: true,
    }
}

pub fn encounter_on_turn(actor: &str, token: &str) -> Encounter {
    Encounter {
        combatants: vec![Combatant {
            id: "c1".to_string(),
            actor_id: ActorId::new(actor),
            token_id: TokenId::new(token),
            initiative: Some(12.5),
        }],
        current_combatant_id: Some("c1".to_string()),
    }
}

pub fn settings(f: impl FnOnce(&mut HudSettings)) -> HudContext {
    let mut settings = HudSettings::default();
    f(&mut settings);
    HudContext::new(settings)
}

pub fn build(ctx: &HudContext, snapshot: &ActorSnapshot) -> ActionTree {
    let registry = CategoryRegistry::standard();
    let mut tree = ActionTree::new();
    ActionTreeBuilder::new(ctx, &registry)
        .build(snapshot, &mut tree)
        .expect("standard registry covers every domain");
    tree
}

//! Scenarios: a layout plus the actors and items placed on it.
//!
//! [`gravesite_plain`] is the built-in starting scenario. The same structure
//! can be read from RON with [`crate::loaders::ScenarioLoader`].

use gravesite_core::{EntityId, GameMap, Position};

use crate::catalog::{ActorKind, ItemCatalog};
use crate::error::ContentError;
use crate::layout::parse_layout;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorPlacement {
    pub kind: ActorKind,
    pub at: (i32, i32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPlacement {
    pub kind: ItemCatalog,
    pub at: (i32, i32),
}

/// Everything needed to build a starting map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    pub name: String,
    pub layout: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actors: Vec<ActorPlacement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemPlacement>,
}

impl ScenarioSpec {
    /// Lays out the grid, then places actors and items in listed order.
    ///
    /// The player template always gets [`EntityId::PLAYER`]; every other actor
    /// is numbered from 1 in placement order, which is also its turn order.
    pub fn build(&self) -> Result<GameMap, ContentError> {
        let mut map = parse_layout(&self.name, &self.layout)?;

        let mut next_id = 1;
        for placement in &self.actors {
            let id = match placement.kind {
                ActorKind::Tarnished => EntityId::PLAYER,
                _ => {
                    let id = EntityId(next_id);
                    next_id += 1;
                    id
                }
            };
            let (x, y) = placement.at;
            map.add_actor(placement.kind.build(id), Position::new(x, y))?;
        }

        for placement in &self.items {
            let (x, y) = placement.at;
            map.place_item(Position::new(x, y), placement.kind.build())?;
        }

        tracing::debug!(
            scenario = %self.name,
            actors = self.actors.len(),
            items = self.items.len(),
            "scenario built"
        );
        Ok(map)
    }
}

const GRAVESITE_PLAIN: [&str; 10] = [
    "..........~~~~~~~...~~~~~~~......~...........",
    "~..........~~~~~....~~~~~~...................",
    "~~.........~~~~.....~~~~~~...................",
    "~~~..#####..~~.....~~~~~~~...................",
    "~~~..#___#........~~~~~~~~~..................",
    "~~~..#___#.......~~~~~~.~~~..................",
    "~~~..##_##......~~~~~~.......................",
    "~~~~...........~~~~~~~...........~~..........",
    "~~~~~.........~~~~~~~~.......~~~~~~~.........",
    "~~~~~~.......~~~~~~~~~~.....~~~~~~~~.........",
];

/// The Gravesite Plain: the player inside a small hut, a Furnace Golem to the
/// east, two blades south of the hut and fragments scattered around.
pub fn gravesite_plain_spec() -> ScenarioSpec {
    let actor = |kind, at| ActorPlacement { kind, at };
    let item = |kind, at| ItemPlacement { kind, at };

    ScenarioSpec {
        name: "Gravesite Plain".to_owned(),
        layout: GRAVESITE_PLAIN
            .iter()
            .map(|row| (*row).to_owned())
            .collect(),
        actors: vec![
            actor(ActorKind::Tarnished, (7, 4)),
            actor(ActorKind::FurnaceGolem, (42, 4)),
        ],
        items: vec![
            item(ItemCatalog::GreatKnife, (7, 8)),
            item(ItemCatalog::ShortSword, (9, 8)),
            item(ItemCatalog::FlaskOfRejuvenation, (8, 5)),
            item(ItemCatalog::FlaskOfHealing, (6, 5)),
            item(ItemCatalog::ShadowtreeFragment, (11, 4)),
            item(ItemCatalog::ShadowtreeFragment, (42, 5)),
            item(ItemCatalog::ShadowtreeFragment, (30, 9)),
            item(ItemCatalog::ShadowtreeFragment, (0, 0)),
            item(ItemCatalog::ShadowtreeFragment, (1, 4)),
        ],
    }
}

pub fn gravesite_plain() -> Result<GameMap, ContentError> {
    gravesite_plain_spec().build()
}

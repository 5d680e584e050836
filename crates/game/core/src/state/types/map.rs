//! Grid of locations plus the actor roster.
//!
//! The map owns every actor (the roster) and tracks which of them currently
//! stand on a location. An actor knocked unconscious leaves the grid but stays
//! in the roster so reports can still name it.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use super::{
    Actor, Burning, Capabilities, EntityId, Ground, Item, ItemId, ItemKind, Position, Terrain,
};
use crate::config::GameConfig;
use crate::state::MapError;

/// Directed adjacency to a neighbouring location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exit {
    pub destination: Position,
    /// Numpad-style key used by menus.
    pub hotkey: char,
    pub direction: &'static str,
}

/// Neighbour offsets in exit order, with their hotkeys.
const NEIGHBOURS: [(i32, i32, char, &str); GameConfig::MAX_EXITS] = [
    (0, -1, '8', "North"),
    (1, -1, '9', "North-East"),
    (1, 0, '6', "East"),
    (1, 1, '3', "South-East"),
    (0, 1, '2', "South"),
    (-1, 1, '1', "South-West"),
    (-1, 0, '4', "West"),
    (-1, -1, '7', "North-West"),
];

/// One tile of the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    position: Position,
    terrain: Terrain,
    occupant: Option<EntityId>,
    items: Vec<Item>,
    exits: ArrayVec<Exit, { GameConfig::MAX_EXITS }>,
}

impl Location {
    fn new(position: Position, ground: Ground) -> Self {
        Self {
            position,
            terrain: Terrain::Normal(ground),
            occupant: None,
            items: Vec::new(),
            exits: ArrayVec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn occupant(&self) -> Option<EntityId> {
        self.occupant
    }

    pub fn contains_an_actor(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// Glyph to draw: actor over items over terrain.
    fn glyph(&self, actors: &BTreeMap<EntityId, Actor>) -> char {
        if let Some(actor) = self.occupant.and_then(|id| actors.get(&id)) {
            return actor.glyph();
        }
        match self.items.last() {
            Some(item) => item.glyph(),
            None => self.terrain.glyph(),
        }
    }
}

/// Damage applied through [`GameMap::hurt`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Harm {
    pub dealt: u32,
    /// Announcement when this damage knocked the actor out.
    pub knockout: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameMap {
    name: String,
    width: u32,
    height: u32,
    locations: Vec<Location>,
    actors: BTreeMap<EntityId, Actor>,
    positions: BTreeMap<EntityId, Position>,
    next_item_id: u32,
}

impl GameMap {
    /// Builds a map from rows of grounds (row 0 is the top) and wires the
    /// eight-neighbour exits of every location.
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Ground>>) -> Result<Self, MapError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MapError::EmptyLayout);
        }

        let mut locations = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    width: row.len(),
                    expected: width,
                });
            }
            for (x, ground) in row.into_iter().enumerate() {
                locations.push(Location::new(Position::new(x as i32, y as i32), ground));
            }
        }

        let mut map = Self {
            name: name.into(),
            width: width as u32,
            height: height as u32,
            locations,
            actors: BTreeMap::new(),
            positions: BTreeMap::new(),
            next_item_id: 0,
        };

        for index in 0..map.locations.len() {
            let origin = map.locations[index].position;
            for (dx, dy, hotkey, direction) in NEIGHBOURS {
                let destination = origin.offset(dx, dy);
                if map.contains_position(destination) {
                    map.locations[index].exits.push(Exit {
                        destination,
                        hotkey,
                        direction,
                    });
                }
            }
        }

        Ok(map)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains_position(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains_position(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    fn out_of_bounds(&self, position: Position) -> MapError {
        MapError::OutOfBounds {
            position,
            width: self.width,
            height: self.height,
        }
    }

    pub fn at(&self, position: Position) -> Option<&Location> {
        self.index(position).map(|index| &self.locations[index])
    }

    fn at_mut(&mut self, position: Position) -> Option<&mut Location> {
        self.index(position).map(|index| &mut self.locations[index])
    }

    /// All locations in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Exits of the location at `position`; empty outside the grid.
    pub fn exits(&self, position: Position) -> &[Exit] {
        self.at(position).map_or(&[], Location::exits)
    }

    // ===== actors =====

    /// Registers `actor` and stands it on `position`.
    pub fn add_actor(&mut self, actor: Actor, position: Position) -> Result<(), MapError> {
        let id = actor.id();
        if self.actors.contains_key(&id) {
            return Err(MapError::DuplicateActor(id));
        }
        let capabilities = actor.capabilities();
        let out_of_bounds = self.out_of_bounds(position);
        let location = self.at_mut(position).ok_or(out_of_bounds)?;
        if let Some(occupant) = location.occupant {
            return Err(MapError::Occupied { position, occupant });
        }
        if !location.terrain.admits(capabilities) {
            return Err(MapError::Impassable {
                actor: id,
                position,
            });
        }

        location.occupant = Some(id);
        self.positions.insert(id, position);
        self.actors.insert(id, actor);
        tracing::debug!(actor = %id, %position, "actor added to map");
        Ok(())
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    /// Every registered actor, on the grid or not, in id order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    /// Ids of actors currently standing on the grid, ascending.
    pub fn actors_on_map(&self) -> Vec<EntityId> {
        self.positions.keys().copied().collect()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn location_of(&self, id: EntityId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    pub fn actor_at(&self, position: Position) -> Option<EntityId> {
        self.at(position).and_then(Location::occupant)
    }

    /// Entry check for `id` stepping onto `position`: the tile exists, nobody
    /// stands on it, and its terrain admits the actor's capabilities.
    pub fn can_actor_enter(&self, id: EntityId, position: Position) -> bool {
        let Some(actor) = self.actors.get(&id) else {
            return false;
        };
        self.at(position).is_some_and(|location| {
            !location.contains_an_actor() && location.terrain.admits(actor.capabilities())
        })
    }

    pub fn move_actor(&mut self, id: EntityId, destination: Position) -> Result<(), MapError> {
        if !self.actors.contains_key(&id) {
            return Err(MapError::UnknownActor(id));
        }
        let origin = self.location_of(id).ok_or(MapError::NotOnMap(id))?;
        let out_of_bounds = self.out_of_bounds(destination);
        let target = self.at(destination).ok_or(out_of_bounds)?;
        if let Some(occupant) = target.occupant {
            return Err(MapError::Occupied {
                position: destination,
                occupant,
            });
        }
        if !self.can_actor_enter(id, destination) {
            return Err(MapError::Impassable {
                actor: id,
                position: destination,
            });
        }

        if let Some(location) = self.at_mut(origin) {
            location.occupant = None;
        }
        if let Some(location) = self.at_mut(destination) {
            location.occupant = Some(id);
        }
        self.positions.insert(id, destination);
        Ok(())
    }

    /// Takes the actor off the grid, keeping it in the roster.
    pub fn remove_actor(&mut self, id: EntityId) -> Option<Position> {
        let position = self.positions.remove(&id)?;
        if let Some(location) = self.at_mut(position)
            && location.occupant == Some(id)
        {
            location.occupant = None;
        }
        Some(position)
    }

    /// Applies `amount` damage to `id`. If the actor crosses to 0 health, its
    /// unconscious handler runs (once) and it leaves the grid.
    pub fn hurt(&mut self, id: EntityId, amount: u32, by: &str) -> Option<Harm> {
        let actor = self.actors.get_mut(&id)?;
        let dealt = actor.hurt(amount);
        let knockout = actor.knock_out(by);
        if let Some(message) = &knockout {
            tracing::info!(actor = %id, by, "{message}");
            self.remove_actor(id);
        }
        Some(Harm { dealt, knockout })
    }

    /// Knocks out every actor still standing on the grid at 0 health.
    ///
    /// Damage routed through [`GameMap::hurt`] already does this; the sweep
    /// catches health changed directly through an actor's attributes.
    pub fn sweep_unconscious(&mut self) -> Vec<String> {
        let fallen: Vec<EntityId> = self
            .positions
            .keys()
            .filter(|id| self.actors.get(id).is_some_and(|actor| !actor.is_conscious()))
            .copied()
            .collect();

        let mut messages = Vec::new();
        for id in fallen {
            if let Some(message) = self
                .actors
                .get_mut(&id)
                .and_then(|actor| actor.knock_out("the world"))
            {
                tracing::info!(actor = %id, "{message}");
                messages.push(message);
            }
            self.remove_actor(id);
        }
        messages
    }

    // ===== items =====

    fn allocate_item_id(&mut self) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        id
    }

    /// Drops a new item on the ground at `position`.
    pub fn place_item(&mut self, position: Position, kind: ItemKind) -> Result<ItemId, MapError> {
        if !self.contains_position(position) {
            return Err(self.out_of_bounds(position));
        }
        let id = self.allocate_item_id();
        if let Some(location) = self.at_mut(position) {
            location.items.push(Item::new(id, kind));
        }
        Ok(id)
    }

    /// Puts a new item straight into an actor's inventory.
    pub fn give_item(&mut self, actor: EntityId, kind: ItemKind) -> Result<ItemId, MapError> {
        if !self.actors.contains_key(&actor) {
            return Err(MapError::UnknownActor(actor));
        }
        let id = self.allocate_item_id();
        if let Some(owner) = self.actors.get_mut(&actor) {
            owner.add_item(Item::new(id, kind));
        }
        Ok(id)
    }

    /// Lifts an item off the ground.
    pub fn take_item(&mut self, position: Position, id: ItemId) -> Option<Item> {
        let location = self.at_mut(position)?;
        let index = location.items.iter().position(|item| item.id == id)?;
        Some(location.items.remove(index))
    }

    // ===== terrain =====

    /// Sets the ground at `position` on fire if it is combustible.
    pub fn ignite(&mut self, position: Position) -> bool {
        let Some(location) = self.at_mut(position) else {
            return false;
        };
        let ignited = location.terrain.ignite();
        if ignited {
            tracing::info!(%position, "ground catches fire");
        }
        ignited
    }

    /// Runs one world tick of every location's terrain, in row-major order.
    ///
    /// Burning tiles damage non-immune occupants and revert once their
    /// countdown has run out. Returns the messages produced.
    pub fn tick_terrain(&mut self) -> Vec<String> {
        let mut messages = Vec::new();
        for index in 0..self.locations.len() {
            let location = &mut self.locations[index];
            let position = location.position;
            let occupant = location.occupant;
            let tick = location.terrain.tick();

            if tick.reverted {
                tracing::info!(%position, ground = location.terrain.name(), "fire burns out");
            }

            let (Some(damage), Some(occupant)) = (tick.burn, occupant) else {
                continue;
            };
            let immune = self
                .actors
                .get(&occupant)
                .is_some_and(|actor| actor.has_capability(Capabilities::FIRE_IMMUNE));
            if immune {
                continue;
            }
            if let Some(harm) = self.hurt(occupant, damage, Burning::NAME) {
                let name = self.actors.get(&occupant).map_or("", |actor| actor.name());
                messages.push(format!("{name} takes {} fire damage!", harm.dealt));
                messages.extend(harm.knockout);
            }
        }
        messages
    }

    /// Runs one world tick of every item lying on the ground.
    pub fn tick_items(&mut self) -> Vec<String> {
        let mut messages = Vec::new();
        let actors = &self.actors;
        for location in &mut self.locations {
            let occupant = location.occupant.and_then(|id| actors.get(&id));
            for item in &mut location.items {
                if item.tick(occupant) {
                    tracing::debug!(
                        item = %item.id,
                        position = %location.position,
                        "item became portable"
                    );
                    if let Some(actor) = occupant {
                        messages.push(format!("{} can now lift the {}", actor.name(), item.name()));
                    }
                }
            }
        }
        messages
    }

    /// Text rendering of the grid, one line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.locations.len() + self.height as usize);
        for row in self.locations.chunks(self.width as usize) {
            out.extend(row.iter().map(|location| location.glyph(&self.actors)));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AttributeKind, AttributeOp, AttributeStore, EntryPolicy, Weapon};

    fn dirt() -> Ground {
        Ground::new('.', "Dirt")
            .with_capabilities(Capabilities::COMBUSTIBLE)
    }

    fn wall() -> Ground {
        Ground::new('#', "Wall").with_entry(EntryPolicy::Closed)
    }

    fn field(width: usize, height: usize) -> GameMap {
        GameMap::new("Test", vec![vec![dirt(); width]; height])
            .expect("valid layout")
    }

    fn burning(map: &GameMap, position: Position) -> bool {
        map.at(position)
            .is_some_and(|location| location.terrain().is_burning())
    }

    fn walker(id: u32) -> Actor {
        Actor::player(
            EntityId(id),
            "Walker",
            'w',
            AttributeStore::with_health(20),
            Weapon::new(1, "taps", 100),
        )
    }

    #[test]
    fn corner_has_three_exits_and_centre_eight() {
        let map = field(3, 3);
        assert_eq!(map.exits(Position::new(0, 0)).len(), 3);
        assert_eq!(map.exits(Position::new(1, 1)).len(), 8);
        assert!(map.exits(Position::new(5, 5)).is_empty());
        let hotkeys: Vec<char> = map
            .exits(Position::new(1, 1))
            .iter()
            .map(|exit| exit.hotkey)
            .collect();
        assert_eq!(hotkeys, vec!['8', '9', '6', '3', '2', '1', '4', '7']);
    }

    #[test]
    fn ragged_layout_is_rejected() {
        let error = GameMap::new("Bad", vec![vec![dirt(); 3], vec![dirt(); 2]])
            .unwrap_err();
        assert_eq!(
            error,
            MapError::RaggedRow {
                row: 1,
                width: 2,
                expected: 3
            }
        );
        let error = GameMap::new("Empty", vec![]).unwrap_err();
        assert_eq!(error, MapError::EmptyLayout);
    }

    #[test]
    fn occupancy_is_exclusive() {
        let mut map = field(2, 1);
        map.add_actor(walker(1), Position::new(0, 0))
            .expect("free tile");
        let error = map.add_actor(walker(2), Position::new(0, 0)).unwrap_err();
        assert!(matches!(error, MapError::Occupied { occupant: EntityId(1), .. }));
        assert!(!map.can_actor_enter(EntityId(1), Position::new(0, 0)));
    }

    #[test]
    fn walls_block_movement() {
        let mut map = GameMap::new("Walled", vec![vec![dirt(), wall()]])
            .expect("layout");
        map.add_actor(walker(1), Position::new(0, 0))
            .expect("free tile");
        assert!(!map.can_actor_enter(EntityId(1), Position::new(1, 0)));
        assert!(matches!(
            map.move_actor(EntityId(1), Position::new(1, 0)),
            Err(MapError::Impassable { .. })
        ));
    }

    #[test]
    fn move_updates_both_indexes() {
        let mut map = field(3, 1);
        map.add_actor(walker(1), Position::new(0, 0))
            .expect("free tile");
        map.move_actor(EntityId(1), Position::new(1, 0))
            .expect("open tile");
        assert_eq!(map.location_of(EntityId(1)), Some(Position::new(1, 0)));
        assert_eq!(map.actor_at(Position::new(1, 0)), Some(EntityId(1)));
        assert_eq!(map.actor_at(Position::new(0, 0)), None);
    }

    #[test]
    fn lethal_damage_knocks_out_once_and_vacates() {
        let mut map = field(2, 1);
        map.add_actor(walker(1), Position::new(0, 0))
            .expect("free tile");

        let harm = map.hurt(EntityId(1), 50, "Fire").expect("registered actor");
        assert_eq!(harm.dealt, 20);
        assert_eq!(
            harm.knockout.as_deref(),
            Some("Walker met their demise at the hands of Fire")
        );
        assert!(!map.contains(EntityId(1)));
        assert_eq!(map.actor_at(Position::new(0, 0)), None);

        let again = map.hurt(EntityId(1), 5, "Fire").expect("still in roster");
        assert_eq!(again.dealt, 0);
        assert_eq!(again.knockout, None);
    }

    #[test]
    fn sweep_collects_actors_drained_outside_combat() {
        let mut map = field(2, 1);
        map.add_actor(walker(1), Position::new(0, 0))
            .expect("free tile");
        map.actor_mut(EntityId(1))
            .expect("registered")
            .attributes_mut()
            .modify(AttributeKind::Health, AttributeOp::Update, 0);

        let messages = map.sweep_unconscious();

        assert_eq!(
            messages,
            ["Walker met their demise at the hands of the world"]
        );
        assert!(!map.contains(EntityId(1)));
        assert!(map.sweep_unconscious().is_empty());
    }

    #[test]
    fn burning_ground_hurts_occupant_until_it_burns_out() {
        let mut map = field(1, 1);
        map.add_actor(walker(1), Position::new(0, 0))
            .expect("free tile");
        assert!(map.ignite(Position::new(0, 0)));

        for _ in 0..3 {
            let messages = map.tick_terrain();
            assert_eq!(messages, vec!["Walker takes 5 fire damage!".to_owned()]);
        }
        let messages = map.tick_terrain();
        assert_eq!(
            messages,
            vec![
                "Walker takes 5 fire damage!".to_owned(),
                "Walker met their demise at the hands of Fire".to_owned()
            ]
        );
        // Two more burns on an empty tile, then the dirt comes back
        assert!(map.tick_terrain().is_empty());
        assert!(map.tick_terrain().is_empty());
        assert!(burning(&map, Position::new(0, 0)));
        map.tick_terrain();
        let tile = map.at(Position::new(0, 0)).expect("tile");
        assert_eq!(tile.terrain().name(), "Dirt");
    }

    #[test]
    fn fire_immune_occupant_is_spared() {
        let mut map = field(1, 1);
        let golem = walker(1).with_capabilities(Capabilities::FIRE_IMMUNE);
        map.add_actor(golem, Position::new(0, 0))
            .expect("free tile");
        map.ignite(Position::new(0, 0));

        assert!(map.tick_terrain().is_empty());
        assert_eq!(map.actor(EntityId(1)).map(Actor::health), Some(20));
    }

    #[test]
    fn render_draws_actors_over_terrain() {
        let mut map = field(3, 1);
        map.add_actor(walker(1), Position::new(1, 0))
            .expect("free tile");
        assert_eq!(map.render(), ".w.\n");
        map.ignite(Position::new(2, 0));
        assert_eq!(map.render(), ".ww\n");
    }
}

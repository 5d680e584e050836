//! Turn loop.
//!
//! The [`GameEngine`] drives rounds over a [`GameState`]: every actor on the
//! map takes one turn in ascending id order, then the world ticks. An actor's
//! turn runs its pending continuation if it has one, otherwise asks its
//! behaviours (or the player's controller) for an action.
//!
//! Each turn draws its randomness from a fresh [`Dice`] keyed by the state's
//! seed, the turn nonce and the actor, so a run replays exactly from its seed.

mod controller;
mod errors;
mod report;

pub use controller::{Idle, PlayerController};
pub use errors::TurnError;
pub use report::{RoundReport, TurnRecord};

use crate::action::{Action, ActionOutcome, available_actions};
use crate::behaviour::DecisionContext;
use crate::env::{Dice, RngOracle};
use crate::error::GameError;
use crate::state::{Controller, EntityId, GameState};

/// Game engine that decides and executes actions and ticks the world.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, rng: &'a dyn RngOracle) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// The game ends once the player is knocked out (or was never placed).
    pub fn is_over(&self) -> bool {
        !self.state.is_player_conscious()
    }

    /// Plays one full round and reports what happened.
    pub fn play_round(&mut self, controller: &mut dyn PlayerController) -> RoundReport {
        let mut report = RoundReport {
            round: self.state.turn.round + 1,
            ..RoundReport::default()
        };

        for actor in self.state.map.actors_on_map() {
            // Earlier turns this round may have knocked the actor out
            match self.play_turn(actor, controller) {
                Ok(record) => report.turns.push(record),
                Err(error) => {
                    let code = error.error_code();
                    if error.severity().is_recoverable() {
                        tracing::debug!(%actor, code, %error, "turn skipped");
                    } else {
                        tracing::warn!(%actor, code, %error, "turn skipped");
                    }
                    report.skipped.push((actor, code));
                }
            }
        }

        report.world = self.tick_world();
        self.state.turn.round += 1;
        tracing::info!(
            round = report.round,
            turns = report.turns.len(),
            world_events = report.world.len(),
            "round complete"
        );
        report
    }

    /// Plays a single turn for `actor`.
    pub fn play_turn(
        &mut self,
        actor: EntityId,
        controller: &mut dyn PlayerController,
    ) -> Result<TurnRecord, TurnError> {
        let conscious = self
            .state
            .map
            .actor(actor)
            .ok_or(TurnError::UnknownActor(actor))?
            .is_conscious();
        if !conscious {
            self.state.turn.clear_pending(actor);
            return Err(TurnError::Unconscious(actor));
        }
        if !self.state.map.contains(actor) {
            return Err(TurnError::NotOnMap(actor));
        }

        let rng = self.rng;
        let mut dice = Dice::new(rng, self.state.game_seed, self.state.turn.nonce, actor);
        let action = self.decide(actor, controller, &mut dice);
        let outcome = self.execute(actor, &action, &mut dice);

        Ok(TurnRecord {
            actor,
            continues: outcome.next.is_some(),
            description: outcome.description,
        })
    }

    /// Pending continuation first, then behaviours or the controller, then
    /// doing nothing.
    fn decide(
        &mut self,
        actor: EntityId,
        controller: &mut dyn PlayerController,
        dice: &mut Dice<'_>,
    ) -> Action {
        if let Some(next) = self.state.turn.take_pending(actor) {
            tracing::debug!(%actor, ?next, "continuing");
            return next;
        }

        let map = &self.state.map;
        let Some(state) = map.actor(actor) else {
            return Action::DoNothing;
        };
        let chosen = match state.controller() {
            Controller::Behaviours(behaviours) => {
                let mut ctx = DecisionContext::new(actor, map, dice);
                behaviours.decide(&mut ctx)
            }
            Controller::Player => {
                let actions = available_actions(map, actor);
                controller.choose(state, map, &actions)
            }
        };
        chosen.unwrap_or(Action::DoNothing)
    }

    /// Runs `action` for `actor` and records its continuation.
    pub fn execute(
        &mut self,
        actor: EntityId,
        action: &Action,
        dice: &mut Dice<'_>,
    ) -> ActionOutcome {
        let outcome = action.execute(actor, &mut self.state.map, dice);
        self.state.turn.nonce += 1;

        match &outcome.next {
            Some(next) => self.state.turn.set_pending(actor, next.clone()),
            None => self.state.turn.clear_pending(actor),
        }
        tracing::debug!(%actor, nonce = self.state.turn.nonce, "{}", outcome.description);
        outcome
    }

    /// Ticks terrain, then items on the ground, then sweeps up anyone left at
    /// zero health.
    pub fn tick_world(&mut self) -> Vec<String> {
        let map = &mut self.state.map;
        let mut messages = map.tick_terrain();
        messages.extend(map.tick_items());
        messages.extend(map.sweep_unconscious());
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{AttackAction, MoveAction, RestAction};
    use crate::behaviour::BehaviourSet;
    use crate::env::{PcgRng, ScriptedRng};
    use crate::state::{Actor, AttributeStore, GameMap, Ground, Position, Weapon};

    /// Always picks the same action.
    struct Always(Action);

    impl PlayerController for Always {
        fn choose(
            &mut self,
            _actor: &Actor,
            _map: &GameMap,
            _actions: &[Action],
        ) -> Option<Action> {
            Some(self.0.clone())
        }
    }

    fn state() -> GameState {
        let mut map = GameMap::new("Plain", vec![vec![Ground::new('.', "Dirt"); 8]])
            .expect("layout");
        let player = Actor::player(
            EntityId::PLAYER,
            "Tarnished",
            '@',
            AttributeStore::with_health(150),
            Weapon::new(25, "punches", 50),
        );
        let golem = Actor::npc(
            EntityId(1),
            "Furnace Golem",
            'A',
            AttributeStore::with_health(1000),
            Weapon::new(100, "stomps", 5),
            BehaviourSet::wandering(),
        );
        map.add_actor(player, Position::new(0, 0)).expect("free");
        map.add_actor(golem, Position::new(7, 0)).expect("free");
        GameState::new(7, map)
    }

    #[test]
    fn rest_continuation_skips_the_controller() {
        let mut state = state();
        let rng = PcgRng;
        let mut engine = GameEngine::new(&mut state, &rng);
        let mut controller = Always(Action::Rest(RestAction::new(2)));

        let first = engine.play_round(&mut controller);
        assert!(first.turns[0].continues);

        // Controller now wants to move, but the pending rest runs first
        let step = Action::Move(MoveAction::new(Position::new(1, 0), "East", None));
        let mut controller = Always(step);
        let second = engine.play_round(&mut controller);
        assert_eq!(second.turns[0].description, "Tarnished rests");
        assert!(!second.turns[0].continues);

        let third = engine.play_round(&mut controller);
        assert_eq!(third.turns[0].description, "Tarnished moves East");
        assert_eq!(engine.state().turn.round, 3);
    }

    #[test]
    fn idle_player_does_nothing_and_npc_wanders() {
        let mut state = state();
        let rng = PcgRng;
        let mut engine = GameEngine::new(&mut state, &rng);

        let report = engine.play_round(&mut Idle);

        assert_eq!(report.round, 1);
        assert_eq!(report.turns.len(), 2);
        assert_eq!(report.turns[0].description, "Tarnished does nothing");
        assert_eq!(report.turns[1].description, "Furnace Golem moves around");
        assert_eq!(
            engine.state().map.location_of(EntityId(1)),
            Some(Position::new(6, 0))
        );
        assert_eq!(engine.state().turn.nonce, 2);
    }

    #[test]
    fn same_seed_replays_the_same_rounds() {
        let rng = PcgRng;
        let mut runs = Vec::new();
        for _ in 0..2 {
            let mut state = state();
            let mut engine = GameEngine::new(&mut state, &rng);
            let log: Vec<String> = (0..10)
                .map(|_| engine.play_round(&mut Idle).to_string())
                .collect();
            runs.push((log, state));
        }
        assert_eq!(runs[0], runs[1]);
    }

    #[test]
    fn knocked_out_actor_loses_its_turns() {
        let mut state = state();
        state.map.hurt(EntityId::PLAYER, 500, "Fire");
        let rng = ScriptedRng::default();
        let mut engine = GameEngine::new(&mut state, &rng);

        assert!(engine.is_over());
        assert_eq!(
            engine.play_turn(EntityId::PLAYER, &mut Idle),
            Err(TurnError::Unconscious(EntityId::PLAYER))
        );
        assert_eq!(
            engine.play_turn(EntityId(9), &mut Idle),
            Err(TurnError::UnknownActor(EntityId(9)))
        );

        let report = engine.play_round(&mut Idle);
        assert_eq!(report.turns.len(), 1);
        assert_eq!(report.turns[0].actor, EntityId(1));
    }

    #[test]
    fn actor_knocked_out_earlier_in_the_round_is_skipped() {
        let mut map = GameMap::new("Plain", vec![vec![Ground::new('.', "Dirt"); 8]])
            .expect("layout");
        let player = Actor::player(
            EntityId::PLAYER,
            "Tarnished",
            '@',
            AttributeStore::with_health(150),
            Weapon::new(2000, "crushes", 100),
        );
        let golem = Actor::npc(
            EntityId(1),
            "Furnace Golem",
            'A',
            AttributeStore::with_health(1000),
            Weapon::new(100, "stomps", 5),
            BehaviourSet::wandering(),
        );
        map.add_actor(player, Position::new(6, 0)).expect("free");
        map.add_actor(golem, Position::new(7, 0)).expect("free");
        let mut state = GameState::new(7, map);
        let rng = ScriptedRng::new(vec![0]);
        let mut engine = GameEngine::new(&mut state, &rng);
        let attack = Action::Attack(AttackAction::intrinsic(EntityId(1), "East"));
        let mut controller = Always(attack);

        let report = engine.play_round(&mut controller);

        assert_eq!(report.turns.len(), 1);
        assert_eq!(report.skipped, vec![(EntityId(1), "TURN_UNCONSCIOUS")]);
        let unconscious = TurnError::Unconscious(EntityId(1));
        assert!(unconscious.severity().is_recoverable());
        let unknown = TurnError::UnknownActor(EntityId(1));
        assert!(!unknown.severity().is_recoverable());
    }
}

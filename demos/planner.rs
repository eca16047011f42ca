//! Demonstrates a blackboard shared by the parts of a tiny game AI.
//!
//! A sensor writes what it sees, a planner reads it and writes a plan, and an
//! actuator consumes the plan. None of them know about each other; they only
//! agree on key names and value types.
//!
//! Run with: cargo run --example planner

use blackboard_store::{Blackboard, BlackboardConfig, BlackboardError};
use std::sync::Arc;

const ENEMY_POSITION: &str = "enemy_position";
const AMMO: &str = "ammo";
const PLAN: &str = "plan";
const TICKS: &str = "ticks";

fn main() -> Result<(), BlackboardError> {
    let board = Arc::new(Blackboard::with_config(
        BlackboardConfig::default().use_concurrent_map(true),
    ));

    let sensor = Sensor::new(Arc::clone(&board));
    let planner = Planner::new(Arc::clone(&board));
    let actuator = Actuator::new(Arc::clone(&board));

    board.set(AMMO, 2u32);
    board.set(TICKS, 0u64);

    let sightings = [Some(Position { x: 3, y: 4 }), None, Some(Position { x: 1, y: 1 })];
    for sighting in sightings {
        board.with_mut(TICKS, |ticks: &mut u64| *ticks += 1)?;

        sensor.observe(sighting);
        planner.think();
        actuator.act();
    }

    println!("\nFinal blackboard: {:?}", board);
    println!("Ticks: {}", board.fetch::<u64>(TICKS)?);

    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Position {
    x: i32,
    y: i32,
}

#[derive(Clone, Debug)]
enum Action {
    Shoot(Position),
    Reload,
    Patrol,
}

struct Sensor {
    board: Arc<Blackboard>,
}

impl Sensor {
    fn new(board: Arc<Blackboard>) -> Self {
        Self { board }
    }

    /// `None` is stored explicitly: "looked, saw nothing" is not "never looked"
    fn observe(&self, enemy: Option<Position>) {
        self.board.set(ENEMY_POSITION, enemy);
    }
}

struct Planner {
    board: Arc<Blackboard>,
}

impl Planner {
    fn new(board: Arc<Blackboard>) -> Self {
        Self { board }
    }

    fn think(&self) {
        let enemy = self.board.get::<Option<Position>>(ENEMY_POSITION);
        let ammo = self.board.get::<u32>(AMMO);

        let plan = match (enemy, ammo) {
            (Some(position), ammo) if ammo > 0 => Action::Shoot(position),
            (Some(_), _) => Action::Reload,
            (None, _) => Action::Patrol,
        };
        self.board.set(PLAN, plan);
    }
}

struct Actuator {
    board: Arc<Blackboard>,
}

impl Actuator {
    fn new(board: Arc<Blackboard>) -> Self {
        Self { board }
    }

    fn act(&self) {
        let Some(plan) = self.board.try_remove::<Action>(PLAN) else {
            println!("Nothing to do");
            return;
        };

        match plan {
            Action::Shoot(position) => {
                println!("Shooting at ({}, {})", position.x, position.y);
                let _ = self.board.with_mut(AMMO, |ammo: &mut u32| *ammo -= 1);
            }
            Action::Reload => {
                println!("Reloading");
                self.board.set(AMMO, 2u32);
            }
            Action::Patrol => println!("Patrolling"),
        }
    }
}

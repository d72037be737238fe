//! The arena: the set of fighters and the pairwise collision pass

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::fighter::{Fighter, FighterId, FighterState};
use super::geometry::{Point, Triangle, triangles_intersect};
use crate::error::ConfigError;

/// Read-only view of a fighter for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FighterSnapshot {
    pub id: FighterId,
    pub position: Point,
    pub rotation: f32,
    pub scale: f32,
    pub state: FighterState,
}

impl From<&Fighter> for FighterSnapshot {
    fn from(fighter: &Fighter) -> Self {
        Self {
            id: fighter.id,
            position: fighter.position(),
            rotation: fighter.rotation(),
            scale: fighter.scale(),
            state: fighter.state(),
        }
    }
}

/// Fighters keyed by id, iterated in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arena {
    fighters: IndexMap<FighterId, Fighter>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fighter; ids must be unique
    pub fn insert(&mut self, fighter: Fighter) -> Result<(), ConfigError> {
        if self.fighters.contains_key(&fighter.id) {
            return Err(ConfigError::DuplicateFighter(fighter.id));
        }
        log::info!(
            "Fighter {} spawned at ({:.1}, {:.1})",
            fighter.id,
            fighter.position().x,
            fighter.position().y
        );
        self.fighters.insert(fighter.id, fighter);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    pub fn contains(&self, id: FighterId) -> bool {
        self.fighters.contains_key(&id)
    }

    pub fn get(&self, id: FighterId) -> Option<&Fighter> {
        self.fighters.get(&id)
    }

    pub fn get_mut(&mut self, id: FighterId) -> Option<&mut Fighter> {
        self.fighters.get_mut(&id)
    }

    pub fn fighters(&self) -> impl Iterator<Item = &Fighter> {
        self.fighters.values()
    }

    /// Hitboxes for the current positions, in iteration order
    pub fn hitboxes(&self) -> Vec<Triangle> {
        self.fighters.values().map(Fighter::hitbox).collect()
    }

    /// Index pairs (i < j) whose hitboxes overlap
    pub fn colliding_pairs(&self) -> Vec<(usize, usize)> {
        let hitboxes = self.hitboxes();
        let mut pairs = Vec::new();
        for i in 0..hitboxes.len() {
            for j in (i + 1)..hitboxes.len() {
                if triangles_intersect(&hitboxes[i], &hitboxes[j]) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Detect overlaps and let each fighter of a pair react to the other
    ///
    /// Geometry is computed once up front so every pair sees the same frame.
    /// Within a pair the second fighter reacts to the first one's updated state.
    /// Returns the number of colliding pairs.
    pub fn resolve_collisions(&mut self) -> usize {
        let pairs = self.colliding_pairs();
        for &(i, j) in &pairs {
            let other = self.fighters[j].contact();
            self.fighters[i].handle_collision(other);
            let other = self.fighters[i].contact();
            self.fighters[j].handle_collision(other);

            log::debug!(
                "Collision between {} and {}",
                self.fighters[i].id,
                self.fighters[j].id
            );
        }
        pairs.len()
    }

    /// Advance every fighter in insertion order
    pub fn update_fighters(&mut self, dt: f32) {
        for fighter in self.fighters.values_mut() {
            fighter.update(dt);
        }
    }

    /// Per-frame view for the renderer
    pub fn snapshot(&self) -> Vec<FighterSnapshot> {
        self.fighters.values().map(FighterSnapshot::from).collect()
    }
}

//! Per-individual state.
//!
//! An `Agent` is a plain value; the grid cell it occupies is kept in step
//! with `location` by [`Population`](crate::Population), which is the only
//! thing that moves or kills agents.

use reef_core::{Location, RandomSource};

use crate::Species;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    species:    Species,
    location:   Location,
    age:        u32,
    /// `None` for species without hunger.
    food_level: Option<u32>,
    male:       bool,
    infected:   bool,
    alive:      bool,
}

impl Agent {
    /// A newborn of known sex: age 0, the species' newborn food level,
    /// uninfected.
    pub fn new(species: Species, location: Location, male: bool) -> Self {
        let food_level = species.has_hunger().then(|| species.traits().newborn_food);
        Self {
            species,
            location,
            age: 0,
            food_level,
            male,
            infected: false,
            alive: true,
        }
    }

    /// A newborn whose sex is drawn from `rng`.
    pub fn newborn<R: RandomSource>(species: Species, location: Location, rng: &mut R) -> Self {
        let male = rng.uniform_bool();
        Self::new(species, location, male)
    }

    /// An agent for the initial population: sex drawn, then a random age
    /// below the species' max age and a random food level.
    ///
    /// Predators draw food from `0..hunger_cap`, prey from `0..=hunger_cap`.
    pub fn seeded<R: RandomSource>(species: Species, location: Location, rng: &mut R) -> Self {
        let mut agent = Self::newborn(species, location, rng);
        let traits = species.traits();
        agent.age = rng.uniform_int(traits.max_age as usize) as u32;
        agent.food_level = match species.role() {
            crate::Role::Predator => Some(rng.uniform_int(traits.hunger_cap as usize) as u32),
            crate::Role::Prey     => Some(rng.uniform_int(traits.hunger_cap as usize + 1) as u32),
            crate::Role::Drifter  => None,
        };
        agent
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Set the food level.  Ignored for species without hunger.
    pub fn with_food_level(mut self, food: u32) -> Self {
        if self.food_level.is_some() {
            self.food_level = Some(food);
        }
        self
    }

    pub fn with_infection(mut self, infected: bool) -> Self {
        self.infected = infected;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn species(&self) -> Species {
        self.species
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn food_level(&self) -> Option<u32> {
        self.food_level
    }

    #[inline]
    pub fn is_male(&self) -> bool {
        self.male
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.infected
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// `true` if `other` is a live conspecific of the opposite sex.
    pub fn can_mate_with(&self, other: &Agent) -> bool {
        other.alive && other.species == self.species && other.male != self.male
    }

    // ── Mutation (crate-internal) ─────────────────────────────────────────

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub(crate) fn mark_dead(&mut self) {
        self.alive = false;
    }

    pub(crate) fn infect(&mut self) {
        self.infected = true;
    }

    /// Increment age; returns `false` once past the species' max age.
    pub(crate) fn grow_older(&mut self) -> bool {
        self.age += 1;
        self.age <= self.species.traits().max_age
    }

    /// Decrement food; returns `false` when it reaches zero.  Always `true`
    /// for species without hunger.
    pub(crate) fn grow_hungrier(&mut self) -> bool {
        match &mut self.food_level {
            Some(food) => {
                *food = food.saturating_sub(1);
                *food > 0
            }
            None => true,
        }
    }

    /// Add `amount` food, capped at the species' hunger cap.
    pub(crate) fn feed(&mut self, amount: u32) {
        let cap = self.species.traits().hunger_cap;
        if let Some(food) = &mut self.food_level {
            *food = (*food + amount).min(cap);
        }
    }

    /// Food still wanted before the hunger cap is reached.
    pub(crate) fn appetite(&self) -> u32 {
        self.food_level
            .map_or(0, |food| self.species.traits().hunger_cap.saturating_sub(food))
    }
}

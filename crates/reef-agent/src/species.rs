//! The five species and their constant trait tables.
//!
//! | Species   | Role     | Breed age | Max age    | Breed p | Litter | Hunger cap |
//! |-----------|----------|-----------|------------|---------|--------|------------|
//! | Fox       | Predator | 12        | 300        | 0.21    | 3      | 60         |
//! | Megalodon | Predator | 15        | 500        | 0.10    | 2      | 200        |
//! | Rabbit    | Prey     | 5         | 30         | 0.35    | 4      | 8          |
//! | Whale     | Prey     | 50        | 1000       | 0.15    | 2      | 75         |
//! | Jellyfish | Drifter  | 1000      | 10 000 000 | 0.001   | 1      | —          |

use std::fmt;

/// How a species behaves each step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Eats other animals.
    Predator,
    /// Grazes krill and rests at night.
    Prey,
    /// No hunger, no partner needed to breed.
    Drifter,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Fox,
    Megalodon,
    Rabbit,
    Whale,
    Jellyfish,
}

/// Per-species constants.  One static table per species; nothing here
/// changes during a run.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesTraits {
    /// Minimum age (in steps) before breeding is possible.
    pub breeding_age:         u32,
    /// Age beyond which the agent dies.
    pub max_age:              u32,
    /// Chance of producing a litter once a partner is found.
    pub breeding_probability: f64,
    /// Largest litter; actual size is drawn from `1..=max_litter`.
    pub max_litter:           u32,
    /// Food ceiling.  Zero for species without hunger.
    pub hunger_cap:           u32,
    /// Food level a newborn starts with.
    pub newborn_food:         u32,
    /// Predators only: chance of hunting at night when not hungry.
    pub night_activity:       f64,
    /// Predators only: below this food level a predator always hunts at
    /// night.
    pub night_hunt_threshold: u32,
}

const FOX: SpeciesTraits = SpeciesTraits {
    breeding_age:         12,
    max_age:              300,
    breeding_probability: 0.21,
    max_litter:           3,
    hunger_cap:           60,
    newborn_food:         20,
    night_activity:       0.50,
    night_hunt_threshold: 13,
};

const MEGALODON: SpeciesTraits = SpeciesTraits {
    breeding_age:         15,
    max_age:              500,
    breeding_probability: 0.10,
    max_litter:           2,
    hunger_cap:           200,
    newborn_food:         10,
    night_activity:       0.10,
    night_hunt_threshold: 50,
};

const RABBIT: SpeciesTraits = SpeciesTraits {
    breeding_age:         5,
    max_age:              30,
    breeding_probability: 0.35,
    max_litter:           4,
    hunger_cap:           8,
    newborn_food:         4,
    night_activity:       0.0,
    night_hunt_threshold: 0,
};

const WHALE: SpeciesTraits = SpeciesTraits {
    breeding_age:         50,
    max_age:              1000,
    breeding_probability: 0.15,
    max_litter:           2,
    hunger_cap:           75,
    newborn_food:         37,
    night_activity:       0.0,
    night_hunt_threshold: 0,
};

const JELLYFISH: SpeciesTraits = SpeciesTraits {
    breeding_age:         1000,
    max_age:              10_000_000,
    breeding_probability: 0.001,
    max_litter:           1,
    hunger_cap:           0,
    newborn_food:         0,
    night_activity:       0.0,
    night_hunt_threshold: 0,
};

impl Species {
    /// All species in bootstrap priority order: when a cell is seeded, the
    /// first species whose roll succeeds claims it.
    pub const ALL: [Species; 5] = [
        Species::Fox,
        Species::Rabbit,
        Species::Megalodon,
        Species::Whale,
        Species::Jellyfish,
    ];

    pub fn role(self) -> Role {
        match self {
            Species::Fox | Species::Megalodon => Role::Predator,
            Species::Rabbit | Species::Whale  => Role::Prey,
            Species::Jellyfish                => Role::Drifter,
        }
    }

    #[inline]
    pub fn traits(self) -> &'static SpeciesTraits {
        match self {
            Species::Fox       => &FOX,
            Species::Megalodon => &MEGALODON,
            Species::Rabbit    => &RABBIT,
            Species::Whale     => &WHALE,
            Species::Jellyfish => &JELLYFISH,
        }
    }

    /// `true` for species that track a food level.
    #[inline]
    pub fn has_hunger(self) -> bool {
        self.role() != Role::Drifter
    }

    /// Food gained when `self` eats `prey`, or `None` if `prey` is not in
    /// this species' diet.
    pub fn food_value(self, prey: Species) -> Option<u32> {
        match (self, prey) {
            (Species::Fox, Species::Rabbit)       => Some(18),
            (Species::Megalodon, Species::Rabbit) => Some(10),
            (Species::Megalodon, Species::Fox)    => Some(25),
            (Species::Megalodon, Species::Whale)  => Some(100),
            _                                     => None,
        }
    }

    /// Dense index used by per-species count arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Species::Fox       => "Fox",
            Species::Megalodon => "Megalodon",
            Species::Rabbit    => "Rabbit",
            Species::Whale     => "Whale",
            Species::Jellyfish => "Jellyfish",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

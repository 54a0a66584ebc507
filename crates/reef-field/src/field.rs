//! The rectangular field: one agent slot and one krill stock per cell.
//!
//! # Storage
//!
//! Both grids are flat row-major `Vec`s of length `depth * width`:
//!
//! ```ignore
//! let i = loc.row * width + loc.col;
//! grid[i]   // Option<AgentId>
//! krill[i]  // u32 in 0..=MAX_KRILL
//! ```
//!
//! Every accessor that takes a `Location` asserts it is in bounds.  Callers
//! only ever obtain locations from the field itself (neighbor queries) or
//! from checked entry points, so a failure here is a logic bug.

use reef_core::{AgentId, Location, RandomSource};

use crate::{Weather, WeatherMode};

/// Upper bound on krill in one cell.
pub const MAX_KRILL: u32 = 40;

/// Krill added to a cell by one successful growth roll.
pub const GROWTH_INCREMENT: u32 = 2;

/// Krill in every cell after a reset.
pub const STARTING_KRILL: u32 = 20;

pub struct Field {
    depth:   usize,
    width:   usize,
    grid:    Vec<Option<AgentId>>,
    krill:   Vec<u32>,
    weather: Weather,
    is_day:  bool,
}

impl Field {
    /// An empty `depth` x `width` field with full starting krill, normal
    /// weather, and daylight.
    ///
    /// # Panics
    /// Panics if either dimension is zero.  Configuration code substitutes
    /// defaults before getting here.
    pub fn new(depth: usize, width: usize) -> Self {
        assert!(depth > 0 && width > 0, "field dimensions must be positive, got {depth}x{width}");
        let cells = depth * width;
        Self {
            depth,
            width,
            grid:    vec![None; cells],
            krill:   vec![STARTING_KRILL; cells],
            weather: Weather::new(),
            is_day:  true,
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `true` if `loc` lies on this field.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.within(self.depth, self.width)
    }

    /// All locations in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.depth).flat_map(move |row| (0..self.width).map(move |col| Location::new(row, col)))
    }

    #[inline]
    fn index(&self, loc: Location) -> usize {
        assert!(
            self.contains(loc),
            "location {loc} is outside the {}x{} field",
            self.depth,
            self.width
        );
        loc.row * self.width + loc.col
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// Put `agent` at `loc`.  Any previous occupant handle is overwritten.
    #[inline]
    pub fn place(&mut self, agent: AgentId, loc: Location) {
        let i = self.index(loc);
        self.grid[i] = Some(agent);
    }

    /// Empty the cell at `loc`.
    #[inline]
    pub fn clear(&mut self, loc: Location) {
        let i = self.index(loc);
        self.grid[i] = None;
    }

    /// Empty every cell.  Krill is untouched.
    pub fn clear_all(&mut self) {
        self.grid.fill(None);
    }

    /// The agent at `loc`, if any.
    #[inline]
    pub fn object_at(&self, loc: Location) -> Option<AgentId> {
        self.grid[self.index(loc)]
    }

    #[inline]
    pub fn is_free(&self, loc: Location) -> bool {
        self.object_at(loc).is_none()
    }

    /// Occupied cells in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Location, AgentId)> + '_ {
        self.grid.iter().enumerate().filter_map(|(i, slot)| {
            slot.map(|id| (Location::new(i / self.width, i % self.width), id))
        })
    }

    // ── Neighborhood queries ──────────────────────────────────────────────

    /// In-bounds neighbors of `loc` (up to 8), shuffled.
    ///
    /// Callers that take "the first match" from this list get an unbiased
    /// random match.
    pub fn adjacent_locations<R: RandomSource>(&self, loc: Location, rng: &mut R) -> Vec<Location> {
        assert!(self.contains(loc), "location {loc} is outside the {}x{} field", self.depth, self.width);
        let mut adjacent = loc.neighbors(self.depth, self.width);
        rng.shuffle(&mut adjacent);
        adjacent
    }

    /// Unoccupied neighbors of `loc`, shuffled.
    ///
    /// Births pop sites off the front of this list, so two newborns from one
    /// litter never share a cell.
    pub fn free_adjacent_locations<R: RandomSource>(&self, loc: Location, rng: &mut R) -> Vec<Location> {
        let mut free = self.adjacent_locations(loc, rng);
        free.retain(|&l| self.is_free(l));
        free
    }

    /// One unoccupied neighbor of `loc`, or `None` if all are taken.
    pub fn free_adjacent_location<R: RandomSource>(&self, loc: Location, rng: &mut R) -> Option<Location> {
        self.free_adjacent_locations(loc, rng).first().copied()
    }

    // ── Krill ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn krill_at(&self, loc: Location) -> u32 {
        self.krill[self.index(loc)]
    }

    /// Remove up to `appetite` krill from `loc` and return how much was
    /// taken.  Overdraw is clamped to what the cell holds.
    pub fn eat_krill(&mut self, appetite: u32, loc: Location) -> u32 {
        let i = self.index(loc);
        let eaten = appetite.min(self.krill[i]);
        self.krill[i] -= eaten;
        eaten
    }

    /// Regrow krill everywhere with the probability set by current weather.
    pub fn grow_krill<R: RandomSource>(&mut self, rng: &mut R) {
        let p = self.weather.mode().krill_growth_probability();
        self.grow_krill_with(p, rng);
    }

    /// Regrow krill with an explicit per-cell probability.
    ///
    /// One roll is taken per cell in row-major order, full cells included,
    /// so the number of draws does not depend on the krill state.
    pub fn grow_krill_with<R: RandomSource>(&mut self, probability: f64, rng: &mut R) {
        for k in &mut self.krill {
            if rng.chance(probability) {
                *k = (*k + GROWTH_INCREMENT).min(MAX_KRILL);
            }
        }
    }

    /// Every cell back to [`STARTING_KRILL`].
    pub fn reset_krill(&mut self) {
        self.krill.fill(STARTING_KRILL);
    }

    /// Sum of krill over the whole field.
    pub fn total_krill(&self) -> u64 {
        self.krill.iter().map(|&k| u64::from(k)).sum()
    }

    // ── Weather and daylight ──────────────────────────────────────────────

    /// Advance the weather process by one tick.
    pub fn update_weather<R: RandomSource>(&mut self, rng: &mut R) {
        self.weather.tick(rng);
    }

    #[inline]
    pub fn weather(&self) -> &Weather {
        &self.weather
    }

    #[inline]
    pub fn weather_mode(&self) -> WeatherMode {
        self.weather.mode()
    }

    pub fn reset_weather(&mut self) {
        self.weather.reset();
    }

    #[inline]
    pub fn is_day(&self) -> bool {
        self.is_day
    }

    /// Set by the simulator's clock once per step.
    #[inline]
    pub fn set_day(&mut self, is_day: bool) {
        self.is_day = is_day;
    }
}

//! Unit tests for reef-field.

#[cfg(test)]
mod weather_tests {
    use reef_core::{ScriptedSource, SimRng};

    use crate::weather::MAX_DURATION;
    use crate::{Weather, WeatherMode};

    #[test]
    fn starts_normal() {
        let w = Weather::new();
        assert_eq!(w.mode(), WeatherMode::Normal);
        assert_eq!((w.elapsed(), w.duration()), (0, 0));
    }

    #[test]
    fn failed_rolls_stay_normal() {
        let mut w = Weather::new();
        let mut rng = ScriptedSource::new();
        for _ in 0..10 {
            w.tick(&mut rng);
        }
        assert_eq!(w, Weather::new());
    }

    #[test]
    fn rain_onset_then_returns_to_normal_after_duration() {
        let mut w = Weather::new();
        // Rain roll succeeds; duration index 4 → 5 ticks.
        let mut rng = ScriptedSource::new().with_doubles([0.0]).with_ints([4]);
        w.tick(&mut rng);
        assert_eq!(w.mode(), WeatherMode::Raining);
        assert!(w.is_raining());
        let duration = w.duration();
        assert_eq!(duration, 5);
        assert!(duration > 0 && duration <= MAX_DURATION);

        for i in 0..duration {
            assert_eq!(w.mode(), WeatherMode::Raining, "still raining before tick {i}");
            assert!(w.elapsed() < w.duration());
            w.tick(&mut rng);
        }
        assert_eq!(w.mode(), WeatherMode::Normal);
        assert_eq!((w.elapsed(), w.duration()), (0, 0));
    }

    #[test]
    fn drought_only_rolled_after_rain_fails() {
        let mut w = Weather::new();
        let mut rng = ScriptedSource::new().with_doubles([0.5, 0.0]).with_ints([0]);
        w.tick(&mut rng);
        assert!(w.is_drought());
        assert_eq!(w.duration(), 1);
        w.tick(&mut rng);
        assert_eq!(w.mode(), WeatherMode::Normal);
    }

    #[test]
    fn duration_never_exceeds_max() {
        let mut w = Weather::new();
        let mut rng = ScriptedSource::new().with_doubles([0.0]).with_ints([1000]);
        w.tick(&mut rng);
        assert_eq!(w.duration(), MAX_DURATION);
    }

    #[test]
    fn invariant_holds_under_random_ticks() {
        let mut w = Weather::new();
        let mut rng = SimRng::new(7);
        for _ in 0..20_000 {
            w.tick(&mut rng);
            match w.mode() {
                WeatherMode::Normal => assert_eq!((w.elapsed(), w.duration()), (0, 0)),
                _ => {
                    assert!(w.elapsed() < w.duration());
                    assert!((1..=MAX_DURATION).contains(&w.duration()));
                }
            }
        }
    }

    #[test]
    fn rates_follow_mode() {
        assert_eq!(WeatherMode::Raining.disease_spread_rate(), 0.025);
        assert_eq!(WeatherMode::Normal.disease_spread_rate(), 0.01);
        assert_eq!(WeatherMode::Drought.disease_spread_rate(), 0.01);
        assert_eq!(WeatherMode::Normal.krill_growth_probability(), 0.80);
        assert_eq!(WeatherMode::Raining.krill_growth_probability(), 0.99);
        assert_eq!(WeatherMode::Drought.krill_growth_probability(), 0.10);
    }

    #[test]
    fn labels() {
        assert_eq!(WeatherMode::Normal.to_string(), "Normal");
        assert_eq!(WeatherMode::Raining.to_string(), "Rain");
        assert_eq!(WeatherMode::Drought.to_string(), "Drought");
    }
}

#[cfg(test)]
mod occupancy_tests {
    use std::collections::HashSet;

    use reef_core::{AgentId, Location, ScriptedSource, SimRng};

    use crate::Field;

    #[test]
    fn place_and_clear() {
        let mut field = Field::new(3, 3);
        let loc = Location::new(1, 2);
        assert!(field.is_free(loc));
        field.place(AgentId(5), loc);
        assert_eq!(field.object_at(loc), Some(AgentId(5)));
        field.clear(loc);
        assert_eq!(field.object_at(loc), None);
    }

    #[test]
    fn place_overwrites_previous_occupant() {
        let mut field = Field::new(2, 2);
        let loc = Location::new(0, 0);
        field.place(AgentId(1), loc);
        field.place(AgentId(2), loc);
        assert_eq!(field.object_at(loc), Some(AgentId(2)));
    }

    #[test]
    fn clear_all_empties_grid_only() {
        let mut field = Field::new(2, 2);
        field.place(AgentId(0), Location::new(0, 0));
        field.eat_krill(5, Location::new(0, 0));
        field.clear_all();
        assert_eq!(field.occupants().count(), 0);
        assert_eq!(field.krill_at(Location::new(0, 0)), 15);
    }

    #[test]
    fn occupants_row_major() {
        let mut field = Field::new(2, 3);
        field.place(AgentId(9), Location::new(1, 2));
        field.place(AgentId(4), Location::new(0, 1));
        let occ: Vec<_> = field.occupants().collect();
        assert_eq!(occ, vec![(Location::new(0, 1), AgentId(4)), (Location::new(1, 2), AgentId(9))]);
    }

    #[test]
    fn adjacency_properties_hold_everywhere() {
        let field = Field::new(6, 7);
        let mut rng = SimRng::new(3);
        for loc in field.locations() {
            let adj = field.adjacent_locations(loc, &mut rng);
            assert!((3..=8).contains(&adj.len()), "{loc}: {} neighbors", adj.len());
            assert!(!adj.contains(&loc));
            assert!(adj.iter().all(|&l| field.contains(l)));
            let unique: HashSet<_> = adj.iter().collect();
            assert_eq!(unique.len(), adj.len(), "duplicates around {loc}");
        }
    }

    #[test]
    fn corner_and_interior_counts() {
        let field = Field::new(5, 5);
        let mut rng = SimRng::new(1);
        assert_eq!(field.adjacent_locations(Location::new(0, 0), &mut rng).len(), 3);
        assert_eq!(field.adjacent_locations(Location::new(4, 4), &mut rng).len(), 3);
        assert_eq!(field.adjacent_locations(Location::new(2, 2), &mut rng).len(), 8);
    }

    #[test]
    fn adjacency_is_shuffled() {
        let field = Field::new(5, 5);
        let mut rng = SimRng::new(11);
        let center = Location::new(2, 2);
        let first = field.adjacent_locations(center, &mut rng);
        let differs = (0..20).any(|_| field.adjacent_locations(center, &mut rng) != first);
        assert!(differs, "neighbor order never changed across 20 draws");
    }

    #[test]
    fn free_adjacent_skips_occupied() {
        let mut field = Field::new(3, 3);
        let mut rng = ScriptedSource::new();
        for loc in Location::new(1, 1).neighbors(3, 3) {
            if loc != Location::new(2, 2) {
                field.place(AgentId(0), loc);
            }
        }
        let free = field.free_adjacent_locations(Location::new(1, 1), &mut rng);
        assert_eq!(free, vec![Location::new(2, 2)]);
        assert_eq!(field.free_adjacent_location(Location::new(1, 1), &mut rng), Some(Location::new(2, 2)));

        field.place(AgentId(1), Location::new(2, 2));
        assert_eq!(field.free_adjacent_location(Location::new(1, 1), &mut rng), None);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_fails_fast() {
        let field = Field::new(3, 3);
        let _ = field.object_at(Location::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_dimension_panics() {
        let _ = Field::new(0, 4);
    }
}

#[cfg(test)]
mod krill_tests {
    use reef_core::{Location, ScriptedSource};

    use crate::{Field, MAX_KRILL, STARTING_KRILL, WeatherMode};

    #[test]
    fn eat_within_stock() {
        let mut field = Field::new(2, 2);
        let loc = Location::new(0, 1);
        assert_eq!(field.eat_krill(7, loc), 7);
        assert_eq!(field.krill_at(loc), STARTING_KRILL - 7);
    }

    #[test]
    fn eat_clamped_to_stock() {
        let mut field = Field::new(2, 2);
        let loc = Location::new(1, 1);
        assert_eq!(field.eat_krill(75, loc), STARTING_KRILL);
        assert_eq!(field.krill_at(loc), 0);
        assert_eq!(field.eat_krill(3, loc), 0);
        assert_eq!(field.krill_at(loc), 0);
    }

    #[test]
    fn eat_zero_appetite() {
        let mut field = Field::new(1, 1);
        let loc = Location::new(0, 0);
        assert_eq!(field.eat_krill(0, loc), 0);
        assert_eq!(field.krill_at(loc), STARTING_KRILL);
    }

    #[test]
    fn growth_capped_at_max() {
        let mut field = Field::new(3, 3);
        let mut rng = ScriptedSource::new().default_double(0.0);
        for _ in 0..50 {
            field.grow_krill_with(1.0, &mut rng);
            assert!(field.locations().all(|l| field.krill_at(l) <= MAX_KRILL));
        }
        assert!(field.locations().all(|l| field.krill_at(l) == MAX_KRILL));
    }

    #[test]
    fn growth_adds_increment_on_success_only() {
        let mut field = Field::new(1, 2);
        let mut rng = ScriptedSource::new().with_doubles([0.0, 0.95]);
        field.grow_krill(&mut rng); // Normal: p = 0.80
        assert_eq!(field.krill_at(Location::new(0, 0)), STARTING_KRILL + 2);
        assert_eq!(field.krill_at(Location::new(0, 1)), STARTING_KRILL);
    }

    #[test]
    fn full_cells_unchanged_under_drought() {
        let mut field = Field::new(2, 2);
        let mut rng = ScriptedSource::new().default_double(0.0);
        for _ in 0..10 {
            field.grow_krill_with(1.0, &mut rng);
        }
        // Force a drought: rain fails, drought succeeds, duration 10.
        let mut weather_rng = ScriptedSource::new().with_doubles([0.5, 0.0]).with_ints([9]);
        field.update_weather(&mut weather_rng);
        assert_eq!(field.weather_mode(), WeatherMode::Drought);

        field.grow_krill(&mut rng);
        assert!(field.locations().all(|l| field.krill_at(l) == MAX_KRILL));
    }

    #[test]
    fn reset_restores_starting_stock() {
        let mut field = Field::new(2, 3);
        field.eat_krill(20, Location::new(0, 0));
        field.eat_krill(4, Location::new(1, 2));
        field.reset_krill();
        assert_eq!(field.total_krill(), 6 * u64::from(STARTING_KRILL));
    }

    #[test]
    fn day_flag_round_trips() {
        let mut field = Field::new(1, 1);
        assert!(field.is_day());
        field.set_day(false);
        assert!(!field.is_day());
    }
}

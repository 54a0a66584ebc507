use reef_field::Field;

/// Read-only conditions for one step, fixed before any agent acts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepContext {
    pub is_day:              bool,
    /// Chance that an infected agent infects each uninfected neighbor.
    pub disease_spread_rate: f64,
}

impl StepContext {
    /// Snapshot the field's day flag and weather.
    pub fn from_field(field: &Field) -> Self {
        Self {
            is_day:              field.is_day(),
            disease_spread_rate: field.weather_mode().disease_spread_rate(),
        }
    }

    pub fn day(disease_spread_rate: f64) -> Self {
        Self { is_day: true, disease_spread_rate }
    }

    pub fn night(disease_spread_rate: f64) -> Self {
        Self { is_day: false, disease_spread_rate }
    }
}

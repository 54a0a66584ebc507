//! Plain data row types written by output backends.

use reef_agent::{Agent, Species};
use reef_core::AgentId;
use reef_sim::StepReport;

/// One agent's state at a snapshot step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub step:       u64,
    pub agent_id:   u32,
    pub species:    &'static str,
    pub row:        usize,
    pub col:        usize,
    pub age:        u32,
    /// `None` for species without hunger.
    pub food_level: Option<u32>,
    pub male:       bool,
    pub infected:   bool,
}

impl AgentSnapshotRow {
    pub fn new(step: u64, id: AgentId, agent: &Agent) -> Self {
        let at = agent.location();
        Self {
            step,
            agent_id:   id.0,
            species:    agent.species().as_str(),
            row:        at.row,
            col:        at.col,
            age:        agent.age(),
            food_level: agent.food_level(),
            male:       agent.is_male(),
            infected:   agent.is_infected(),
        }
    }
}

/// Counts and conditions after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:        u64,
    pub day:         u64,
    pub hour:        u64,
    pub is_day:      bool,
    pub weather:     &'static str,
    pub fox:         usize,
    pub megalodon:   usize,
    pub rabbit:      usize,
    pub whale:       usize,
    pub jellyfish:   usize,
    pub infected:    usize,
    pub births:      usize,
    pub deaths:      usize,
    pub total_krill: u64,
}

impl From<&StepReport> for StepSummaryRow {
    fn from(report: &StepReport) -> Self {
        let count = |s: Species| report.counts.get(s);
        Self {
            step:        report.step,
            day:         report.day,
            hour:        report.hour,
            is_day:      report.is_day,
            weather:     report.weather.as_str(),
            fox:         count(Species::Fox),
            megalodon:   count(Species::Megalodon),
            rabbit:      count(Species::Rabbit),
            whale:       count(Species::Whale),
            jellyfish:   count(Species::Jellyfish),
            infected:    report.counts.infected,
            births:      report.births(),
            deaths:      report.deaths(),
            total_krill: report.total_krill,
        }
    }
}

//! A mobile sink: position plus its own mobility model.

use cov_core::{AgentId, Point, SimRng};
use cov_mobility::{MobilityModel, MobilityParams};

/// One mobile sink.  Owns its position and a private model instance; no
/// motion state is shared between agents.
#[derive(Clone, Debug)]
pub struct Agent {
    pub id:       AgentId,
    pub position: Point,
    pub model:    MobilityModel,
}

impl Agent {
    pub fn new(id: AgentId, position: Point, model: MobilityModel) -> Self {
        Self { id, position, model }
    }

    /// Advance this agent by one time step, mutating its position in place.
    #[inline]
    pub fn step(&mut self, params: &MobilityParams, rng: &mut SimRng) {
        self.model.step(&mut self.position, params, rng);
    }
}

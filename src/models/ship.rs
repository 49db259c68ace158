use super::config::GameConfig;
use super::constants::ShipSystem;
use super::position::{QuadrantPosition, SectorPosition};
use super::systems::SystemTable;

/// The player's starship.
pub struct Ship {
    pub quadrant: QuadrantPosition,
    pub sector: SectorPosition,
    pub energy: f64,
    pub max_energy: f64,
    pub shields: f64,
    pub shields_up: bool,
    pub torpedoes: i32,
    pub max_torpedoes: i32,
    pub docked: bool,
    pub destroyed: bool,
    pub systems: SystemTable,
}

impl Ship {
    pub fn new(config: &GameConfig, quadrant: QuadrantPosition, sector: SectorPosition) -> Self {
        Ship {
            quadrant,
            sector,
            energy: config.initial_energy,
            max_energy: config.initial_energy,
            shields: 0.0,
            shields_up: false,
            torpedoes: config.initial_torpedoes,
            max_torpedoes: config.initial_torpedoes,
            docked: false,
            destroyed: false,
            systems: SystemTable::new(),
        }
    }

    pub fn is_operational(&self, system: ShipSystem) -> bool {
        self.systems.is_operational(system)
    }

    pub fn move_to(&mut self, quadrant: QuadrantPosition, sector: SectorPosition) {
        self.quadrant = quadrant;
        self.sector = sector;
    }

    /// Full resupply and repair at a starbase. Shields drop while docked.
    pub fn dock(&mut self) {
        self.energy = self.max_energy;
        self.torpedoes = self.max_torpedoes;
        self.shields_up = false;
        self.docked = true;
        self.systems.repair_all();
    }
}

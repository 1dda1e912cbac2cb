//! Yard equipment: vehicles that run tasks, and chargers.

use std::fmt;

use yard_core::VehicleId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EquipmentKind {
    Vehicle,
    Charging,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equipment {
    pub id:   String,
    pub name: String,
    pub kind: EquipmentKind,
}

impl Equipment {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: EquipmentKind) -> Self {
        Self { id: id.into(), name: name.into(), kind }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// `count` tugs labelled `TUG-01`, `TUG-02`, … named `Tug 1`, `Tug 2`, …
pub fn make_agvs(count: u32) -> Vec<Equipment> {
    (0..count)
        .map(|i| Equipment::new(VehicleId(i).to_string(), format!("Tug {}", i + 1), EquipmentKind::Vehicle))
        .collect()
}

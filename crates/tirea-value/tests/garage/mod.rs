//! Car, engine and tuning kit value types shared by the integration tests.
//!
//! Each type has a real constructor plus a zero-argument default used by
//! structural replace.

#![allow(dead_code)]

use tirea_value::{Immutable, SlotTable, Val, Var};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Yellow,
    Red,
}

#[derive(Debug, Immutable)]
#[tirea(default = "TuningKit::new(0)")]
pub struct TuningKit {
    slots: SlotTable,
    /// Horsepower added per cylinder.
    boost_per_cylinder: Var<u32>,
}

impl TuningKit {
    pub fn new(boost: u32) -> Self {
        let mut slots = SlotTable::builder::<Self>();
        let boost_per_cylinder = slots.var(boost);
        Self {
            slots: slots.finish(),
            boost_per_cylinder,
        }
    }
}

#[derive(Debug, Immutable)]
#[tirea(default = "Engine::new(0)")]
pub struct Engine {
    slots: SlotTable,
    /// Horsepower each cylinder has without tuning.
    baseline_power: Val<u32>,
    cylinders: Val<u32>,
    tuning_kit: Var<Option<TuningKit>>,
}

impl Engine {
    pub const BASELINE_POWER: u32 = 25;

    pub fn new(cylinders: u32) -> Self {
        let mut slots = SlotTable::builder::<Self>();
        let baseline_power = slots.val(Self::BASELINE_POWER);
        let cylinders = slots.val(cylinders);
        let tuning_kit = slots.var(None);
        Self {
            slots: slots.finish(),
            baseline_power,
            cylinders,
            tuning_kit,
        }
    }

    pub fn boost(&self) -> u32 {
        self.tuning_kit()
            .get()
            .as_ref()
            .map_or(0, |kit| *kit.boost_per_cylinder().get())
    }

    pub fn power(&self) -> u32 {
        self.cylinders().get() * (self.baseline_power().get() + self.boost())
    }
}

#[derive(Debug, Immutable)]
#[tirea(default = "Car::new(-1)")]
pub struct Car {
    slots: SlotTable,
    model_number: Val<i64>,
    color: Var<Color>,
    engine: Var<Engine>,
}

impl Car {
    pub fn new(model_number: i64) -> Self {
        let mut slots = SlotTable::builder::<Self>();
        let model_number = slots.val(model_number);
        let color = slots.var(Color::Blue);
        let engine = slots.var(Engine::new(6));
        Self {
            slots: slots.finish(),
            model_number,
            color,
            engine,
        }
    }

    pub fn power(&self) -> u32 {
        self.engine().get().power()
    }
}

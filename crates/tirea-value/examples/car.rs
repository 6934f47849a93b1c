//! Painting and tuning a car without ever mutating it.
//!
//! Run with: RUST_LOG=tirea_value=trace cargo run --example car

use std::sync::Arc;
use tirea_value::{Immutable, SlotResult, SlotTable, Val, Var};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Blue,
    Yellow,
}

#[derive(Immutable)]
#[tirea(default = "TuningKit::new(0)")]
struct TuningKit {
    slots: SlotTable,
    /// Horsepower added per cylinder.
    boost_per_cylinder: Var<u32>,
}

impl TuningKit {
    fn new(boost: u32) -> Self {
        let mut slots = SlotTable::builder::<Self>();
        let boost_per_cylinder = slots.var(boost);
        Self {
            slots: slots.finish(),
            boost_per_cylinder,
        }
    }
}

#[derive(Immutable)]
#[tirea(default = "Engine::new(0)")]
struct Engine {
    slots: SlotTable,
    /// Horsepower per cylinder; cannot be changed.
    baseline_power: Val<u32>,
    /// Cannot be changed either.
    cylinders: Val<u32>,
    /// But the engine can be tuned.
    tuning_kit: Var<Option<TuningKit>>,
}

impl Engine {
    fn new(cylinders: u32) -> Self {
        let mut slots = SlotTable::builder::<Self>();
        let baseline_power = slots.val(25);
        let cylinders = slots.val(cylinders);
        let tuning_kit = slots.var(None);
        Self {
            slots: slots.finish(),
            baseline_power,
            cylinders,
            tuning_kit,
        }
    }
}

#[derive(Immutable)]
#[tirea(default = "Car::new(-1)")]
struct Car {
    slots: SlotTable,
    model_number: Val<i64>,
    /// Changed by bringing the car to the paint shop.
    color: Var<Color>,
    engine: Var<Engine>,
}

impl Car {
    fn new(model_number: i64) -> Self {
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

    fn power(&self) -> u32 {
        let engine = self.engine().get();
        let boost = engine
            .tuning_kit()
            .get()
            .as_ref()
            .map_or(0, |kit| *kit.boost_per_cylinder().get());
        engine.cylinders().get() * (engine.baseline_power().get() + boost)
    }
}

fn main() -> SlotResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let first_car = Car::new(1);
    println!(
        "car #{}: {} ps, {:?}",
        first_car.model_number().get(),
        first_car.power(),
        first_car.color().get()
    );

    let yellow_car = first_car.color().set(Color::Yellow)?;
    println!(
        "color of the first car: {:?}; second car: {:?}",
        first_car.color().get(),
        yellow_car.color().get()
    );

    let tuned_car = yellow_car
        .engine()
        .try_update(|engine| engine.tuning_kit().set(Some(TuningKit::new(15))))?;
    println!(
        "power: yellow car {} ps; tuned version {} ps",
        yellow_car.power(),
        tuned_car.power()
    );

    // The boost is scaled by the cylinder count of the engine the kit sits in.
    let monster_car = tuned_car.engine().try_update(|engine| {
        let cylinders = *engine.cylinders().get();
        engine.tuning_kit().try_update(|kit| match kit {
            Some(kit) => kit
                .boost_per_cylinder()
                .replace_with(|boost| Arc::new(cylinders * *boost))
                .map(Some),
            None => Ok(None),
        })
    })?;
    println!(
        "power: tuned car {} ps; monster version {} ps",
        tuned_car.power(),
        monster_car.power()
    );

    Ok(())
}

//! Thread safety tests for tirea-value.
//!
//! Published instances are read-only, so they can be shared across threads
//! and used as the source of concurrent replaces.

#![cfg(feature = "derive")]

mod garage;

use garage::{Car, Color, TuningKit};
use std::sync::Arc;
use std::thread;
use tirea_value::{ImmutableExt, SlotTable};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_value_types_are_send_and_sync() {
    assert_send_sync::<SlotTable>();
    assert_send_sync::<Car>();
    assert_send_sync::<TuningKit>();
}

#[test]
fn test_concurrent_reads() {
    let car = Arc::new(Car::new(1));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let car = Arc::clone(&car);
            thread::spawn(move || (car.power(), *car.color().get()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (150, Color::Blue));
    }
}

#[test]
fn test_concurrent_replaces_from_one_source_are_independent() {
    let car = Arc::new(Car::new(1));

    let handles: Vec<_> = (0..16_u32)
        .map(|boost| {
            let car = Arc::clone(&car);
            thread::spawn(move || {
                car.engine()
                    .try_update(|engine| engine.tuning_kit().set(Some(TuningKit::new(boost))))
                    .unwrap()
            })
        })
        .collect();

    let tuned: Vec<Car> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for (boost, next) in tuned.iter().enumerate() {
        assert_eq!(next.power(), 6 * (25 + boost as u32));
        assert!(!next.shares_slots_with(&car));
    }
    assert_eq!(car.power(), 150);
    assert!(car.engine().get().tuning_kit().get().is_none());
}

#[test]
fn test_instance_moves_across_threads() {
    let car = Car::new(3);
    let painted = thread::spawn(move || car.color().set(Color::Red).unwrap())
        .join()
        .unwrap();

    assert_eq!(*painted.color().get(), Color::Red);
    assert_eq!(*painted.model_number().get(), 3);
}

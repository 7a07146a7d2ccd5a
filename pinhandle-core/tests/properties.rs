//! Property tests for registry behavior

use pinhandle_core::{AllocError, PinRegistry, StaticPool};
use proptest::prelude::*;

type Pins = PinRegistry<StaticPool<16>>;

/// One registry operation applied to a pin
#[derive(Debug, Clone, Copy)]
enum Op {
    Direction(bool),
    State(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Direction),
        any::<bool>().prop_map(Op::State),
    ]
}

proptest! {
    #[test]
    fn fresh_pin_is_low_input(port in any::<u8>(), pin in any::<u8>()) {
        let mut pins = Pins::new();
        let h = pins.create(port, pin).unwrap();

        prop_assert!(!pins.direction(&h));
        prop_assert!(!pins.state(&h));
        prop_assert_eq!(pins.port(&h), port);
        prop_assert_eq!(pins.pin(&h), pin);
    }

    #[test]
    fn input_writes_are_ignored(writes in prop::collection::vec(any::<bool>(), 0..32)) {
        let mut pins = Pins::new();
        let h = pins.create(0, 0).unwrap();

        for level in writes {
            pins.set_state(&h, level);
            prop_assert!(!pins.state(&h));
        }
    }

    #[test]
    fn output_round_trip(levels in prop::collection::vec(any::<bool>(), 1..32)) {
        let mut pins = Pins::new();
        let h = pins.create(0, 0).unwrap();
        pins.set_direction(&h, true);

        for level in levels {
            pins.set_state(&h, level);
            prop_assert_eq!(pins.state(&h), level);
        }
    }

    #[test]
    fn direction_never_changes_state(ops in prop::collection::vec(op(), 0..64)) {
        let mut pins = Pins::new();
        let h = pins.create(0, 0).unwrap();

        // Reference model: level only moves on writes to an output
        let mut output = false;
        let mut level = false;

        for op in ops {
            match op {
                Op::Direction(out) => {
                    let before = pins.state(&h);
                    pins.set_direction(&h, out);
                    output = out;
                    prop_assert_eq!(pins.state(&h), before);
                }
                Op::State(high) => {
                    pins.set_state(&h, high);
                    if output {
                        level = high;
                    }
                }
            }
            prop_assert_eq!(pins.direction(&h), output);
            prop_assert_eq!(pins.state(&h), level);
        }
    }

    #[test]
    fn pins_are_independent(ops in prop::collection::vec(op(), 0..64)) {
        let mut pins = Pins::new();
        let target = pins.create(1, 1).unwrap();
        let bystander = pins.create(1, 2).unwrap();
        pins.set_direction(&bystander, true);
        pins.set_state(&bystander, true);

        for op in ops {
            match op {
                Op::Direction(out) => pins.set_direction(&target, out),
                Op::State(high) => pins.set_state(&target, high),
            }
            prop_assert!(pins.direction(&bystander));
            prop_assert!(pins.state(&bystander));
        }
    }

    #[test]
    fn pool_holds_exactly_capacity(extra in 1usize..8) {
        let mut pins = PinRegistry::<StaticPool<5>>::new();

        for i in 0..5u8 {
            prop_assert!(pins.create(i, i).is_ok());
        }
        for _ in 0..extra {
            prop_assert_eq!(pins.create(0, 0), Err(AllocError::AllocationExhausted));
        }
        prop_assert_eq!(pins.allocated(), 5);
    }
}

#[cfg(all(feature = "alloc", not(feature = "static-pool")))]
#[test]
fn heap_registry_never_exhausts_in_practice() {
    use pinhandle_core::HeapAllocator;

    let mut pins = PinRegistry::<HeapAllocator>::new();
    let handles: Vec<_> = (0..64u8).map(|i| pins.create(i, i).unwrap()).collect();

    assert_eq!(pins.allocated(), 64);
    for (i, h) in handles.iter().enumerate() {
        assert_eq!(pins.port(h), i as u8);
        assert!(!pins.state(h));
    }
}

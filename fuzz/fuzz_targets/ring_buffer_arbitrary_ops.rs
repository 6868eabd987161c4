#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use seqkit::ds::{BufferPolicy, CapacityPolicy, OverflowPolicy, RingBuffer};

// Fuzz arbitrary operation sequences on RingBuffer
//
// The first byte picks the policy and initial capacity; every following
// byte pair is (op, value). A VecDeque model tracks the expected contents
// under each overflow policy.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity_policy = if data[0] & 1 == 0 {
        CapacityPolicy::Fixed
    } else {
        CapacityPolicy::Dynamic
    };
    let overflow = if data[0] & 2 == 0 {
        OverflowPolicy::Reject
    } else {
        OverflowPolicy::Replace
    };
    let capacity = usize::from(data[1] % 16);
    let policy = BufferPolicy::new(capacity_policy, overflow);

    let mut ring: RingBuffer<u8> = RingBuffer::new(capacity, policy);
    let mut model: VecDeque<u8> = VecDeque::new();

    let mut idx = 2;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let value = data[idx + 1];
        let full = ring.is_full();
        let fixed = ring.policy().capacity == CapacityPolicy::Fixed;

        match op {
            0 => {
                // push_back
                let result = ring.push_back(value).map(|slot| *slot);
                if fixed && full {
                    match ring.policy().overflow {
                        OverflowPolicy::Reject => assert!(result.is_err()),
                        OverflowPolicy::Replace if ring.capacity() == 0 => {
                            assert!(result.is_err());
                        }
                        OverflowPolicy::Replace => {
                            assert_eq!(result, Ok(value));
                            model.pop_front();
                            model.push_back(value);
                        }
                    }
                } else {
                    assert_eq!(result, Ok(value));
                    model.push_back(value);
                }
            }
            1 => {
                // push_front
                let result = ring.push_front(value).map(|slot| *slot);
                if fixed && full {
                    match ring.policy().overflow {
                        OverflowPolicy::Reject => assert!(result.is_err()),
                        OverflowPolicy::Replace if ring.capacity() == 0 => {
                            assert!(result.is_err());
                        }
                        OverflowPolicy::Replace => {
                            assert_eq!(result, Ok(value));
                            model.pop_back();
                            model.push_front(value);
                        }
                    }
                } else {
                    assert_eq!(result, Ok(value));
                    model.push_front(value);
                }
            }
            2 => {
                // pop_back
                assert_eq!(ring.pop_back().ok(), model.pop_back());
            }
            3 => {
                // pop_front
                assert_eq!(ring.pop_front().ok(), model.pop_front());
            }
            4 => {
                // remove
                if model.is_empty() {
                    assert!(ring.remove(usize::from(value)).is_err());
                } else {
                    let pos = usize::from(value) % model.len();
                    assert_eq!(ring.remove(pos).ok(), model.remove(pos));
                }
            }
            5 => {
                // get (read-only)
                let pos = usize::from(value);
                assert_eq!(ring.get(pos), model.get(pos));
            }
            6 => {
                // linearize
                let slice = ring.linearize().to_vec();
                assert_eq!(slice, model.iter().copied().collect::<Vec<_>>());
            }
            7 => {
                // clear
                ring.clear();
                model.clear();
                assert!(ring.is_empty());
            }
            _ => unreachable!(),
        }

        assert_eq!(ring.len(), model.len());
        ring.check_invariants().unwrap();

        idx += 2;
    }

    assert!(ring.iter().eq(model.iter()));
});

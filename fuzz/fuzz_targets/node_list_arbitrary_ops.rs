#![no_main]

use libfuzzer_sys::fuzz_target;
use seqkit::ds::NodeList;

// Fuzz arbitrary operation sequences on NodeList
//
// Tests random sequences of push_front, push_back, insert_before,
// insert_after, remove, get and clear, including operations on stale ids.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: NodeList<u32> = NodeList::new();
    let mut all_ids = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                // push_front
                let id = list.push_front(value);
                all_ids.push(id);
                assert_eq!(list.head(), Some(id));
                assert_eq!(list.get(id), Some(&value));
            }
            1 => {
                // push_back
                let id = list.push_back(value);
                all_ids.push(id);
                assert_eq!(list.tail(), Some(id));
                assert_eq!(list.get(id), Some(&value));
            }
            2 => {
                // insert_before
                if !all_ids.is_empty() {
                    let at = all_ids[(value as usize) % all_ids.len()];
                    let live = list.contains(at);
                    match list.insert_before(at, value) {
                        Some(id) => {
                            assert!(live);
                            assert_eq!(list.next(id), Some(at));
                            all_ids.push(id);
                        }
                        None => assert!(!live),
                    }
                }
            }
            3 => {
                // insert_after
                if !all_ids.is_empty() {
                    let at = all_ids[(value as usize) % all_ids.len()];
                    let live = list.contains(at);
                    match list.insert_after(at, value) {
                        Some(id) => {
                            assert!(live);
                            assert_eq!(list.prev(id), Some(at));
                            all_ids.push(id);
                        }
                        None => assert!(!live),
                    }
                }
            }
            4 => {
                // remove
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    let old_len = list.len();
                    if list.remove(id).is_some() {
                        assert_eq!(list.len(), old_len - 1);
                        assert!(!list.contains(id));
                    } else {
                        assert_eq!(list.len(), old_len);
                    }
                }
            }
            5 => {
                // get (read-only)
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    assert_eq!(list.get(id).is_some(), list.contains(id));
                }
            }
            6 => {
                // clear
                list.clear();
                assert!(list.is_empty());
                assert_eq!(list.head(), None);
                assert_eq!(list.tail(), None);
            }
            _ => unreachable!(),
        }

        assert_eq!(list.iter().count(), list.len());
        list.check_invariants().unwrap();

        idx += 2;
    }
});

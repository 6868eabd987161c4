#![no_main]

use libfuzzer_sys::fuzz_target;
use seqkit::ds::SqrtArray;

// Fuzz arbitrary operation sequences on SqrtArray
//
// Tests random sequences of push_back, pop_back, insert, remove, get and
// clear against a Vec model, checking the block layout after every step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut array: SqrtArray<u16> = SqrtArray::new();
    let mut model: Vec<u16> = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let value = u16::from(data[idx + 1]);

        match op {
            0 => {
                // push_back
                assert_eq!(*array.push_back(value), value);
                model.push(value);
            }
            1 => {
                // pop_back
                assert_eq!(array.pop_back().ok(), model.pop());
            }
            2 => {
                // insert
                let pos = usize::from(data[idx + 1]) % (model.len() + 1);
                assert_eq!(array.insert(pos, value).map(|slot| *slot), Ok(value));
                model.insert(pos, value);
            }
            3 => {
                // remove
                if model.is_empty() {
                    assert!(array.remove(0).is_err());
                } else {
                    let pos = usize::from(data[idx + 1]) % model.len();
                    assert_eq!(array.remove(pos), Ok(model.remove(pos)));
                }
            }
            4 => {
                // get (read-only)
                let pos = usize::from(data[idx + 1]);
                assert_eq!(array.get(pos), model.get(pos));
            }
            5 => {
                // clear
                array.clear();
                model.clear();
                assert!(array.is_empty());
                assert!(array.blocks().is_empty());
            }
            _ => unreachable!(),
        }

        assert_eq!(array.len(), model.len());
        array.check_invariants().unwrap();

        idx += 2;
    }

    assert!(array.iter().eq(model.iter()));
});

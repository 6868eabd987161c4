#![no_main]

use libfuzzer_sys::fuzz_target;
use seqkit::ds::{BlockChain, MIN_BLOCK_SIZE};

// Fuzz arbitrary operation sequences on BlockChain
//
// The first byte picks the block size; every following byte pair is
// (op, value). Small block sizes make spread and gather frequent.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let block_size = MIN_BLOCK_SIZE + usize::from(data[0] % 6);
    let mut chain: BlockChain<u16> = BlockChain::with_block_size(block_size);
    let mut model: Vec<u16> = Vec::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let value = u16::from(data[idx + 1]);

        match op {
            0 => {
                // push_back
                assert_eq!(*chain.push_back(value), value);
                model.push(value);
            }
            1 => {
                // push_front
                assert_eq!(*chain.push_front(value), value);
                model.insert(0, value);
            }
            2 => {
                // pop_back
                assert_eq!(chain.pop_back().ok(), model.pop());
            }
            3 => {
                // pop_front
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(chain.pop_front().ok(), expected);
            }
            4 => {
                // insert
                let pos = usize::from(data[idx + 1]) % (model.len() + 1);
                assert_eq!(chain.insert(pos, value).map(|slot| *slot), Ok(value));
                model.insert(pos, value);
            }
            5 => {
                // remove
                if model.is_empty() {
                    assert!(chain.remove(0).is_err());
                } else {
                    let pos = usize::from(data[idx + 1]) % model.len();
                    assert_eq!(chain.remove(pos), Ok(model.remove(pos)));
                }
            }
            6 => {
                // get (read-only)
                let pos = usize::from(data[idx + 1]);
                assert_eq!(chain.get(pos), model.get(pos));
                assert_eq!(chain.front(), model.first());
                assert_eq!(chain.back(), model.last());
            }
            7 => {
                // clear
                chain.clear();
                model.clear();
                assert_eq!(chain.node_count(), 0);
            }
            _ => unreachable!(),
        }

        assert_eq!(chain.len(), model.len());
        chain.check_invariants().unwrap();

        idx += 2;
    }

    assert!(chain.iter().eq(model.iter()));
});

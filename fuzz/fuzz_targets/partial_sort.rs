#![no_main]

use libfuzzer_sys::fuzz_target;

use incsort::PartialSort;

fuzz_target!(|data: &[u8]| {
    // The first byte picks how much of the input to consume.
    let Some((&fraction, rest)) = data.split_first() else {
        return;
    };

    let mut v = rest.to_vec();
    let k = (v.len() * fraction as usize) / u8::MAX as usize;

    let mut expected = v.clone();
    expected.sort_unstable();

    let produced = PartialSort::new(&mut v)
        .take(k)
        .copied()
        .collect::<Vec<_>>();
    assert_eq!(produced, expected[..k]);

    v.sort_unstable();
    assert_eq!(v, expected);
});

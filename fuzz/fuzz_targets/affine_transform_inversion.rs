#![no_main]

use libfuzzer_sys::fuzz_target;
use tools3d::matrix::fuzzing::{ArbitraryAffineTransform, fuzz_test_affine_transform_inversion};

fuzz_target!(|transform: ArbitraryAffineTransform| {
    fuzz_test_affine_transform_inversion(transform);
});

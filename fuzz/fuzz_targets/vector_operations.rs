#![no_main]

use libfuzzer_sys::fuzz_target;
use tools3d::vector::fuzzing::fuzz_test_vector_operations;

fuzz_target!(|vectors: (tools3d::Vector3D<f64>, tools3d::Vector3D<f64>)| {
    fuzz_test_vector_operations(vectors.0, vectors.1);
});

//! GPU integration test for the add-arrays pass. Needs a real adapter, so it
//! only runs with `cargo test --features integration-tests`.
#![cfg(feature = "integration-tests")]

use vignette::{
    compute::{AddArrays, cpu_add},
    context::headless_device,
    random::Xorshift32,
};

#[test]
fn gpu_sum_matches_the_cpu_reference() {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    runtime.block_on(async {
        let (device, queue) = headless_device().await.expect("gpu adapter");

        let mut rng = Xorshift32::new();
        let mut a = Vec::with_capacity(1024);
        let mut b = Vec::with_capacity(1024);
        for _ in 0..1024 {
            a.push(rng.next_f32());
            b.push(rng.next_f32());
        }
        let expected = cpu_add(&a, &b);

        let add = AddArrays::new(&device);
        let computed = add.run(&device, &queue, &a, &b).await.expect("dispatch");

        assert_eq!(computed.len(), expected.len());
        for (i, (got, want)) in computed.iter().zip(&expected).enumerate() {
            assert_eq!(got, want, "lane {} differs", i);
        }
    });
}

#[test]
fn non_multiple_of_workgroup_sizes_are_padded() {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    runtime.block_on(async {
        let (device, queue) = headless_device().await.expect("gpu adapter");
        let a: Vec<f32> = (0..100).map(|i| i as f32).collect();
        let b: Vec<f32> = (0..100).map(|i| (i * 2) as f32).collect();
        let add = AddArrays::new(&device);
        let computed = add.run(&device, &queue, &a, &b).await.expect("dispatch");
        assert_eq!(computed, cpu_add(&a, &b));
    });
}

//! Adds two arrays on the GPU and checks every lane against the CPU.

use anyhow::Result;
use vignette::{
    compute::{self, AddArrays},
    context,
    random::Xorshift32,
};

const MAX_SIZE: usize = 1024;

fn main() -> Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    }
    let runtime = tokio::runtime::Runtime::new()?;
    let nr_errors = runtime.block_on(perform_computation())?;
    println!("errors found: {}", nr_errors);
    anyhow::ensure!(nr_errors == 0, "{} lanes differ from the CPU reference", nr_errors);
    Ok(())
}

async fn perform_computation() -> Result<usize> {
    let (device, queue) = context::headless_device().await?;

    let mut rng = Xorshift32::new();
    let mut a = Vec::with_capacity(MAX_SIZE);
    let mut b = Vec::with_capacity(MAX_SIZE);
    for _ in 0..MAX_SIZE {
        a.push(rng.next_f32());
        b.push(rng.next_f32());
    }
    let expected = compute::cpu_add(&a, &b);

    let add = AddArrays::new(&device);
    let computed = add.run(&device, &queue, &a, &b).await?;

    let mut nr_errors = 0;
    for (i, (got, want)) in computed.iter().zip(&expected).enumerate() {
        if got != want {
            println!("Error at {}: got {} but expected {}", i, got, want);
            nr_errors += 1;
        }
    }
    Ok(nr_errors)
}

//! Writes `data/simulated_cognitive_data.csv` so the explorer can be run
//! without an external dataset.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let n_rows = 200;

    let output_dir = std::path::Path::new("data");
    std::fs::create_dir_all(output_dir).context("creating data directory")?;
    let output_path = output_dir.join("simulated_cognitive_data.csv");

    let mut writer =
        csv::Writer::from_path(&output_path).context("creating output CSV")?;
    writer
        .write_record(["mental_effort", "task_duration_min", "cognitive_overload"])
        .context("writing header")?;

    for _ in 0..n_rows {
        let effort = rng.gauss(5.5, 2.0).round().clamp(1.0, 10.0) as i64;
        let duration = (rng.gauss(30.0, 10.0).max(5.0) * 10.0).round() / 10.0;

        // Overload risk grows with effort and with long tasks.
        let p = sigmoid(0.8 * (effort as f64 - 6.0) + 0.05 * (duration - 30.0));
        let overload = i64::from(rng.next_f64() < p);

        writer
            .write_record([
                effort.to_string(),
                format!("{duration:.1}"),
                overload.to_string(),
            ])
            .context("writing row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {} rows to {}", n_rows, output_path.display());
    Ok(())
}

//! Drives a frame table the way an experiment loop would
//!
//! Usage: cargo run --example trial_loop -- [output path]

use framelog_core::prelude::*;
use tracing_subscriber::EnvFilter;

const TRIALS: usize = 3;
const FRAMES_PER_TRIAL: usize = 5;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "trial_loop.txt".to_string());
    let config = FrameTableConfig::new(&path, TRIALS * FRAMES_PER_TRIAL, TRIALS);

    let mut table = FrameTable::<(f64, f64, i32)>::create(&config)?;
    table.raw_write_line(&[&"framelog ", &framelog_core::VERSION])?;
    table.set_header("x\ty\tresponse")?;

    for trial in 0..TRIALS {
        table.mark_trial_start()?;
        for frame in 0..FRAMES_PER_TRIAL {
            let t = frame as f64 / FRAMES_PER_TRIAL as f64;
            let response = i32::from(frame + 1 == FRAMES_PER_TRIAL);
            table.append_frame((t, trial as f64 + t * t, response))?;
        }
    }

    // One frame too many is reported, not written
    if let Err(e) = table.append_frame((0.0, 0.0, 0)) {
        println!("rejected: {e}");
    }

    table.finish()?;
    println!("wrote {}", path);
    Ok(())
}

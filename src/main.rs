use anyhow::Result;

use cognitive_explorer::{data, locate, report, viz};

const CSV_NAME: &str = "simulated_cognitive_data.csv";

fn main() -> Result<()> {
    env_logger::init();

    let csv_path = locate::locate_csv(CSV_NAME); // find the file, or exit(1)
    let dataset = data::loader::load_csv(&csv_path)?; // parse into memory
    report::print_overview(&dataset); // text-based overview
    viz::plot_all(&dataset)?; // charts, safe if columns missing

    Ok(())
}

use medsearch::partition::builder::build_shards;
use medsearch::partition::source::{fetch_dataset, DATASET_URL};
use medsearch::partition::writer::write_shards;
use std::path::PathBuf;

const DEFAULT_OUTPUT_DIR: &str = "public/data/medicines";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut url = DATASET_URL.to_string();
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--url" => {
                url = args[i + 1].clone();
                i += 2;
            }
            "--out" => {
                output_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: {} [--url <dataset-url>] [--out <dir>]", args[0]);
                std::process::exit(1);
            }
        }
    }

    tracing::info!("Downloading medicine dataset from {}", url);
    let raw = fetch_dataset(&url).await?;
    tracing::info!("Downloaded {} raw records", raw.len());

    let shards = build_shards(raw);
    let summaries = write_shards(&output_dir, &shards)?;

    let mut total_records = 0;
    for summary in &summaries {
        tracing::info!(
            "  {}: {} medicines ({:.1} KB)",
            summary.key.file_name(),
            summary.records,
            summary.bytes as f64 / 1024.0
        );
        total_records += summary.records;
    }

    tracing::info!(
        "Done: {} medicines split into {} shards at {}",
        total_records,
        summaries.len(),
        output_dir.display()
    );

    Ok(())
}

use std::{env, fs::File, path::Path};

use card_payments::{
    dlq::TracingDLQ, domain::Error, engine::Engine, ingestion::CsvReader,
    output_repository::StdOutOutput,
};

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout only carries the summary
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args();

    let file_path = args
        .nth(1)
        .ok_or_else(|| Error::Ingestion("usage: card_payments <script.csv>".to_string()))?;
    let file = File::open(Path::new(&file_path))?;

    // Set up the components
    let ingestion = CsvReader::new(file)?;
    let output = StdOutOutput::new();
    let dlq = TracingDLQ::default();

    let mut engine = Engine::new(ingestion, output, dlq);

    engine.process().await?;

    engine.flush()?;

    Ok(())
}

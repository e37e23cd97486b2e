use clap::Parser;
use storage::Storage;
use storage::bank::default_questions;

/// Write the built-in question bank into a SQLite database.
#[derive(Parser, Debug)]
#[command(name = "seed")]
struct Args {
    /// SQLite URL of the database to seed
    #[arg(long = "db", env = "QUIZ_DB_URL", default_value = "sqlite://quiz.sqlite3?mode=rwc")]
    db_url: String,
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let storage = Storage::sqlite(&args.db_url).await?;
    let questions = default_questions()?;
    storage.questions.replace_questions(&questions).await?;

    println!("Seeded {} questions into {}", questions.len(), args.db_url);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

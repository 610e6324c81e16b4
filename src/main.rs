use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueHint};

use flashgen::display::print_cards;
use flashgen::export::export_csv;
use flashgen::extract::read_document;
use flashgen::generate;
use flashgen::llm::ensure_client;
use flashgen::palette::Palette;
use flashgen::session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "flashgen",
    version,
    about = "Turn course material into study flashcards with an LLM.",
    long_about = None
)]
struct Cli {
    /// Educational material to read (.pdf or .txt). Pasted text is read
    /// from stdin when omitted.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    path: Option<PathBuf>,

    /// Subject hint passed to the model
    #[arg(long, value_name = "SUBJECT", default_value = "General")]
    subject: String,

    /// Where the CSV export is written
    #[arg(long, value_name = "FILE", default_value = "flashcards.csv")]
    output: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run_cli().await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let input_text = match &cli.path {
        Some(path) => read_document(path)?,
        None => read_pasted_text()?,
    };
    if input_text.trim().is_empty() {
        println!(
            "{}",
            Palette::paint(Palette::WARNING, "No valid input provided.")
        );
        return Ok(());
    }

    let client = ensure_client()?;
    let mut session = Session::default();

    loop {
        println!("{}", Palette::dim("Generating flashcards..."));
        let count = generate::run(&mut session, &client, &cli.subject, &input_text).await;

        if count == 0 {
            println!(
                "{}",
                Palette::paint(
                    Palette::DANGER,
                    "Failed to generate flashcards. Try a shorter input or check the model output.",
                )
            );
            if !confirm("Retry?")? {
                break;
            }
            continue;
        }

        print_cards(session.flashcards());

        if confirm("Export as CSV?")? {
            let written = export_csv(session.flashcards(), &cli.output)?;
            println!(
                "{} {}",
                Palette::paint(Palette::SUCCESS, "Wrote"),
                written.display()
            );
        }

        if !confirm("Generate a fresh set from the same input?")? {
            break;
        }
    }

    Ok(())
}

fn read_pasted_text() -> Result<String> {
    println!(
        "{}",
        Palette::dim("Paste your content below, then press Ctrl-D to finish.")
    );
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn confirm(question: &str) -> Result<bool> {
    print!("\n{} {} ", question, Palette::dim("[y/N]"));
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

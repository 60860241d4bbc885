//! slidegrade command-line front end.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use slidegrade::grading::{
    CHECKLIST, Checklist, Deck, Evaluator, EvaluatorOptions, GradeError, RUBRIC_TOTAL,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// slidegrade - score .pptx assignments against the classroom rubric
#[derive(Parser, Debug)]
#[command(
    name = "slidegrade",
    version,
    about = "Score .pptx assignments against the classroom rubric"
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grade a presentation and print the score report
    Grade {
        /// Path to the .pptx file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Fail checks whose target slide is missing instead of inspecting slide 1
        #[arg(long)]
        strict_slides: bool,
    },

    /// Show what the inspector sees in a presentation
    Inspect {
        /// Path to the .pptx file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// List the rubric rows
    Checklist {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Table,
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(command: Command) -> Result<(), GradeError> {
    match command {
        Command::Grade {
            file,
            format,
            strict_slides,
        } => {
            let options = EvaluatorOptions::default().strict_slides(strict_slides);
            let report = Evaluator::new(options).evaluate_path(&file)?;
            match format {
                Format::Table => print!("{}", report),
                Format::Json => println!("{}", report.to_json()?),
                Format::Yaml => print!("{}", report.to_yaml()?),
            }
        },
        Command::Inspect { file, format } => {
            let deck = Deck::open(&file)?;
            match format {
                Format::Table => print_deck(&deck),
                _ => print!("{}", render(&deck, format)?),
            }
        },
        Command::Checklist { format } => match format {
            Format::Table => print_checklist(&CHECKLIST),
            _ => print!("{}", render(&CHECKLIST.rules(), format)?),
        },
    }

    Ok(())
}

/// Serialize to JSON or YAML, with a trailing newline.
fn render<T: Serialize>(value: &T, format: Format) -> Result<String, GradeError> {
    match format {
        Format::Yaml => {
            serde_saphyr::to_string(value).map_err(|e| GradeError::Render(e.to_string()))
        },
        _ => serde_json::to_string_pretty(value)
            .map(|json| json + "\n")
            .map_err(|e| GradeError::Render(e.to_string())),
    }
}

fn print_deck(deck: &Deck) {
    match deck.slide_size {
        Some(size) => {
            let ratio = size
                .aspect_ratio()
                .map_or_else(|| "n/a".to_string(), |r| format!("{:.3}", r));
            println!("Slide size: {} x {} EMU (ratio {})", size.width, size.height, ratio);
        },
        None => println!("Slide size: not set"),
    }
    println!("Slides: {}", deck.slide_count());

    for (idx, slide) in deck.slides.iter().enumerate() {
        println!();
        println!("Slide {} ({}): {} shapes", idx + 1, slide.partname, slide.shapes.len());
        for shape in &slide.shapes {
            println!("  - [{}] {}", shape.kind.as_str(), shape.name);
            if let Some(text) = &shape.text {
                println!("      text: {:?}", text);
            }
            if let Some(table) = &shape.table {
                println!("      table: {} rows x {} columns", table.rows, table.columns);
                for row in &table.cells {
                    println!("        | {} |", row.join(" | "));
                }
            }
        }
    }
}

fn print_checklist(checklist: &Checklist) {
    for rule in checklist.rules() {
        println!("{:>3}  {:>4}  {}", rule.id, rule.points, rule.description);
        println!("           {}", rule.outcome);
        if let Some(note) = rule.inconsistency {
            println!("           (!) {}", note);
        }
    }
    println!();
    println!("Attainable: {} / {}", checklist.max_points(), RUBRIC_TOTAL);
}

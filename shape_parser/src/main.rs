use shape_parser::{logging, CanvasSettings, ParserPreferences, ShapeParserPipeline};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize global logging system and check stage integration
    logging::init_global_logging()?;
    shape_parser::pipeline::validate_pipeline()?;

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help(&args[0]);
        return Ok(());
    }

    let mut canvas = CanvasSettings::default();
    let mut request_words: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--canvas" => {
                let value = args.get(i + 1).ok_or("--canvas requires a value")?;
                canvas = CanvasSettings::new(value.parse()?)?;
                i += 2;
            }
            "--settings" => {
                let path = args.get(i + 1).ok_or("--settings requires a path")?;
                canvas = CanvasSettings::from_toml_file(Path::new(path))?;
                i += 2;
            }
            word => {
                request_words.push(word.to_string());
                i += 1;
            }
        }
    }

    let pipeline = ShapeParserPipeline::with_settings(canvas, ParserPreferences::default());

    if request_words.is_empty() {
        run_interactive(&pipeline)?;
    } else {
        let descriptor = pipeline.parse_and_emit(&request_words.join(" "));
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        if !descriptor.status {
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Read requests line by line from stdin, one descriptor per line
fn run_interactive(pipeline: &ShapeParserPipeline) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            writeln!(stdout, "Sorry - please enter a shape request.")?;
            continue;
        }
        emit(pipeline, &line)?;
    }

    Ok(())
}

fn emit(pipeline: &ShapeParserPipeline, request: &str) -> Result<(), Box<dyn std::error::Error>> {
    let descriptor = pipeline.parse_and_emit(request);
    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}

fn print_help(program_name: &str) {
    println!("Shape Parser v{}", env!("CARGO_PKG_VERSION"));
    println!("Parses natural-language shape requests into shape descriptors");
    println!();
    println!("USAGE:");
    println!(
        "    {} draw a hexagon with a radius of 150   # Single request",
        program_name
    );
    println!(
        "    {}                                        # Read requests from stdin",
        program_name
    );
    println!();
    println!("OPTIONS:");
    println!("    --help              Show this help message");
    println!("    --canvas N          Maximum canvas size (polygon placement bound)");
    println!("    --settings FILE     Load canvas settings from a TOML file");
    println!();
    println!("ENVIRONMENT:");
    println!("    SHAPE_MAX_CANVAS_SIZE   Default canvas bound");
    println!("    SHAPE_LOG_LEVEL         error | warning | info | debug");
    println!("    SHAPE_LOG_JSON          Structured log output when true");
}

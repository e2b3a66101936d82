//! Command-line argument checker

use std::env;
use std::fs;
use std::io::Read;
use std::process;

use lemmon::json::{AnalysisJson, ProofLineJson};
use lemmon::{analyse, parse_lemmon, parse_sequent, ProofLine, TruthTableResult};

enum Mode {
    Lemmon,
    Sequent,
    Formula,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut mode = Mode::Lemmon;
    let mut json = false;
    let mut path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--lemmon" => mode = Mode::Lemmon,
            "--sequent" => mode = Mode::Sequent,
            "--formula" => mode = Mode::Formula,
            "--json" => json = true,
            "--help" | "-h" => {
                usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option: {}", other);
                usage(&args[0]);
                process::exit(1);
            }
            other => path = Some(other.to_string()),
        }
        i += 1;
    }

    let input = match read_input(path.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Failed to read input: {}", e);
            process::exit(1);
        }
    };

    let lines = match parse_input(&mode, &input) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            process::exit(1);
        }
    };

    let result = analyse(&lines);
    if json {
        print_json(&lines, &result);
    } else {
        print_report(&lines, &result);
    }
}

fn usage(program: &str) {
    eprintln!("Usage: {} [options] [file]", program);
    eprintln!("\nReads from the file, or stdin when no file is given.");
    eprintln!("\nOptions:");
    eprintln!("  --lemmon     Input is a Lemmon-style deduction (default)");
    eprintln!("  --sequent    Input is a one-line sequent `P1, P2 ⊢ C`");
    eprintln!("  --formula    Input is a single formula");
    eprintln!("  --json       Emit the analysis as JSON");
}

fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn parse_input(mode: &Mode, input: &str) -> lemmon::Result<Vec<ProofLine>> {
    match mode {
        Mode::Lemmon => parse_lemmon(input),
        Mode::Sequent => Ok(parse_sequent(input.trim())?.lines()),
        Mode::Formula => Ok(vec![ProofLine::derived(1, input.trim())?]),
    }
}

fn print_json(lines: &[ProofLine], result: &TruthTableResult) {
    #[derive(serde::Serialize)]
    struct Report {
        proof: Vec<ProofLineJson>,
        analysis: AnalysisJson,
    }
    let report = Report {
        proof: lines
            .iter()
            .map(|line| ProofLineJson::from_line(line, lines))
            .collect(),
        analysis: AnalysisJson::from(result),
    };
    match serde_json::to_string_pretty(&report) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Failed to serialize report: {}", e);
            process::exit(1);
        }
    }
}

fn print_report(lines: &[ProofLine], result: &TruthTableResult) {
    for line in lines {
        let check = if line.is_self_justifying() {
            String::new()
        } else {
            match (line.user_rule_is_valid(lines), line.detected_rule) {
                (true, _) => "  ok".to_string(),
                (false, Some(rule)) => format!("  MISMATCH (detected {})", rule),
                (false, None) => "  NOT DERIVABLE".to_string(),
            }
        };
        println!("{}{}", line, check);
    }

    println!();
    let header: Vec<String> = result.variables.to_vec();
    println!("{}", header.join(" "));
    for (i, assignment) in result.combinations.iter().enumerate() {
        let cells: Vec<String> = result
            .variables
            .iter()
            .map(|name| {
                let value = if assignment.value(name) { "T" } else { "F" };
                format!("{:width$}", value, width = name.chars().count())
            })
            .collect();
        let line_values: Vec<String> = result
            .lines
            .iter()
            .map(|line| if line.results[i] { "T".into() } else { "F".into() })
            .collect();
        println!("{} | {}", cells.join(" "), line_values.join(" "));
    }

    println!();
    for line in &result.lines {
        println!("{}: {}", line.expression, line.classification);
    }
    if result.valid {
        println!("\nValid.");
    } else {
        println!("\nInvalid. Counter-examples:");
        for example in &result.counter_examples {
            println!("  {}", example);
        }
    }
}

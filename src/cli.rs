// src/cli.rs
use std::{env, path::PathBuf};

use crate::csv::Delim;
use crate::params::{Format, Params};
use crate::rounding::Rounding;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    crate::runner::run(&params).map(|_| ())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "summary" => Format::Summary,
                    "csv" => Format::Delimited(Delim::Csv),
                    "tsv" => Format::Delimited(Delim::Tsv),
                    "json" => Format::Json,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--rounding" => {
                let v = args.next().ok_or("Missing value for --rounding")?;
                params.rounding = match v.to_ascii_lowercase().as_str() {
                    "half" => Rounding::Half,
                    "quarter" => Rounding::Quarter,
                    other => return Err(format!("Unknown rounding: {}", other).into()),
                };}
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ if !a.starts_with('-') && params.input.is_none() => {
                params.input = Some(PathBuf::from(a));
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

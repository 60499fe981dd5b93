use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use cli::{Args, Command};
use clio::{Input, Output};

mod cli;
mod regfile;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "info" } else { "warn" }),
    )
    .init();

    match args.command {
        Command::Regfile { check_overlap } => report_regfiles(check_overlap),
        Command::Hex {
            input,
            output_dir,
            sram_size,
        } => post_process_hex(input, &output_dir, sram_size),
        Command::Freq { input, output } => post_process_freq(input, output),
    }
}

fn report_regfiles(check_overlap: bool) -> ExitCode {
    for regfile in regfile::ALL {
        let words = if check_overlap {
            match regfile.pack_checked() {
                Ok(words) => words,
                Err(overlap) => {
                    log::error!("{}: {}", regfile.name, overlap);
                    return ExitCode::FAILURE;
                }
            }
        } else {
            regfile.pack()
        };
        for word in words {
            println!(
                "{} {}: Addr: {:#010x}, Data: {:#018x}",
                regfile.name, word.index, word.address, word.value
            );
        }
    }
    ExitCode::SUCCESS
}

fn post_process_hex(mut input: Input, output_dir: &Path, sram_size: usize) -> ExitCode {
    log::info!("processing input file: {}", input.path().display());
    let mut raw = String::new();
    if let Err(err) = input.read_to_string(&mut raw) {
        log::error!("reading {}: {}", input.path().display(), err);
        return ExitCode::FAILURE;
    }

    let lines = hexreflow::significant_lines(&raw);
    let wide = match hexreflow::merge(&lines) {
        Ok(wide) => wide,
        Err(malformed) => {
            log::error!("{}: {}", input.path().display(), malformed);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = fs::create_dir_all(output_dir) {
        log::error!("creating {}: {}", output_dir.display(), err);
        return ExitCode::FAILURE;
    }

    let merged_name = "main_128b.hex";
    if let Err(err) = write_lines(&output_dir.join(merged_name), &wide) {
        log::error!("writing {merged_name}: {err}");
        return ExitCode::FAILURE;
    }
    log::info!("wrote {} 128-bit instructions to {merged_name}", wide.len());

    let segments = match hexreflow::split(&wide, sram_size, "main_sram") {
        Ok(segments) => segments,
        Err(invalid) => {
            log::error!("{invalid}");
            return ExitCode::FAILURE;
        }
    };

    println!();
    println!("Split complete!");
    for (i, segment) in segments.iter().enumerate() {
        let file_name = format!("{}.hex", segment.name);
        if let Err(err) = write_lines(&output_dir.join(&file_name), &segment.entries) {
            log::error!("writing {file_name}: {err}");
            return ExitCode::FAILURE;
        }
        println!(
            "SRAM {i}: {} instructions in {file_name}",
            segment.entries.len()
        );
    }
    ExitCode::SUCCESS
}

fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut contents = String::with_capacity(lines.len() * (hexreflow::WIDE_DIGITS + 1));
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(path, contents)
}

fn post_process_freq(mut input: Input, mut output: Output) -> ExitCode {
    log::info!("processing input file: {}", input.path().display());
    let mut raw = String::new();
    if let Err(err) = input.read_to_string(&mut raw) {
        log::error!("reading {}: {}", input.path().display(), err);
        return ExitCode::FAILURE;
    }

    let rows = freq_from_gdb::parse(&raw);
    println!("Number of iterations: {}", rows.len());

    let destination = output.path().display().to_string();
    for row in &rows {
        let record = row
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(",");
        if let Err(err) = writeln!(output, "{record}") {
            log::error!("writing {destination}: {err}");
            return ExitCode::FAILURE;
        }
    }
    println!("Successfully wrote data to {destination}");
    ExitCode::SUCCESS
}

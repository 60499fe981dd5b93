use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clio::{Input, Output};

/// Offline post-processing for the thermal-management bring-up flow
#[derive(Parser, Debug)]
pub struct Args {
    /// Log what is being read and written (info level)
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the packed configuration register files with their target addresses
    Regfile {
        /// Refuse layouts where two fields claim the same bit
        #[arg(long, default_value_t = false)]
        check_overlap: bool,
    },
    /// Merge a 64-bit hex image into 128-bit lines and split it across SRAMs
    Hex {
        /// Input hex file, one 64-bit word per line (`//` comments and blank lines ignored)
        #[arg(short = 'i', long, value_parser, default_value = "build/main.hex")]
        input: Input,

        /// Directory receiving the merged image and the per-SRAM files
        #[arg(short = 'o', long, default_value = "build")]
        output_dir: PathBuf,

        /// Capacity of one SRAM in bytes
        #[arg(long, env = "THERMPOST_SRAM_SIZE", default_value_t = 16384)]
        sram_size: usize,
    },
    /// Convert a gdb dump of sensor frequency readings into a CSV table
    Freq {
        /// Raw gdb log containing the frequency buffer dumps
        #[arg(short = 'i', long, value_parser)]
        input: Input,

        /// Destination CSV, one row per iteration, no header
        #[arg(short = 'o', long, value_parser, default_value = "sensor_frequencies.csv")]
        output: Output,
    },
}

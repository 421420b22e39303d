use clap::{Parser, Subcommand};
use qr_forge::encoder::format::FormatInfo;
use qr_forge::tools::{describe_candidates, load_luma, matrix_stats, sample_modules};
use qr_forge::{ECLevel, EncodeOptions, MaskPattern, RenderOptions, encode_with_options, encode_with_stages};
use qr_forge::render::{save_png, to_ascii};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR code encoder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and write a PNG or print ASCII art
    Encode {
        text: String,
        /// Symbol version (1 or 2); smallest that fits when omitted
        #[arg(long)]
        version: Option<u8>,
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pixels per module (defaults to QR_MODULE_PIXELS)
        #[arg(long)]
        scale: Option<usize>,
        /// Quiet zone in modules (defaults to QR_QUIET_ZONE)
        #[arg(long)]
        border: Option<usize>,
        #[arg(long)]
        ascii: bool,
    },
    /// Print the penalty of all eight masks and the winner
    Masks {
        text: String,
        #[arg(long)]
        version: Option<u8>,
    },
    /// Print the 15-bit format descriptor for a level and mask
    Format {
        /// L, M, Q or H
        level: String,
        /// Mask id 0-7
        mask: u8,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encode {
            text,
            version,
            output,
            scale,
            border,
            ascii,
        } => {
            let defaults = RenderOptions::default();
            let render = RenderOptions {
                scale: scale.unwrap_or(defaults.scale).max(1),
                border: border.unwrap_or(defaults.border),
            };
            encode_cmd(&text, version, output.as_deref(), &render, ascii)
        }
        Command::Masks { text, version } => masks_cmd(&text, version),
        Command::Format { level, mask } => format_cmd(&level, mask),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn encode_cmd(
    text: &str,
    version: Option<u8>,
    output: Option<&Path>,
    render: &RenderOptions,
    ascii: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let symbol = encode_with_options(
        text,
        &EncodeOptions {
            version,
            ..EncodeOptions::default()
        },
    )?;
    let elapsed = start.elapsed();

    let stats = matrix_stats(&symbol.to_bit_matrix());
    println!(
        "Version {} ({}x{}), level {}, mask {}, penalty {}, format {:015b}",
        symbol.version,
        symbol.size(),
        symbol.size(),
        symbol.error_correction,
        symbol.mask_pattern.id(),
        symbol.penalty,
        symbol.format_bits
    );
    println!(
        "Dark modules: {}/{} ({:.1}%), encoded in {:.2?}",
        stats.dark_modules,
        stats.total_modules,
        stats.dark_ratio * 100.0,
        elapsed
    );

    if ascii {
        print!("{}", to_ascii(&symbol, render.border));
    }

    if let Some(path) = output {
        save_png(&symbol, path, render)?;
        let img = load_luma(path)?;
        let verified = sample_modules(&img, symbol.size(), render)
            .is_some_and(|sampled| sampled == symbol.to_bit_matrix());
        println!(
            "Wrote {} ({}x{} px, read-back {})",
            path.display(),
            img.width(),
            img.height(),
            if verified { "ok" } else { "MISMATCH" }
        );
    }
    Ok(())
}

fn masks_cmd(text: &str, version: Option<u8>) -> Result<(), Box<dyn std::error::Error>> {
    let payload = qr_forge::encoder::bitstream::latin1_bytes(text)?;
    let stages = encode_with_stages(
        &payload,
        &EncodeOptions {
            version,
            ..EncodeOptions::default()
        },
    )?;
    println!(
        "Version {}: {} data + {} ECC codewords, {} remainder bits",
        stages.version,
        stages.codewords.data.len(),
        stages.codewords.ecc.len(),
        stages.remainder_bits
    );
    for line in describe_candidates(&stages) {
        println!("{line}");
    }
    println!("Selected mask {}", stages.final_symbol.mask_pattern.id());
    Ok(())
}

fn format_cmd(level: &str, mask: u8) -> Result<(), Box<dyn std::error::Error>> {
    let level: ECLevel = level.parse()?;
    let mask = MaskPattern::try_from(mask).map_err(|id| format!("mask id {id} out of range 0-7"))?;
    let info = FormatInfo::new(level, mask);
    let descriptor = info.encode();
    println!(
        "level {} mask {}: data {:05b} -> {:015b} (0x{:04x})",
        level,
        mask.id(),
        info.data_bits(),
        descriptor,
        descriptor
    );
    Ok(())
}

//! Command-line harness for the 6502 core: loads a program image, runs it
//! to completion (or for a fixed instruction budget in benchmark mode),
//! and reports the outcome. Argument parsing, file loading, and the
//! benchmark/trace surface all live here, outside the core library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mos6502::disasm;
use mos6502::error::CliError;
use mos6502::{Cpu, Mmu};
use mos6502::mmu::RESET_VECTOR;

/// Default instruction budget for `--benchmark` when no count is supplied.
const DEFAULT_BENCHMARK_INSTRUCTIONS: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(name = "mos6502", about = "A MOS 6502 CPU interpreter")]
struct Cli {
    /// Enable per-instruction trace output (disassembly + register snapshot).
    #[arg(short, long)]
    debug: bool,

    /// Target clock speed in MHz. Omit or pass 0 to run unthrottled.
    #[arg(short = 'c', long = "clock-speed")]
    clock_speed: Option<String>,

    /// Path to a flat binary program image, loaded at $8000.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Comma-separated list of addresses to dump after every instruction,
    /// e.g. `--watch-addresses $0200,0x10,64`.
    #[arg(long, value_delimiter = ',')]
    watch_addresses: Vec<String>,

    /// Run a fixed instruction budget with pacing disabled and report
    /// elapsed time/cycles/instructions-per-second. An optional count may
    /// follow; omitting it uses a built-in default.
    #[arg(long, num_args = 0..=1, default_missing_value = "default")]
    benchmark: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let clock_hz = parse_clock_speed(cli.clock_speed.as_deref())?;
    let watch_addresses = parse_watch_addresses(&cli.watch_addresses)?;

    let mut mmu = Mmu::new();
    let mut cpu = Cpu::new(clock_hz).with_debug(cli.debug).with_watch_addresses(watch_addresses);

    if let Some(benchmark) = &cli.benchmark {
        let instructions = parse_benchmark_count(benchmark)?;
        load_program(&mut mmu, cli.file.as_deref())?;
        cpu.reset(&mmu);
        let (executed, elapsed) = cpu.run_benchmark(&mut mmu, instructions)?;
        report_benchmark(executed, elapsed, cpu.cycles());
        return Ok(());
    }

    let path = cli.file.ok_or(CliError::MissingFile)?;
    load_program(&mut mmu, Some(&path))?;
    cpu.reset(&mmu);
    log::info!("running {}", path.display());
    if cli.debug {
        print_listing(&mmu, cpu.pc());
    }
    cpu.run(&mut mmu)?;
    println!(
        "halted: A=${:02X} X=${:02X} Y=${:02X} SP=${:02X} P=${:02X} PC=${:04X} cycles={}",
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.status(),
        cpu.pc(),
        cpu.cycles()
    );
    Ok(())
}

fn load_program(mmu: &mut Mmu, path: Option<&std::path::Path>) -> Result<(), CliError> {
    let Some(path) = path else {
        // Benchmark mode with no program supplied: a tiny synthetic loop,
        // grounded in the Go original's own demo instruction stream.
        mmu.load_program(&[0xA9, 0x00, 0x69, 0x01, 0x4C, 0x02, 0x80]);
        mmu.write_word(RESET_VECTOR, 0x8000);
        return Ok(());
    };
    let bytes = std::fs::read(path).map_err(|source| CliError::ProgramRead {
        path: path.display().to_string(),
        source,
    })?;
    if bytes.len() > (RESET_VECTOR as usize - mos6502::mmu::PROGRAM_LOAD_ADDR as usize) {
        return Err(CliError::ProgramTooLarge(bytes.len()));
    }
    mmu.load_program(&bytes);
    mmu.write_word(RESET_VECTOR, mos6502::mmu::PROGRAM_LOAD_ADDR);
    Ok(())
}

fn parse_clock_speed(raw: Option<&str>) -> Result<u64, CliError> {
    let Some(raw) = raw else { return Ok(0) };
    let mhz: f64 = raw
        .parse()
        .map_err(|_| CliError::InvalidClockSpeed(raw.to_string()))?;
    if !mhz.is_finite() || mhz < 0.0 {
        return Err(CliError::InvalidClockSpeed(raw.to_string()));
    }
    Ok((mhz * 1_000_000.0) as u64)
}

fn parse_benchmark_count(raw: &str) -> Result<u64, CliError> {
    if raw == "default" {
        return Ok(DEFAULT_BENCHMARK_INSTRUCTIONS);
    }
    raw.parse()
        .map_err(|_| CliError::InvalidBenchmarkCount(raw.to_string()))
}

fn parse_watch_addresses(raw: &[String]) -> Result<Vec<u16>, CliError> {
    raw.iter()
        .filter(|s| !s.is_empty())
        .map(|s| parse_u16_literal(s).ok_or_else(|| CliError::InvalidWatchAddress(s.clone())))
        .collect()
}

/// Accepts `$`/`0x`-prefixed hex or bare decimal literals.
fn parse_u16_literal(raw: &str) -> Option<u16> {
    let trimmed = raw.trim();
    if let Some(hex) = trimmed.strip_prefix('$') {
        u16::from_str_radix(hex, 16).ok()
    } else if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16).ok()
    } else {
        trimmed.parse().ok()
    }
}

/// Print a short disassembly preview of the loaded program before running
/// it in debug mode, independent of the per-instruction trace the core
/// emits at `trace!` level.
fn print_listing(mmu: &Mmu, start: u16) {
    let mut pc = start;
    for _ in 0..8 {
        let (text, len) = disasm::disassemble_at(mmu, pc);
        println!("${pc:04X}: {text}");
        if text == "BRK" {
            break;
        }
        pc = pc.wrapping_add(len as u16);
    }
}

fn report_benchmark(executed: u64, elapsed: std::time::Duration, cycles: u64) {
    let secs = elapsed.as_secs_f64();
    let ips = if secs > 0.0 { executed as f64 / secs } else { f64::INFINITY };
    println!(
        "benchmark: {executed} instructions, {cycles} cycles in {secs:.3}s ({ips:.0} instructions/sec)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_dollar_literal() {
        assert_eq!(parse_u16_literal("$0200"), Some(0x0200));
    }

    #[test]
    fn parses_0x_literal() {
        assert_eq!(parse_u16_literal("0x10"), Some(0x10));
    }

    #[test]
    fn parses_decimal_literal() {
        assert_eq!(parse_u16_literal("64"), Some(64));
    }

    #[test]
    fn rejects_garbage_literal() {
        assert_eq!(parse_u16_literal("not-a-number"), None);
    }

    #[test]
    fn clock_speed_zero_disables_pacing() {
        assert_eq!(parse_clock_speed(None).unwrap(), 0);
    }

    #[test]
    fn clock_speed_converts_mhz_to_hz() {
        assert_eq!(parse_clock_speed(Some("1")).unwrap(), 1_000_000);
    }

    #[test]
    fn clock_speed_rejects_negative() {
        assert!(parse_clock_speed(Some("-1")).is_err());
    }

    #[test]
    fn watch_addresses_parse_mixed_formats() {
        let addrs = parse_watch_addresses(&["$0200".to_string(), "0x10".to_string(), "64".to_string()]).unwrap();
        assert_eq!(addrs, vec![0x0200, 0x0010, 64]);
    }

    #[test]
    fn missing_file_without_benchmark_is_reported_distinctly_from_io_errors() {
        let cli = Cli { debug: false, clock_speed: None, file: None, watch_addresses: vec![], benchmark: None };
        let err = run(cli).unwrap_err();
        assert!(matches!(err, CliError::MissingFile));
    }
}

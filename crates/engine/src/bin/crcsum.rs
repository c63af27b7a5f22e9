//! `crcsum`: checksum files with any catalogue CRC.
//!
//! - `--list` prints every catalogue algorithm with its parameters.
//! - `--self-test` verifies every algorithm under every strategy.
//! - Otherwise each FILE (or stdin when none is given, or for `-`) is
//!   checksummed and printed as `<hex>  <name>`.
//!
//! Set `RUST_LOG=debug` to see engine resolution and file reads.

use core::str::FromStr;
use std::{
  env, io,
  path::{Path, PathBuf},
  process::ExitCode,
};

use crc_engine::{CrcError, Engine, Strategy, catalogue, config};
use log::debug;

#[derive(Clone, Debug)]
struct Args {
  list: bool,
  self_test: bool,
  algorithm: String,
  strategy: Option<Strategy>,
  buffer: Option<usize>,
  files: Vec<PathBuf>,
}

impl Default for Args {
  fn default() -> Self {
    Self {
      list: false,
      self_test: false,
      algorithm: catalogue::CRC_32_ISO_HDLC.name().to_owned(),
      strategy: None,
      buffer: None,
      files: Vec::new(),
    }
  }
}

fn parse_args<I>(argv: I) -> Result<Args, String>
where
  I: IntoIterator<Item = String>,
{
  let mut args = Args::default();
  let mut it = argv.into_iter();
  while let Some(arg) = it.next() {
    match arg.as_str() {
      "--" => {
        args.files.extend(it.by_ref().map(PathBuf::from));
      }
      "--list" | "-l" => args.list = true,
      "--self-test" => args.self_test = true,
      "--algorithm" | "-a" => {
        let Some(value) = it.next() else {
          return Err("--algorithm requires a value".to_owned());
        };
        args.algorithm = value;
      }
      "--strategy" | "-s" => {
        let Some(value) = it.next() else {
          return Err("--strategy requires a value".to_owned());
        };
        let strategy = Strategy::from_str(&value).map_err(|err| format!("{err}: {value}"))?;
        args.strategy = Some(strategy);
      }
      "--buffer" | "-b" => {
        let Some(value) = it.next() else {
          return Err("--buffer requires a value".to_owned());
        };
        args.buffer = Some(parse_usize("--buffer", &value)?);
      }
      "--help" | "-h" => {
        print_help();
        return Err(String::new());
      }
      other if other.starts_with('-') && other != "-" => return Err(format!("Unknown arg: {other}")),
      file => args.files.push(PathBuf::from(file)),
    }
  }
  Ok(args)
}

fn print_help() {
  eprintln!(
    "\
crcsum: compute CRC checksums with any catalogue algorithm

USAGE:
  crcsum [OPTIONS] [FILE]...

OPTIONS:
  -a, --algorithm <name>  Catalogue algorithm (default CRC-32/ISO-HDLC)
  -s, --strategy <label>  table8, table4 or bits (default from CRC_ENGINE_STRATEGY)
  -b, --buffer <bytes>    Read buffer size (default from CRC_ENGINE_FILE_BUFFER)
  -l, --list              List catalogue algorithms and exit
      --self-test         Verify every algorithm under every strategy and exit

With no FILE, or when FILE is -, read standard input.
"
  );
}

fn parse_usize(flag: &str, value: &str) -> Result<usize, String> {
  match usize::from_str(value) {
    Ok(0) => Err(format!("{flag} must be at least 1")),
    Ok(n) => Ok(n),
    Err(_) => Err(format!("Invalid value for {flag}: {value}")),
  }
}

fn list() {
  for algorithm in catalogue::ALGORITHMS {
    println!("{algorithm}");
  }
  println!(
    "{} algorithms, {} strategies each",
    catalogue::ALGORITHMS.len(),
    catalogue::strategy_count()
  );
}

fn self_test() -> Result<(), CrcError> {
  let checked = catalogue::self_test()?;
  println!("self-test passed: {checked} entries");
  Ok(())
}

/// Files to checksum: stdin when none were given.
fn inputs(args: &Args) -> Vec<PathBuf> {
  if args.files.is_empty() {
    return vec![PathBuf::from("-")];
  }
  args.files.clone()
}

/// `<hex>  <name>`, zero-padded to the width's nibble count.
fn format_line(crc: u64, bits: u8, file: &Path) -> String {
  let digits = usize::from(bits).div_ceil(4);
  format!("{crc:0digits$x}  {}", file.display())
}

fn checksum_one(engine: &Engine, file: &Path, buf: &mut [u8]) -> Result<u64, CrcError> {
  if file.as_os_str() == "-" {
    return engine.checksum_reader(io::stdin().lock(), buf);
  }
  engine.checksum_file(file, buf)
}

fn run(args: &Args) -> Result<bool, CrcError> {
  let algorithm = catalogue::find(&args.algorithm).ok_or(CrcError::UnknownAlgorithm)?;
  let config = config::get();
  let strategy = args.strategy.unwrap_or(config.strategy);
  let engine = algorithm.engine(strategy);
  debug!("using {}({})", algorithm.name(), strategy);

  let mut buf = vec![0u8; args.buffer.unwrap_or(config.file_buffer)];
  let bits = algorithm.definition().bits();

  let mut ok = true;
  for file in inputs(args) {
    match checksum_one(&engine, &file, &mut buf) {
      Ok(crc) => println!("{}", format_line(crc, bits, &file)),
      Err(err) => {
        eprintln!("crcsum: {}: {err}", file.display());
        ok = false;
      }
    }
  }
  Ok(ok)
}

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let args = match parse_args(env::args().skip(1)) {
    Ok(args) => args,
    Err(msg) => {
      if msg.is_empty() {
        return ExitCode::SUCCESS;
      }
      eprintln!("{msg}");
      return ExitCode::FAILURE;
    }
  };

  if args.list {
    list();
    return ExitCode::SUCCESS;
  }

  if args.self_test {
    return match self_test() {
      Ok(()) => ExitCode::SUCCESS,
      Err(err) => {
        eprintln!("crcsum self-test failed: {err}");
        ExitCode::FAILURE
      }
    };
  }

  match run(&args) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(err) => {
      eprintln!("crcsum: {}: {err}", args.algorithm);
      ExitCode::FAILURE
    }
  }
}

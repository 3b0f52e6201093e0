use clap::Parser;
use std::{
  fs,
  io::{self, Read},
  process::exit,
};

/// Normalize Valve KeyValues (ACF/VDF) contents
#[derive(Debug, Parser, PartialEq)]
#[command(version)]
struct Args {
  /// Sort sections by key names
  #[arg(long)]
  sort_by_name: bool,

  /// File to process, otherwise uses stdin/stdout
  file: Option<String>,
}

fn main() -> io::Result<()> {
  run(Args::parse())
}

fn run(args: Args) -> io::Result<()> {
  let mut input: String;
  if let Some(path) = args.file.as_ref() {
    input = fs::read_to_string(path)?;
  } else {
    input = String::new();
    io::stdin().read_to_string(&mut input)?;
  }

  match acfsrt::parse(&input) {
    Ok(mut node) => {
      if args.sort_by_name {
        node.sort_by_name();
      }

      let output = node.to_string();
      if let Some(path) = args.file.as_ref() {
        fs::write(path, output)?;
      } else {
        print!("{}", output)
      }
    }
    Err(e) => {
      eprintln!("{}", e);
      exit(1);
    }
  }

  Ok(())
}

#[cfg(test)]
mod arg_tests {
  use crate::Args;
  use clap::Parser;

  #[test]
  fn can_parse_file_arg() {
    let args = Args::try_parse_from(["acfsrt", "xyz"]).unwrap();
    assert_eq!(
      args,
      Args {
        sort_by_name: false,
        file: Some("xyz".to_owned())
      }
    );
  }

  #[test]
  fn can_parse_sort_by_name_arg() {
    let args = Args::try_parse_from(["acfsrt", "--sort-by-name"]).unwrap();
    assert_eq!(
      args,
      Args {
        sort_by_name: true,
        file: None
      }
    )
  }
}

use std::env;
use std::fs;
use std::process::ExitCode;

use gtp_bridge::sgf::Record;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: sgf_dump <file.sgf>");
        return ExitCode::FAILURE;
    }

    let path = &args[1];
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let record = Record::from_sgf(&text);
    if !record.is_valid() {
        eprintln!("{path}: not a valid SGF record");
        return ExitCode::FAILURE;
    }

    println!("board: {}x{}", record.x_size(), record.y_size());
    println!("moves: {}", record.move_count());
    for index in 0..record.move_count() {
        println!("{:3}  {}", index, record.move_at(index));
    }

    ExitCode::SUCCESS
}

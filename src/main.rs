//! Date calculation CLI.
//!
//! # Usage
//! ```ignore
//! datecalc leap-year 2024                        // true
//! datecalc weekends 5 2022                       // 9
//! datecalc next-friday 2024-02-03                // 2024-02-09
//! datecalc schedule 01-01-2024 10-01-2024 -w 1 -o 1
//! ```

use datecalc::args::{Args, execute};
use datecalc::logging;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    match execute(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("datecalc: {}", e);
            std::process::exit(1);
        }
    }
}

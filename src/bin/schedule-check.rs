use robot_schedule_validator::cli::run;
use std::process::ExitCode;

fn main() -> ExitCode {
    run()
}

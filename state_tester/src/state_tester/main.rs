//!
//! The state tester executable.
//!

pub(crate) mod arguments;

use std::time::Instant;

use colored::Colorize;

use self::arguments::Arguments;

/// The success exit code.
const EXIT_CODE_SUCCESS: i32 = 0;
/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let exit_code = match main_inner(Arguments::new()) {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let summary = state_tester::Summary::new(arguments.verbosity, arguments.quiet).wrap();

    let filters = state_tester::Filters::new(arguments.tests, arguments.fork);

    let tester = state_tester::StateTester::new(
        summary.clone(),
        filters,
        arguments.tests_path,
        arguments.all,
        arguments.fill,
    )?;

    let run_time_start = Instant::now();
    println!(
        "     {} tests against `{}`",
        "Running".bright_green().bold(),
        arguments.client,
    );

    let mut client = state_tester::HttpClient::new(arguments.client);
    tester.run(&mut client)?;

    let summary = state_tester::Summary::unwrap_arc(summary);
    print!("{summary}");
    println!(
        "    {} running tests in {}m{:02}s",
        "Finished".bright_green().bold(),
        run_time_start.elapsed().as_secs() / 60,
        run_time_start.elapsed().as_secs() % 60,
    );

    if !summary.is_successful() {
        anyhow::bail!("The run is not successful");
    }

    Ok(())
}

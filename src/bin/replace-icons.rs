//! Replace both collaboration icon revisions in every `src/**/*.js` file under
//! the working directory. Takes no arguments.

use iconfix::{output, replace};

fn main() -> std::process::ExitCode {
    output::finish(replace::run_in_current_dir("replace").map(|report| (report, 0)))
}

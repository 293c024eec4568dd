/// Subcommand path that lists the compilers `act` knows about
pub const LIST_COMPILERS: [&str; 2] = ["configure", "list-compilers"];

/// Flag that precedes the machine predicate
pub const FILTER_MACHINES_FLAG: &str = "-filter-machines";
/// Flag that precedes the compiler predicate
pub const FILTER_COMPILERS_FLAG: &str = "-filter-compilers";

/// Build the predicate arguments for an `act` invocation.
///
/// Predicates are passed through verbatim; their syntax belongs to `act`.
/// The machine filter always comes before the compiler filter.
pub fn build_args(
    machine_predicate: Option<&str>,
    compiler_predicate: Option<&str>,
) -> Vec<String> {
    let mut args = Vec::new();

    if let Some(predicate) = machine_predicate {
        args.push(FILTER_MACHINES_FLAG.to_string());
        args.push(predicate.to_string());
    }
    if let Some(predicate) = compiler_predicate {
        args.push(FILTER_COMPILERS_FLAG.to_string());
        args.push(predicate.to_string());
    }

    args
}

/// Full argument vector (after the program name) for `act configure list-compilers`
pub fn invocation_args(
    machine_predicate: Option<&str>,
    compiler_predicate: Option<&str>,
) -> Vec<String> {
    LIST_COMPILERS
        .iter()
        .map(|s| s.to_string())
        .chain(build_args(machine_predicate, compiler_predicate))
        .collect()
}

use crate::id::Id;
use crate::machine_info::MachineMap;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, ContentArrangement, Table};
use serde::Serialize;
use serde_json::json;
use std::fmt::Write as _;

#[derive(Debug, Clone, Serialize)]
pub struct CompilerRecord<'a> {
    pub machine: &'a Id,
    pub compiler: &'a Id,
}

/// Every (machine, compiler) pair, ordered by machine then compiler
pub fn compiler_records(machines: &MachineMap) -> Vec<CompilerRecord<'_>> {
    machines
        .iter()
        .flat_map(|(machine, compilers)| {
            compilers
                .iter()
                .map(move |compiler| CompilerRecord { machine, compiler })
        })
        .collect()
}

pub fn create_styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    table
}

/// Machine table for terminal output
pub fn format_machine_table(machines: &MachineMap) -> String {
    if machines.is_empty() {
        return format!("{}\n", "No machines matched.".yellow());
    }

    let mut table = create_styled_table(&["Machine", "Compilers", "Ids"]);
    for (machine, compilers) in machines {
        let ids: Vec<&str> = compilers.iter().map(Id::as_str).collect();
        table.add_row(vec![
            Cell::new(machine),
            Cell::new(compilers.len()),
            Cell::new(ids.join("\n")),
        ]);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{table}");
    let _ = writeln!(
        out,
        "{} machine(s), {} compiler(s)",
        machines.len().to_string().bold(),
        compiler_records(machines).len().to_string().bold()
    );
    out
}

pub fn format_machine_ids(machines: &MachineMap) -> String {
    machines.keys().fold(String::new(), |mut out, machine| {
        let _ = writeln!(out, "{machine}");
        out
    })
}

/// Records in the same `<machine> <compiler>` form that act prints
pub fn format_compiler_records(machines: &MachineMap) -> String {
    compiler_records(machines)
        .into_iter()
        .fold(String::new(), |mut out, record| {
            let _ = writeln!(out, "{} {}", record.machine, record.compiler);
            out
        })
}

pub fn machines_json(machines: &MachineMap) -> String {
    serde_json::to_string_pretty(machines).unwrap_or_else(|_| "{}".to_string())
}

pub fn machine_ids_json(machines: &MachineMap) -> String {
    let ids: Vec<&Id> = machines.keys().collect();
    json!(ids).to_string()
}

pub fn compiler_records_json(machines: &MachineMap) -> String {
    serde_json::to_string_pretty(&compiler_records(machines))
        .unwrap_or_else(|_| "[]".to_string())
}

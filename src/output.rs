//! Console rendering for the CLI.

use std::io::{self, Write};

use colored::Colorize;

use crate::panorama_client::{JobReport, OutOfSyncDevice};

pub fn print_candidates(candidates: &[OutOfSyncDevice]) -> io::Result<()> {
    write_candidates(&mut io::stdout().lock(), candidates)
}

pub fn print_report(report: &JobReport) -> io::Result<()> {
    write_report(&mut io::stdout().lock(), report)
}

pub fn print_line(line: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{line}")?;
    out.flush()
}

pub fn write_candidates(out: &mut impl Write, candidates: &[OutOfSyncDevice]) -> io::Result<()> {
    writeln!(out, "\nOut-of-sync devices:\n")?;
    for device in candidates {
        let connected = if device.connectivity.is_empty() {
            "-"
        } else {
            device.connectivity.as_str()
        };
        writeln!(
            out,
            "Device Group = {} | Device = {} | Connected: {}",
            device.group_id.bold(),
            device.device_id,
            connected
        )?;
    }
    writeln!(out)
}

pub fn write_report(out: &mut impl Write, report: &JobReport) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "\n{rule}\nCOMMIT-ALL RESULT\n{rule}")?;

    match report {
        JobReport::Devices { outcomes } => {
            for outcome in outcomes {
                let result = if outcome.result == "OK" {
                    outcome.result.green()
                } else {
                    outcome.result.red()
                };
                writeln!(
                    out,
                    "Device Group = {} | Device = {} | Result: {} | Status: {}",
                    outcome.owning_group, outcome.device_id, result, outcome.status
                )?;
            }
        }
        JobReport::JobLevel { result, status } => {
            writeln!(out, "No device details found in the job report.")?;
            writeln!(out, "Result: {result} | Status: {status}")?;
        }
    }

    writeln!(out, "{rule}\n")
}

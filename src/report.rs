//! Human-readable stdout report.
//!
//! Sections appear in a fixed order, every line prefixed with `[info]`.
//! The trailing Mermaid block is emitted verbatim so it stays a valid
//! `graph TD` document.

use std::io::{self, Write};

use crate::pipeline::{AnalysisOptions, AnalysisReport};

/// Write the full report to stdout.
pub fn print(report: &AnalysisReport, options: &AnalysisOptions) -> io::Result<()> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), report, options)
}

/// Write the full report to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    options: &AnalysisOptions,
) -> io::Result<()> {
    write_declarations(out, report)?;
    if options.include_package_deps {
        write_packages(out, report)?;
    }
    write_graph(out, report)?;
    write_stability(out, report, options)?;
    write_violations(out, report)?;

    writeln!(out, "[info] mermaid:")?;
    write!(out, "{}", report.mermaid)?;
    Ok(())
}

fn write_declarations<W: Write>(out: &mut W, report: &AnalysisReport) -> io::Result<()> {
    writeln!(out, "[info] records: {}", report.facts.records.len())?;
    for record in &report.facts.records {
        writeln!(
            out,
            "[info]   {}.{} ({}:{})",
            record.package, record.name, record.file, record.position.line
        )?;
        for field in &record.fields {
            writeln!(out, "[info]     field {} {}", field.name, field.type_name)?;
        }
        for method in &record.methods {
            writeln!(out, "[info]     method {}", method.name)?;
        }
    }

    writeln!(out, "[info] interfaces: {}", report.facts.interfaces.len())?;
    for interface in &report.facts.interfaces {
        writeln!(
            out,
            "[info]   {}.{} ({}:{})",
            interface.package, interface.name, interface.file, interface.position.line
        )?;
    }

    writeln!(out, "[info] functions: {}", report.facts.functions.len())?;
    for function in &report.facts.functions {
        writeln!(
            out,
            "[info]   {}.{} ({}:{})",
            function.package, function.name, function.file, function.position.line
        )?;
    }
    Ok(())
}

fn write_packages<W: Write>(out: &mut W, report: &AnalysisReport) -> io::Result<()> {
    writeln!(out, "[info] packages:")?;
    for package in &report.facts.packages {
        writeln!(out, "[info]   {} ({})", package.name, package.file)?;
        for import in &package.imports {
            writeln!(out, "[info]     import {} as {}", import.path, import.alias)?;
        }
    }
    Ok(())
}

fn write_graph<W: Write>(out: &mut W, report: &AnalysisReport) -> io::Result<()> {
    writeln!(out, "[info] graph nodes: {}", report.summary.nodes)?;
    for node in report.graph.nodes() {
        writeln!(out, "[info]   [{}] {}", node.kind, node.id)?;
    }

    writeln!(out, "[info] graph edges: {}", report.summary.edges)?;
    for (from, to, kind) in report.graph.edges() {
        writeln!(out, "[info]   {} -> {} [{}]", from.id, to.id, kind)?;
    }
    Ok(())
}

fn write_stability<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    options: &AnalysisOptions,
) -> io::Result<()> {
    writeln!(out, "[info] instability:")?;
    for node in &report.stability.nodes {
        writeln!(
            out,
            "[info]   {}: I={:.2} (out={} in={})",
            node.id, node.instability, node.out_degree, node.in_degree
        )?;
    }

    if options.include_package_deps {
        writeln!(out, "[info] package instability:")?;
        for package in &report.stability.packages {
            writeln!(
                out,
                "[info]   {}: I={:.2} (out={} in={})",
                package.name, package.instability, package.out_degree, package.in_degree
            )?;
        }
    }
    Ok(())
}

fn write_violations<W: Write>(out: &mut W, report: &AnalysisReport) -> io::Result<()> {
    writeln!(out, "[info] SDP violations:")?;
    if report.stability.violations.is_empty() {
        writeln!(out, "[info]   なし")?;
        return Ok(());
    }
    for v in &report.stability.violations {
        writeln!(
            out,
            "[info]   {} (I={:.2}) -> {} (I={:.2}) severity={:.2}",
            v.from, v.from_instability, v.to, v.to_instability, v.severity
        )?;
    }
    Ok(())
}

use betafold::core::models::analysis::{AnalysisSummary, DataQualityWarning};
use betafold::core::models::segment::TopologySegment;
use betafold::workflows::predict::PredictionReport;
use std::io::{self, Write};

pub fn write_segments(segments: &[TopologySegment], out: &mut impl Write) -> io::Result<()> {
    if segments.is_empty() {
        return writeln!(out, "  (no segments)");
    }
    writeln!(out, "  {:<8} {:<6} {:>6}", "Label", "Kind", "Length")?;
    for segment in segments {
        writeln!(
            out,
            "  {:<8} {:<6} {:>6}",
            segment.label,
            segment.kind.code(),
            segment.length
        )?;
    }
    Ok(())
}

pub fn write_summary(
    name: &str,
    residues: usize,
    summary: &AnalysisSummary,
    warnings: &[DataQualityWarning],
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{} ({} residues)", name, residues)?;
    writeln!(
        out,
        "  Molecular weight:  {}",
        summary.molecular_weight_display()
    )?;
    writeln!(out, "  Isoelectric point: {:.2}", summary.isoelectric_point)?;
    if summary.domains.is_empty() {
        writeln!(out, "  Domains:           none")?;
    } else {
        writeln!(out, "  Domains:")?;
        for domain in &summary.domains {
            writeln!(
                out,
                "    {:<10} {:>5}-{:<5} {:>5.1}%",
                domain.label, domain.start_residue, domain.end_residue, domain.confidence_percent
            )?;
        }
    }
    for warning in warnings {
        writeln!(out, "  ! {}", warning)?;
    }
    Ok(())
}

pub fn write_report(report: &PredictionReport, out: &mut impl Write) -> io::Result<()> {
    write_summary(
        &report.protein_name,
        report.sequence.len(),
        &report.analysis,
        &report.warnings,
        out,
    )?;
    if let Some(confidence) = report.confidence {
        writeln!(out, "  Confidence:        {:.1}%", confidence)?;
    }
    writeln!(out, "  Structure:         {}", report.structure)?;
    writeln!(
        out,
        "  Diagram:           {} shapes, {:.0} x {:.0}",
        report.layout.shapes.len(),
        report.layout.total_width,
        report.layout.height
    )?;
    writeln!(out, "  Segments:")?;
    write_segments(&report.segments, out)
}

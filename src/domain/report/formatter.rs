//! Plain-text stakeholder analysis report.

use std::collections::HashMap;

use crate::domain::foundation::StakeholderId;
use crate::domain::stakeholder::{Relationship, Stakeholder};

/// File name the report is exported under.
pub const REPORT_FILE_NAME: &str = "stakeholder-analysis-report.txt";

pub const REPORT_TITLE: &str = "STAKEHOLDER ANALYSIS REPORT";
pub const STAKEHOLDER_SECTION: &str = "STAKEHOLDER LIST:";
pub const RELATIONSHIP_SECTION: &str = "RELATIONSHIPS:";
pub const ANALYSIS_SECTION: &str = "ANALYSIS:";

/// Renders the report.
///
/// Sections appear in a fixed order: stakeholder list, relationships,
/// analysis. Relationships whose endpoints cannot be resolved are skipped.
pub fn format_report(
    stakeholders: &[Stakeholder],
    relationships: &[Relationship],
    analysis_lines: &[String],
) -> String {
    let mut report = String::new();
    report.push_str(REPORT_TITLE);
    report.push('\n');
    report.push_str(&"=".repeat(26));
    report.push_str("\n\n");

    report.push_str(&stakeholder_section(stakeholders));
    report.push_str(&relationship_section(stakeholders, relationships));
    report.push('\n');
    report.push_str(&analysis_section(analysis_lines));

    report
}

fn stakeholder_section(stakeholders: &[Stakeholder]) -> String {
    let mut section = format!("{}\n", STAKEHOLDER_SECTION);

    for s in stakeholders {
        section.push_str(&format!("- {} ({})\n", s.name(), s.role()));
        section.push_str(&format!(
            "  Power: {}, Interest: {}, Influence: {}\n",
            s.power(),
            s.interest(),
            s.influence()
        ));
        if let Some(notes) = s.notes().filter(|n| !n.trim().is_empty()) {
            section.push_str(&format!("  Notes: {}\n", notes));
        }
        section.push('\n');
    }

    section
}

fn relationship_section(stakeholders: &[Stakeholder], relationships: &[Relationship]) -> String {
    let names: HashMap<&StakeholderId, &str> =
        stakeholders.iter().map(|s| (s.id(), s.name())).collect();

    let mut section = format!("{}\n", RELATIONSHIP_SECTION);

    for r in relationships {
        if let (Some(source), Some(target)) = (names.get(&r.source), names.get(&r.target)) {
            section.push_str(&format!("- {} is related to {}\n", source, target));
        }
    }

    section
}

fn analysis_section(lines: &[String]) -> String {
    let mut section = format!("{}\n", ANALYSIS_SECTION);
    for line in lines {
        section.push_str(&format!("- {}\n", line));
    }
    section
}

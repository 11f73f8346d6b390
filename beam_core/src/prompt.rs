//! Analysis prompt template.
//!
//! Serializes the form into the instruction sent to the chat-completion
//! endpoint. Field values go in untouched, load lists go in as compact JSON
//! arrays, and the model is asked for five fixed steps whose headers use the
//! same `Step N:` marker the segmenter splits on.

use crate::beam::BeamConfiguration;
use crate::loads::{LoadKind, LoadSet};

/// One requested section of the answer
#[derive(Clone, Debug)]
pub struct AnalysisSection {
    pub title: &'static str,
    pub instructions: &'static [&'static str],
}

/// The five sections the model is asked to produce, in order
pub const ANALYSIS_SECTIONS: [AnalysisSection; 5] = [
    AnalysisSection {
        title: "Initial Setup",
        instructions: &[
            "Write out the beam configuration and dimensions in simple terms",
            "List the material properties in standard units",
            "Describe the load conditions in a clear way",
        ],
    },
    AnalysisSection {
        title: "Reaction Forces",
        instructions: &[
            "Write the equilibrium equations in simple terms",
            "Calculate the support reactions using basic math",
            "Express all results in Newtons (N) or Newton-meters (Nm)",
        ],
    },
    AnalysisSection {
        title: "Shear Force Analysis",
        instructions: &[
            "Explain how the shear force varies along the beam",
            "Calculate the maximum shear force in Newtons (N)",
            "Specify where the maximum occurs",
        ],
    },
    AnalysisSection {
        title: "Bending Moment Analysis",
        instructions: &[
            "Describe how the bending moment changes along the beam",
            "Calculate the maximum bending moment in Newton-meters (Nm)",
            "Note the location of maximum moment",
        ],
    },
    AnalysisSection {
        title: "Deflection Analysis",
        instructions: &[
            "Calculate the maximum deflection in millimeters (mm)",
            "Specify where the maximum deflection occurs",
            "Provide a simple interpretation of the results",
        ],
    },
];

const CLOSING_INSTRUCTIONS: &str = "Write all calculations in plain numbers and standard units. \
Avoid using mathematical notation or symbols. Express all results in a clear, readable format.";

/// Header line of section `index` (0-based), e.g. `Step 1: Initial Setup`
pub fn section_header(index: usize) -> Option<String> {
    ANALYSIS_SECTIONS
        .get(index)
        .map(|section| format!("Step {}: {}", index + 1, section.title))
}

/// Header plus one `- ` bullet per instruction
fn render_section(index: usize, section: &AnalysisSection) -> String {
    let mut lines = Vec::with_capacity(section.instructions.len() + 1);
    lines.extend(section_header(index));
    lines.extend(section.instructions.iter().map(|line| format!("- {}", line)));
    lines.join("\n")
}

/// Build the analysis prompt for a beam and its loads.
///
/// Never fails: empty or non-numeric fields produce a prompt with those
/// values embedded as-is.
///
/// # Example
///
/// ```rust
/// use beam_core::beam::BeamConfiguration;
/// use beam_core::loads::LoadSet;
/// use beam_core::prompt::build_prompt;
///
/// let prompt = build_prompt(&BeamConfiguration::default(), &LoadSet::new());
/// assert!(prompt.contains("Length: m\n"));
/// assert!(prompt.contains("Step 5: Deflection Analysis"));
/// ```
pub fn build_prompt(beam: &BeamConfiguration, loads: &LoadSet) -> String {
    let steps = ANALYSIS_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| render_section(i, section))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"Calculate the beam analysis for:
Beam Type: {beam_type}
Support Type: {support_type}
Length: {length}m
Width: {width}m
Height: {height}m
Young's Modulus: {modulus}GPa
Point Loads: {point}
Moment Loads: {moment}
Distributed Loads: {distributed}

Please provide a clear step-by-step solution in plain text format:

{steps}

{closing}"#,
        beam_type = beam.beam_type.code(),
        support_type = beam.support_type.code(),
        length = beam.length,
        width = beam.width,
        height = beam.height,
        modulus = beam.youngs_modulus,
        point = loads.to_json(LoadKind::Point),
        moment = loads.to_json(LoadKind::Moment),
        distributed = loads.to_json(LoadKind::Distributed),
        steps = steps,
        closing = CLOSING_INSTRUCTIONS,
    )
}

//! The transport-independent generation entry point.
//!
//! A request is a flat mapping of named measurements plus optional control
//! parameter overrides and an optional stretch; the response is the
//! rendered document(s) together with the collected geometric warnings.
//! Whatever serves this — an HTTP handler, the CLI, an IPC command — only
//! has to shuttle bytes.

use crate::measurements::FullMeasurements;
use crate::pattern::baby_dress::{BabyDressParams, BabyDressPattern};
use crate::pattern::corset::{CorsetControl, CorsetControlOverrides, CorsetMeasurements, CorsetPattern};
use crate::pattern::skirt::{SkirtMeasurements, SkirtPattern};
use crate::pattern::sleeve::{SleeveControl, SleeveControlOverrides, SleeveMeasurements, SleevePattern};
use crate::pattern::{DraftError, Pattern, Variant};
use serde::{Deserialize, Serialize};

/// The pattern types a request can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Corset / bodice block.
    Corset,
    /// Jersey set-in sleeve.
    Sleeve,
    /// Straight skirt block.
    Skirt,
    /// Baby dress.
    BabyDress,
}

/// Fabric stretch to apply after the build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StretchInput {
    /// Horizontal stretch capacity (`0.0` = none, `1.0` = 100%).
    #[serde(default)]
    pub horizontal: f64,
    /// Vertical stretch capacity.
    #[serde(default)]
    pub vertical: f64,
    /// Fraction of the capacity to use.
    #[serde(default = "default_usage")]
    pub usage: f64,
}

fn default_usage() -> f64 {
    1.0
}

/// Which document(s) to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the construction SVG.
    Svg,
    /// Only the construction PDF.
    Pdf,
    /// Both SVG variants plus warnings.
    #[default]
    All,
}

/// A pattern generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternRequest {
    /// Which pattern to draft.
    pub pattern_type: PatternKind,
    /// Flat mapping of named measurements in cm.
    pub measurements: serde_json::Value,
    /// Optional control parameter overrides.
    #[serde(default)]
    pub control_parameters: Option<serde_json::Value>,
    /// Optional stretch transform.
    #[serde(default)]
    pub stretch: Option<StretchInput>,
    /// Which documents to produce.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Both SVG variants plus the collected warnings.
#[derive(Debug, Clone, Serialize)]
pub struct PatternResponse {
    /// Construction reference sheet.
    pub construction_svg: String,
    /// Clean printable outline.
    pub pattern_svg: String,
    /// Geometric warnings collected while drawing.
    pub warnings: Vec<String>,
}

/// The generated document(s), per the requested output format.
#[derive(Debug, Clone)]
pub enum Generated {
    /// A single construction SVG.
    Svg(crate::pattern::Rendered<String>),
    /// A single construction PDF.
    Pdf(crate::pattern::Rendered<Vec<u8>>),
    /// Both SVG variants plus warnings.
    All(PatternResponse),
}

fn invalid(err: serde_json::Error) -> DraftError {
    DraftError::InvalidMeasurements(err.to_string())
}

fn parse<T: serde::de::DeserializeOwned>(value: &serde_json::Value) -> Result<T, DraftError> {
    serde_json::from_value(value.clone()).map_err(invalid)
}

fn build(request: &PatternRequest) -> Result<Box<dyn Pattern>, DraftError> {
    let stretch = request.stretch;
    match request.pattern_type {
        PatternKind::Corset => {
            let fm: FullMeasurements = parse(&request.measurements)?;
            let overrides: CorsetControlOverrides = match &request.control_parameters {
                Some(value) => parse(value)?,
                None => CorsetControlOverrides::default(),
            };
            let control = CorsetControl::default().with_overrides(&overrides);
            let mut pattern = CorsetPattern::new(CorsetMeasurements::from_full(&fm), control);
            if let Some(s) = stretch {
                pattern.stretch(s.horizontal, s.vertical, s.usage)?;
            }
            Ok(Box::new(pattern))
        }
        PatternKind::Sleeve => {
            let m: SleeveMeasurements = parse(&request.measurements)?;
            let overrides: SleeveControlOverrides = match &request.control_parameters {
                Some(value) => parse(value)?,
                None => SleeveControlOverrides::default(),
            };
            let control = SleeveControl::default().with_overrides(&overrides);
            let mut pattern = SleevePattern::new(m, control);
            if let Some(s) = stretch {
                pattern.stretch(s.horizontal, s.vertical, s.usage)?;
            }
            Ok(Box::new(pattern))
        }
        PatternKind::Skirt => {
            let m: SkirtMeasurements = parse(&request.measurements)?;
            let mut pattern = SkirtPattern::new(m);
            if let Some(s) = stretch {
                pattern.stretch(s.horizontal, s.vertical, s.usage)?;
            }
            Ok(Box::new(pattern))
        }
        PatternKind::BabyDress => {
            if stretch.is_some() {
                return Err(DraftError::InvalidMeasurements(
                    "the baby dress pattern does not support stretch".to_string(),
                ));
            }
            let params: BabyDressParams = parse(&request.measurements)?;
            Ok(Box::new(BabyDressPattern::new(params)))
        }
    }
}

/// Generate the requested pattern document(s).
///
/// Invalid or incomplete measurements fail fast with a [`DraftError`];
/// geometric implausibilities never do — they ride along as warnings on
/// the successful result.
pub fn generate(request: &PatternRequest) -> Result<Generated, DraftError> {
    let pattern = build(request)?;
    match request.output_format {
        OutputFormat::Svg => Ok(Generated::Svg(pattern.render_svg(Variant::Construction))),
        OutputFormat::Pdf => Ok(Generated::Pdf(pattern.render_pdf(Variant::Construction))),
        OutputFormat::All => {
            let construction = pattern.render_svg(Variant::Construction);
            let printable = pattern.render_svg(Variant::Printable);
            let mut warnings = construction.warnings;
            warnings.extend(printable.warnings);
            Ok(Generated::All(PatternResponse {
                construction_svg: construction.output,
                pattern_svg: printable.output,
                warnings,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::default_measurements;
    use serde_json::json;

    fn corset_request(format: OutputFormat) -> PatternRequest {
        PatternRequest {
            pattern_type: PatternKind::Corset,
            measurements: serde_json::to_value(default_measurements(38)).unwrap(),
            control_parameters: None,
            stretch: None,
            output_format: format,
        }
    }

    #[test]
    fn generates_both_svg_variants() {
        let generated = generate(&corset_request(OutputFormat::All)).unwrap();
        match generated {
            Generated::All(response) => {
                assert!(response.construction_svg.contains("<svg"));
                assert!(response.pattern_svg.contains("<svg"));
            }
            _ => panic!("expected All output"),
        }
    }

    #[test]
    fn generates_single_documents() {
        match generate(&corset_request(OutputFormat::Svg)).unwrap() {
            Generated::Svg(rendered) => assert!(rendered.output.contains("<svg")),
            _ => panic!("expected Svg output"),
        }
        match generate(&corset_request(OutputFormat::Pdf)).unwrap() {
            Generated::Pdf(rendered) => assert_eq!(&rendered.output[..5], b"%PDF-"),
            _ => panic!("expected Pdf output"),
        }
    }

    #[test]
    fn missing_fields_are_a_client_error() {
        let request = PatternRequest {
            pattern_type: PatternKind::Corset,
            measurements: json!({ "full_bust": 88.0 }),
            control_parameters: None,
            stretch: None,
            output_format: OutputFormat::All,
        };
        assert!(matches!(
            generate(&request),
            Err(DraftError::InvalidMeasurements(_))
        ));
    }

    #[test]
    fn unknown_control_parameters_are_rejected() {
        let mut request = corset_request(OutputFormat::All);
        request.control_parameters = Some(json!({ "no_such_knob": 1.0 }));
        assert!(generate(&request).is_err());

        let mut request = corset_request(OutputFormat::All);
        request.control_parameters = Some(json!({ "front_neck_center": 0.7 }));
        assert!(generate(&request).is_ok());
    }

    #[test]
    fn sleeve_requests_take_direct_measurements() {
        let request = PatternRequest {
            pattern_type: PatternKind::Sleeve,
            measurements: json!({
                "armhole_depth": 19.5,
                "armhole_measurement": 45.0,
                "sleeve_length": 66.0,
                "upper_arm_to_elbow": 35.0,
                "sleeve_bottom_width": 20.0,
            }),
            control_parameters: None,
            stretch: Some(StretchInput {
                horizontal: 0.25,
                vertical: 0.1,
                usage: 1.0,
            }),
            output_format: OutputFormat::All,
        };
        assert!(generate(&request).is_ok());
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let request: PatternRequest = serde_json::from_value(json!({
            "pattern_type": "baby_dress",
            "measurements": {},
        }))
        .unwrap();
        assert_eq!(request.output_format, OutputFormat::All);
        assert!(generate(&request).is_ok());
    }

    #[test]
    fn baby_dress_rejects_stretch() {
        let request = PatternRequest {
            pattern_type: PatternKind::BabyDress,
            measurements: json!({}),
            control_parameters: None,
            stretch: Some(StretchInput {
                horizontal: 0.2,
                vertical: 0.0,
                usage: 1.0,
            }),
            output_format: OutputFormat::All,
        };
        assert!(generate(&request).is_err());
    }
}

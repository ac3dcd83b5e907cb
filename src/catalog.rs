//! Static garment catalog and pattern type metadata.
//!
//! This is the data a shop or sizing endpoint serves: which garments
//! exist, which pattern pieces they are made of, and what inputs each
//! pattern type requires.

use serde::Serialize;

/// Standard French sizes with a default measurement column.
pub const AVAILABLE_SIZES: [i32; 8] = [34, 36, 38, 40, 42, 44, 46, 48];

/// A single pattern piece within a garment.
#[derive(Debug, Clone, Serialize)]
pub struct PieceInfo {
    /// Pattern type identifier, e.g. `"corset"`.
    pub pattern_type: &'static str,
    /// Human readable piece name.
    pub label: &'static str,
}

/// A garment with its constituent pattern pieces.
#[derive(Debug, Clone, Serialize)]
pub struct GarmentInfo {
    /// Garment identifier.
    pub name: &'static str,
    /// Human readable garment name.
    pub label: &'static str,
    /// The pieces to draft for this garment.
    pub pieces: Vec<PieceInfo>,
}

/// Definition of one control parameter of a pattern type.
#[derive(Debug, Clone, Serialize)]
pub struct ControlParameterDefinition {
    /// Parameter name as used in override mappings.
    pub name: &'static str,
    /// Default value.
    pub default: f64,
    /// What the parameter shapes.
    pub description: &'static str,
}

/// Definition of one required measurement field of a pattern type.
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementFieldDefinition {
    /// Field name as used in measurement mappings.
    pub name: &'static str,
    /// Measurement chart label.
    pub description: &'static str,
}

/// Metadata about a pattern type.
#[derive(Debug, Clone, Serialize)]
pub struct PatternTypeInfo {
    /// Pattern type identifier.
    pub name: &'static str,
    /// Human readable name.
    pub label: &'static str,
    /// Measurement fields the type consumes.
    pub required_measurements: Vec<MeasurementFieldDefinition>,
    /// Tunable curve-shaping parameters with their defaults.
    pub control_parameters: Vec<ControlParameterDefinition>,
    /// Whether the stretch transform applies to this type.
    pub supports_stretch: bool,
}

fn field(name: &'static str, description: &'static str) -> MeasurementFieldDefinition {
    MeasurementFieldDefinition { name, description }
}

fn control(
    name: &'static str,
    default: f64,
    description: &'static str,
) -> ControlParameterDefinition {
    ControlParameterDefinition {
        name,
        default,
        description,
    }
}

/// The garment catalog: garments with their pattern pieces.
pub fn garment_catalog() -> Vec<GarmentInfo> {
    vec![
        GarmentInfo {
            name: "top",
            label: "Top / Bodice Block",
            pieces: vec![
                PieceInfo {
                    pattern_type: "corset",
                    label: "Bodice",
                },
                PieceInfo {
                    pattern_type: "sleeve",
                    label: "Sleeve",
                },
            ],
        },
        GarmentInfo {
            name: "skirt",
            label: "Straight Skirt",
            pieces: vec![PieceInfo {
                pattern_type: "skirt",
                label: "Skirt Panel",
            }],
        },
        GarmentInfo {
            name: "baby_dress",
            label: "Baby Dress (18 months)",
            pieces: vec![PieceInfo {
                pattern_type: "baby_dress",
                label: "Dress Panel",
            }],
        },
    ]
}

/// A flat list of every pattern piece across the catalog.
pub fn all_pieces() -> Vec<PieceInfo> {
    garment_catalog()
        .into_iter()
        .flat_map(|garment| garment.pieces)
        .collect()
}

/// Metadata for every supported pattern type.
pub fn pattern_type_catalog() -> Vec<PatternTypeInfo> {
    vec![
        PatternTypeInfo {
            name: "corset",
            label: "Corset / Bodice Block",
            required_measurements: vec![
                field("back_waist_length", "Longueur taille dos"),
                field("front_waist_length", "Longueur taille devant"),
                field("full_bust", "Tour de poitrine"),
                field("bust_height", "Hauteur de poitrine"),
                field("half_bust_point_distance", "1/2 écart de poitrine"),
                field("full_waist", "Tour de taille"),
                field("small_hip", "Tour des petites hanches"),
                field("full_hip", "Tour de bassin"),
                field("neck_circumference", "Tour d'encollure"),
                field("half_back_width", "1/2 carrure dos"),
                field("half_front_width", "1/2 carrure devant"),
                field("shoulder_length", "Longueur d'épaule"),
                field("underarm_height", "Hauteur dessous de bras"),
                field("waist_to_hip", "Hauteur taille-bassin"),
            ],
            control_parameters: vec![
                control(
                    "front_neck_center",
                    0.8,
                    "Ratio for front neck center Bezier control",
                ),
                control(
                    "back_neck_center",
                    0.5,
                    "Ratio for back neck center Bezier control",
                ),
                control(
                    "front_neck_top",
                    0.34,
                    "Ratio for front neck top Bezier control",
                ),
                control(
                    "back_neck_top",
                    0.20,
                    "Ratio for back neck top Bezier control",
                ),
                control("armhole_curve", 0.4, "Ratio for armhole curve offset"),
            ],
            supports_stretch: true,
        },
        PatternTypeInfo {
            name: "sleeve",
            label: "Jersey Set-In Sleeve",
            required_measurements: vec![
                field("armhole_depth", "Profondeur d'emmanchure"),
                field("armhole_measurement", "Mesure d'emmanchure totale"),
                field("sleeve_length", "Longueur de manche"),
                field("upper_arm_to_elbow", "Distance épaule-coude"),
                field("sleeve_bottom_width", "Largeur bas de manche"),
            ],
            control_parameters: vec![
                control("g3_perpendicular", 1.0, "Perpendicular offset for G3 (cm)"),
                control("h3_perpendicular", 1.5, "Perpendicular offset for H3 (cm)"),
            ],
            supports_stretch: true,
        },
        PatternTypeInfo {
            name: "skirt",
            label: "Straight Skirt Block",
            required_measurements: vec![
                field("full_waist", "Tour de taille"),
                field("full_hip", "Tour de hanches"),
                field("waist_to_hip", "Hauteur taille-hanches"),
                field("waist_to_knee", "Hauteur taille-genou"),
                field("waist_to_floor", "Hauteur taille-sol"),
                field("skirt_length", "Longueur de jupe"),
            ],
            control_parameters: vec![],
            supports_stretch: true,
        },
        PatternTypeInfo {
            name: "baby_dress",
            label: "Baby Dress (18 months)",
            required_measurements: vec![
                field("total_length", "Longueur totale"),
                field("armhole_depth", "Profondeur d'emmanchure"),
                field("chest_half_width", "1/2 largeur poitrine"),
                field("hem_half_width", "1/2 largeur ourlet"),
                field("neck_width_start", "Départ d'encolure"),
                field("strap_width", "Largeur de bretelle"),
                field("front_neck_drop", "Profondeur encolure devant"),
                field("back_neck_drop", "Profondeur encolure dos"),
            ],
            control_parameters: vec![],
            supports_stretch: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_garment_has_both_pieces() {
        let catalog = garment_catalog();
        let top = catalog.iter().find(|g| g.name == "top").unwrap();
        let types: Vec<_> = top.pieces.iter().map(|p| p.pattern_type).collect();
        assert_eq!(types, ["corset", "sleeve"]);
    }

    #[test]
    fn every_piece_has_pattern_type_metadata() {
        let types: Vec<_> = pattern_type_catalog();
        for piece in all_pieces() {
            assert!(
                types.iter().any(|t| t.name == piece.pattern_type),
                "no metadata for {}",
                piece.pattern_type
            );
        }
    }

    #[test]
    fn corset_metadata_matches_the_control_defaults() {
        let types = pattern_type_catalog();
        let corset = types.iter().find(|t| t.name == "corset").unwrap();
        assert_eq!(corset.required_measurements.len(), 14);
        let armhole = corset
            .control_parameters
            .iter()
            .find(|c| c.name == "armhole_curve")
            .unwrap();
        assert_eq!(armhole.default, 0.4);
    }

    #[test]
    fn sizes_are_the_even_range() {
        assert_eq!(AVAILABLE_SIZES.len(), 8);
        assert!(AVAILABLE_SIZES.windows(2).all(|w| w[1] - w[0] == 2));
    }
}

//! Body measurement records and the French sizing table.
//!
//! Measurements are derived from female body measurements according to the
//! French sizing standard (T34-T48), with T38 as the base size. All values
//! are centimeters. Field numbering in the comments follows the standard
//! measurement chart.

use serde::{Deserialize, Serialize};

/// Complete body measurements in centimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullMeasurements {
    /// 1. Longueur taille dos
    pub back_waist_length: f64,
    /// 2. Longueur taille devant
    pub front_waist_length: f64,
    /// 3. Tour de poitrine
    pub full_bust: f64,
    /// 4. Hauteur de poitrine
    pub bust_height: f64,
    /// 5. 1/2 écart de poitrine
    pub half_bust_point_distance: f64,
    /// 6. Tour de taille
    pub full_waist: f64,
    /// 7. Tour des petites hanches
    pub small_hip: f64,
    /// 8. Tour de bassin
    pub full_hip: f64,
    /// 9. Tour d'encollure
    pub neck_circumference: f64,
    /// 10. 1/2 carrure dos
    pub half_back_width: f64,
    /// 11. 1/2 carrure devant
    pub half_front_width: f64,
    /// 12. Longueur d'épaule
    pub shoulder_length: f64,
    /// 13. Tour d'emmanchure
    pub armhole_circumference: f64,
    /// 14. Hauteur dessous de bras
    pub underarm_height: f64,
    /// 15. Longueur de bras
    pub arm_length: f64,
    /// 16. Grosseur de bras
    pub upper_arm: f64,
    /// 17. Hauteur coude
    pub elbow_height: f64,
    /// 18. Tour de poignet
    pub wrist: f64,
    /// 19. Hauteur taille-bassin
    pub waist_to_hip: f64,
    /// 20. Hauteur de montant
    pub crotch_depth: f64,
    /// 21. Enfourchure
    pub crotch_length: f64,
    /// 22. Hauteur taille au genou
    pub waist_to_knee: f64,
    /// 23. Hauteur taille à terre
    pub waist_to_floor: f64,
    /// 24. Hauteur taille côté à terre
    pub side_waist_to_floor: f64,
}

/// Return the default measurements for a standard French size.
///
/// Every value is `base + increment * steps` where `base` is the T38 column
/// of the sizing table and one step is two size units (T36 → T38).
pub fn default_measurements(size: i32) -> FullMeasurements {
    let steps = ((size - 38) / 2) as f64;
    let v = |base: f64, incr: f64| base + incr * steps;

    FullMeasurements {
        back_waist_length: v(41.0, 0.5),
        front_waist_length: v(37.0, 0.5),
        full_bust: v(88.0, 4.0),
        bust_height: v(22.0, 0.5),
        half_bust_point_distance: v(9.25, 0.25),
        full_waist: v(68.0, 4.0),
        small_hip: v(85.0, 4.0),
        full_hip: v(94.0, 4.0),
        neck_circumference: v(36.0, 1.0),
        half_back_width: v(17.5, 0.25),
        half_front_width: v(16.5, 0.25),
        shoulder_length: v(12.0, 0.4),
        armhole_circumference: v(39.5, 1.0),
        underarm_height: v(21.5, 0.25),
        arm_length: v(60.0, 0.0),
        upper_arm: v(26.0, 1.0),
        elbow_height: v(35.0, 0.0),
        wrist: v(16.0, 0.25),
        waist_to_hip: v(22.0, 0.0),
        crotch_depth: v(26.5, 0.5),
        crotch_length: v(60.0, 2.0),
        waist_to_knee: v(58.0, 1.0),
        waist_to_floor: v(105.0, 0.5),
        side_waist_to_floor: v(105.5, 1.0),
    }
}

/// Known individuals with saved body measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    /// Preset "kwama".
    Kwama,
    /// Preset "vivien".
    Vivien,
}

impl Person {
    /// Every known preset.
    pub const ALL: [Person; 2] = [Person::Kwama, Person::Vivien];

    /// Parse a person name (case-insensitive). Returns `None` when unknown.
    pub fn parse(s: &str) -> Option<Person> {
        match s.to_lowercase().as_str() {
            "kwama" => Some(Person::Kwama),
            "vivien" => Some(Person::Vivien),
            _ => None,
        }
    }

    /// The preset's lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Person::Kwama => "kwama",
            Person::Vivien => "vivien",
        }
    }
}

/// Return the saved measurements of a specific individual.
pub fn individual_measurements(person: Person) -> FullMeasurements {
    match person {
        Person::Vivien => FullMeasurements {
            back_waist_length: 43.5,
            front_waist_length: 39.5,
            full_bust: 102.0,
            bust_height: 22.0,
            half_bust_point_distance: 11.0,
            full_waist: 83.0,
            small_hip: 94.0,
            full_hip: 101.0,
            neck_circumference: 40.0,
            half_back_width: 19.5,
            half_front_width: 18.5,
            shoulder_length: 13.0,
            armhole_circumference: 50.0,
            underarm_height: 22.5,
            arm_length: 66.0,
            upper_arm: 33.0,
            elbow_height: 40.0,
            wrist: 17.5,
            waist_to_hip: 25.0,
            crotch_depth: 32.0,
            crotch_length: 85.0,
            waist_to_knee: 67.0,
            waist_to_floor: 126.0,
            side_waist_to_floor: 127.0,
        },
        Person::Kwama => FullMeasurements {
            back_waist_length: 40.5,
            front_waist_length: 36.5,
            full_bust: 90.0,
            bust_height: 22.0,
            half_bust_point_distance: 9.5,
            full_waist: 73.0,
            small_hip: 80.5,
            full_hip: 100.0,
            neck_circumference: 36.0,
            half_back_width: 17.5,
            half_front_width: 16.5,
            shoulder_length: 12.0,
            armhole_circumference: 40.0,
            underarm_height: 22.0,
            arm_length: 60.0,
            upper_arm: 28.0,
            elbow_height: 33.0,
            wrist: 15.0,
            waist_to_hip: 22.0,
            crotch_depth: 26.5,
            crotch_length: 62.0,
            waist_to_knee: 58.0,
            waist_to_floor: 105.0,
            side_waist_to_floor: 106.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn base_size_is_the_table_column() {
        let m = default_measurements(38);
        assert_relative_eq!(m.full_bust, 88.0);
        assert_relative_eq!(m.full_waist, 68.0);
        assert_relative_eq!(m.back_waist_length, 41.0);
    }

    #[test]
    fn sizes_step_by_increment() {
        assert_relative_eq!(default_measurements(36).full_bust, 84.0);
        assert_relative_eq!(default_measurements(40).full_bust, 92.0);
        assert_relative_eq!(default_measurements(48).shoulder_length, 14.0);
        // arm_length has a zero increment
        assert_relative_eq!(default_measurements(48).arm_length, 60.0);
    }

    #[test]
    fn person_parsing() {
        assert_eq!(Person::parse("kwama"), Some(Person::Kwama));
        assert_eq!(Person::parse("Vivien"), Some(Person::Vivien));
        assert_eq!(Person::parse("unknown"), None);
    }

    #[test]
    fn presets_hold_saved_values() {
        let vivien = individual_measurements(Person::Vivien);
        assert_relative_eq!(vivien.full_bust, 102.0);
        assert_relative_eq!(vivien.waist_to_floor, 126.0);
        let kwama = individual_measurements(Person::Kwama);
        assert_relative_eq!(kwama.full_hip, 100.0);
    }

    #[test]
    fn serializes_with_field_names() {
        let value = serde_json::to_value(default_measurements(38)).unwrap();
        assert_eq!(value["full_bust"], 88.0);
        assert_eq!(value["wrist"], 16.0);
    }
}

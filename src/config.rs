//! Batch configuration: the list of shapes to generate together with the shared extrusion
//! settings, loadable from a JSON document.

use crate::Result;
use crate::airfoil::AirfoilParams;
use crate::geom3::extrusion::{
    CapMode, ExtrusionOptions, MeshDocument, SOLID_NAME, emit_with_options,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn default_span() -> f64 {
    0.1
}

fn default_solid_name() -> String {
    SOLID_NAME.to_string()
}

/// A batch of airfoil shapes which are extruded together into a single solid. A missing `span`
/// defaults to 0.1.
///
/// # Examples
///
/// ```
/// use foilmesh::FoilBatch;
/// let batch: FoilBatch = serde_json::from_str(r#"{
///     "span": 0.5,
///     "airfoils": [{"n_points": 20, "chord": 2.0, "angle": 10.0}]
/// }"#).unwrap();
/// assert_eq!(batch.airfoils[0].point_count, 20);
/// assert_eq!(batch.solid_name, "three_naca_airfoils");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoilBatch {
    #[serde(default = "default_solid_name")]
    pub solid_name: String,

    #[serde(default = "default_span")]
    pub span: f64,

    #[serde(default)]
    pub cap: CapMode,

    #[serde(default)]
    pub airfoils: Vec<AirfoilParams>,
}

impl Default for FoilBatch {
    fn default() -> Self {
        Self {
            solid_name: default_solid_name(),
            span: default_span(),
            cap: CapMode::default(),
            airfoils: Vec::new(),
        }
    }
}

impl FoilBatch {
    /// The reference batch of three bent airfoils arranged as a cascade, each with 150 points
    /// and extruded by a span of 1.0.
    pub fn preset() -> Self {
        Self {
            span: 1.0,
            airfoils: vec![
                AirfoilParams::new(150, 2.0, 0.0, 0.0, 10.0, -0.4, 0.25, 0.03),
                AirfoilParams::new(150, 0.9, 1.75, 0.5, 35.0, -0.3, 0.18, 0.03),
                AirfoilParams::new(150, 0.8, 2.35, 1.1, 70.0, -0.2, 0.15, 0.03),
            ],
            ..Default::default()
        }
    }

    pub fn options(&self) -> ExtrusionOptions {
        ExtrusionOptions::new(self.span)
            .with_cap(self.cap)
            .with_solid_name(&self.solid_name)
    }

    /// Validate the solid name and every airfoil in the batch, failing on the first problem. The
    /// solid name may contain plain spaces but no other whitespace or control characters. Airfoil
    /// errors carry the index of the offending airfoil.
    pub fn validate(&self) -> Result<()> {
        if self
            .solid_name
            .chars()
            .any(|c| c != ' ' && (c.is_whitespace() || c.is_control()))
        {
            return Err(format!(
                "solid name {:?} contains whitespace other than spaces",
                self.solid_name
            )
            .into());
        }
        for (i, airfoil) in self.airfoils.iter().enumerate() {
            airfoil
                .validate()
                .map_err(|e| format!("airfoil {}: {}", i, e))?;
        }
        Ok(())
    }

    /// Generate and extrude every airfoil in the batch into one document.
    pub fn emit(&self) -> MeshDocument {
        emit_with_options(&self.airfoils, &self.options())
    }
}

/// Load a batch from a JSON file.
///
/// # Arguments
///
/// * `path`: the JSON file to read
///
/// returns: Result<FoilBatch, Box<dyn Error, Global>>
pub fn load_batch(path: &Path) -> Result<FoilBatch> {
    let file = File::open(path)?;
    let batch = serde_json::from_reader(BufReader::new(file))?;
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom3::extrusion::ShellSection;
    use test_case::test_case;

    #[test]
    fn preset_is_valid() {
        let batch = FoilBatch::preset();
        assert!(batch.validate().is_ok());
        assert_eq!(batch.airfoils.len(), 3);
        assert_eq!(batch.span, 1.0);
    }

    #[test]
    fn missing_span_defaults_to_tenth() {
        let batch: FoilBatch = serde_json::from_str(r#"{"airfoils": [{}]}"#).unwrap();
        assert_eq!(batch.span, 0.1);
        assert_eq!(FoilBatch::default().span, 0.1);

        let doc = batch.emit();
        let top = doc.section(0, ShellSection::Top);
        assert_eq!(top[0].vertices[2].z, 0.1);
    }

    #[test_case("three naca airfoils", true)]
    #[test_case("cascade", true)]
    #[test_case("", true)]
    #[test_case("two\nsolids", false)]
    #[test_case("tab\tname", false)]
    #[test_case("cr\r", false)]
    #[test_case("nbsp\u{a0}name", false)]
    fn solid_name_checked(name: &str, ok: bool) {
        let batch = FoilBatch {
            solid_name: name.to_string(),
            ..FoilBatch::preset()
        };
        assert_eq!(batch.validate().is_ok(), ok);
    }

    #[test]
    fn solid_name_from_json_checked() {
        let text = r#"{"solid_name": "a\nendsolid a\nsolid b", "airfoils": [{}]}"#;
        let batch: FoilBatch = serde_json::from_str(text).unwrap();
        assert!(batch.solid_name.contains('\n'));
        let err = batch.validate().unwrap_err();
        assert!(err.to_string().starts_with("solid name"));
    }

    #[test]
    fn preset_emits_three_shapes() {
        let doc = FoilBatch::preset().emit();
        assert_eq!(doc.shape_count(), 3);
        assert_eq!(doc.len(), 3 * (4 * 149 + 2 * 75));
        assert_eq!(doc.name(), SOLID_NAME);
        assert_eq!(doc.section(2, ShellSection::BackCap).len(), 75);
    }

    #[test]
    fn full_batch_from_json() {
        let text = r#"{
            "solid_name": "cascade",
            "span": 0.25,
            "cap": "full",
            "airfoils": [
                {"n_points": 10, "chord": 1.0},
                {"n_points": 12, "chord": 0.5, "x_offset": 2.0}
            ]
        }"#;
        let batch: FoilBatch = serde_json::from_str(text).unwrap();
        assert_eq!(batch.cap, CapMode::Full);
        assert_eq!(batch.airfoils[1].x_offset, 2.0);

        let doc = batch.emit();
        assert_eq!(doc.name(), "cascade");
        assert_eq!(doc.len(), 8 * 9 + 8 * 11);
    }

    #[test]
    fn empty_json_is_default() {
        let batch: FoilBatch = serde_json::from_str("{}").unwrap();
        assert_eq!(batch, FoilBatch::default());
        assert!(batch.emit().is_empty());
    }

    #[test]
    fn validation_names_index() {
        let mut batch = FoilBatch::preset();
        batch.airfoils[1].chord = -1.0;
        let err = batch.validate().unwrap_err();
        assert!(err.to_string().starts_with("airfoil 1:"));
    }

    #[test]
    fn cap_mode_names() {
        assert_eq!(serde_json::to_string(&CapMode::HalfFan).unwrap(), r#""half_fan""#);
        let cap: CapMode = serde_json::from_str(r#""none""#).unwrap();
        assert_eq!(cap, CapMode::None);
    }

    #[test]
    fn load_from_file() {
        let path =
            std::env::temp_dir().join(format!("foilmesh-batch-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"airfoils": [{"n_points": 6}]}"#).unwrap();
        let batch = load_batch(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(batch.airfoils.len(), 1);
        assert_eq!(batch.airfoils[0].point_count, 6);
    }

    #[test]
    fn load_missing_file_fails() {
        let path = std::env::temp_dir().join("foilmesh-definitely-missing.json");
        assert!(load_batch(&path).is_err());
    }
}

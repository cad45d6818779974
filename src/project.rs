//! Project persistence: named design versions serialized to a single JSON
//! document, matching the established export file format.
//!
//! A project is a flat list of versions plus one designated "main" version.
//! Each version carries a [`DesignState`]: an all-optional bundle of design
//! slices. Absent fields mean "leave that slice alone" on load, which is what
//! lets older exports load into newer stores. Slices this crate does not
//! model (parcel data, surroundings, placement transforms) pass through as
//! opaque JSON so re-export never drops them.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::doc::{Area, BoundaryLine, Door, Furniture, Stair, Wall, Window};
use crate::geometry::Point;

/// Failure loading or mutating a project.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("invalid project file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot delete the last version")]
    LastVersion,
    #[error("no such version: {0}")]
    MissingVersion(Uuid),
}

/// Per-floor pair of an ADU design slice, keyed "0" and "1" in JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AduFloors<T> {
    #[serde(rename = "0")]
    pub lower: T,
    #[serde(rename = "1")]
    pub upper: T,
}

/// One version's design payload. Every field is optional: a saved state only
/// carries the slices it knew about, and loading applies only what is there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<Wall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas: Option<Vec<Area>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doors: Option<Vec<Door>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<Vec<Window>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stairs: Option<Vec<Stair>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundaries: Option<Vec<BoundaryLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furniture: Option<Vec<Furniture>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub adu_lines: Option<AduFloors<Vec<Wall>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adu_areas: Option<AduFloors<Vec<Area>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adu_doors: Option<AduFloors<Vec<Door>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adu_windows: Option<AduFloors<Vec<Window>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adu_stairs: Option<AduFloors<Vec<Stair>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adu_boundaries: Option<AduFloors<Vec<BoundaryLine>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adu_furniture: Option<AduFloors<Vec<Furniture>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_boundary: Option<Vec<Point>>,

    // Slices owned by other tools; carried opaquely for round-trip fidelity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adu_footprint: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_position: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_rotation: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adu_position: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adu_rotation: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streets: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearby_buildings: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trees: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fences: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driveways: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bushes: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surroundings_visible: Option<serde_json::Value>,
}

/// One saved design version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub data: DesignState,
}

/// A named project: versions plus the main-version designation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub versions: Vec<Version>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_version_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Project {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            versions: Vec::new(),
            main_version_id: None,
            exported_at: None,
            last_modified: None,
        }
    }

    /// Parse a project document. All-or-nothing: a malformed file is a typed
    /// error and nothing partial escapes.
    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        let project: Self = serde_json::from_str(json)?;
        tracing::info!(
            name = %project.name,
            versions = project.versions.len(),
            "loaded project"
        );
        Ok(project)
    }

    /// Serialize the project pretty-printed, as the export file format.
    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Stamp the export time and serialize.
    pub fn export_json(&mut self) -> Result<String, ProjectError> {
        self.exported_at = Some(Utc::now());
        self.to_json()
    }

    #[must_use]
    pub fn version(&self, id: Uuid) -> Option<&Version> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// The designated main version, falling back to the first one.
    #[must_use]
    pub fn main_version(&self) -> Option<&Version> {
        self.main_version_id
            .and_then(|id| self.version(id))
            .or_else(|| self.versions.first())
    }

    /// Save a design as a new version. An unnamed save becomes
    /// "Version {n}". The first version, or an explicit `as_main`, takes
    /// the main designation.
    pub fn save_version(&mut self, name: Option<&str>, data: DesignState, as_main: bool) -> Uuid {
        let id = Uuid::new_v4();
        let name = match name {
            Some(name) => name.to_owned(),
            None => format!("Version {}", self.versions.len() + 1),
        };
        self.versions.push(Version {
            id,
            name,
            created_at: Utc::now(),
            updated_at: None,
            data,
        });
        if as_main || self.main_version_id.is_none() {
            self.main_version_id = Some(id);
        }
        self.last_modified = Some(Utc::now());
        id
    }

    /// Replace an existing version's design payload.
    pub fn update_version(&mut self, id: Uuid, data: DesignState) -> Result<(), ProjectError> {
        let version = self
            .versions
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(ProjectError::MissingVersion(id))?;
        version.data = data;
        version.updated_at = Some(Utc::now());
        self.last_modified = Some(Utc::now());
        Ok(())
    }

    /// Delete a version. The last remaining version cannot be deleted; if the
    /// main version goes, the first survivor inherits the designation.
    pub fn delete_version(&mut self, id: Uuid) -> Result<(), ProjectError> {
        if self.versions.len() <= 1 {
            return Err(ProjectError::LastVersion);
        }
        if self.version(id).is_none() {
            return Err(ProjectError::MissingVersion(id));
        }
        self.versions.retain(|v| v.id != id);
        if self.main_version_id == Some(id) {
            self.main_version_id = self.versions.first().map(|v| v.id);
        }
        self.last_modified = Some(Utc::now());
        Ok(())
    }

    pub fn promote_to_main(&mut self, id: Uuid) -> Result<(), ProjectError> {
        if self.version(id).is_none() {
            return Err(ProjectError::MissingVersion(id));
        }
        self.main_version_id = Some(id);
        self.last_modified = Some(Utc::now());
        Ok(())
    }
}

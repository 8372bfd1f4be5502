//! Package group model and parser for the embedded package catalog.

use serde::Deserialize;

use crate::domain::AppError;
use crate::domain::identities::GroupId;
use crate::domain::identities::validation::validate_requirement;

/// A named group of pip requirements installed in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageGroup {
    pub id: GroupId,
    /// Human-readable label used in log lines.
    pub title: String,
    pub packages: Vec<String>,
}

/// Ordered list of package groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageCatalog {
    groups: Vec<PackageGroup>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDto {
    #[serde(default)]
    groups: Vec<GroupDto>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupDto {
    id: String,
    title: String,
    packages: Vec<String>,
}

impl PackageCatalog {
    pub fn groups(&self) -> &[PackageGroup] {
        &self.groups
    }

    pub fn package_count(&self) -> usize {
        self.groups.iter().map(|g| g.packages.len()).sum()
    }
}

/// Parse and validate catalog TOML content.
pub fn parse_catalog_content(content: &str) -> Result<PackageCatalog, AppError> {
    let dto: CatalogDto = toml::from_str(content)?;

    let mut groups: Vec<PackageGroup> = Vec::with_capacity(dto.groups.len());
    for group in dto.groups {
        let id = GroupId::new(&group.id)?;
        if groups.iter().any(|g| g.id == id) {
            return Err(AppError::config_error(format!("Duplicate package group '{}'", id)));
        }
        if group.packages.is_empty() {
            return Err(AppError::config_error(format!("Package group '{}' is empty", id)));
        }
        if let Some(bad) = group.packages.iter().find(|p| !validate_requirement(p)) {
            return Err(AppError::InvalidPackage { group: id.to_string(), package: bad.clone() });
        }
        groups.push(PackageGroup { id, title: group.title, packages: group.packages });
    }

    Ok(PackageCatalog { groups })
}

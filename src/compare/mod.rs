//! Cloud service comparison catalog and `/compare/...` path handling.
//!
//! Paths look like `/compare/service/aws_ec2-vs-azure_vm` or
//! `/compare/category/compute/virtual-machines-vs-kubernetes`.

mod catalog;

use catalog::{CATEGORY_CONCEPTS, PARENT_CATEGORIES};
use std::str::FromStr;
use strum::{Display, EnumString};

pub const COMPARE_ROOT: &str = "/compare";
pub const ID_SEPARATOR: &str = "-vs-";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeatureValue {
    Text(&'static str),
    Number(f64),
    Flag(bool),
    /// A value with an optional code sample and explanatory tooltip.
    Rich {
        value: &'static str,
        code: Option<&'static str>,
        tooltip: Option<&'static str>,
    },
}

impl FeatureValue {
    pub fn label(&self) -> String {
        match self {
            FeatureValue::Text(s) => s.to_string(),
            FeatureValue::Number(n) if n.fract() == 0.0 => format!("{n:.0}"),
            FeatureValue::Number(n) => n.to_string(),
            FeatureValue::Flag(true) => "Yes".to_string(),
            FeatureValue::Flag(false) => "No".to_string(),
            FeatureValue::Rich { value, .. } => value.to_string(),
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            FeatureValue::Rich { code, .. } => *code,
            _ => None,
        }
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            FeatureValue::Rich { tooltip, .. } => *tooltip,
            _ => None,
        }
    }
}

pub type Features = &'static [(&'static str, FeatureValue)];

#[derive(Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub logo: &'static str,
    pub parent_category: &'static str,
    pub child_category: &'static str,
    pub features: Features,
}

#[derive(Debug, PartialEq)]
pub struct ChildCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub services: &'static [Service],
}

#[derive(Debug, PartialEq)]
pub struct ParentCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub child_categories: &'static [ChildCategory],
}

/// Conceptual description of a whole category, for category-vs-category pages.
#[derive(Debug, PartialEq)]
pub struct CategoryConcept {
    pub id: &'static str,
    pub name: &'static str,
    pub short_description: &'static str,
    pub icon: &'static str,
    pub parent_category: &'static str,
    pub features: Features,
}

pub fn parent_categories() -> &'static [ParentCategory] {
    PARENT_CATEGORIES
}

pub fn all_services() -> impl Iterator<Item = &'static Service> {
    PARENT_CATEGORIES
        .iter()
        .flat_map(|p| p.child_categories.iter())
        .flat_map(|c| c.services.iter())
}

pub fn service_by_id(id: &str) -> Option<&'static Service> {
    all_services().find(|s| s.id == id)
}

/// Resolves ids in order, skipping unknown ones.
pub fn services_by_ids<S: AsRef<str>>(ids: &[S]) -> Vec<&'static Service> {
    ids.iter().filter_map(|id| service_by_id(id.as_ref())).collect()
}

pub fn category_concept(id: &str) -> Option<&'static CategoryConcept> {
    CATEGORY_CONCEPTS.iter().find(|c| c.id == id)
}

pub fn categories_by_ids<S: AsRef<str>>(ids: &[S]) -> Vec<&'static CategoryConcept> {
    ids.iter()
        .filter_map(|id| category_concept(id.as_ref()))
        .collect()
}

pub fn categories_by_parent(parent_id: &str) -> Vec<&'static CategoryConcept> {
    CATEGORY_CONCEPTS
        .iter()
        .filter(|c| c.parent_category == parent_id)
        .collect()
}

/// Display name for a parent category id; unknown ids are returned as-is.
pub fn parent_category_name(parent_id: &str) -> String {
    match parent_id {
        "compute" => "Compute".to_string(),
        "storage" => "Storage".to_string(),
        "ai-ml" => "AI & Machine Learning".to_string(),
        other => other.to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ComparisonKind {
    Service,
    Category,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ComparisonRequest {
    Service {
        services: Vec<&'static Service>,
    },
    Category {
        parent: String,
        categories: Vec<&'static CategoryConcept>,
    },
    Invalid,
}

impl ComparisonRequest {
    pub fn kind(&self) -> Option<ComparisonKind> {
        match self {
            ComparisonRequest::Service { .. } => Some(ComparisonKind::Service),
            ComparisonRequest::Category { .. } => Some(ComparisonKind::Category),
            ComparisonRequest::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ComparisonRequest::Invalid)
    }

    pub fn title(&self) -> String {
        match self {
            ComparisonRequest::Service { services } => {
                let names: Vec<&str> = services.iter().map(|s| s.name).collect();
                format!("{} Comparison", names.join(" vs "))
            }
            ComparisonRequest::Category { categories, .. } => {
                let names: Vec<&str> = categories.iter().map(|c| c.name).collect();
                format!("{} Comparison", names.join(" vs "))
            }
            ComparisonRequest::Invalid => "Comparison Not Found".to_string(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            ComparisonRequest::Service { services } => {
                format!("Comparing {} cloud services", services.len())
            }
            ComparisonRequest::Category { parent, .. } => {
                format!(
                    "Comparing architectural concepts in {}",
                    parent_category_name(parent)
                )
            }
            ComparisonRequest::Invalid => {
                "The requested comparison could not be found.".to_string()
            }
        }
    }
}

/// Parses the segments after `/compare/`.
///
/// Unknown ids are dropped; a request that resolves to nothing is `Invalid`.
pub fn parse_comparison_path<S: AsRef<str>>(segments: &[S]) -> ComparisonRequest {
    let [kind, rest @ ..] = segments else {
        return ComparisonRequest::Invalid;
    };
    if rest.is_empty() {
        return ComparisonRequest::Invalid;
    }

    match ComparisonKind::from_str(kind.as_ref()) {
        Ok(ComparisonKind::Service) => {
            let slug = rest.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("/");
            let ids: Vec<&str> = slug.split(ID_SEPARATOR).collect();
            let services = services_by_ids(&ids);
            if services.is_empty() {
                ComparisonRequest::Invalid
            } else {
                ComparisonRequest::Service { services }
            }
        }
        Ok(ComparisonKind::Category) => {
            let [parent, slug, ..] = rest else {
                return ComparisonRequest::Invalid;
            };
            let ids: Vec<&str> = slug.as_ref().split(ID_SEPARATOR).collect();
            let categories = categories_by_ids(&ids);
            if categories.is_empty() {
                ComparisonRequest::Invalid
            } else {
                ComparisonRequest::Category {
                    parent: parent.as_ref().to_string(),
                    categories,
                }
            }
        }
        Err(_) => ComparisonRequest::Invalid,
    }
}

/// Splits a full location path into the segments [`parse_comparison_path`] expects.
pub fn comparison_segments(path: &str) -> Vec<String> {
    path.trim_start_matches(COMPARE_ROOT)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            urlencoding::decode(s)
                .map(|d| d.into_owned())
                .unwrap_or_else(|_| s.to_string())
        })
        .collect()
}

/// Canonical path for comparing `ids`. Category paths need the parent id.
pub fn comparison_path<S: AsRef<str>>(
    kind: ComparisonKind,
    parent: Option<&str>,
    ids: &[S],
) -> String {
    let slug = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(ID_SEPARATOR);
    match (kind, parent) {
        (ComparisonKind::Category, Some(parent)) => {
            format!("{COMPARE_ROOT}/{kind}/{parent}/{slug}")
        }
        _ => format!("{COMPARE_ROOT}/{kind}/{slug}"),
    }
}

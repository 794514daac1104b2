//! Boundary subdomains and the domain description
//!
//! # Design Philosophy
//!
//! The mesh itself lives outside this crate; what boundary conditions need is
//! only an *identity* for each named region of the boundary. A
//! [`SurfaceSubdomain`] is that identity: an integer id plus its geometric
//! extent (a surface in 3D, an edge in 2D, a point in 1D). The external mesh
//! layer keeps the actual facet markers keyed by the same id.
//!
//! The [`DomainDescription`] collects the subdomains and the declared
//! species of one problem. It is the reference everything else validates
//! against: a boundary condition naming an unknown subdomain id or an
//! undeclared species is rejected before the first solve begins.

use crate::error::{HytranError, HytranResult};
use crate::physics::Species;
use std::fmt;

// =================================================================================================
// Geometric Extent
// =================================================================================================

/// Geometric extent of a boundary subdomain
///
/// Which variant applies depends on the spatial dimension of the mesh:
/// a 3D domain is bounded by surfaces, a 2D domain by edges, a 1D domain
/// by points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometricExtent {
    /// A 2D patch of the boundary of a 3D domain
    Surface,

    /// A 1D segment of the boundary of a 2D domain
    Edge,

    /// A single point bounding a 1D domain
    Point,
}

impl fmt::Display for GeometricExtent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeometricExtent::Surface => write!(f, "surface"),
            GeometricExtent::Edge => write!(f, "edge"),
            GeometricExtent::Point => write!(f, "point"),
        }
    }
}

// =================================================================================================
// Surface Subdomain
// =================================================================================================

/// A named region of the domain boundary
///
/// Pure identity data: equality and hashing follow the id. The id must be
/// unique within one [`DomainDescription`]; uniqueness is enforced by
/// [`DomainDescription::validate`].
///
/// # Example
///
/// ```rust
/// use hytran_rs::domain::{SurfaceSubdomain, GeometricExtent};
///
/// let left = SurfaceSubdomain::point(1);
/// let plasma_facing = SurfaceSubdomain::surface(2);
///
/// assert_eq!(left.id(), 1);
/// assert_eq!(plasma_facing.extent(), GeometricExtent::Surface);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceSubdomain {
    id: u32,
    extent: GeometricExtent,
}

impl SurfaceSubdomain {
    /// Generic constructor
    pub fn new(id: u32, extent: GeometricExtent) -> Self {
        Self { id, extent }
    }

    /// Create a surface subdomain (boundary of a 3D domain)
    pub fn surface(id: u32) -> Self {
        Self::new(id, GeometricExtent::Surface)
    }

    /// Create an edge subdomain (boundary of a 2D domain)
    pub fn edge(id: u32) -> Self {
        Self::new(id, GeometricExtent::Edge)
    }

    /// Create a point subdomain (boundary of a 1D domain)
    pub fn point(id: u32) -> Self {
        Self::new(id, GeometricExtent::Point)
    }

    /// Integer id keying this subdomain in the external mesh markers
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Geometric extent of this subdomain
    pub fn extent(&self) -> GeometricExtent {
        self.extent
    }
}

impl fmt::Display for SurfaceSubdomain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.extent, self.id)
    }
}

// =================================================================================================
// Domain Description
// =================================================================================================

/// Boundary decomposition and declared species of one problem
///
/// # Design
///
/// Owns the subdomain registry and the species list. Construction through
/// [`DomainDescription::new`] validates eagerly; the incremental
/// `add_*` methods defer validation so that a description can be assembled
/// piece by piece and checked once with [`validate`](Self::validate).
///
/// # Example
///
/// ```rust
/// use hytran_rs::domain::{DomainDescription, SurfaceSubdomain};
/// use hytran_rs::physics::Species;
///
/// let domain = DomainDescription::new(
///     vec![SurfaceSubdomain::point(1), SurfaceSubdomain::point(2)],
///     vec![Species::new("H")],
/// ).unwrap();
///
/// assert_eq!(domain.subdomain_count(), 2);
/// assert!(domain.species("H").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DomainDescription {
    /// Boundary subdomains, keyed by id
    subdomains: Vec<SurfaceSubdomain>,

    /// Species declared in the problem
    species: Vec<Species>,
}

impl DomainDescription {
    /// Create a validated domain description
    ///
    /// Returns [`HytranError::DuplicateSubdomain`] or
    /// [`HytranError::DuplicateSpecies`] when two entries collide.
    pub fn new(
        subdomains: Vec<SurfaceSubdomain>,
        species: Vec<Species>,
    ) -> HytranResult<Self> {
        let description = Self { subdomains, species };
        description.validate()?;
        Ok(description)
    }

    /// Create an empty description (to be filled with `add_*`)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register a boundary subdomain
    pub fn add_subdomain(&mut self, subdomain: SurfaceSubdomain) {
        self.subdomains.push(subdomain);
    }

    /// Declare a species
    pub fn add_species(&mut self, species: Species) {
        self.species.push(species);
    }

    // ===================================== Query methods =========================================

    /// Look up a subdomain by id
    pub fn subdomain(&self, id: u32) -> Option<&SurfaceSubdomain> {
        self.subdomains.iter().find(|subdomain| subdomain.id() == id)
    }

    /// Look up a species by name
    pub fn species(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|species| species.name() == name)
    }

    /// All subdomains
    pub fn subdomains(&self) -> &[SurfaceSubdomain] {
        &self.subdomains
    }

    /// All declared species
    pub fn species_list(&self) -> &[Species] {
        &self.species
    }

    /// Number of boundary subdomains
    pub fn subdomain_count(&self) -> usize {
        self.subdomains.len()
    }

    /// Number of declared species
    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    /// Validate the description contents
    ///
    /// Checks subdomain-id and species-name uniqueness.
    pub fn validate(&self) -> HytranResult<()> {
        let mut ids = std::collections::HashSet::new();
        for subdomain in &self.subdomains {
            if !ids.insert(subdomain.id()) {
                return Err(HytranError::DuplicateSubdomain { id: subdomain.id() });
            }
        }

        let mut names = std::collections::HashSet::new();
        for species in &self.species {
            if !names.insert(species.name()) {
                return Err(HytranError::DuplicateSpecies {
                    name: species.name().to_string(),
                });
            }
        }

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_display() {
        assert_eq!(format!("{}", GeometricExtent::Surface), "surface");
        assert_eq!(format!("{}", GeometricExtent::Edge), "edge");
        assert_eq!(format!("{}", GeometricExtent::Point), "point");
    }

    #[test]
    fn test_subdomain_factories() {
        let surface = SurfaceSubdomain::surface(3);
        assert_eq!(surface.id(), 3);
        assert_eq!(surface.extent(), GeometricExtent::Surface);

        let point = SurfaceSubdomain::point(1);
        assert_eq!(format!("{}", point), "point 1");
    }

    #[test]
    fn test_subdomain_identity() {
        let a = SurfaceSubdomain::surface(1);
        let b = SurfaceSubdomain::surface(1);

        assert_eq!(a, b);
        assert_ne!(a, SurfaceSubdomain::surface(2));
    }

    #[test]
    fn test_domain_lookup() {
        let domain = DomainDescription::new(
            vec![SurfaceSubdomain::point(1), SurfaceSubdomain::point(2)],
            vec![Species::new("H"), Species::new("D")],
        )
        .unwrap();

        assert_eq!(domain.subdomain(1).unwrap().id(), 1);
        assert!(domain.subdomain(3).is_none());
        assert_eq!(domain.species("D").unwrap().name(), "D");
        assert!(domain.species("T").is_none());
        assert_eq!(domain.subdomain_count(), 2);
        assert_eq!(domain.species_count(), 2);
    }

    #[test]
    fn test_duplicate_subdomain_rejected() {
        let result = DomainDescription::new(
            vec![SurfaceSubdomain::point(1), SurfaceSubdomain::surface(1)],
            vec![],
        );

        assert_eq!(
            result.unwrap_err(),
            HytranError::DuplicateSubdomain { id: 1 }
        );
    }

    #[test]
    fn test_duplicate_species_rejected() {
        let result = DomainDescription::new(
            vec![SurfaceSubdomain::point(1)],
            vec![Species::new("H"), Species::new("H")],
        );

        assert_eq!(
            result.unwrap_err(),
            HytranError::DuplicateSpecies { name: "H".to_string() }
        );
    }

    #[test]
    fn test_incremental_build() {
        let mut domain = DomainDescription::empty();
        domain.add_subdomain(SurfaceSubdomain::edge(5));
        domain.add_species(Species::new("H"));

        assert!(domain.validate().is_ok());
        assert_eq!(domain.subdomain_count(), 1);
    }
}

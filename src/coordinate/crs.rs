//! Coordinate Reference System handling

/// Identifier for the coordinate systems used by the range computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// WGS 84 geographic longitude/latitude (EPSG:4326)
    WGS84,
    /// World Mollweide equal-area projection (ESRI:54009)
    WorldMollweide,
}

impl CoordinateSystem {
    /// Authority:code identifier, as written to output metadata
    pub fn identifier(&self) -> &'static str {
        match self {
            CoordinateSystem::WGS84 => "EPSG:4326",
            CoordinateSystem::WorldMollweide => "ESRI:54009",
        }
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        match self {
            CoordinateSystem::WGS84 => format!("WGS 84 ({})", self.identifier()),
            CoordinateSystem::WorldMollweide => format!("World Mollweide ({})", self.identifier()),
        }
    }
}

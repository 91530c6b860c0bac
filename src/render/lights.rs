//! Positional light set

use crate::core::error::Error;
use crate::core::types::{Result, Vec3};

/// Maximum number of simultaneous lights
pub const MAX_LIGHTS: usize = 3;

/// A point light with position and RGB color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    /// RGB color, components in [0, 1]
    pub color: Vec3,
}

/// Ordered, capacity-bounded set of point lights.
///
/// The set always holds at least one light; the first (primary) light
/// cannot be removed. Failed operations leave the set unchanged.
#[derive(Clone, Debug)]
pub struct LightSet {
    lights: Vec<Light>,
}

impl LightSet {
    /// Create a set holding the default warm primary light
    pub fn new() -> Self {
        Self::with_primary(Light {
            position: Vec3::new(0.0, 25.0, 0.0),
            color: Vec3::new(1.0, 0.9, 0.25),
        })
    }

    /// Create a set with the given primary light
    pub fn with_primary(primary: Light) -> Self {
        Self {
            lights: vec![primary],
        }
    }

    /// Append a light, returning its index.
    /// Fails with `CapacityExceeded` when the set is full.
    pub fn add(&mut self, position: Vec3, color: Vec3) -> Result<usize> {
        if self.lights.len() >= MAX_LIGHTS {
            return Err(Error::CapacityExceeded);
        }
        self.lights.push(Light { position, color });
        Ok(self.lights.len() - 1)
    }

    /// Remove the light at `index`, shifting later lights down.
    /// Index 0 (the primary) is protected. Callers holding indices must
    /// re-resolve them after any removal.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        if index == 0 || index >= self.lights.len() {
            return Err(Error::InvalidIndex(index));
        }
        self.lights.remove(index);
        Ok(())
    }

    /// Move the light at `index` to a new position
    pub fn set_position(&mut self, index: usize, position: Vec3) -> Result<()> {
        match self.lights.get_mut(index) {
            Some(light) => {
                light.position = position;
                Ok(())
            }
            None => Err(Error::InvalidIndex(index)),
        }
    }

    /// Light at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Light> {
        self.lights.get(index)
    }

    /// Number of active lights, always in [1, MAX_LIGHTS]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Never true; the primary light is permanent
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Iterate over the active lights in order
    pub fn iter(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter()
    }

    /// Positions of the active lights, in order
    pub fn positions(&self) -> Vec<Vec3> {
        self.lights.iter().map(|l| l.position).collect()
    }
}

impl Default for LightSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_primary() {
        let lights = LightSet::new();
        assert_eq!(lights.len(), 1);
        assert!(lights.get(0).is_some());
    }

    #[test]
    fn test_add_up_to_capacity() {
        let mut lights = LightSet::new();

        assert_eq!(lights.add(Vec3::X, Vec3::ONE).unwrap(), 1);
        assert_eq!(lights.add(Vec3::Y, Vec3::ONE).unwrap(), 2);
        assert_eq!(lights.len(), 3);

        let err = lights.add(Vec3::Z, Vec3::ONE).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded));
        assert_eq!(lights.len(), 3);
    }

    #[test]
    fn test_primary_is_protected() {
        let mut lights = LightSet::new();
        lights.add(Vec3::X, Vec3::ONE).unwrap();

        let err = lights.remove(0).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex(0)));
        assert_eq!(lights.len(), 2);
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut lights = LightSet::new();
        lights.add(Vec3::X, Vec3::ONE).unwrap();
        lights.add(Vec3::Y, Vec3::ONE).unwrap();

        lights.remove(1).unwrap();
        assert_eq!(lights.len(), 2);
        // The light previously at index 2 moved down to index 1
        assert_eq!(lights.get(1).unwrap().position, Vec3::Y);
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let mut lights = LightSet::new();
        assert!(matches!(lights.remove(5), Err(Error::InvalidIndex(5))));
        assert_eq!(lights.len(), 1);
    }

    #[test]
    fn test_set_position() {
        let mut lights = LightSet::new();
        lights.set_position(0, Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(lights.get(0).unwrap().position, Vec3::new(1.0, 2.0, 3.0));

        assert!(matches!(
            lights.set_position(3, Vec3::ZERO),
            Err(Error::InvalidIndex(3))
        ));
    }

    #[test]
    fn test_failed_ops_leave_set_unchanged() {
        let mut lights = LightSet::new();
        lights.add(Vec3::X, Vec3::ONE).unwrap();
        lights.add(Vec3::Y, Vec3::ONE).unwrap();
        let snapshot = lights.positions();

        let _ = lights.add(Vec3::Z, Vec3::ONE);
        let _ = lights.remove(0);
        let _ = lights.remove(9);
        let _ = lights.set_position(9, Vec3::ZERO);

        assert_eq!(lights.positions(), snapshot);
    }
}

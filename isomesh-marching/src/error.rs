use isomesh_math::Point3;

/// Marching cubes errors
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// Cube edge length is not positive or not finite
    InvalidCubeEdge(f32),
    /// Bounding region extent is negative or not finite
    InvalidExtent(f32),
    /// Normal estimation step is not positive or not finite
    InvalidDelta(f32),
    /// Bounding region origin is not finite
    InvalidOrigin(Point3),
    /// Field returned NaN or infinity
    NonFiniteSample {
        /// Sampled position
        position: Point3,
        /// Returned value
        value: f32,
    },
    /// Field has equal values on both ends of an edge selected by the case table
    DegenerateEdge {
        /// Cube edge index
        edge: usize,
        /// Position of the first edge endpoint
        position: Point3,
    },
}

impl Error {
    /// Checks if the error is caused by grid configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidCubeEdge(_)
                | Error::InvalidExtent(_)
                | Error::InvalidDelta(_)
                | Error::InvalidOrigin(_)
        )
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCubeEdge(value) => {
                write!(f, "Cube edge must be positive and finite ({})", value)
            }
            Error::InvalidExtent(value) => {
                write!(f, "Extent must be non-negative and finite ({})", value)
            }
            Error::InvalidDelta(value) => {
                write!(f, "Normal estimation step must be positive and finite ({})", value)
            }
            Error::InvalidOrigin(origin) => write!(f, "Origin must be finite ({:?})", origin),
            Error::NonFiniteSample { position, value } => write!(
                f,
                "Field value at ({}, {}, {}) is not finite ({})",
                position.x, position.y, position.z, value
            ),
            Error::DegenerateEdge { edge, position } => write!(
                f,
                "Cube edge {} starting at ({}, {}, {}) has equal values at both ends",
                edge, position.x, position.y, position.z
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomesh_math::point3;

    #[test]
    fn configuration_errors() {
        assert!(Error::InvalidCubeEdge(0.0).is_configuration());
        assert!(Error::InvalidDelta(-1.0).is_configuration());
        assert!(!Error::NonFiniteSample {
            position: point3(0.0, 0.0, 0.0),
            value: f32::NAN
        }
        .is_configuration());
    }

    #[test]
    fn degenerate_edge_display() {
        let error = Error::DegenerateEdge {
            edge: 8,
            position: point3(0.5, 0.0, 0.25),
        };
        assert_eq!(
            error.to_string(),
            "Cube edge 8 starting at (0.5, 0, 0.25) has equal values at both ends"
        );
    }

    #[test]
    fn display() {
        let error = Error::NonFiniteSample {
            position: point3(1.0, 2.0, 0.5),
            value: f32::INFINITY,
        };
        assert_eq!(
            error.to_string(),
            "Field value at (1, 2, 0.5) is not finite (inf)"
        );
    }
}

//! Error types.
//!
//! - [`FitError`] is what the numerical core signals: which shape or
//!   singularity condition stopped a single solve.
//! - [`AppError`] is what the binary reports: a message plus a process exit
//!   code.

/// Shape of a matrix as `(rows, cols)`.
pub type Shape = (usize, usize);

/// Failures raised by the matrix primitives, the solver and the interpolator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Two operands of `op` have incompatible shapes.
    #[error("dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// A row had no usable leading entry during forward elimination.
    #[error("singular matrix: row {row} has no pivot")]
    SingularMatrix { row: usize },

    /// An interpolation interval has zero width.
    #[error("degenerate interval at x = {x}")]
    DegenerateInterval { x: f64 },
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Wrap a core failure that occurred while fitting `channel` (1-based).
    pub fn channel(channel: usize, err: FitError) -> Self {
        Self::new(4, format!("Core {channel}: {err}"))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

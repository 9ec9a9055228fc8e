/// Outcome of validating a value, carrying diagnostics alongside the result.
///
/// Warnings describe suspicious but legal content (for example a NaN sample
/// value); errors describe broken invariants.
///
/// # Examples
///
/// ```rust
/// use tabulated::types::ValidationResult;
///
/// let result: ValidationResult = ValidationResult::Warnings((), vec!["NaN at index 2".to_string()]);
/// assert!(result.is_valid());
/// assert_eq!(result.warnings().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T = ()> {
    /// Valid without diagnostics
    Valid(T),
    /// Valid, with warnings
    Warnings(T, Vec<String>),
    /// Invalid: (warnings, errors)
    Invalid(Vec<String>, Vec<String>),
}

impl<T> ValidationResult<T> {
    /// True unless the result is `Invalid`.
    pub fn is_valid(&self) -> bool {
        !self.is_invalid()
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationResult::Invalid(_, _))
    }

    /// Extracts the warnings, discarding everything else.
    pub fn warnings(self) -> Vec<String> {
        match self {
            ValidationResult::Valid(_) => Vec::new(),
            ValidationResult::Warnings(_, warnings) => warnings,
            ValidationResult::Invalid(warnings, _) => warnings,
        }
    }

    /// Extracts the errors; empty unless the result is `Invalid`.
    pub fn errors(self) -> Vec<String> {
        match self {
            ValidationResult::Invalid(_, errors) => errors,
            _ => Vec::new(),
        }
    }
}

/// Types that can check their own invariants.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}
